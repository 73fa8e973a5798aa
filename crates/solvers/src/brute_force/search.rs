use itertools::Itertools;
use riesz_core::{Exponent, Geometry, Observer, Subset};
use tracing::{debug, debug_span, trace};

use crate::selection;

use super::{Action, Config, Error, Event, Solution, Status, binomial};

/// Core enumeration.
///
/// Validates inputs and the candidate count before enumerating, then walks
/// every size-`k` subset in lexicographic order.
pub(super) fn search<G, Obs>(
    geometry: &G,
    k: usize,
    s: Exponent,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    G: Geometry + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let n = selection::check(geometry, k)?;

    let count = binomial(n, k);
    if !config.allows(count) {
        return Err(Error::TooManySubsets {
            count,
            limit: config.max_subsets().unwrap_or(u64::MAX),
        });
    }

    let span = debug_span!("brute_force", n, k, count, s = s.get());
    let _guard = span.enter();

    let mut best: Option<(Vec<usize>, f64)> = None;
    let mut evaluated = 0;
    let mut status = Status::Complete;

    for ranks in (0..n).combinations(k) {
        let energy = riesz_core::energy(geometry, &ranks, s)?;
        evaluated += 1;

        let best_energy = best.as_ref().map(|(_, energy)| *energy);
        let event = Event {
            subset: &ranks,
            energy,
            best_energy,
            evaluated,
        };
        let improved = event.is_improvement();
        let action = observer.observe(&event);

        if improved {
            trace!(?ranks, energy, "new best");
            best = Some((ranks, energy));
        }

        if let Some(Action::StopEarly) = action {
            status = Status::StoppedByObserver;
            break;
        }
    }

    let (ranks, energy) = best.ok_or(Error::NoFiniteSelection { size: k })?;
    let subset = Subset::new(ranks)?;

    debug!(%subset, energy, evaluated, ?status, "brute force finished");

    Ok(Solution {
        status,
        subset,
        energy,
        evaluated,
    })
}
