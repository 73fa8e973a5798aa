use riesz_core::{DegenerateError, Exponent, Geometry, Observer, Subset, pair_energy};
use tracing::{debug, debug_span, trace};

use crate::selection;

use super::{
    Action, Error, Event, Solution,
    table::{Cell, Table},
};

/// Core DP implementation.
///
/// Validates inputs before the table is allocated, fills one layer per
/// subset size, then reconstructs the cheapest size-`k` subset.
pub(super) fn search<G, Obs>(
    geometry: &G,
    k: usize,
    s: Exponent,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    G: Geometry + ?Sized,
    Obs: Observer<Event, Action>,
{
    let n = selection::check(geometry, k)?;

    let span = debug_span!("dp", n, k, s = s.get());
    let _guard = span.enter();

    let mut table = Table::new(k, n);
    let mut transitions = 0;

    emit_layer(&table, 0, k, &mut observer)?;

    for layer in 1..k {
        for j in layer..n {
            let mut best = Cell::UNREACHABLE;

            for i in (layer - 1)..j {
                let base = table.cell(layer - 1, i);
                if !base.is_reachable() {
                    continue;
                }

                let added = extension_energy(geometry, &table, layer - 1, i, j, s)?;
                transitions += 1;

                let candidate = base.energy + added;
                if candidate < best.energy {
                    best = Cell {
                        energy: candidate,
                        prev: Some(i),
                    };
                }
            }

            table.set(layer, j, best);
        }

        emit_layer(&table, layer, k, &mut observer)?;
    }

    let (last, _) = table
        .best_in_layer(k - 1)
        .ok_or(Error::NoFiniteSelection { size: k })?;
    let ranks = table.reconstruct(k - 1, last);

    // Energy comes from the evaluator, not the table.
    let energy = riesz_core::energy(geometry, &ranks, s)?;
    let subset = Subset::new(ranks)?;

    debug!(%subset, energy, transitions, "dp finished");

    Ok(Solution {
        subset,
        energy,
        transitions,
    })
}

/// Energy added by appending rank `j` to the subset behind `(layer, last)`.
fn extension_energy<G>(
    geometry: &G,
    table: &Table,
    layer: usize,
    last: usize,
    j: usize,
    s: Exponent,
) -> Result<f64, DegenerateError>
where
    G: Geometry + ?Sized,
{
    table
        .chain(layer, last)
        .try_fold(0.0, |sum, p| Ok(sum + pair_energy(geometry, p, j, s)?))
}

/// Reports the cheapest cell of a filled layer and applies the observer's action.
fn emit_layer<Obs>(table: &Table, layer: usize, k: usize, observer: &mut Obs) -> Result<(), Error>
where
    Obs: Observer<Event, Action>,
{
    let size = layer + 1;
    let (best_last, best_energy) = table
        .best_in_layer(layer)
        .ok_or(Error::NoFiniteSelection { size })?;

    trace!(size, best_last, best_energy, "layer filled");

    let event = Event {
        size,
        target: k,
        best_last,
        best_energy,
    };
    match observer.observe(&event) {
        Some(Action::StopEarly) => Err(Error::StoppedByObserver { size }),
        None => Ok(()),
    }
}
