//! Runs the DP optimizer and the brute-force oracle side by side.
//!
//! # Usage
//!
//! ```text
//! cargo run --example compare
//! cargo run --example compare -- 1d
//! RUST_LOG=riesz_solvers=debug cargo run --example compare -- pareto2d
//! ```
//!
//! # Cases
//!
//! - **1d** — A four-point line with `k = 2`, then a ten-point line with
//!   `k = 7`.
//! - **pareto2d** — Two bi-objective fronts, both with `k = 3`.

use std::error::Error;

use riesz_core::{Exponent, Geometry, PointSequence, Variant};
use riesz_solvers::{brute_force, cross_check};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let variant = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<Variant>)
        .transpose()?;

    let s = Exponent::new(1.0)?;

    if variant.is_none_or(|v| v == Variant::Line) {
        let x1 = [0.0, 1.0, 3.0, 6.0];
        run("line 1", &PointSequence::line(&x1), 2, s)?;

        let x2 = [0.0, 0.1, 0.2, 0.4, 2.0, 4.0, 7.0, 8.1, 8.2, 9.0];
        run("line 2", &PointSequence::line(&x2), 7, s)?;
    }

    if variant.is_none_or(|v| v == Variant::Pareto2d) {
        let front1 = [
            [1.0, 15.0],
            [5.0, 10.0],
            [8.0, 4.0],
            [13.0, 3.0],
            [15.0, 2.0],
            [17.0, 1.0],
        ];
        run("front 1", &PointSequence::pareto(&front1), 3, s)?;

        let front2 = [
            [2.0, 20.0],
            [4.0, 18.0],
            [6.0, 16.0],
            [9.0, 12.0],
            [11.0, 8.0],
            [14.0, 5.0],
            [17.0, 3.0],
        ];
        run("front 2", &PointSequence::pareto(&front2), 3, s)?;
    }

    Ok(())
}

fn run(
    name: &str,
    sequence: &PointSequence<'_>,
    k: usize,
    s: Exponent,
) -> Result<(), Box<dyn Error>> {
    println!(
        "{name} ({}): n = {}, k = {k}, s = {s}",
        sequence.variant(),
        sequence.len()
    );

    let comparison = cross_check(sequence, k, s, &brute_force::Config::default())?;

    println!("  dp:          {:.6}", comparison.dp);
    println!("  brute force: {:.6}", comparison.oracle);
    println!("  points:      {}", describe(sequence, &comparison.dp.subset));

    if comparison.same_subset() && comparison.agrees(1e-6) {
        println!("  the DP solution matches the brute-force solution");
    } else {
        println!("  the DP solution does NOT match (gap {:.3e})", comparison.gap);
    }
    println!();

    Ok(())
}

fn describe(sequence: &PointSequence<'_>, ranks: &[usize]) -> String {
    let points: Vec<String> = match sequence {
        PointSequence::Line(line) => ranks.iter().map(|&r| line.points()[r].to_string()).collect(),
        PointSequence::Pareto(front) => ranks
            .iter()
            .map(|&r| {
                let [f1, f2] = front.points()[r];
                format!("({f1}, {f2})")
            })
            .collect(),
    };
    format!("[{}]", points.join(", "))
}
