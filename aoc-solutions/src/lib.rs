//! Advent of Code 2024 puzzle solutions
//!
//! Each day module implements [`AocParser`](aoc_solver::AocParser) once and
//! [`PartSolver`](aoc_solver::PartSolver) for each part. [`register`] is the
//! single, explicit list binding those solvers into a dispatch table.

pub mod utils;
pub mod year_2024;

use aoc_solver::{DispatchTable, DispatchTableBuilder, PuzzleSource, RegistrationError};
use year_2024::{day_1, day_2, day_3, day_4, day_5};

/// Calendar year the solutions belong to
pub const YEAR: u16 = 2024;

/// Register every implemented day and part with `builder`
pub fn register(builder: DispatchTableBuilder) -> Result<DispatchTableBuilder, RegistrationError> {
    builder
        .register_part::<day_1::Solver, 1>(1)?
        .register_part::<day_1::Solver, 2>(1)?
        .register_part::<day_2::Solver, 1>(2)?
        .register_part::<day_2::Solver, 2>(2)?
        .register_part::<day_3::Solver, 1>(3)?
        .register_part::<day_3::Solver, 2>(3)?
        .register_part::<day_4::Solver, 1>(4)?
        .register_part::<day_4::Solver, 2>(4)?
        .register_part::<day_5::Solver, 1>(5)?
        .register_part::<day_5::Solver, 2>(5)
}

/// Build the frozen dispatch table over `source`
pub fn dispatch_table<P: PuzzleSource + 'static>(
    source: P,
) -> Result<DispatchTable, RegistrationError> {
    Ok(register(DispatchTableBuilder::new())?.build(source))
}
