//! Dispatch table mapping (day, part) keys to routines

use crate::error::{RegistrationError, SolverError};
use crate::puzzle::{PuzzleResult, SolveOutcome, SolveStatus, SolverKey, DAYS, PARTS};
use crate::solver::{PartSolver, parse_and_solve};
use crate::source::PuzzleSource;
use chrono::Utc;
use std::any::{Any, TypeId};
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::{debug, info, warn};

/// Total number of slots in the table
pub const CAPACITY: usize = *DAYS.end() as usize * *PARTS.end() as usize;

/// A bound routine: fetch from the source, parse, compute
pub type Routine =
    Box<dyn Fn(SolverKey, &dyn PuzzleSource) -> Result<PuzzleResult, SolverError> + Send + Sync>;

/// Routine with the identity of the solver type it was built from
struct RoutineEntry {
    routine: Routine,
    origin: Option<TypeId>,
}

/// What a key is bound to in a built table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// A day/part specific routine
    Specific,
    /// The generic placeholder routine
    Generic,
}

/// Builder for constructing a [`DispatchTable`]
///
/// Registration happens once, at startup. [`build`](Self::build) binds the
/// generic fallback to every slot left empty and freezes the table.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, DispatchTableBuilder, InMemorySource, ParseError, PartSolver, SolveError};
///
/// struct Sum;
///
/// impl AocParser for Sum {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Sum {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<u32>().to_string())
///     }
/// }
///
/// let table = DispatchTableBuilder::new()
///     .register_part::<Sum, 1>(1)
///     .unwrap()
///     .build(InMemorySource::new().with_day(1, "Sum them", "1\n2\n3"));
///
/// let outcome = table.solve(1, 1);
/// assert!(outcome.is_ok());
/// assert_eq!(outcome.result.answer(), "6");
/// assert_eq!(table.solve(1, 2).result.answer(), "Generic Solution");
/// ```
pub struct DispatchTableBuilder {
    entries: Vec<Option<RoutineEntry>>,
}

impl DispatchTableBuilder {
    /// Create a new empty builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Bind part `N` of solver `S` to `(day, N)`
    ///
    /// Registering the same solver type for the same key twice is a no-op.
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the routine registered, ready for chaining
    /// * `Err(RegistrationError::InvalidKey)` - Day or part out of bounds
    /// * `Err(RegistrationError::DuplicateRoutine)` - A different routine owns the key
    pub fn register_part<S, const N: u8>(self, day: u8) -> Result<Self, RegistrationError>
    where
        S: PartSolver<N> + 'static,
    {
        self.insert(
            day,
            N,
            RoutineEntry {
                routine: Box::new(part_routine::<S, N>),
                origin: Some(TypeId::of::<S>()),
            },
        )
    }

    /// Bind an arbitrary routine to `(day, part)`
    pub fn register_fn<F>(self, day: u8, part: u8, routine: F) -> Result<Self, RegistrationError>
    where
        F: Fn(SolverKey, &dyn PuzzleSource) -> Result<PuzzleResult, SolverError>
            + Send
            + Sync
            + 'static,
    {
        self.insert(
            day,
            part,
            RoutineEntry {
                routine: Box::new(routine),
                origin: None,
            },
        )
    }

    /// What `key` will be bound to once the table is built
    pub fn binding(&self, key: SolverKey) -> BindingKind {
        match self.entries[key.index()] {
            Some(_) => BindingKind::Specific,
            None => BindingKind::Generic,
        }
    }

    fn insert(
        mut self,
        day: u8,
        part: u8,
        entry: RoutineEntry,
    ) -> Result<Self, RegistrationError> {
        let key = SolverKey::new(day, part).ok_or(RegistrationError::InvalidKey(day, part))?;
        let slot = &mut self.entries[key.index()];

        match slot.as_ref().map(|existing| existing.origin) {
            Some(origin) if origin.is_some() && origin == entry.origin => {
                debug!(%key, "routine already registered");
            }
            Some(_) => return Err(RegistrationError::DuplicateRoutine(day, part)),
            None => *slot = Some(entry),
        }
        Ok(self)
    }

    /// Freeze the builder into an immutable table reading from `source`
    pub fn build<P: PuzzleSource + 'static>(self, source: P) -> DispatchTable {
        let entries: Vec<Binding> = self
            .entries
            .into_iter()
            .map(|entry| match entry {
                Some(entry) => Binding::Specific(entry.routine),
                None => Binding::Generic,
            })
            .collect();

        let specific = entries
            .iter()
            .filter(|b| matches!(b, Binding::Specific(_)))
            .count();
        info!(
            specific,
            generic = CAPACITY - specific,
            "dispatch table built"
        );

        DispatchTable {
            entries,
            source: Box::new(source),
        }
    }
}

impl Default for DispatchTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

enum Binding {
    Specific(Routine),
    Generic,
}

/// Immutable mapping from every in-bounds key to a routine
///
/// Built once by [`DispatchTableBuilder::build`]; it has no mutation API,
/// so it can be shared across threads (by reference or `Arc`) and read
/// without locking.
pub struct DispatchTable {
    entries: Vec<Binding>,
    source: Box<dyn PuzzleSource>,
}

impl DispatchTable {
    /// Solve `(day, part)` and report how the result was produced
    ///
    /// Never fails: routine errors and panics become a degraded result,
    /// unbound in-bounds keys answer with the generic placeholder, and keys
    /// outside the table return the "no solution available" result with
    /// [`SolveOutcome::is_ok`] false.
    pub fn solve(&self, day: u8, part: u8) -> SolveOutcome {
        let solve_start = Utc::now();
        let (result, status) = self.dispatch(day, part);
        let solve_end = Utc::now();

        SolveOutcome {
            result,
            status,
            solve_start,
            solve_end,
        }
    }

    fn dispatch(&self, day: u8, part: u8) -> (PuzzleResult, SolveStatus) {
        let Some(key) = SolverKey::new(day, part) else {
            warn!(day, part, "no routine registered");
            return (PuzzleResult::unregistered(), SolveStatus::Unregistered);
        };

        let routine = match &self.entries[key.index()] {
            Binding::Specific(routine) => routine,
            Binding::Generic => {
                debug!(%key, "using generic routine");
                return (PuzzleResult::generic(key), SolveStatus::Generic);
            }
        };

        debug!(%key, "dispatching");
        let source = &*self.source;
        let outcome = catch_unwind(AssertUnwindSafe(|| routine(key, source)))
            .unwrap_or_else(|payload| Err(SolverError::Panicked(panic_message(payload))));

        match outcome {
            Ok(result) => (result, SolveStatus::Solved),
            Err(e) => {
                warn!(%key, error = %e, "routine failed");
                (PuzzleResult::degraded(day, part, &e), SolveStatus::Degraded)
            }
        }
    }

    /// What `key` is bound to
    pub fn binding(&self, key: SolverKey) -> BindingKind {
        match self.entries[key.index()] {
            Binding::Specific(_) => BindingKind::Specific,
            Binding::Generic => BindingKind::Generic,
        }
    }

    /// Iterate every key with its binding kind, in (day, part) order
    pub fn keys(&self) -> impl Iterator<Item = (SolverKey, BindingKind)> + '_ {
        SolverKey::all().map(|key| (key, self.binding(key)))
    }
}

/// Routine for part `N` of `S`: fetch description and input, parse, solve
fn part_routine<S: PartSolver<N>, const N: u8>(
    key: SolverKey,
    source: &dyn PuzzleSource,
) -> Result<PuzzleResult, SolverError> {
    let description = source
        .fetch_description(key.day)
        .map_err(|e| SolverError::Fetch {
            what: "description",
            day: key.day,
            source: e,
        })?;
    let input = source
        .fetch_input(key.day)
        .map_err(|e| SolverError::Fetch {
            what: "input",
            day: key.day,
            source: e,
        })?;

    let answer = parse_and_solve::<S, N>(&input)?;
    Ok(PuzzleResult::new(description, input, answer))
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
