//! First-class invariants for tic-tac-two.
//!
//! Invariants are properties every reachable [`GameState`](crate::GameState)
//! satisfies. The engine asserts them in debug builds after each accepted
//! mutation; tests can check them directly.

/// A property of a state `S` that accepted mutations preserve.
pub trait Invariant<S> {
    /// Whether `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Names the property in violation reports.
    fn description() -> &'static str;
}

/// A failed check, carrying the invariant's description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// What was supposed to hold.
    pub description: String,
}

/// Invariants checked as one unit; every failure is reported, not just
/// the first.
pub trait InvariantSet<S> {
    /// Runs every check in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let checks = [$(($inv::holds(state), $inv::description())),+];
                let violations: Vec<InvariantViolation> = checks
                    .into_iter()
                    .filter(|(holds, _)| !holds)
                    .map(|(_, description)| InvariantViolation {
                        description: description.to_string(),
                    })
                    .collect();
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);
impl_invariant_set!(A, B, C, D);

pub mod allotment_within_bounds;
pub mod selection_owned;
pub mod selection_phase;
pub mod window_in_bounds;

pub use allotment_within_bounds::AllotmentWithinBoundsInvariant;
pub use selection_owned::SelectionOwnedInvariant;
pub use selection_phase::SelectionPhaseInvariant;
pub use window_in_bounds::WindowInBoundsInvariant;

/// Everything the engine asserts after a turn.
pub type TicTacTwoInvariants = (
    WindowInBoundsInvariant,
    SelectionOwnedInvariant,
    SelectionPhaseInvariant,
    AllotmentWithinBoundsInvariant,
);
