use crate::portfolio::ShareOwnership;
use crate::selling::selling_errors::SelectionError;

/// Trait for ownership selection strategies.
///
/// `select_from` returns the index of the ownership the next sale lot is
/// drawn from; the index is always within `ownerships` and points at an
/// entry with shares available. Implementations never mutate anything and
/// leave the draw itself to the calculator.
pub trait OwnershipSelector: Send + Sync {
    fn select_from(&self, ownerships: &[ShareOwnership]) -> Result<usize, SelectionError>;
}
