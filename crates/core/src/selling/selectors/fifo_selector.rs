use crate::portfolio::ShareOwnership;
use crate::selling::selling_errors::SelectionError;
use crate::selling::selling_traits::OwnershipSelector;

/// First-in-first-out selection: the oldest ownership with shares available
/// is always drawn from first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoSelector;

impl OwnershipSelector for FifoSelector {
    fn select_from(&self, ownerships: &[ShareOwnership]) -> Result<usize, SelectionError> {
        if ownerships.is_empty() {
            return Err(SelectionError::NoOwnershipAvailable);
        }
        ownerships
            .iter()
            .position(|ownership| ownership.available_count() > 0)
            .ok_or(SelectionError::AllOwnershipsEmpty)
    }
}
