use crate::selling::selectors::FifoSelector;
use crate::selling::selling_errors::{Result, SellingError};
use crate::selling::selling_model::SellingStrategy;
use crate::selling::selling_traits::OwnershipSelector;

/// Builds the selector implementing a selling strategy.
pub struct OwnershipSelectorFactory;

impl OwnershipSelectorFactory {
    /// Returns the selector for `strategy`. Declared strategies without an
    /// implementation are answered with `StrategyNotSupported` carrying the
    /// requested strategy.
    pub fn create(strategy: SellingStrategy) -> Result<Box<dyn OwnershipSelector>> {
        match strategy {
            SellingStrategy::Fifo => Ok(Box::new(FifoSelector)),
            other => Err(SellingError::StrategyNotSupported(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_a_selector_for_fifo() {
        let selector = OwnershipSelectorFactory::create(SellingStrategy::Fifo);
        assert!(selector.is_ok(), "FIFO must have a selector");
    }

    #[test]
    fn rejects_every_strategy_without_an_implementation() {
        for strategy in SellingStrategy::ALL {
            if strategy == SellingStrategy::Fifo {
                continue;
            }
            assert_eq!(
                OwnershipSelectorFactory::create(strategy).err(),
                Some(SellingError::StrategyNotSupported(strategy)),
                "{strategy} must be rejected until it has a selector"
            );
        }
    }
}
