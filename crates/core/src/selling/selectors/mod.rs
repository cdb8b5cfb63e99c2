//! Ownership selectors - one per implemented selling strategy.

mod fifo_selector;

pub use fifo_selector::FifoSelector;
