pub mod aggregator;
pub use aggregator::*;

pub mod estimate;
pub use estimate::*;

pub mod priors;
pub use priors::*;
