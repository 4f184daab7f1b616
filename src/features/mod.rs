pub mod features;
pub use features::*;

pub mod regions;
pub use regions::*;
