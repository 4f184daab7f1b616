pub mod category;
pub use category::*;

pub mod tally;
pub use tally::*;
