pub mod census;
pub use census::*;

pub mod corpus;
pub use corpus::*;

pub mod pass;
pub use pass::*;
