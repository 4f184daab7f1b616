pub mod choice;
pub use choice::*;

pub mod offer;
pub use offer::*;

pub mod options;
pub use options::*;

pub mod record;
pub use record::*;
