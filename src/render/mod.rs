pub mod cpp;
pub use cpp::*;

pub mod format;
pub use format::*;

pub mod json;
pub use json::*;

pub mod report;
pub use report::*;
