pub mod report;
pub use report::{Dump, Report};
