pub mod chart;
pub mod title;

pub use chart::*;
pub use title::*;
