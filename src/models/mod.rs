pub mod catalog;
pub mod price;

pub use catalog::*;
pub use price::*;
