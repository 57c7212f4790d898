pub mod error;
pub mod matrix;
pub mod scale;
pub mod unit;

pub use error::*;
pub use matrix::*;
pub use scale::*;
pub use unit::*;
