pub mod arithmetic;
pub mod config;
pub mod constants;
pub mod demo;
pub mod geometry;
pub mod timing;

pub use arithmetic::{ArithmeticError, Calculator};
pub use config::Settings;
pub use geometry::{Circle, Point};
