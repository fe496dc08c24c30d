pub mod shape;

pub use shape::{area, is_larger_than, Shape};
