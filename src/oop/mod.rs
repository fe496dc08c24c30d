pub mod shape;

pub use shape::{AsAny, Circle, Shape, Square};
