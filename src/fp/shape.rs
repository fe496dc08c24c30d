use std::f64::consts::PI;
use std::fmt;

use crate::errors::ShapeError;
use crate::oop;

/// The hierarchy as a datatype (enum)
///
/// Every consumer below matches exhaustively, so there is no value of this type a consumer
/// cannot handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Square { side: f64 },
}

impl Shape {
    pub fn circle(radius: f64) -> Self {
        Shape::Circle { radius }
    }

    pub fn square(side: f64) -> Self {
        Shape::Square { side }
    }
}

pub fn area(shape: &Shape) -> f64 {
    match shape {
        Shape::Circle { radius } => PI * radius * radius,
        Shape::Square { side } => side * side,
    }
}

/// Written once against `area`, not per variant
pub fn is_larger_than(shape: &Shape, threshold: f64) -> bool {
    area(shape) > threshold
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Shape::Circle { radius } => write!(f, "Circle (radius={:.6})", radius),
            Shape::Square { side } => write!(f, "Square (side={:.6})", side),
        }
    }
}

/// Recover the variant behind a trait object
///
/// Only the shapes this crate defines have a variant. Any other implementor of the trait
/// is rejected with `TypeMismatch`.
///
/// Pass the `&dyn Shape` itself (`&*boxed`), not a reference to the box.
impl<'a> TryFrom<&'a dyn oop::Shape> for Shape {
    type Error = ShapeError;

    fn try_from(shape: &'a dyn oop::Shape) -> Result<Self, Self::Error> {
        let any = oop::AsAny::as_any(shape);
        if let Some(circle) = any.downcast_ref::<oop::Circle>() {
            return Ok(Shape::circle(circle.radius()));
        }
        if let Some(square) = any.downcast_ref::<oop::Square>() {
            return Ok(Shape::square(square.side()));
        }
        log::trace!("no variant for {}", shape.type_name());
        Err(ShapeError::TypeMismatch { type_name: shape.type_name() })
    }
}
