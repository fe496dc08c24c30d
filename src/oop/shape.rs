use std::any::Any;
use std::f64::consts::PI;
use std::fmt;

/// Upcast helper so a `&dyn Shape` can be handed to `Any` for downcasting
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The base of the hierarchy (interface)
///
/// A shape only has to say how big it is. Comparing against a threshold is provided once here
/// and shared by every implementor, so a new shape implements `area` (and `Display`) and gets
/// `is_larger_than` for free.
pub trait Shape: AsAny + fmt::Display {
    fn area(&self) -> f64;

    /// Strictly greater than, a shape the same size as `threshold` is not larger
    fn is_larger_than(&self, threshold: f64) -> bool {
        self.area() > threshold
    }

    /// Name of the concrete type behind this shape
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Circle (radius={:.6})", self.radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Square { side }
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Square (side={:.6})", self.side)
    }
}
