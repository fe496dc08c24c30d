use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The value is not one of the shapes the closed hierarchy knows about
    #[error("wrong type passed {type_name}")]
    TypeMismatch { type_name: &'static str },
}
