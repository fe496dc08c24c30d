use crate::cli::Dispatch;
use crate::errors::ShapeError;
use crate::fp;
use crate::oop;

pub const THRESHOLD: f64 = 16.0;

/// `"<shape> is larger than <threshold>: <bool>"`
///
/// * `shape` - The shape to compare
/// * `threshold` - The area to compare against
/// * `dispatch` - Whether the trait or the enum answers the comparison
///
/// Only `Dispatch::Enum` can fail, when `shape` has no variant in `fp::Shape`.
pub fn comparison_line(shape: &dyn oop::Shape, threshold: f64, dispatch: Dispatch) -> Result<String, ShapeError> {
    let larger = match dispatch {
        Dispatch::Trait => shape.is_larger_than(threshold),
        Dispatch::Enum => fp::is_larger_than(&fp::Shape::try_from(shape)?, threshold),
    };
    log::debug!("{} has area {} ({:?} dispatch)", shape, shape.area(), dispatch);
    Ok(format!("{} is larger than {:.6}: {}", shape, threshold, larger))
}
