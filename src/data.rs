pub(crate) mod point;
pub mod polygon;
mod triangle;

pub use triangle::*;

#[doc(inline)]
pub use crate::data::polygon::Polygon;
pub use point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
