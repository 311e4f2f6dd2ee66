#![deny(clippy::cast_lossless)]
//! Ear-clipping triangulation for simple polygons.
//!
//! Polygons may be convex or concave and may be given in either winding order.
//! Triangulation never fails: degenerate or self-intersecting input is absorbed
//! by progressively coarser fallbacks, and the caller always gets `n - 2`
//! triangles back for an `n`-gon.
//!
//! ```rust
//! # use rtriangulate::data::Point;
//! # use rtriangulate::triangulate;
//! let square = [
//!   Point::new([0.0, 0.0]),
//!   Point::new([1.0, 0.0]),
//!   Point::new([1.0, 1.0]),
//!   Point::new([0.0, 1.0]),
//! ];
//! let triangles = triangulate(&square);
//! assert_eq!(triangles.len(), 2);
//! ```
use num_traits::Float;
use std::fmt::Debug;
use std::iter::Sum;

pub mod algorithms;
pub mod data;
pub mod mesh;
mod orientation;

pub use orientation::Orientation;

#[doc(inline)]
pub use algorithms::triangulation::{
  deviation, triangulate, triangulate_flat, triangulate_regions, Triangulate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A flat coordinate list must hold an even number of scalars.
  OddCoordinateCount(usize),
  /// Vertex buffers hold pairs and color buffers hold triples.
  MalformedBuffers { vertices: usize, colors: usize },
  /// The number of vertices and the number of colors differ.
  BufferLengthMismatch { vertices: usize, colors: usize },
  /// Mesh indices are `u32`. Holds the vertex count that did not fit.
  TooManyVertices(usize),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::OddCoordinateCount(len) => {
        write!(f, "Odd number of coordinates: {}", len)
      }
      Error::MalformedBuffers { vertices, colors } => write!(
        f,
        "Invalid vertices or colors size: vertices size = {}, colors size = {}",
        vertices, colors
      ),
      Error::BufferLengthMismatch { vertices, colors } => write!(
        f,
        "Vertices and colors size mismatch: vertices count = {}, colors count = {}",
        vertices, colors
      ),
      Error::TooManyVertices(count) => {
        write!(f, "Too many vertices for 32-bit indices: {}", count)
      }
    }
  }
}

impl std::error::Error for Error {}

/// Scalar type of polygon coordinates.
pub trait PolygonScalar: Float + Debug + Sum + Send + Sync {
  fn from_constant(val: f64) -> Self;
  /// Narrow to the precision of GPU vertex buffers.
  fn as_f32(self) -> f32;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl PolygonScalar for $ty {
        fn from_constant(val: f64) -> Self {
          val as $ty
        }
        fn as_f32(self) -> f32 {
          self as f32
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
