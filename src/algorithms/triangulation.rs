use rayon::prelude::*;

use crate::data::{Point, Polygon, Triangle};
use crate::{Error, PolygonScalar};

pub mod earclip;

pub use earclip::{EarClip, EarClipReport, Tolerance, Triangulation};

pub trait Triangulate {
  type Scalar;
  fn triangulate(self) -> Vec<Triangle<Self::Scalar>>;
}

impl<'a, T: PolygonScalar> Triangulate for &'a Polygon<T> {
  type Scalar = T;
  fn triangulate(self) -> Vec<Triangle<T>> {
    triangulate(self.points())
  }
}

impl<'a, T: PolygonScalar> Triangulate for &'a [Point<T>] {
  type Scalar = T;
  fn triangulate(self) -> Vec<Triangle<T>> {
    triangulate(self)
  }
}

/// Ear-clip `points` with the default tolerances.
///
/// Never fails. Fewer than three points give no triangles, otherwise there
/// are exactly `points.len() - 2`. Use [`EarClip`] directly to see which
/// fallbacks were needed.
pub fn triangulate<T: PolygonScalar>(points: &[Point<T>]) -> Vec<Triangle<T>> {
  EarClip::new(points).run().triangles
}

/// [`triangulate`] on `[x0, y0, x1, y1, ...]`, yielding
/// `[x1, y1, x2, y2, x3, y3]` per triangle.
///
/// ```rust
/// # use rtriangulate::triangulate_flat;
/// let triangles = triangulate_flat(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]).unwrap();
/// assert_eq!(triangles[0], [0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
/// ```
pub fn triangulate_flat<T: PolygonScalar>(coords: &[T]) -> Result<Vec<[T; 6]>, Error> {
  let polygon = Polygon::from_flat(coords)?;
  Ok(
    polygon
      .triangulate()
      .iter()
      .map(Triangle::to_flat)
      .collect(),
  )
}

/// Triangulate many flat regions in parallel. Output order follows `regions`.
pub fn triangulate_regions<T, R>(regions: &[R]) -> Vec<Result<Vec<Triangle<T>>, Error>>
where
  T: PolygonScalar,
  R: AsRef<[T]> + Sync,
{
  regions
    .par_iter()
    .map(|coords| Polygon::from_flat(coords.as_ref()).map(|polygon| polygon.triangulate()))
    .collect()
}

/// Relative difference between the area of `polygon` and the total area of
/// `triangles`. Zero for a perfect triangulation.
pub fn deviation<T: PolygonScalar>(polygon: &Polygon<T>, triangles: &[Triangle<T>]) -> T {
  let polygon_area = polygon.area();
  let triangles_area: T = triangles.iter().map(Triangle::area).sum();
  if polygon_area == T::zero() && triangles_area == T::zero() {
    T::zero()
  } else {
    ((polygon_area - triangles_area) / polygon_area).abs()
  }
}
