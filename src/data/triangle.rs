use super::{Point, PointLocation};
use crate::{Orientation, PolygonScalar};

/// Three points, in whatever winding they were emitted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T>(pub [Point<T>; 3]);

impl<T> Triangle<T>
where
  T: PolygonScalar,
{
  pub fn new(pts: [Point<T>; 3]) -> Triangle<T> {
    Triangle(pts)
  }

  /// Gather the corners from `points` by index.
  pub fn from_ids(points: &[Point<T>], ids: [usize; 3]) -> Triangle<T> {
    Triangle(ids.map(|id| points[id]))
  }

  /// `[x1, y1, x2, y2, x3, y3]`.
  pub fn from_flat(flat: [T; 6]) -> Triangle<T> {
    let [x1, y1, x2, y2, x3, y3] = flat;
    Triangle([
      Point::new([x1, y1]),
      Point::new([x2, y2]),
      Point::new([x3, y3]),
    ])
  }

  pub fn to_flat(&self) -> [T; 6] {
    let [a, b, c] = self.0;
    [a[0], a[1], b[0], b[1], c[0], c[1]]
  }

  pub fn points(&self) -> &[Point<T>; 3] {
    &self.0
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = &self.0;
    Orientation::new(a, b, c)
  }

  // O(1)
  /// Locate `pt` with three half-plane side tests.
  ///
  /// Side values with magnitude below `epsilon` count as lying on that edge,
  /// so a point is only [`Inside`](PointLocation::Inside) when it is clear of
  /// all three edges.
  pub fn locate(&self, pt: &Point<T>, epsilon: T) -> PointLocation {
    let [a, b, c] = &self.0;
    let sides = [pt.side(a, b), pt.side(b, c), pt.side(c, a)];
    let clear = |s: &T| s.abs() >= epsilon;
    let positive = sides.iter().filter(|s| clear(*s) && **s > T::zero()).count();
    let negative = sides.iter().filter(|s| clear(*s) && **s < T::zero()).count();
    if positive == 3 || negative == 3 {
      PointLocation::Inside
    } else if positive == 0 || negative == 0 {
      PointLocation::OnBoundary
    } else {
      PointLocation::Outside
    }
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_constant(2.0)
  }

  pub fn signed_area_2x(&self) -> T {
    let [a, b, c] = &self.0;
    a.cross(b, c)
  }

  pub fn area(&self) -> T {
    self.signed_area().abs()
  }

  pub fn centroid(&self) -> Point<T> {
    let [a, b, c] = self.0;
    let three = T::from_constant(3.0);
    Point::new([(a[0] + b[0] + c[0]) / three, (a[1] + b[1] + c[1]) / three])
  }
}
