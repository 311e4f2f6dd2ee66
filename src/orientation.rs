use crate::data::polygon::ring_area_2x;
use crate::data::Point;
use crate::PolygonScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use rtriangulate::data::Point;
  /// # use rtriangulate::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).is_cw());
  /// ```
  pub fn new<T>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation
  where
    T: PolygonScalar,
  {
    Orientation::from_sign(p1.cross(p2, p3))
  }

  /// Winding of a closed ring of points, from the sign of its shoelace sum.
  ///
  /// Rings with zero area are [`CoLinear`](Orientation::CoLinear).
  pub fn of_ring<T>(points: &[Point<T>]) -> Orientation
  where
    T: PolygonScalar,
  {
    Orientation::from_sign(ring_area_2x(points))
  }

  fn from_sign<T>(value: T) -> Orientation
  where
    T: PolygonScalar,
  {
    if value > T::zero() {
      CounterClockWise
    } else if value < T::zero() {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_ccw(self) -> bool {
    self == CounterClockWise
  }

  pub fn is_cw(self) -> bool {
    self == ClockWise
  }

  pub fn is_colinear(self) -> bool {
    self == CoLinear
  }

  /// Turn `cross` into a convexity measure for a ring with this winding.
  ///
  /// Positive values are convex turns. Collinear rings use the clockwise
  /// convention.
  pub fn oriented<T>(self, cross: T) -> T
  where
    T: PolygonScalar,
  {
    if self.is_ccw() {
      cross
    } else {
      -cross
    }
  }

  /// True if a turn with the given cross product is convex in a ring with this winding.
  pub fn is_convex_turn<T>(self, cross: T) -> bool
  where
    T: PolygonScalar,
  {
    self.oriented(cross) > T::zero()
  }
}
