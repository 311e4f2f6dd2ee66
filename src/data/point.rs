use std::ops::Index;

use crate::PolygonScalar;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)] // Required for correctness!
pub struct Point<T> {
  pub array: [T; 2],
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0].clone()), f(self.array[1].clone())],
    }
  }
}

impl<T: PolygonScalar> Point<T> {
  /// Z component of `(q - self) × (r - self)`.
  ///
  /// Positive when `self -> q -> r` turns counter-clockwise.
  pub fn cross(&self, q: &Point<T>, r: &Point<T>) -> T {
    let [x1, y1] = self.array;
    let [x2, y2] = q.array;
    let [x3, y3] = r.array;
    (x2 - x1) * (y3 - y1) - (y2 - y1) * (x3 - x1)
  }

  /// Half-plane side test of `self` against the directed line `a -> b`.
  ///
  /// The sign tells the side, the magnitude is twice the area of the
  /// triangle `(self, a, b)`.
  pub fn side(&self, a: &Point<T>, b: &Point<T>) -> T {
    let [px, py] = self.array;
    let [x1, y1] = a.array;
    let [x2, y2] = b.array;
    (px - x2) * (y1 - y2) - (x1 - x2) * (py - y2)
  }

  /// Both coordinate deltas are below `epsilon`.
  pub fn coincides(&self, other: &Point<T>, epsilon: T) -> bool {
    (self.array[0] - other.array[0]).abs() < epsilon
      && (self.array[1] - other.array[1]).abs() < epsilon
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}
