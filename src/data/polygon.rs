use rand::Rng;
use std::f64::consts::TAU;
use std::iter::FromIterator;

use crate::data::Point;
use crate::{Error, Orientation, PolygonScalar};

/// A single closed ring of points. The last point connects back to the first.
///
/// No validation is done: duplicate points, collinear runs and either winding
/// are all accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
  pub(crate) points: Vec<Point<T>>,
}

impl<T> Polygon<T> {
  pub fn new(points: Vec<Point<T>>) -> Polygon<T> {
    Polygon { points }
  }

  /// Pair up `[x0, y0, x1, y1, ...]` into points.
  ///
  /// # Errors
  ///
  /// [`Error::OddCoordinateCount`] if `coords` has a dangling coordinate.
  pub fn from_flat(coords: &[T]) -> Result<Polygon<T>, Error>
  where
    T: Clone,
  {
    if coords.len() % 2 != 0 {
      return Err(Error::OddCoordinateCount(coords.len()));
    }
    Ok(
      coords
        .chunks_exact(2)
        .map(|xy| Point::new([xy[0].clone(), xy[1].clone()]))
        .collect(),
    )
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn point(&self, idx: usize) -> &Point<T> {
    &self.points[idx]
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  /// Consecutive point pairs, including the closing edge.
  pub fn iter_edges(&self) -> impl Iterator<Item = (&Point<T>, &Point<T>)> + '_ {
    let n = self.points.len();
    (0..n).map(move |i| (&self.points[i], &self.points[(i + 1) % n]))
  }
}

impl<T: PolygonScalar> Polygon<T> {
  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_constant(2.0)
  }

  pub fn signed_area_2x(&self) -> T {
    ring_area_2x(&self.points)
  }

  pub fn area(&self) -> T {
    self.signed_area().abs()
  }

  pub fn orientation(&self) -> Orientation {
    Orientation::of_ring(&self.points)
  }

  /// Number of edges whose endpoints coincide within `epsilon` on both axes.
  pub fn degenerate_edges(&self, epsilon: T) -> usize {
    ring_degenerate_edges(&self.points, epsilon)
  }

  /// Crossing-number point-in-polygon test. Points on the boundary may go
  /// either way.
  pub fn contains(&self, pt: &Point<T>) -> bool {
    let [px, py] = pt.array;
    self
      .iter_edges()
      .filter(|(p, q)| {
        let [x1, y1] = p.array;
        let [x2, y2] = q.array;
        (y1 > py) != (y2 > py) && px < (x2 - x1) * (py - y1) / (y2 - y1) + x1
      })
      .count()
      % 2
      == 1
  }

  /// $O(n \log n)$ Sample `n` points at distinct angles on the unit circle,
  /// counter-clockwise.
  pub fn random_convex<R>(n: usize, rng: &mut R) -> Polygon<T>
  where
    R: Rng + ?Sized,
  {
    let n = n.max(3);
    let mut angles: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..TAU)).collect();
    angles.sort_by(f64::total_cmp);
    angles.dedup();
    // Collisions are astronomically rare. Try again.
    if angles.len() < n {
      return Self::random_convex(n, rng);
    }
    angles
      .into_iter()
      .map(|angle| Point::new([T::from_constant(angle.cos()), T::from_constant(angle.sin())]))
      .collect()
  }
}

/// Shoelace sum over all edges of a closed ring, including the closing edge.
pub(crate) fn ring_area_2x<T: PolygonScalar>(points: &[Point<T>]) -> T {
  let n = points.len();
  (0..n)
    .map(|i| {
      let [x1, y1] = points[i].array;
      let [x2, y2] = points[(i + 1) % n].array;
      x1 * y2 - x2 * y1
    })
    .sum()
}

pub(crate) fn ring_degenerate_edges<T: PolygonScalar>(points: &[Point<T>], epsilon: T) -> usize {
  let n = points.len();
  (0..n)
    .filter(|&i| points[i].coincides(&points[(i + 1) % n], epsilon))
    .count()
}

impl<T> FromIterator<Point<T>> for Polygon<T> {
  fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
    Polygon::new(iter.into_iter().collect())
  }
}

impl<T> From<Vec<Point<T>>> for Polygon<T> {
  fn from(points: Vec<Point<T>>) -> Polygon<T> {
    Polygon::new(points)
  }
}
