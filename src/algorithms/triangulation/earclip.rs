use log::{debug, trace, warn};

use crate::data::polygon::ring_degenerate_edges;
use crate::data::{Point, PointLocation, Triangle};
use crate::Orientation;
use crate::PolygonScalar;

// Ring of live vertex ids. Scanned front to back for an ear; the first valid
// ear is clipped. A pass that finds nothing bumps the stuck counter:
//   stuck > ring size      => clip the most convex vertex, ear or not.
//   stuck > 2 * ring size  => fan whatever is left.
// Total passes are capped at twice the input size. Leftovers are fanned too.

/// Absolute tolerances. Not scaled to the size of the polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
  /// Side-test magnitude below which a point counts as lying on a triangle edge.
  pub on_edge: T,
  /// Coordinate delta below which both endpoints of an edge coincide.
  pub degenerate_edge: T,
}

pub const DEFAULT_EPSILON: f64 = 1e-6;

impl<T: PolygonScalar> Default for Tolerance<T> {
  fn default() -> Self {
    Tolerance {
      on_edge: T::from_constant(DEFAULT_EPSILON),
      degenerate_edge: T::from_constant(DEFAULT_EPSILON),
    }
  }
}

/// What happened during a triangulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EarClipReport {
  /// Edges with coinciding endpoints. Diagnostic only.
  pub degenerate_edges: usize,
  /// Vertices clipped without passing the ear test.
  pub forced_clips: usize,
  /// The ring was fanned after clipping stalled.
  pub fan_fallback: bool,
  /// The pass budget ran out and the leftovers were fanned.
  pub ceiling_reached: bool,
  /// Passes over the ring, including stalled ones.
  pub passes: usize,
}

impl EarClipReport {
  /// True if every triangle came from a validated ear.
  pub fn is_exact(&self) -> bool {
    self.forced_clips == 0 && !self.fan_fallback && !self.ceiling_reached
  }
}

#[derive(Debug, Clone)]
pub struct Triangulation<T> {
  pub triangles: Vec<Triangle<T>>,
  pub report: EarClipReport,
}

#[derive(Debug, Clone)]
pub struct EarClip<'a, T> {
  points: &'a [Point<T>],
  tolerance: Tolerance<T>,
}

impl<'a, T> EarClip<'a, T>
where
  T: PolygonScalar,
{
  pub fn new(points: &'a [Point<T>]) -> EarClip<'a, T> {
    EarClip {
      points,
      tolerance: Tolerance::default(),
    }
  }

  pub fn with_tolerance(self, tolerance: Tolerance<T>) -> EarClip<'a, T> {
    EarClip { tolerance, ..self }
  }

  /// $O(n^3)$ worst case, $O(n^2)$ when an ear is found early in every pass.
  ///
  /// Always yields `n - 2` triangles for `n >= 3` points, and nothing for
  /// fewer.
  pub fn run(&self) -> Triangulation<T> {
    let points = self.points;
    let n = points.len();
    let mut report = EarClipReport::default();
    if n < 3 {
      return Triangulation {
        triangles: Vec::new(),
        report,
      };
    }

    report.degenerate_edges = ring_degenerate_edges(points, self.tolerance.degenerate_edge);
    if report.degenerate_edges > 0 {
      warn!(
        "Degenerate polygon detected: {} repeated vertices out of {}",
        report.degenerate_edges, n
      );
    }

    if n == 3 {
      return Triangulation {
        triangles: vec![Triangle::from_ids(points, [0, 1, 2])],
        report,
      };
    }

    let orientation = Orientation::of_ring(points);
    trace!("Clipping {} vertices, {:?}", n, orientation);

    let mut ring = Ring::new(n);
    let mut triangles = Vec::with_capacity(n - 2);
    let max_passes = 2 * n;
    let mut stuck = 0;

    while ring.len() > 3 {
      if report.passes == max_passes {
        warn!(
          "Pass budget exhausted with {} of {} vertices left, fanning the rest",
          ring.len(),
          n
        );
        report.ceiling_reached = true;
        break;
      }
      report.passes += 1;

      if stuck > 2 * ring.len() {
        warn!("Using fallback triangulation for a difficult region");
        report.fan_fallback = true;
        break;
      }

      match self.find_ear(&ring, orientation) {
        Some(position) => {
          triangles.push(self.clip(&mut ring, position));
          stuck = 0;
        }
        None => {
          stuck += 1;
          if stuck > ring.len() {
            if let Some(position) = self.most_convex(&ring, orientation) {
              debug!(
                "No ear among {} vertices, forcing a clip at {}",
                ring.len(),
                ring.id(position)
              );
              triangles.push(self.clip(&mut ring, position));
              report.forced_clips += 1;
              stuck = 0;
            }
          }
        }
      }
    }

    triangles.extend(self.fan(&ring));
    debug_assert_eq!(triangles.len(), n - 2);
    Triangulation { triangles, report }
  }

  fn cross(&self, [prev, curr, next]: [usize; 3]) -> T {
    let points = self.points;
    points[prev].cross(&points[curr], &points[next])
  }

  fn find_ear(&self, ring: &Ring, orientation: Orientation) -> Option<usize> {
    (0..ring.len()).find(|&position| {
      orientation.is_convex_turn(self.cross(ring.triple(position))) && self.is_ear(ring, position)
    })
  }

  /// No other live vertex lies strictly inside the triangle at `position`.
  /// Points within `on_edge` of a side do not count.
  fn is_ear(&self, ring: &Ring, position: usize) -> bool {
    let ids = ring.triple(position);
    let trig = Triangle::from_ids(self.points, ids);
    let neighbours = [ring.prev(position), position, ring.next(position)];
    let inside = ring
      .iter()
      .filter(|(other, id)| !neighbours.contains(other) && !ids.contains(id))
      .find(|&(_, id)| {
        trig.locate(&self.points[id], self.tolerance.on_edge) == PointLocation::Inside
      });
    match inside {
      Some((_, id)) => {
        trace!("Vertex {} is inside candidate ear {:?}", id, ids);
        false
      }
      None => true,
    }
  }

  /// The position with the largest convexity, if any vertex is convex at all.
  /// Ties go to the earliest position.
  fn most_convex(&self, ring: &Ring, orientation: Orientation) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for position in 0..ring.len() {
      let convexity = orientation.oriented(self.cross(ring.triple(position)));
      if convexity > T::zero() && best.map_or(true, |(_, top)| convexity > top) {
        best = Some((position, convexity));
      }
    }
    best.map(|(position, _)| position)
  }

  fn clip(&self, ring: &mut Ring, position: usize) -> Triangle<T> {
    let trig = Triangle::from_ids(self.points, ring.triple(position));
    ring.remove(position);
    trig
  }

  /// Fan every remaining vertex from the first live one.
  fn fan<'r>(&'r self, ring: &'r Ring) -> impl Iterator<Item = Triangle<T>> + 'r {
    let anchor = ring.id(0);
    ring.live[1..]
      .windows(2)
      .map(move |pair| Triangle::from_ids(self.points, [anchor, pair[0], pair[1]]))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Ring of live vertex ids. Positions wrap around.

#[derive(Debug, Clone)]
struct Ring {
  live: Vec<usize>,
}

impl Ring {
  fn new(size: usize) -> Ring {
    Ring {
      live: (0..size).collect(),
    }
  }

  fn len(&self) -> usize {
    self.live.len()
  }

  fn id(&self, position: usize) -> usize {
    self.live[position]
  }

  fn prev(&self, position: usize) -> usize {
    (position + self.len() - 1) % self.len()
  }

  fn next(&self, position: usize) -> usize {
    (position + 1) % self.len()
  }

  /// Vertex ids of `(prev, curr, next)` around `position`.
  fn triple(&self, position: usize) -> [usize; 3] {
    [
      self.id(self.prev(position)),
      self.id(position),
      self.id(self.next(position)),
    ]
  }

  /// `(position, id)` pairs.
  fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
    self.live.iter().copied().enumerate()
  }

  fn remove(&mut self, position: usize) -> usize {
    self.live.remove(position)
  }
}
