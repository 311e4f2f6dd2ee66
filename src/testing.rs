// This module contains strategies for:
//  * convex polygons
//  * star-shaped (possibly concave) polygons
// in either winding, plus a few fixed shapes shared between tests.
use crate::data::{Point, Polygon};

use proptest::collection::vec;
use proptest::prelude::*;
use std::f64::consts::TAU;

// Minimum angular separation between neighbouring spokes.
const MIN_GAP: f64 = 0.01;
// Gaps of PI or more put the origin outside and let edges cross.
const MAX_GAP: f64 = 3.0;

/// Sort spokes by angle and drop any that crowd their predecessor, including
/// across the wrap at TAU. Rejects sets with a gap wider than `MAX_GAP`.
fn spread_spokes(mut spokes: Vec<(f64, f64)>) -> Option<Vec<(f64, f64)>> {
  spokes.sort_by(|a, b| a.0.total_cmp(&b.0));
  spokes.dedup_by(|next, kept| next.0 - kept.0 < MIN_GAP);
  while spokes.len() > 3 && spokes[0].0 + TAU - spokes[spokes.len() - 1].0 < MIN_GAP {
    spokes.pop();
  }
  if spokes.len() < 3 {
    return None;
  }
  let wrap = spokes[0].0 + TAU - spokes[spokes.len() - 1].0;
  let widest = spokes
    .windows(2)
    .map(|pair| pair[1].0 - pair[0].0)
    .fold(wrap, f64::max);
  if wrap < MIN_GAP || widest >= MAX_GAP {
    return None;
  }
  Some(spokes)
}

fn from_spokes(spokes: Vec<(f64, f64)>) -> Polygon<f64> {
  spokes
    .into_iter()
    .map(|(angle, radius)| Point::new([radius * angle.cos(), radius * angle.sin()]))
    .collect()
}

/// Counter-clockwise points on a circle of random radius.
pub fn convex_polygon() -> impl Strategy<Value = Polygon<f64>> {
  (vec(0.0..TAU, 3..48), 1.0f64..100.0).prop_filter_map(
    "angles too close together",
    |(angles, radius)| {
      let spokes = angles.into_iter().map(|angle| (angle, radius)).collect();
      spread_spokes(spokes).map(from_spokes)
    },
  )
}

/// Simple polygons, star-shaped around the origin, counter-clockwise.
pub fn star_polygon() -> impl Strategy<Value = Polygon<f64>> {
  vec((0.0..TAU, 0.25f64..1.0), 3..32)
    .prop_filter_map("angles too close together", |spokes| {
      spread_spokes(spokes).map(from_spokes)
    })
}

/// Same ring, opposite winding.
pub fn reversed(poly: Polygon<f64>) -> Polygon<f64> {
  poly.points().iter().rev().cloned().collect()
}

pub fn cw_convex_polygon() -> impl Strategy<Value = Polygon<f64>> {
  convex_polygon().prop_map(reversed)
}

pub fn cw_star_polygon() -> impl Strategy<Value = Polygon<f64>> {
  star_polygon().prop_map(reversed)
}

/// Rectangle with a notch in the bottom edge. (2,1) is the only reflex vertex.
pub fn arrow() -> Polygon<f64> {
  Polygon::new(vec![
    Point::new([0.0, 0.0]),
    Point::new([2.0, 1.0]),
    Point::new([4.0, 0.0]),
    Point::new([4.0, 3.0]),
    Point::new([0.0, 3.0]),
  ])
}

pub fn unit_square() -> Polygon<f64> {
  Polygon::new(vec![
    Point::new([0.0, 0.0]),
    Point::new([1.0, 0.0]),
    Point::new([1.0, 1.0]),
    Point::new([0.0, 1.0]),
  ])
}
