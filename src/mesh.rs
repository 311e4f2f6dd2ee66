//! Flat-shaded 2D meshes built from triangulated regions.
//!
//! Every triangle gets its own three vertices and three sequential indices.
//! All vertices of a region share one color.
use array_init::array_init;
use log::debug;
use rand::Rng;
use std::convert::TryFrom;
use std::ops::Range;

use crate::algorithms::triangulation::triangulate_regions;
use crate::data::Triangle;
use crate::{Error, PolygonScalar};

/// Linear RGB, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 3]);

impl Color {
  pub const fn new(r: f32, g: f32, b: f32) -> Color {
    Color([r, g, b])
  }

  /// Each channel is `k / 255` for a uniform `k` in `0..=255`.
  pub fn random<R>(rng: &mut R) -> Color
  where
    R: Rng + ?Sized,
  {
    Color(array_init(|_| f32::from(rng.gen::<u8>()) / 255.0))
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuilder {
  vertices: Vec<f32>,
  indices: Vec<u32>,
  colors: Vec<f32>,
}

impl MeshBuilder {
  pub fn new() -> MeshBuilder {
    MeshBuilder::default()
  }

  /// Append one region's triangles, all painted `color`.
  ///
  /// # Errors
  ///
  /// [`Error::TooManyVertices`] if the new indices would not fit in a `u32`.
  /// Nothing is pushed in that case.
  pub fn push_region<T: PolygonScalar>(
    &mut self,
    triangles: &[Triangle<T>],
    color: Color,
  ) -> Result<(), Error> {
    let indices = index_range(self.vertex_count(), 3 * triangles.len())?;
    for pt in triangles.iter().flat_map(Triangle::points) {
      self.vertices.extend_from_slice(&pt.cast(T::as_f32).array);
      self.colors.extend_from_slice(&color.0);
    }
    self.indices.extend(indices);
    Ok(())
  }

  /// Triangulate every region and give each a random color.
  ///
  /// # Errors
  ///
  /// The first region with an odd coordinate count, or the first region whose
  /// indices overflow a `u32`. Regions before it have already been pushed.
  pub fn extend_regions<T, S, R>(&mut self, regions: &[S], rng: &mut R) -> Result<(), Error>
  where
    T: PolygonScalar,
    S: AsRef<[T]> + Sync,
    R: Rng + ?Sized,
  {
    let total = regions.len();
    for (done, region) in triangulate_regions(regions).into_iter().enumerate() {
      let triangles = region?;
      self.push_region(&triangles, Color::random(rng))?;
      debug!("Processed region {}/{}", done + 1, total);
    }
    debug!(
      "Vertices count: {}, Colors count: {}, Indices count: {}",
      self.vertices.len(),
      self.colors.len(),
      self.indices.len()
    );
    Ok(())
  }

  /// `[x, y]` per vertex.
  pub fn vertices(&self) -> &[f32] {
    &self.vertices
  }

  pub fn indices(&self) -> &[u32] {
    &self.indices
  }

  /// `[r, g, b]` per vertex.
  pub fn colors(&self) -> &[f32] {
    &self.colors
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len() / 2
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// See [`interleave`].
  pub fn interleaved(&self) -> Result<Vec<f32>, Error> {
    interleave(&self.vertices, &self.colors)
  }
}

// Indices `start..start + count`, all below `u32::MAX`.
fn index_range(start: usize, count: usize) -> Result<Range<u32>, Error> {
  let too_many = || Error::TooManyVertices(start.saturating_add(count));
  let end = start.checked_add(count).ok_or_else(too_many)?;
  let end = u32::try_from(end).map_err(|_| too_many())?;
  let start = u32::try_from(start).map_err(|_| too_many())?;
  Ok(start..end)
}

/// Zip `[x, y]` vertices with `[r, g, b]` colors into `[x, y, r, g, b]` records.
///
/// # Errors
///
/// * [`Error::MalformedBuffers`] if `vertices` is not made of pairs or
///   `colors` is not made of triples.
/// * [`Error::BufferLengthMismatch`] if they describe a different number of
///   vertices.
pub fn interleave(vertices: &[f32], colors: &[f32]) -> Result<Vec<f32>, Error> {
  if vertices.len() % 2 != 0 || colors.len() % 3 != 0 {
    return Err(Error::MalformedBuffers {
      vertices: vertices.len(),
      colors: colors.len(),
    });
  }
  if vertices.len() / 2 != colors.len() / 3 {
    return Err(Error::BufferLengthMismatch {
      vertices: vertices.len() / 2,
      colors: colors.len() / 3,
    });
  }
  Ok(
    vertices
      .chunks_exact(2)
      .zip(colors.chunks_exact(3))
      .flat_map(|(xy, rgb)| xy.iter().chain(rgb).copied())
      .collect(),
  )
}
