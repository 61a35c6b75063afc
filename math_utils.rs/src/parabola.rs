//! Three point parabolic interpolation.
//!
//! Given three equally spaced samples `(left, center, right)` around a local
//! extremum, the vertex of the parabola passing through them lies at
//! `center + offset`, where `offset` is expressed in sample units.

/// Vertex of the parabola fitted through three equally spaced samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParabolicVertex {
	/// Offset of the vertex from the center sample, in samples.
	pub offset: f32,
	/// Whether the fit was degenerate (zero curvature) and the offset was
	/// forced to zero.
	pub degenerate: bool,
}

/// Offset of the vertex from the center sample.
///
/// `0.5 * (left - right) / (left - 2 * center + right)`.
///
/// Returns `None` when the curvature is zero (a flat top, or three collinear
/// samples) or when the result is not finite.
#[must_use]
pub fn vertex_offset(left: f32, center: f32, right: f32) -> Option<f32> {
	let curvature = left - 2. * center + right;
	if curvature == 0. {
		return None;
	}
	let offset = 0.5 * (left - right) / curvature;
	offset.is_finite().then_some(offset)
}

/// Like [`vertex_offset`], but resolves the degenerate case to a zero offset
/// instead of failing.
#[must_use]
pub fn vertex(left: f32, center: f32, right: f32) -> ParabolicVertex {
	match vertex_offset(left, center, right) {
		Some(offset) => ParabolicVertex {
			offset,
			degenerate: false,
		},
		None => ParabolicVertex {
			offset: 0.,
			degenerate: true,
		},
	}
}

/// Smoothed estimate of the value at the center sample,
/// `(left + 2 * center + right) / 4`.
#[must_use]
pub fn weighted_center(left: f32, center: f32, right: f32) -> f32 {
	(left + 2. * center + right) / 4.
}
