use std::f32::consts::TAU;

use super::WindowingFn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HammingWindow;
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HannWindow;
/// No windowing (rectangular window).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityWindow;

impl HammingWindow {
	#[must_use]
	pub fn new() -> Self {
		Self
	}
}

impl HannWindow {
	#[must_use]
	pub fn new() -> Self {
		Self
	}
}

impl IdentityWindow {
	#[must_use]
	pub fn new() -> Self {
		Self
	}
}

#[allow(clippy::cast_precision_loss)]
fn cosine_term(index: usize, n_of_samples: usize) -> f32 {
	if n_of_samples <= 1 {
		return 1.;
	}
	f32::cos((TAU * (index as f32)) / (n_of_samples - 1) as f32)
}

impl WindowingFn for HammingWindow {
	fn ratio_at(&mut self, index: usize, n_of_samples: usize) -> f32 {
		0.54 - 0.46 * cosine_term(index, n_of_samples)
	}
}

impl WindowingFn for HannWindow {
	fn ratio_at(&mut self, index: usize, n_of_samples: usize) -> f32 {
		0.5 * (1. - cosine_term(index, n_of_samples))
	}
}

impl WindowingFn for IdentityWindow {
	fn ratio_at(&mut self, _index: usize, _n_of_samples: usize) -> f32 {
		1.
	}
}
