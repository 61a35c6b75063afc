use math_utils::ext::IsOdd;

use crate::DEFAULT_PEAK_CAPACITY;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
	#[error("peak count must be at least 1")]
	ZeroPeakCount,
	#[error("erase window must be an odd number of bins, got {0}")]
	EvenEraseWindow(usize),
	#[error("{name} must be positive and finite, got {value}")]
	NotPositive { name: &'static str, value: f32 },
	#[error("max harmonic divisor must be at least 2, got {0}")]
	DivisorTooSmall(usize),
	#[error("peak count {peak_count} exceeds the peak list capacity {capacity}")]
	PeakCountExceedsCapacity { peak_count: usize, capacity: usize },
	#[error("the policy requires {required} peaks but only {peak_count} are extracted")]
	RequiredPeaksUnreachable { required: usize, peak_count: usize },
}

/// Numeric knobs of peak extraction and fundamental frequency estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(default)
)]
pub struct PeakSearchConfig {
	/// Number of peaks extracted from a spectrum, and the minimum list size
	/// the harmonic divider policy accepts. At most [`DEFAULT_PEAK_CAPACITY`].
	pub peak_count: usize,
	/// Width, in bins, of the span zeroed around each extracted peak. Odd.
	pub erase_window: usize,
	/// Minimum power of the strongest peak for a pitch to be reported.
	pub power_floor: f32,
	/// Maximum distance of `highest / candidate` from an integer for the
	/// candidate to count as a harmonic divider.
	pub harmonic_tolerance: f32,
	/// Fraction of the strongest peak power a sub-harmonic must exceed to
	/// count as evidence.
	pub harmonic_power_ratio: f32,
	/// Half width of the sub-harmonic search window, as a fraction of the
	/// candidate frequency.
	pub search_window_fraction: f32,
	/// Largest divisor tried by the single pass sub-harmonic search
	/// (divisors run from 2 to this value).
	pub max_harmonic_divisor: usize,
}

impl Default for PeakSearchConfig {
	fn default() -> Self {
		Self {
			peak_count: 5,
			erase_window: 9,
			power_floor: 1000.,
			harmonic_tolerance: 0.05,
			harmonic_power_ratio: 0.2,
			search_window_fraction: 0.2,
			max_harmonic_divisor: 4,
		}
	}
}

impl PeakSearchConfig {
	/// # Errors
	/// - if any of the fields is out of its valid range
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.peak_count == 0 {
			return Err(ConfigError::ZeroPeakCount);
		}
		if self.peak_count > DEFAULT_PEAK_CAPACITY {
			return Err(ConfigError::PeakCountExceedsCapacity {
				peak_count: self.peak_count,
				capacity: DEFAULT_PEAK_CAPACITY,
			});
		}
		if !self.erase_window.is_odd() {
			return Err(ConfigError::EvenEraseWindow(self.erase_window));
		}
		for (name, value) in [
			("power floor", self.power_floor),
			("harmonic tolerance", self.harmonic_tolerance),
			("harmonic power ratio", self.harmonic_power_ratio),
			("search window fraction", self.search_window_fraction),
		] {
			if !(value.is_finite() && value > 0.) {
				return Err(ConfigError::NotPositive { name, value });
			}
		}
		if self.max_harmonic_divisor < 2 {
			return Err(ConfigError::DivisorTooSmall(self.max_harmonic_divisor));
		}
		Ok(())
	}
}
