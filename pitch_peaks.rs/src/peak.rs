use std::fmt::Display;

/// Failures of peak searches, peak list operations and fundamental frequency
/// estimation.
///
/// None of these is fatal: a frame without a usable peak is reported and the
/// caller moves on to the next one.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum PeakError {
	#[error("search window {low_index}..={high_index} is outside the interpolation-safe range of a {len} bins spectrum")]
	OutOfBand {
		low_index: isize,
		high_index: isize,
		len: usize,
	},
	#[error("no interior local maximum in the search window (maximum at bin {index})")]
	NoLocalMaximum { index: usize },
	#[error("highest peak power {power} is below the floor {floor}")]
	InsufficientSignal { power: f32, floor: f32 },
	#[error("peak list is full (capacity {capacity})")]
	ListFull { capacity: usize },
	#[error("{found} peaks available, {required} required")]
	NotEnoughPeaks { found: usize, required: usize },
	#[error("peak list is empty")]
	EmptyPeakList,
	#[error("no ordinal fundamental is defined for a list of {count} peaks")]
	AmbiguousOrdinal { count: usize },
	#[error("the peak selected at position {position} is the not-found sentinel")]
	SentinelSelected { position: usize },
}

/// A spectral maximum refined with sub-bin precision.
///
/// The bin index, the interpolated frequency and the interpolated power are
/// always computed together, there are no setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
	index: Option<usize>,
	frequency: f32,
	power: f32,
}

impl Peak {
	/// The "not found" sentinel: no bin index, 0Hz, zero power.
	pub const NOT_FOUND: Self = Self {
		index: None,
		frequency: 0.,
		power: 0.,
	};

	#[must_use]
	pub const fn new(index: usize, frequency: f32, power: f32) -> Self {
		Self {
			index: Some(index),
			frequency,
			power,
		}
	}

	/// Bin of the spectrum holding the (non interpolated) maximum,
	/// `None` for [`Peak::NOT_FOUND`].
	#[must_use]
	pub const fn index(&self) -> Option<usize> {
		self.index
	}

	/// Interpolated frequency in Hz.
	#[must_use]
	pub const fn frequency(&self) -> f32 {
		self.frequency
	}

	/// Interpolated power, in the units of the spectrum magnitudes.
	#[must_use]
	pub const fn power(&self) -> f32 {
		self.power
	}

	#[must_use]
	pub const fn is_found(&self) -> bool {
		self.index.is_some()
	}
}

impl Default for Peak {
	fn default() -> Self {
		Self::NOT_FOUND
	}
}

impl Display for Peak {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.index {
			Some(index) => write!(
				f,
				"{:.2}Hz (bin {index}, power {:.2})",
				self.frequency, self.power
			),
			None => f.write_str("no peak"),
		}
	}
}
