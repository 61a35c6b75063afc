use math_utils::ext::RoundToIsize;

/// Sampling metadata of a magnitude spectrum: how bins map to frequencies.
///
/// Bin `i` is centered at `i * sampling_frequency / padded_length` Hz, where
/// `padded_length` is the length of the transform, i.e. the number of time
/// domain samples after zero padding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpectrumCtx {
	sampling_frequency: f32,
	sample_count: usize,
	padded_length: usize,
}

impl SpectrumCtx {
	/// No validation is performed here, see [`crate::SpectrumBuffer::new`].
	#[must_use]
	pub const fn new(sampling_frequency: f32, sample_count: usize, padded_length: usize) -> Self {
		Self {
			sampling_frequency,
			sample_count,
			padded_length,
		}
	}

	#[must_use]
	pub const fn without_padding(sampling_frequency: f32, sample_count: usize) -> Self {
		Self::new(sampling_frequency, sample_count, sample_count)
	}

	/// Sampling frequency in Hz.
	#[must_use]
	pub const fn sampling_frequency(&self) -> f32 {
		self.sampling_frequency
	}

	/// Number of acquired samples, before zero padding.
	#[must_use]
	pub const fn sample_count(&self) -> usize {
		self.sample_count
	}

	/// Length of the transform (and of the magnitude array).
	#[must_use]
	pub const fn padded_length(&self) -> usize {
		self.padded_length
	}

	#[must_use]
	pub const fn is_zero_padded(&self) -> bool {
		self.padded_length > self.sample_count
	}

	/// `round(frequency * padded_length / sampling_frequency)`.
	///
	/// The result is not clamped and may be negative or past the end of the
	/// spectrum: callers must check it before indexing.
	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn frequency_to_index(&self, frequency: f32) -> isize {
		(frequency * self.padded_length as f32 / self.sampling_frequency).round_isize()
	}

	/// `index * sampling_frequency / padded_length`.
	///
	/// Takes a fractional index so that interpolated bin positions can be
	/// converted as well.
	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn index_to_frequency(&self, index: f32) -> f32 {
		index * self.sampling_frequency / self.padded_length as f32
	}

	/// Distance in Hz between two adjacent bins.
	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn bin_width(&self) -> f32 {
		self.sampling_frequency / self.padded_length as f32
	}

	#[must_use]
	pub fn nyquist_frequency(&self) -> f32 {
		self.sampling_frequency / 2.
	}
}
