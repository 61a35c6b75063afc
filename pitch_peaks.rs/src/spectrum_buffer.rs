use delegate::delegate;
use derive_more::derive::{Deref, From};

use crate::{PeakFinder, PeakSearchConfig, SpectrumCtx};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum SpectrumError {
	#[error("the magnitude spectrum is empty")]
	EmptySpectrum,
	#[error("sampling frequency must be positive and finite, got {0}")]
	InvalidSamplingFrequency(f32),
	#[error("spectrum of {padded_length} bins cannot hold {sample_count} samples")]
	PaddedLengthTooShort {
		sample_count: usize,
		padded_length: usize,
	},
	#[error("magnitude at bin {index} is {value}, expected a finite non-negative value")]
	InvalidMagnitude { index: usize, value: f32 },
	#[error("snapshot has {snapshot_len} bins, spectrum has {spectrum_len}")]
	SnapshotLengthMismatch {
		snapshot_len: usize,
		spectrum_len: usize,
	},
}

/// Owned copy of a spectrum's magnitudes, taken before a destructive peak
/// extraction pass.
#[derive(Debug, Clone, PartialEq, Deref, From)]
pub struct SpectrumSnapshot(Vec<f32>);

/// A magnitude spectrum (DC first, one value per bin) together with its
/// sampling metadata.
///
/// Peak extraction erases the lobes it has already visited, so a buffer is
/// good for a single extraction pass unless it is restored from a
/// [`SpectrumSnapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumBuffer {
	ctx: SpectrumCtx,
	magnitudes: Vec<f32>,
}

impl SpectrumBuffer {
	/// Wrap a magnitude spectrum. Its length is the padded length of the
	/// transform that produced it.
	///
	/// # Errors
	/// - if `magnitudes` is empty
	/// - if `sampling_frequency` is not a positive finite number
	/// - if `sample_count` is zero or larger than `magnitudes.len()`
	/// - if any magnitude is negative, `NaN` or infinite
	pub fn new(
		magnitudes: impl Into<Vec<f32>>,
		sampling_frequency: f32,
		sample_count: usize,
	) -> Result<Self, SpectrumError> {
		let magnitudes = magnitudes.into();
		if magnitudes.is_empty() {
			return Err(SpectrumError::EmptySpectrum);
		}
		if !(sampling_frequency.is_finite() && sampling_frequency > 0.) {
			return Err(SpectrumError::InvalidSamplingFrequency(sampling_frequency));
		}
		if sample_count == 0 || sample_count > magnitudes.len() {
			return Err(SpectrumError::PaddedLengthTooShort {
				sample_count,
				padded_length: magnitudes.len(),
			});
		}
		if let Some((index, &value)) = magnitudes
			.iter()
			.enumerate()
			.find(|(_, v)| !(v.is_finite() && **v >= 0.))
		{
			return Err(SpectrumError::InvalidMagnitude { index, value });
		}

		let ctx = SpectrumCtx::new(sampling_frequency, sample_count, magnitudes.len());
		Ok(Self { ctx, magnitudes })
	}

	/// Same as [`SpectrumBuffer::new`] for a spectrum computed without zero padding.
	///
	/// # Errors
	/// - see [`SpectrumBuffer::new`]
	pub fn without_padding(
		magnitudes: impl Into<Vec<f32>>,
		sampling_frequency: f32,
	) -> Result<Self, SpectrumError> {
		let magnitudes = magnitudes.into();
		let sample_count = magnitudes.len();
		Self::new(magnitudes, sampling_frequency, sample_count)
	}

	delegate! {
		to self.ctx {
			#[must_use]
			pub fn sampling_frequency(&self) -> f32;
			#[must_use]
			pub fn sample_count(&self) -> usize;
			#[must_use]
			pub fn padded_length(&self) -> usize;
			#[must_use]
			pub fn is_zero_padded(&self) -> bool;
			#[must_use]
			pub fn frequency_to_index(&self, frequency: f32) -> isize;
			#[must_use]
			pub fn index_to_frequency(&self, index: f32) -> f32;
			#[must_use]
			pub fn bin_width(&self) -> f32;
		}
	}

	#[must_use]
	pub const fn ctx(&self) -> SpectrumCtx {
		self.ctx
	}

	#[must_use]
	pub fn magnitudes(&self) -> &[f32] {
		&self.magnitudes
	}

	/// Mutable access to the magnitudes. The length cannot change.
	pub fn magnitudes_mut(&mut self) -> &mut [f32] {
		&mut self.magnitudes
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.magnitudes.len()
	}

	/// Always `false`, an empty spectrum cannot be built.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.magnitudes.is_empty()
	}

	/// Sum of all the magnitudes.
	#[must_use]
	pub fn total_power(&self) -> f32 {
		self.magnitudes.iter().sum()
	}

	/// Zero the whole spectrum.
	pub fn clear(&mut self) {
		self.magnitudes.fill(0.);
	}

	#[must_use]
	pub fn snapshot(&self) -> SpectrumSnapshot {
		SpectrumSnapshot(self.magnitudes.clone())
	}

	/// Overwrite the magnitudes with a previously taken snapshot.
	///
	/// # Errors
	/// - if the snapshot length differs from the spectrum length; the
	///   spectrum is left untouched.
	pub fn restore(&mut self, snapshot: &SpectrumSnapshot) -> Result<(), SpectrumError> {
		if snapshot.len() != self.magnitudes.len() {
			return Err(SpectrumError::SnapshotLengthMismatch {
				snapshot_len: snapshot.len(),
				spectrum_len: self.magnitudes.len(),
			});
		}
		self.magnitudes.copy_from_slice(snapshot);
		Ok(())
	}

	/// A [`PeakFinder`] working on this spectrum.
	pub fn peak_finder(&mut self, config: PeakSearchConfig) -> PeakFinder<'_> {
		PeakFinder::new(self, config)
	}
}
