use std::sync::Arc;

use rustfft::{
	num_complex::{Complex, Complex32},
	Fft, FftPlanner,
};

use crate::{
	fft::{windowing_fns::HammingWindow, WindowingFn},
	SpectrumBuffer, SpectrumCtx, SpectrumError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroPadding {
	#[default]
	Disabled,
	/// Append as many zeros as there are samples, halving the bin width.
	Enabled,
}

/// Subtract the mean from every sample.
pub fn remove_bias(samples: &mut [f32]) {
	let bias = mean(samples);
	for sample in samples.iter_mut() {
		*sample -= bias;
	}
}

#[allow(clippy::cast_precision_loss)]
fn mean(samples: &[f32]) -> f32 {
	if samples.is_empty() {
		return 0.;
	}
	samples.iter().sum::<f32>() / samples.len() as f32
}

/// Turns a buffer of time domain samples into a [`SpectrumBuffer`].
///
/// The bias is removed, the windowing function is applied to the acquired
/// samples only, then the buffer is (optionally) zero padded and
/// transformed. Magnitudes are not normalized.
pub struct MagnitudeAnalyzer {
	ctx: SpectrumCtx,
	windowing_fn: Box<dyn WindowingFn + Send + 'static>,
	fft_processor: Arc<dyn Fft<f32>>,
	complex_signal: Vec<Complex32>,
}

impl std::fmt::Debug for MagnitudeAnalyzer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MagnitudeAnalyzer")
			.field("ctx", &self.ctx)
			.field("windowing_fn", &"omitted")
			.field("fft_processor", &"omitted")
			.field("complex_signal", &self.complex_signal)
			.finish()
	}
}

impl MagnitudeAnalyzer {
	/// # Errors
	/// - if `sampling_frequency` is not a positive finite number
	/// - if `sample_count` is zero
	pub fn new(
		sampling_frequency: f32,
		sample_count: usize,
		zero_padding: ZeroPadding,
		windowing_fn: impl WindowingFn + Send + 'static,
	) -> Result<Self, SpectrumError> {
		if !(sampling_frequency.is_finite() && sampling_frequency > 0.) {
			return Err(SpectrumError::InvalidSamplingFrequency(sampling_frequency));
		}
		if sample_count == 0 {
			return Err(SpectrumError::EmptySpectrum);
		}

		let padded_length = match zero_padding {
			ZeroPadding::Disabled => sample_count,
			ZeroPadding::Enabled => sample_count * 2,
		};
		let mut planner = FftPlanner::new();
		Ok(Self {
			ctx: SpectrumCtx::new(sampling_frequency, sample_count, padded_length),
			windowing_fn: Box::new(windowing_fn),
			fft_processor: planner.plan_fft_forward(padded_length),
			complex_signal: vec![Complex { re: 0., im: 0. }; padded_length],
		})
	}

	/// Hamming window, with or without zero padding.
	///
	/// # Errors
	/// - see [`MagnitudeAnalyzer::new`]
	pub fn hamming(
		sampling_frequency: f32,
		sample_count: usize,
		zero_padding: ZeroPadding,
	) -> Result<Self, SpectrumError> {
		Self::new(
			sampling_frequency,
			sample_count,
			zero_padding,
			HammingWindow::new(),
		)
	}

	#[must_use]
	pub const fn ctx(&self) -> SpectrumCtx {
		self.ctx
	}

	/// Compute the magnitude spectrum of `signal`.
	///
	/// Note: performance-wise, FFT works better when the padded length is a power of two.
	///
	/// # Panics
	/// - if the length of `signal` differs from the configured sample count.
	///
	/// # Errors
	/// - if the signal contains non-finite values
	pub fn analyze(&mut self, signal: &[f32]) -> Result<SpectrumBuffer, SpectrumError> {
		let sample_count = self.ctx.sample_count();
		assert_eq!(
			signal.len(),
			sample_count,
			"signal with incompatible length received"
		);

		let bias = mean(signal);
		for (i, c) in self.complex_signal.iter_mut().enumerate() {
			*c = match signal.get(i) {
				Some(sample) => Complex::new(
					(sample - bias) * self.windowing_fn.ratio_at(i, sample_count),
					0.,
				),
				None => Complex::new(0., 0.),
			};
		}

		self.fft_processor.process(&mut self.complex_signal);

		let magnitudes: Vec<f32> = self.complex_signal.iter().map(|c| c.norm()).collect();
		SpectrumBuffer::new(
			magnitudes,
			self.ctx.sampling_frequency(),
			self.ctx.sample_count(),
		)
	}
}
