use std::ops::Range;

use math_utils::{ext::IsOdd, parabola};

use crate::{Peak, PeakError, PeakList, PeakSearchConfig, SpectrumBuffer};

/// Outcome of [`PeakFinder::find_first_rising_peak`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RisingPeak {
	/// A bin strictly greater than both its neighbors was found.
	LocalMaximum(Peak),
	/// No local maximum in the window: the peak was refined at the start of
	/// the window and should not be trusted as much.
	Fallback(Peak),
}

impl RisingPeak {
	#[must_use]
	pub const fn peak(&self) -> Peak {
		match self {
			Self::LocalMaximum(peak) | Self::Fallback(peak) => *peak,
		}
	}

	#[must_use]
	pub const fn is_fallback(&self) -> bool {
		matches!(self, Self::Fallback(_))
	}
}

/// Locates and refines peaks in a [`SpectrumBuffer`].
///
/// Searches take frequency bounds in Hz and never read outside the
/// magnitude array: a window whose bounds get closer than one bin to either
/// end of the spectrum is rejected with [`PeakError::OutOfBand`], so that
/// interpolation always has both neighbors available.
///
/// [`PeakFinder::erase_neighborhood`] and [`PeakFinder::extract_top_n`]
/// modify the spectrum they work on.
#[derive(Debug)]
pub struct PeakFinder<'a> {
	spectrum: &'a mut SpectrumBuffer,
	config: PeakSearchConfig,
}

impl<'a> PeakFinder<'a> {
	#[must_use]
	pub fn new(spectrum: &'a mut SpectrumBuffer, config: PeakSearchConfig) -> Self {
		Self { spectrum, config }
	}

	#[must_use]
	pub fn spectrum(&self) -> &SpectrumBuffer {
		&*self.spectrum
	}

	#[must_use]
	pub fn config(&self) -> &PeakSearchConfig {
		&self.config
	}

	/// Bin bounds of a search window, checked to leave one bin of margin at
	/// both ends of the spectrum.
	#[allow(clippy::cast_sign_loss)]
	#[allow(clippy::cast_possible_wrap)]
	fn search_window(
		&self,
		low_frequency: f32,
		high_frequency: f32,
	) -> Result<(usize, usize), PeakError> {
		let len = self.spectrum.len();
		let low_index = self.spectrum.frequency_to_index(low_frequency);
		let high_index = self.spectrum.frequency_to_index(high_frequency);

		if low_index <= 0 || high_index >= len as isize - 1 {
			return Err(PeakError::OutOfBand {
				low_index,
				high_index,
				len,
			});
		}

		tracing::trace!(low_index, high_index, "peak search window");
		Ok((low_index as usize, high_index as usize))
	}

	/// Highest local maximum between `low_frequency` and `high_frequency`,
	/// refined with [`PeakFinder::refine_peak`].
	///
	/// On ties the lowest bin wins.
	///
	/// # Errors
	/// - [`PeakError::OutOfBand`] if the window touches the first or the last bin
	/// - [`PeakError::NoLocalMaximum`] if the maximum lies on a window bound
	///   or is not strictly greater than both its neighbors
	pub fn find_highest_in_range(
		&self,
		low_frequency: f32,
		high_frequency: f32,
	) -> Result<Peak, PeakError> {
		let (low_index, high_index) = self.search_window(low_frequency, high_frequency)?;
		let magnitudes = self.spectrum.magnitudes();

		let mut max_index = low_index;
		for i in low_index..=high_index {
			if magnitudes[max_index] < magnitudes[i] {
				max_index = i;
			}
		}

		if max_index == low_index || max_index == high_index {
			return Err(PeakError::NoLocalMaximum { index: max_index });
		}

		let max = magnitudes[max_index];
		if !(max > magnitudes[max_index - 1] && max > magnitudes[max_index + 1]) {
			return Err(PeakError::NoLocalMaximum { index: max_index });
		}

		self.refine_peak(max_index)
	}

	/// First local maximum met while scanning upward from `low_frequency`,
	/// which is not necessarily the highest one.
	///
	/// When the window holds no local maximum the peak is refined at the
	/// first bin of the window and returned as [`RisingPeak::Fallback`].
	///
	/// # Errors
	/// - [`PeakError::OutOfBand`] if the window touches the first or the last bin
	pub fn find_first_rising_peak(
		&self,
		low_frequency: f32,
		high_frequency: f32,
	) -> Result<RisingPeak, PeakError> {
		let (low_index, high_index) = self.search_window(low_frequency, high_frequency)?;
		let magnitudes = self.spectrum.magnitudes();

		for i in (low_index + 1)..=high_index {
			if magnitudes[i - 1] < magnitudes[i] && magnitudes[i] > magnitudes[i + 1] {
				return self.refine_peak(i).map(RisingPeak::LocalMaximum);
			}
		}

		tracing::debug!(
			low_index,
			high_index,
			"no rising peak in window, refining at the window start"
		);
		self.refine_peak(low_index).map(RisingPeak::Fallback)
	}

	/// Refine the maximum at `index` by fitting a parabola through the bin
	/// and its two neighbors.
	///
	/// The interpolated power is `(left + 2 * center + right) / 4`. A flat or
	/// collinear triple has no vertex, in which case the bin center is kept.
	///
	/// # Errors
	/// - [`PeakError::OutOfBand`] if `index` is the first or the last bin
	#[allow(clippy::cast_possible_wrap)]
	#[allow(clippy::cast_precision_loss)]
	pub fn refine_peak(&self, index: usize) -> Result<Peak, PeakError> {
		let magnitudes = self.spectrum.magnitudes();
		let len = magnitudes.len();
		if index == 0 || index >= len.saturating_sub(1) {
			return Err(PeakError::OutOfBand {
				low_index: index as isize,
				high_index: index as isize,
				len,
			});
		}

		let (left, center, right) = (
			magnitudes[index - 1],
			magnitudes[index],
			magnitudes[index + 1],
		);
		let vertex = parabola::vertex(left, center, right);
		if vertex.degenerate {
			tracing::debug!(index, "degenerate interpolation, keeping the bin center");
		}

		Ok(Peak::new(
			index,
			self.spectrum.index_to_frequency(index as f32 + vertex.offset),
			parabola::weighted_center(left, center, right),
		))
	}

	/// Zero `window_size` bins centered on the peak, so that the next search
	/// skips its lobe.
	///
	/// The span is shifted right when it would start before bin 0 and cut
	/// short at the end of the spectrum. [`Peak::NOT_FOUND`] erases nothing.
	///
	/// Returns the erased bin range.
	pub fn erase_neighborhood(&mut self, peak: &Peak, window_size: usize) -> Range<usize> {
		debug_assert!(
			window_size.is_odd(),
			"erase window must be odd, got {window_size}"
		);
		let Some(index) = peak.index() else {
			return 0..0;
		};

		let len = self.spectrum.len();
		let start = index.saturating_sub(window_size / 2);
		let span = start.min(len)..start.saturating_add(window_size).min(len);
		self.spectrum.magnitudes_mut()[span.clone()].fill(0.);
		span
	}

	/// Extract the `n` strongest peaks, strongest first.
	///
	/// Each round finds the highest peak in the window, appends it (or
	/// [`Peak::NOT_FOUND`] if there is none) and erases its lobe with the
	/// configured erase window. The list keeps at most `CAPACITY` peaks.
	///
	/// The spectrum is left with the extracted lobes zeroed: take a
	/// [`crate::SpectrumSnapshot`] first to run other searches on it.
	pub fn extract_top_n<const CAPACITY: usize>(
		&mut self,
		n: usize,
		low_frequency: f32,
		high_frequency: f32,
	) -> PeakList<CAPACITY> {
		let mut list = PeakList::new();
		for rank in 0..n {
			let peak = self
				.find_highest_in_range(low_frequency, high_frequency)
				.unwrap_or_else(|err| {
					tracing::debug!(rank, %err, "no peak found");
					Peak::NOT_FOUND
				});
			if let Err(err) = list.append(peak) {
				tracing::debug!(rank, %err, "dropping extracted peak");
			}
			let erased = self.erase_neighborhood(&peak, self.config.erase_window);
			tracing::debug!(rank, %peak, ?erased, "extracted peak");
		}
		list
	}

	/// Collect the evidence for a fundamental below the strongest peak.
	///
	/// The strongest peak in the band comes first. Then, for each divisor
	/// from 2 to the configured maximum, the spectrum is searched around
	/// `highest / divisor` (plus or minus the search window fraction) and
	/// the peak found there is appended if its power exceeds the configured
	/// fraction of the strongest peak's power. The search stops at the first
	/// divisor whose candidate frequency falls below `low_frequency`.
	///
	/// The list is empty when the band has no peak or when the strongest one
	/// is below the power floor. The spectrum is not modified.
	#[allow(clippy::cast_precision_loss)]
	pub fn find_harmonic_evidence<const CAPACITY: usize>(
		&self,
		low_frequency: f32,
		high_frequency: f32,
	) -> PeakList<CAPACITY> {
		let mut list = PeakList::new();

		let highest = match self.find_highest_in_range(low_frequency, high_frequency) {
			Ok(peak) => peak,
			Err(err) => {
				tracing::debug!(%err, "no dominant peak in band");
				return list;
			}
		};
		if highest.power() < self.config.power_floor {
			tracing::debug!(
				power = highest.power(),
				floor = self.config.power_floor,
				"dominant peak below the power floor"
			);
			return list;
		}
		Self::append_evidence(&mut list, highest);

		for divisor in 2..=self.config.max_harmonic_divisor {
			let candidate_frequency = highest.frequency() / divisor as f32;
			if candidate_frequency < low_frequency {
				tracing::trace!(divisor, candidate_frequency, "candidate below band");
				break;
			}

			let half_window = candidate_frequency * self.config.search_window_fraction;
			match self.find_highest_in_range(
				candidate_frequency - half_window,
				candidate_frequency + half_window,
			) {
				Ok(peak) if peak.power() > highest.power() * self.config.harmonic_power_ratio => {
					Self::append_evidence(&mut list, peak);
				}
				Ok(peak) => {
					tracing::debug!(divisor, %peak, "sub-harmonic too weak");
				}
				Err(err) => {
					tracing::debug!(divisor, candidate_frequency, %err, "no sub-harmonic");
				}
			}
		}

		list
	}

	fn append_evidence<const CAPACITY: usize>(list: &mut PeakList<CAPACITY>, peak: Peak) {
		if let Err(err) = list.append(peak) {
			tracing::debug!(%peak, %err, "dropping harmonic evidence");
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::{rngs::StdRng, Rng, SeedableRng};

	use super::*;
	use crate::DEFAULT_PEAK_CAPACITY;

	/// 1024 bins at 1024Hz: one bin per Hz.
	fn spectrum_with_lobes(lobes: &[(usize, [f32; 3])]) -> SpectrumBuffer {
		let mut magnitudes = vec![0.; 1024];
		for (center, [left, peak, right]) in lobes {
			magnitudes[center - 1] = *left;
			magnitudes[*center] = *peak;
			magnitudes[center + 1] = *right;
		}
		SpectrumBuffer::without_padding(magnitudes, 1024.).unwrap()
	}

	fn a440_with_sub_octave() -> SpectrumBuffer {
		spectrum_with_lobes(&[
			(440, [2000., 8000., 2000.]),
			(220, [1000., 4000., 1000.]),
		])
	}

	#[test]
	fn test_find_highest_in_range() {
		let mut spectrum = a440_with_sub_octave();
		let finder = spectrum.peak_finder(PeakSearchConfig::default());

		let peak = finder.find_highest_in_range(50., 1000.).unwrap();
		assert_eq!(peak.index(), Some(440));
		assert!((peak.frequency() - 440.).abs() < 1e-3);
		assert!((peak.power() - 5000.).abs() < 1e-3);

		let peak = finder.find_highest_in_range(50., 300.).unwrap();
		assert_eq!(peak.index(), Some(220));
		assert!((peak.power() - 2500.).abs() < 1e-3);
	}

	#[test]
	fn test_out_of_band() {
		let mut spectrum = a440_with_sub_octave();
		let finder = spectrum.peak_finder(PeakSearchConfig::default());

		assert_eq!(
			finder.find_highest_in_range(0., 1000.),
			Err(PeakError::OutOfBand {
				low_index: 0,
				high_index: 1000,
				len: 1024
			})
		);
		assert!(matches!(
			finder.find_highest_in_range(-20., 1000.),
			Err(PeakError::OutOfBand { low_index: -20, .. })
		));
		assert!(matches!(
			finder.find_highest_in_range(10., 1023.),
			Err(PeakError::OutOfBand { high_index: 1023, .. })
		));
		assert!(finder.find_highest_in_range(1., 1022.).is_ok());
	}

	#[test]
	fn test_maximum_on_window_bound_is_rejected() {
		let ramp: Vec<f32> = (0..1024u16).map(f32::from).collect();
		let mut spectrum = SpectrumBuffer::without_padding(ramp, 1024.).unwrap();
		let finder = spectrum.peak_finder(PeakSearchConfig::default());
		assert_eq!(
			finder.find_highest_in_range(100., 200.),
			Err(PeakError::NoLocalMaximum { index: 200 })
		);

		let mut spectrum = a440_with_sub_octave();
		let finder = spectrum.peak_finder(PeakSearchConfig::default());
		// the 440Hz lobe starts right at the window start
		assert_eq!(
			finder.find_highest_in_range(440., 500.),
			Err(PeakError::NoLocalMaximum { index: 440 })
		);
		// an empty window cannot have an interior maximum
		assert!(matches!(
			finder.find_highest_in_range(300., 250.),
			Err(PeakError::NoLocalMaximum { .. })
		));
	}

	#[test]
	fn test_plateau_is_not_a_local_maximum() {
		let mut magnitudes = vec![0.; 1024];
		magnitudes[100] = 50.;
		magnitudes[101] = 50.;
		let mut spectrum = SpectrumBuffer::without_padding(magnitudes, 1024.).unwrap();
		let finder = spectrum.peak_finder(PeakSearchConfig::default());
		assert_eq!(
			finder.find_highest_in_range(50., 150.),
			Err(PeakError::NoLocalMaximum { index: 100 })
		);
	}

	#[test]
	fn test_refine_symmetric_triple() {
		let mut spectrum = spectrum_with_lobes(&[(300, [3., 9., 3.])]);
		let finder = spectrum.peak_finder(PeakSearchConfig::default());
		let peak = finder.refine_peak(300).unwrap();
		assert_eq!(peak.index(), Some(300));
		assert!((peak.frequency() - 300.).abs() < f32::EPSILON);
		assert!((peak.power() - (3. + 2. * 9. + 3.) / 4.).abs() < f32::EPSILON);
	}

	#[test]
	fn test_refine_asymmetric_triple() {
		let mut spectrum = spectrum_with_lobes(&[(10, [1., 3., 2.])]);
		let finder = spectrum.peak_finder(PeakSearchConfig::default());
		let peak = finder.find_highest_in_range(5., 20.).unwrap();
		assert_eq!(peak.index(), Some(10));
		assert!((peak.frequency() - (10. + 1. / 6.)).abs() < 1e-4);
		assert!((peak.power() - 2.25).abs() < f32::EPSILON);
	}

	#[test]
	fn test_refine_with_padding() {
		let mut magnitudes = vec![0.; 2048];
		magnitudes[511] = 4.;
		magnitudes[512] = 8.;
		magnitudes[513] = 4.;
		let mut spectrum = SpectrumBuffer::new(magnitudes, 8000., 1024).unwrap();
		let finder = spectrum.peak_finder(PeakSearchConfig::default());
		let peak = finder.find_highest_in_range(1000., 3000.).unwrap();
		assert!((peak.frequency() - 2000.).abs() < 1e-3);
	}

	#[test]
	fn test_refine_flat_top_keeps_bin_center() {
		let mut spectrum = spectrum_with_lobes(&[(100, [2., 2., 2.])]);
		let finder = spectrum.peak_finder(PeakSearchConfig::default());
		let peak = finder.refine_peak(100).unwrap();
		assert!(peak.frequency().is_finite());
		assert!((peak.frequency() - 100.).abs() < f32::EPSILON);
		assert!((peak.power() - 2.).abs() < f32::EPSILON);
	}

	#[test]
	fn test_refine_on_spectrum_edges() {
		let mut spectrum = a440_with_sub_octave();
		let finder = spectrum.peak_finder(PeakSearchConfig::default());
		assert!(matches!(
			finder.refine_peak(0),
			Err(PeakError::OutOfBand { .. })
		));
		assert!(matches!(
			finder.refine_peak(1023),
			Err(PeakError::OutOfBand { .. })
		));
		assert!(finder.refine_peak(1022).is_ok());
		assert!(matches!(
			finder.refine_peak(usize::MAX),
			Err(PeakError::OutOfBand { .. })
		));
	}

	#[test]
	fn test_first_rising_peak() {
		let mut spectrum = spectrum_with_lobes(&[(100, [5., 10., 5.]), (200, [50., 100., 50.])]);
		let finder = spectrum.peak_finder(PeakSearchConfig::default());

		let rising = finder.find_first_rising_peak(50., 300.).unwrap();
		assert!(!rising.is_fallback());
		assert_eq!(rising.peak().index(), Some(100));

		let highest = finder.find_highest_in_range(50., 300.).unwrap();
		assert_eq!(highest.index(), Some(200));
	}

	#[test]
	fn test_first_rising_peak_fallback() {
		let ramp: Vec<f32> = (0..1024u16).map(f32::from).collect();
		let mut spectrum = SpectrumBuffer::without_padding(ramp, 1024.).unwrap();
		let finder = spectrum.peak_finder(PeakSearchConfig::default());

		let rising = finder.find_first_rising_peak(10., 20.).unwrap();
		assert!(rising.is_fallback());
		let peak = rising.peak();
		assert_eq!(peak.index(), Some(10));
		assert!((peak.frequency() - 10.).abs() < f32::EPSILON);
		assert!((peak.power() - 10.).abs() < f32::EPSILON);

		assert!(matches!(
			finder.find_first_rising_peak(0., 20.),
			Err(PeakError::OutOfBand { .. })
		));
	}

	#[test]
	fn test_erase_neighborhood() {
		let mut spectrum = SpectrumBuffer::without_padding(vec![1.; 1024], 1024.).unwrap();
		let mut finder = spectrum.peak_finder(PeakSearchConfig::default());

		let erased = finder.erase_neighborhood(&Peak::new(100, 100., 1.), 9);
		assert_eq!(erased, 96..105);
		let magnitudes = finder.spectrum().magnitudes();
		assert!(magnitudes[96..105].iter().all(|v| *v == 0.));
		assert!((magnitudes[95] - 1.).abs() < f32::EPSILON);
		assert!((magnitudes[105] - 1.).abs() < f32::EPSILON);
	}

	#[test]
	fn test_erase_neighborhood_is_clamped() {
		let mut spectrum = SpectrumBuffer::without_padding(vec![1.; 1024], 1024.).unwrap();
		let mut finder = spectrum.peak_finder(PeakSearchConfig::default());

		assert_eq!(finder.erase_neighborhood(&Peak::new(2, 2., 1.), 9), 0..9);
		assert_eq!(
			finder.erase_neighborhood(&Peak::new(1022, 1022., 1.), 9),
			1018..1024
		);
		assert_eq!(finder.erase_neighborhood(&Peak::NOT_FOUND, 9), 0..0);

		let zeroed = finder
			.spectrum()
			.magnitudes()
			.iter()
			.filter(|v| **v == 0.)
			.count();
		assert_eq!(zeroed, 9 + 6);
	}

	#[test]
	fn test_erase_neighborhood_far_past_the_end() {
		let mut spectrum = SpectrumBuffer::without_padding(vec![1.; 1024], 1024.).unwrap();
		let mut finder = spectrum.peak_finder(PeakSearchConfig::default());

		let erased = finder.erase_neighborhood(&Peak::new(usize::MAX, 0., 1.), 9);
		assert!(erased.is_empty());
		assert!((finder.spectrum().total_power() - 1024.).abs() < f32::EPSILON);
	}

	#[test]
	fn test_extract_top_n_is_ranked_by_power() {
		let mut spectrum = spectrum_with_lobes(&[
			(100, [10., 30., 10.]),
			(300, [100., 300., 100.]),
			(600, [50., 200., 50.]),
		]);
		let mut finder = spectrum.peak_finder(PeakSearchConfig::default());
		let list: PeakList = finder.extract_top_n(5, 50., 1000.);

		assert_eq!(list.size(), 5);
		assert_eq!(list.get(0).index(), Some(300));
		assert_eq!(list.get(1).index(), Some(600));
		assert_eq!(list.get(2).index(), Some(100));
		assert_eq!(list.get(3), Peak::NOT_FOUND);
		assert_eq!(list.get(4), Peak::NOT_FOUND);
		assert!(finder.spectrum().total_power().abs() < f32::EPSILON);
	}

	#[test]
	fn test_extract_top_n_never_exceeds_n_or_capacity() {
		let mut spectrum = a440_with_sub_octave();
		let snapshot = spectrum.snapshot();

		let mut finder = spectrum.peak_finder(PeakSearchConfig::default());
		let list: PeakList = finder.extract_top_n(1, 50., 1000.);
		assert_eq!(list.size(), 1);
		assert_eq!(list.get(0).index(), Some(440));
		// the 220Hz lobe is still there
		assert_eq!(
			finder.find_highest_in_range(50., 1000.).unwrap().index(),
			Some(220)
		);

		spectrum.restore(&snapshot).unwrap();
		let mut finder = spectrum.peak_finder(PeakSearchConfig::default());
		let list: PeakList<DEFAULT_PEAK_CAPACITY> = finder.extract_top_n(8, 50., 1000.);
		assert_eq!(list.size(), DEFAULT_PEAK_CAPACITY);
	}

	#[test]
	fn test_extract_top_n_only_touches_erased_windows() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..20 {
			let magnitudes: Vec<f32> = (0..512).map(|_| rng.gen_range(0.0..100.0)).collect();
			let mut spectrum = SpectrumBuffer::without_padding(magnitudes, 512.).unwrap();
			let original = spectrum.snapshot();

			let config = PeakSearchConfig::default();
			let mut finder = spectrum.peak_finder(config);
			let list: PeakList = finder.extract_top_n(5, 10., 500.);
			assert!(list.size() <= 5);

			let erased_spans: Vec<Range<usize>> = list
				.iter()
				.filter_map(Peak::index)
				.map(|index| {
					let start = index.saturating_sub(config.erase_window / 2);
					start..(start + config.erase_window).min(512)
				})
				.collect();

			for (i, (before, after)) in original
				.iter()
				.zip(finder.spectrum().magnitudes())
				.enumerate()
			{
				let in_erased_span = erased_spans.iter().any(|span| span.contains(&i));
				if in_erased_span {
					assert!(after.abs() < f32::EPSILON, "bin {i} was not erased");
				} else {
					assert!((before - after).abs() < f32::EPSILON, "bin {i} was modified");
				}
			}
		}
	}

	#[test]
	fn test_harmonic_evidence() {
		let mut spectrum = a440_with_sub_octave();
		let finder = spectrum.peak_finder(PeakSearchConfig::default());
		let evidence: PeakList = finder.find_harmonic_evidence(100., 1000.);

		assert_eq!(evidence.size(), 2);
		assert!((evidence.get(0).frequency() - 440.).abs() < 1e-3);
		assert!((evidence.get(1).frequency() - 220.).abs() < 1e-3);
	}

	#[test]
	fn test_harmonic_evidence_does_not_modify_spectrum() {
		let mut spectrum = a440_with_sub_octave();
		let snapshot = spectrum.snapshot();
		let finder = spectrum.peak_finder(PeakSearchConfig::default());
		let _: PeakList = finder.find_harmonic_evidence(100., 1000.);
		assert_eq!(spectrum.magnitudes(), &snapshot[..]);
	}

	#[test]
	fn test_harmonic_evidence_rejects_weak_sub_harmonic() {
		let mut spectrum = spectrum_with_lobes(&[
			(440, [2000., 8000., 2000.]),
			(220, [100., 400., 100.]),
		]);
		let finder = spectrum.peak_finder(PeakSearchConfig::default());
		let evidence: PeakList = finder.find_harmonic_evidence(100., 1000.);
		assert_eq!(evidence.size(), 1);
		assert_eq!(evidence.get(0).index(), Some(440));
	}

	#[test]
	fn test_harmonic_evidence_stops_below_band() {
		let mut spectrum = a440_with_sub_octave();
		let finder = spectrum.peak_finder(PeakSearchConfig::default());
		let evidence: PeakList = finder.find_harmonic_evidence(300., 1000.);
		assert_eq!(evidence.size(), 1);
		assert_eq!(evidence.get(0).index(), Some(440));
	}

	#[test]
	fn test_harmonic_evidence_below_power_floor() {
		let mut spectrum = spectrum_with_lobes(&[
			(440, [200., 800., 200.]),
			(220, [100., 400., 100.]),
		]);
		let finder = spectrum.peak_finder(PeakSearchConfig::default());
		let evidence: PeakList = finder.find_harmonic_evidence(100., 1000.);
		assert!(evidence.is_empty());
	}
}
