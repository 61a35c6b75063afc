use math_utils::ext::NearestInteger;

use crate::{
	ConfigError, Peak, PeakError, PeakList, PeakSearchConfig, SpectrumBuffer,
	DEFAULT_PEAK_CAPACITY,
};

/// How the list handed to a [`FundamentalPolicy`] is built from a spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeakSource {
	/// The strongest peaks of the band, see [`crate::PeakFinder::extract_top_n`].
	/// Missing peaks are padded with [`Peak::NOT_FOUND`].
	#[default]
	TopN,
	/// The strongest peak followed by its accepted sub-harmonics, see
	/// [`crate::PeakFinder::find_harmonic_evidence`].
	HarmonicEvidence,
}

/// A rule that picks the fundamental frequency among a list of peaks.
pub trait FundamentalPolicy {
	/// # Errors
	/// - when the peaks do not allow a confident choice, see the implementors.
	fn select(&self, peaks: &[Peak]) -> Result<Peak, PeakError>;

	/// The kind of list [`FundamentalPolicy::select`] expects.
	fn peak_source(&self) -> PeakSource {
		PeakSource::TopN
	}

	/// Check that the policy can be satisfied by the lists `config` produces.
	///
	/// # Errors
	/// - when the policy thresholds are invalid or out of reach for `config`.
	fn check(&self, _config: &PeakSearchConfig) -> Result<(), ConfigError> {
		Ok(())
	}
}

/// Picks the lowest peak whose frequency divides the strongest peak's
/// frequency, i.e. the lowest peak the strongest one is a harmonic of.
///
/// Sentinel entries ([`Peak::NOT_FOUND`]) count toward the list size but are
/// never candidates.
///
/// The thresholds held here govern selection; the [`PeakSearchConfig`] of the
/// estimator only governs extraction. [`HarmonicDividerPolicy::from_config`]
/// keeps the two in agreement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(default)
)]
pub struct HarmonicDividerPolicy {
	/// Lists shorter than this are rejected.
	pub required_peaks: usize,
	/// The strongest peak must have at least this power.
	pub power_floor: f32,
	/// Maximum distance of `highest / candidate` from the nearest integer.
	pub tolerance: f32,
}

impl HarmonicDividerPolicy {
	#[must_use]
	pub const fn from_config(config: &PeakSearchConfig) -> Self {
		Self {
			required_peaks: config.peak_count,
			power_floor: config.power_floor,
			tolerance: config.harmonic_tolerance,
		}
	}

	/// Whether `highest_frequency` is (within tolerance) an integer multiple,
	/// at least the second, of `candidate_frequency`.
	#[must_use]
	pub fn is_divider(&self, highest_frequency: f32, candidate_frequency: f32) -> bool {
		if candidate_frequency <= 0. {
			return false;
		}
		let ratio = highest_frequency / candidate_frequency;
		ratio.nearest_integer() >= 2. && ratio.distance_to_nearest_integer() <= self.tolerance
	}
}

impl Default for HarmonicDividerPolicy {
	fn default() -> Self {
		Self::from_config(&PeakSearchConfig::default())
	}
}

impl FundamentalPolicy for HarmonicDividerPolicy {
	fn select(&self, peaks: &[Peak]) -> Result<Peak, PeakError> {
		if peaks.len() < self.required_peaks {
			return Err(PeakError::NotEnoughPeaks {
				found: peaks.len(),
				required: self.required_peaks,
			});
		}

		let highest = strongest(peaks).unwrap_or(Peak::NOT_FOUND);
		if !highest.is_found() || highest.power() < self.power_floor {
			return Err(PeakError::InsufficientSignal {
				power: highest.power(),
				floor: self.power_floor,
			});
		}

		let mut fundamental: Option<Peak> = None;
		for candidate in peaks
			.iter()
			.filter(|p| p.is_found() && p.frequency() < highest.frequency())
		{
			if !self.is_divider(highest.frequency(), candidate.frequency()) {
				tracing::debug!(%candidate, %highest, "not a harmonic divider");
				continue;
			}
			if fundamental.map_or(true, |f| candidate.frequency() < f.frequency()) {
				fundamental = Some(*candidate);
			}
		}

		Ok(fundamental.unwrap_or(highest))
	}

	fn check(&self, config: &PeakSearchConfig) -> Result<(), ConfigError> {
		if self.required_peaks == 0 {
			return Err(ConfigError::ZeroPeakCount);
		}
		if self.required_peaks > config.peak_count {
			return Err(ConfigError::RequiredPeaksUnreachable {
				required: self.required_peaks,
				peak_count: config.peak_count,
			});
		}
		for (name, value) in [
			("power floor", self.power_floor),
			("harmonic tolerance", self.tolerance),
		] {
			if !(value.is_finite() && value > 0.) {
				return Err(ConfigError::NotPositive { name, value });
			}
		}
		Ok(())
	}
}

/// Legacy rule: the fundamental is the last peak of a list of one to four
/// peaks, regardless of frequencies.
///
/// Meant for harmonic evidence lists ([`PeakSource::HarmonicEvidence`]),
/// where the last entry is the lowest accepted sub-harmonic. Kept as a
/// fallback for callers relying on the old behaviour; prefer
/// [`HarmonicDividerPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrdinalPolicy;

impl FundamentalPolicy for OrdinalPolicy {
	fn select(&self, peaks: &[Peak]) -> Result<Peak, PeakError> {
		let position = match peaks.len() {
			0 => return Err(PeakError::EmptyPeakList),
			count @ 1..=4 => count - 1,
			count => return Err(PeakError::AmbiguousOrdinal { count }),
		};
		let peak = peaks[position];
		if !peak.is_found() {
			return Err(PeakError::SentinelSelected { position });
		}
		Ok(peak)
	}

	fn peak_source(&self) -> PeakSource {
		PeakSource::HarmonicEvidence
	}
}

/// Runtime choice between the available policies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(tag = "policy", rename_all = "snake_case")
)]
pub enum FundamentalStrategy {
	HarmonicDivider(HarmonicDividerPolicy),
	Ordinal,
}

impl Default for FundamentalStrategy {
	fn default() -> Self {
		Self::HarmonicDivider(HarmonicDividerPolicy::default())
	}
}

impl FundamentalStrategy {
	/// The harmonic divider policy, with thresholds taken from `config`.
	#[must_use]
	pub const fn from_config(config: &PeakSearchConfig) -> Self {
		Self::HarmonicDivider(HarmonicDividerPolicy::from_config(config))
	}
}

impl FundamentalPolicy for FundamentalStrategy {
	fn select(&self, peaks: &[Peak]) -> Result<Peak, PeakError> {
		match self {
			Self::HarmonicDivider(policy) => policy.select(peaks),
			Self::Ordinal => OrdinalPolicy.select(peaks),
		}
	}

	fn peak_source(&self) -> PeakSource {
		match self {
			Self::HarmonicDivider(policy) => policy.peak_source(),
			Self::Ordinal => OrdinalPolicy.peak_source(),
		}
	}

	fn check(&self, config: &PeakSearchConfig) -> Result<(), ConfigError> {
		match self {
			Self::HarmonicDivider(policy) => policy.check(config),
			Self::Ordinal => OrdinalPolicy.check(config),
		}
	}
}

/// Highest power peak, lowest position on ties. Sentinels are skipped.
fn strongest(peaks: &[Peak]) -> Option<Peak> {
	peaks
		.iter()
		.filter(|p| p.is_found())
		.fold(None, |best: Option<Peak>, p| match best {
			Some(best) if best.power() >= p.power() => Some(best),
			_ => Some(*p),
		})
}

/// Estimates the fundamental frequency of a spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalEstimator<P = FundamentalStrategy> {
	config: PeakSearchConfig,
	policy: P,
}

impl FundamentalEstimator<FundamentalStrategy> {
	/// An estimator using the harmonic divider policy, parametrized by `config`.
	///
	/// # Errors
	/// - if `config` does not validate
	pub fn new(config: PeakSearchConfig) -> Result<Self, ConfigError> {
		Self::with_policy(config, FundamentalStrategy::from_config(&config))
	}
}

impl<P: FundamentalPolicy> FundamentalEstimator<P> {
	/// `config` drives extraction, `policy` keeps its own selection thresholds.
	///
	/// # Errors
	/// - if `config` does not validate
	/// - if the policy cannot be satisfied by the lists `config` produces,
	///   see [`FundamentalPolicy::check`]
	pub fn with_policy(config: PeakSearchConfig, policy: P) -> Result<Self, ConfigError> {
		config.validate()?;
		policy.check(&config)?;
		Ok(Self { config, policy })
	}

	#[must_use]
	pub fn config(&self) -> &PeakSearchConfig {
		&self.config
	}

	#[must_use]
	pub fn policy(&self) -> &P {
		&self.policy
	}

	/// Apply the policy to an already extracted list.
	///
	/// # Errors
	/// - see the policy's [`FundamentalPolicy::select`]
	pub fn estimate(&self, peaks: &[Peak]) -> Result<Peak, PeakError> {
		self.policy.select(peaks)
	}

	/// Build the list the policy expects from the band between
	/// `low_frequency` and `high_frequency`, then apply the policy.
	///
	/// With [`PeakSource::TopN`] the spectrum's extracted lobes are erased,
	/// see [`crate::PeakFinder::extract_top_n`]. With
	/// [`PeakSource::HarmonicEvidence`] the spectrum is left untouched.
	///
	/// # Errors
	/// - see the policy's [`FundamentalPolicy::select`]
	pub fn estimate_from_spectrum(
		&self,
		spectrum: &mut SpectrumBuffer,
		low_frequency: f32,
		high_frequency: f32,
	) -> Result<Peak, PeakError> {
		match self.policy.peak_source() {
			PeakSource::TopN => {
				let peaks: PeakList<DEFAULT_PEAK_CAPACITY> = spectrum
					.peak_finder(self.config)
					.extract_top_n(self.config.peak_count, low_frequency, high_frequency);
				Self::log_outcome(self.estimate(&peaks))
			}
			PeakSource::HarmonicEvidence => {
				self.estimate_from_evidence(spectrum, low_frequency, high_frequency)
			}
		}
	}

	/// Apply the policy to the harmonic evidence found between
	/// `low_frequency` and `high_frequency`, whatever the policy's
	/// [`PeakSource`]. The spectrum is not modified.
	///
	/// # Errors
	/// - see the policy's [`FundamentalPolicy::select`]
	pub fn estimate_from_evidence(
		&self,
		spectrum: &mut SpectrumBuffer,
		low_frequency: f32,
		high_frequency: f32,
	) -> Result<Peak, PeakError> {
		let peaks: PeakList<DEFAULT_PEAK_CAPACITY> = spectrum
			.peak_finder(self.config)
			.find_harmonic_evidence(low_frequency, high_frequency);
		Self::log_outcome(self.estimate(&peaks))
	}

	fn log_outcome(fundamental: Result<Peak, PeakError>) -> Result<Peak, PeakError> {
		match &fundamental {
			Ok(peak) => tracing::debug!(%peak, "fundamental found"),
			Err(err) => tracing::debug!(%err, "no fundamental"),
		}
		fundamental
	}
}
