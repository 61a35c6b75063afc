//! Pitch estimation from a magnitude spectrum.
//!
//! Peaks are located with sub-bin precision by parabolic interpolation,
//! extracted strongest first by erasing each lobe once it has been found,
//! and the fundamental frequency is chosen as the lowest peak the dominant
//! one is a harmonic of.
//!
//! ```
//! use pitch_peaks::{FundamentalEstimator, PeakSearchConfig, SpectrumBuffer};
//!
//! // one bin per Hz, a strong partial at 440Hz and its sub-octave at 220Hz
//! let mut magnitudes = vec![0.; 1024];
//! magnitudes[439..=441].copy_from_slice(&[2000., 8000., 2000.]);
//! magnitudes[219..=221].copy_from_slice(&[1000., 4000., 1000.]);
//! let mut spectrum = SpectrumBuffer::without_padding(magnitudes, 1024.).unwrap();
//!
//! let estimator = FundamentalEstimator::new(PeakSearchConfig::default()).unwrap();
//! let fundamental = estimator.estimate_from_spectrum(&mut spectrum, 50., 1000.).unwrap();
//! assert!((fundamental.frequency() - 220.).abs() < 1e-3);
//! ```
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "fft")]
pub mod fft;

mod config;
pub use config::*;

mod peak;
pub use peak::*;

mod peak_list;
pub use peak_list::*;

mod spectrum_ctx;
pub use spectrum_ctx::*;

mod spectrum_buffer;
pub use spectrum_buffer::*;

mod peak_finder;
pub use peak_finder::*;

mod fundamental;
pub use fundamental::*;
