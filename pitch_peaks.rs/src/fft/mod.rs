mod windowing_fn;
pub use windowing_fn::*;

pub mod windowing_fns;

mod magnitude_analyzer;
pub use magnitude_analyzer::*;
