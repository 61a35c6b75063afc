/// Weight applied to each time domain sample before the transform.
pub trait WindowingFn {
	/// Weight of sample `index` in a window of `n_of_samples` samples.
	fn ratio_at(&mut self, index: usize, n_of_samples: usize) -> f32;
}
