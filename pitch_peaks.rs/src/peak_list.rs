use std::ops::Deref;

use crate::{Peak, PeakError};

/// Capacity of the peak lists built by the default search configuration.
pub const DEFAULT_PEAK_CAPACITY: usize = 5;

/// Fixed capacity, insertion ordered collection of [`Peak`]s.
///
/// The list neither sorts nor deduplicates: callers insert in the rank order
/// they want to keep. Slots past [`PeakList::size`] always hold
/// [`Peak::NOT_FOUND`].
///
/// Dereferences to the slice of the peaks currently held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakList<const CAPACITY: usize = DEFAULT_PEAK_CAPACITY> {
	entries: [Peak; CAPACITY],
	count: usize,
}

impl<const CAPACITY: usize> PeakList<CAPACITY> {
	#[must_use]
	pub const fn new() -> Self {
		Self {
			entries: [Peak::NOT_FOUND; CAPACITY],
			count: 0,
		}
	}

	/// Append a peak after the last one.
	///
	/// # Errors
	/// - [`PeakError::ListFull`] when the list already holds `CAPACITY` peaks.
	///   The list is left untouched.
	pub fn append(&mut self, peak: Peak) -> Result<(), PeakError> {
		if self.count >= CAPACITY {
			return Err(PeakError::ListFull { capacity: CAPACITY });
		}
		self.entries[self.count] = peak;
		self.count += 1;
		Ok(())
	}

	/// The peak at `index`, or [`Peak::NOT_FOUND`] for any position
	/// at or past [`PeakList::size`].
	#[must_use]
	pub fn get(&self, index: usize) -> Peak {
		self.as_slice()
			.get(index)
			.copied()
			.unwrap_or(Peak::NOT_FOUND)
	}

	/// The number of peaks currently held.
	#[must_use]
	pub const fn size(&self) -> usize {
		self.count
	}

	#[must_use]
	pub const fn capacity(&self) -> usize {
		CAPACITY
	}

	#[must_use]
	pub const fn is_full(&self) -> bool {
		self.count >= CAPACITY
	}

	/// Empty the list, resetting every slot to [`Peak::NOT_FOUND`].
	pub fn reset(&mut self) {
		self.entries = [Peak::NOT_FOUND; CAPACITY];
		self.count = 0;
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Peak] {
		&self.entries[..self.count]
	}
}

impl<const CAPACITY: usize> Default for PeakList<CAPACITY> {
	fn default() -> Self {
		Self::new()
	}
}

impl<const CAPACITY: usize> Deref for PeakList<CAPACITY> {
	type Target = [Peak];

	fn deref(&self) -> &Self::Target {
		self.as_slice()
	}
}

impl<'a, const CAPACITY: usize> IntoIterator for &'a PeakList<CAPACITY> {
	type Item = &'a Peak;

	type IntoIter = std::slice::Iter<'a, Peak>;

	fn into_iter(self) -> Self::IntoIter {
		self.as_slice().iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[allow(clippy::cast_precision_loss)]
	fn peak(i: usize) -> Peak {
		Peak::new(i, i as f32 * 10., 100. - i as f32)
	}

	#[test]
	fn test_new_list_is_empty() {
		let list: PeakList = PeakList::new();
		assert_eq!(list.size(), 0);
		assert_eq!(list.capacity(), DEFAULT_PEAK_CAPACITY);
		assert!(list.is_empty());
		assert!(!list.is_full());
		for i in 0..DEFAULT_PEAK_CAPACITY {
			assert_eq!(list.get(i), Peak::NOT_FOUND);
		}
	}

	#[test]
	fn test_append_keeps_insertion_order() {
		let mut list = PeakList::<3>::new();
		list.append(peak(7)).unwrap();
		list.append(peak(2)).unwrap();
		list.append(peak(5)).unwrap();
		assert_eq!(list.size(), 3);
		assert_eq!(list.get(0), peak(7));
		assert_eq!(list.get(1), peak(2));
		assert_eq!(list.get(2), peak(5));
	}

	#[test]
	fn test_append_past_capacity_fails_without_overwriting() {
		let mut list: PeakList = PeakList::new();
		for i in 0..DEFAULT_PEAK_CAPACITY {
			assert_eq!(list.append(peak(i)), Ok(()));
		}
		assert!(list.is_full());

		let overflow = list.append(peak(99));
		assert_eq!(
			overflow,
			Err(PeakError::ListFull {
				capacity: DEFAULT_PEAK_CAPACITY
			})
		);
		assert_eq!(list.size(), DEFAULT_PEAK_CAPACITY);
		assert_eq!(list.get(DEFAULT_PEAK_CAPACITY - 1), peak(DEFAULT_PEAK_CAPACITY - 1));
		assert!(list.iter().all(|p| p.index() != Some(99)));
	}

	#[test]
	fn test_get_past_size_returns_sentinel() {
		let mut list: PeakList = PeakList::new();
		list.append(peak(1)).unwrap();
		assert_eq!(list.get(1), Peak::NOT_FOUND);
		assert_eq!(list.get(4), Peak::NOT_FOUND);
		assert_eq!(list.get(1000), Peak::NOT_FOUND);
	}

	#[test]
	fn test_sentinels_can_be_stored() {
		let mut list = PeakList::<2>::new();
		list.append(Peak::NOT_FOUND).unwrap();
		assert_eq!(list.size(), 1);
		assert_eq!(list.get(0), Peak::NOT_FOUND);
	}

	#[test]
	fn test_reset() {
		let mut list = PeakList::<4>::new();
		for i in 0..4 {
			list.append(peak(i)).unwrap();
		}
		list.reset();
		assert_eq!(list.size(), 0);
		assert_eq!(list.get(0), Peak::NOT_FOUND);
		assert_eq!(list, PeakList::<4>::default());
		list.append(peak(3)).unwrap();
		assert_eq!(list.get(0), peak(3));
	}

	#[test]
	fn test_deref_and_iter_only_cover_held_peaks() {
		let mut list: PeakList = PeakList::new();
		list.append(peak(1)).unwrap();
		list.append(peak(2)).unwrap();
		assert_eq!(list.len(), 2);
		assert_eq!((&list).into_iter().count(), 2);
		assert_eq!(list.as_slice(), &[peak(1), peak(2)]);
	}
}
