#![allow(clippy::cast_possible_truncation)]

pub trait RoundToIsize {
	/// Round half away from zero and convert to a signed index.
	///
	/// The result is not clamped: callers that use it to index a buffer
	/// must check it against the buffer bounds first.
	#[must_use]
	fn round_isize(self) -> isize;
}

macro_rules! impl_round_for_float {
	($t:ty) => {
		impl RoundToIsize for $t {
			fn round_isize(self) -> isize {
				self.round() as isize
			}
		}
	};
	($t:ty, $($others:ty),+) => {
		impl_round_for_float!($t);
		impl_round_for_float!($($others),+);
	};
}

impl_round_for_float!(f32, f64);

pub trait NearestInteger
where
	Self: Sized,
{
	/// The integer closest to `self`, as a float.
	#[must_use]
	fn nearest_integer(self) -> Self;

	/// Absolute distance between `self` and [`NearestInteger::nearest_integer`].
	///
	/// Always within `0.0..=0.5` for finite values, `NaN` otherwise.
	#[must_use]
	fn distance_to_nearest_integer(self) -> Self;
}

macro_rules! impl_nearest_integer_for_float {
	($t:ty) => {
		impl NearestInteger for $t {
			fn nearest_integer(self) -> Self {
				self.round()
			}

			fn distance_to_nearest_integer(self) -> Self {
				(self - self.round()).abs()
			}
		}
	};
	($t:ty, $($others:ty),+) => {
		impl_nearest_integer_for_float!($t);
		impl_nearest_integer_for_float!($($others),+);
	};
}

impl_nearest_integer_for_float!(f32, f64);

pub trait IsOdd
where
	Self: Sized,
{
	#[must_use]
	fn is_odd(&self) -> bool;
}

macro_rules! impl_is_odd_for {
	($t:ty) => {
		impl IsOdd for $t {
			fn is_odd(&self) -> bool {
				self & 1 == 1
			}
		}
	};
	($t:ty, $($others:ty),+) => {
		impl_is_odd_for!($t);
		impl_is_odd_for!($($others),+);
	};
}

impl_is_odd_for!(u8, u16, u32, u64, usize);
