// Copyright 2025 Irreducible Inc.

use std::{fmt::Debug, hash::Hash};

use bytemuck::Pod;
use rand::distributions::{Distribution, Standard};
use subtle::{ConditionallySelectable, ConstantTimeEq};

use crate::tracing::trace_operation;

/// Unsigned 64-bit word with wrapping arithmetic.
///
/// This is the operation set shared by the native `u64` and the two-word [`Emulated64`]
/// representation. Every method is a pure function of its arguments, and for every input in the
/// documented domain the two implementations return the same value.
///
/// Shift amounts must be less than 64 and rotation amounts must lie in `1..64`. Violating this
/// is a caller error: debug builds panic, release builds return an unspecified value. Use the
/// `checked_*` variants when the amount is not known to be in range.
///
/// [`Emulated64`]: crate::Emulated64
pub trait Word64:
	Debug
	+ Default
	+ PartialEq
	+ Eq
	+ PartialOrd
	+ Ord
	+ Hash
	+ ConstantTimeEq
	+ ConditionallySelectable
	+ Copy
	+ Random
	+ Pod
	+ Send
	+ Sync
	+ 'static
{
	/// Number of bits in a value
	const BITS: u32 = 64;

	const ZERO: Self;
	const ONE: Self;
	const MAX: Self;

	/// Returns `(hi << 32) + lo`.
	fn from_parts(hi: u32, lo: u32) -> Self;

	#[inline]
	fn from_low(lo: u32) -> Self {
		Self::from_parts(0, lo)
	}

	/// Converts a machine size value, truncating anything above bit 63.
	fn from_size(size: usize) -> Self;

	/// Most-significant 32 bits.
	fn high(self) -> u32;

	/// Least-significant 32 bits.
	fn low(self) -> u32;

	#[inline]
	fn to_parts(self) -> (u32, u32) {
		(self.high(), self.low())
	}

	fn less_than(self, rhs: Self) -> bool;

	fn and(self, rhs: Self) -> Self;

	fn or(self, rhs: Self) -> Self;

	fn xor(self, rhs: Self) -> Self;

	/// `self << n`, where `n < 64`.
	fn shift_left(self, n: u32) -> Self;

	/// `self >> n`, where `n < 64`.
	fn shift_right(self, n: u32) -> Self;

	/// Rotates left by `n` bits, where `0 < n < 64`.
	#[inline]
	fn rotl(self, n: u32) -> Self {
		trace_operation!(rotl);
		debug_assert!(n > 0 && n < Self::BITS, "rotation amount must be in 1..64");

		self.shift_left(n).or(self.shift_right(Self::BITS - n))
	}

	/// Addition modulo 2^64.
	fn wrapping_add(self, rhs: Self) -> Self;

	#[inline]
	fn checked_shift_left(self, n: u32) -> Option<Self> {
		(n < Self::BITS).then(|| self.shift_left(n))
	}

	#[inline]
	fn checked_shift_right(self, n: u32) -> Option<Self> {
		(n < Self::BITS).then(|| self.shift_right(n))
	}

	#[inline]
	fn checked_rotl(self, n: u32) -> Option<Self> {
		(n > 0 && n < Self::BITS).then(|| self.rotl(n))
	}
}

/// A value that can be randomly generated
pub trait Random {
	/// Generate random value
	fn random(rng: impl rand::Rng) -> Self;
}

impl<T> Random for T
where
	Standard: Distribution<T>,
{
	fn random(mut rng: impl rand::Rng) -> Self {
		rng.gen()
	}
}

#[cfg(test)]
mod tests {
	use proptest::{arbitrary::any, proptest};

	use super::*;
	use crate::Emulated64;

	fn check_checked_variants<W: Word64>(x: W) {
		assert_eq!(x.checked_shift_left(0), Some(x));
		assert_eq!(x.checked_shift_left(64), None);
		assert_eq!(x.checked_shift_right(63), Some(x.shift_right(63)));
		assert_eq!(x.checked_shift_right(100), None);
		assert_eq!(x.checked_rotl(0), None);
		assert_eq!(x.checked_rotl(64), None);
		assert_eq!(x.checked_rotl(1), Some(x.rotl(1)));
	}

	#[test]
	fn test_checked_variants() {
		check_checked_variants(0x0123_4567_89ab_cdefu64);
		check_checked_variants(Emulated64::from_parts(0x01234567, 0x89abcdef));
	}

	#[test]
	fn test_from_low() {
		assert_eq!(<u64 as Word64>::from_low(0xdeadbeef), 0xdeadbeef);
		assert_eq!(Emulated64::from_low(7).to_parts(), (0, 7));
	}

	#[test]
	fn test_random_covers_both_halves() {
		let mut rng = rand::thread_rng();
		let values: Vec<Emulated64> = (0..64).map(|_| Emulated64::random(&mut rng)).collect();
		assert!(values.iter().any(|x| x.high() != 0));
		assert!(values.iter().any(|x| x.low() != 0));
	}

	proptest! {
		#[test]
		fn test_to_parts_matches_halves(value in any::<u64>()) {
			assert_eq!(value.to_parts(), ((value >> 32) as u32, value as u32));
		}
	}
}
