// Copyright 2025 Irreducible Inc.

use std::{
	cmp::Ordering,
	fmt::{Debug, Formatter},
	ops::{Add, AddAssign, Shl, ShlAssign, Shr, ShrAssign},
};

use bytemuck::{Pod, Zeroable};
use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};
use hilo_utils::ensure;
use rand::{
	distributions::{Distribution, Standard},
	Rng,
};
use static_assertions::assert_eq_size;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::{error::Error, tracing::trace_operation, word::Word64};

/// Unsigned 64-bit integer stored as two 32-bit words, `hi * 2^32 + lo`.
///
/// All arithmetic is done on the 32-bit halves, so nothing here needs a native 64-bit type.
/// Fields are laid out in target byte order, which makes the in-memory representation identical
/// to a native `u64` and lets the two be cast into each other with [`bytemuck`].
#[derive(
	Default,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Zeroable,
	Pod,
	BitAnd,
	BitAndAssign,
	BitOr,
	BitOrAssign,
	BitXor,
	BitXorAssign,
)]
#[repr(C)]
pub struct Emulated64 {
	#[cfg(target_endian = "big")]
	hi: u32,
	lo: u32,
	#[cfg(not(target_endian = "big"))]
	hi: u32,
}

assert_eq_size!(Emulated64, u64);

impl Emulated64 {
	pub const ZERO: Self = Self::from_parts(0, 0);
	pub const ONE: Self = Self::from_parts(0, 1);
	pub const MAX: Self = Self::from_parts(u32::MAX, u32::MAX);

	#[inline(always)]
	pub const fn from_parts(hi: u32, lo: u32) -> Self {
		Self { hi, lo }
	}

	#[inline(always)]
	pub const fn from_low(lo: u32) -> Self {
		Self::from_parts(0, lo)
	}

	/// The high word is extracted with two shifts so that the expression stays valid when
	/// `usize` is only 32 bits wide.
	#[inline(always)]
	pub const fn from_size(size: usize) -> Self {
		Self::from_parts((size >> 31 >> 1) as u32, size as u32)
	}

	#[inline(always)]
	pub const fn high(self) -> u32 {
		self.hi
	}

	#[inline(always)]
	pub const fn low(self) -> u32 {
		self.lo
	}

	#[inline(always)]
	pub const fn to_parts(self) -> (u32, u32) {
		(self.hi, self.lo)
	}

	#[inline]
	pub const fn less_than(self, rhs: Self) -> bool {
		self.hi < rhs.hi || (self.hi == rhs.hi && self.lo < rhs.lo)
	}

	#[inline]
	pub const fn and(self, rhs: Self) -> Self {
		Self::from_parts(self.hi & rhs.hi, self.lo & rhs.lo)
	}

	#[inline]
	pub const fn or(self, rhs: Self) -> Self {
		Self::from_parts(self.hi | rhs.hi, self.lo | rhs.lo)
	}

	#[inline]
	pub const fn xor(self, rhs: Self) -> Self {
		Self::from_parts(self.hi ^ rhs.hi, self.lo ^ rhs.lo)
	}

	/// `self << n`, where `n < 64`.
	#[inline]
	pub const fn shift_left(self, n: u32) -> Self {
		debug_assert!(n < 64, "shift amount must be less than 64");

		// `lo >> (32 - n)` is not defined for `n == 0`.
		if n == 0 {
			self
		} else if n < 32 {
			Self::from_parts((self.hi << n) | (self.lo >> (32 - n)), self.lo << n)
		} else {
			Self::from_parts(self.lo << (n - 32), 0)
		}
	}

	/// `self >> n`, where `n < 64`.
	#[inline]
	pub const fn shift_right(self, n: u32) -> Self {
		debug_assert!(n < 64, "shift amount must be less than 64");

		// `hi << (32 - n)` is not defined for `n == 0`.
		if n == 0 {
			self
		} else if n < 32 {
			Self::from_parts(self.hi >> n, (self.hi << (32 - n)) | (self.lo >> n))
		} else {
			Self::from_parts(0, self.hi >> (n - 32))
		}
	}

	/// Rotates left by `n` bits, where `0 < n < 64`.
	#[inline]
	pub const fn rotl(self, n: u32) -> Self {
		debug_assert!(n > 0 && n < 64, "rotation amount must be in 1..64");

		self.shift_left(n).or(self.shift_right(64 - n))
	}

	/// Addition modulo 2^64.
	#[inline]
	pub const fn wrapping_add(self, rhs: Self) -> Self {
		let lo = self.lo.wrapping_add(rhs.lo);
		let carry = (lo < self.lo) as u32;
		let hi = self.hi.wrapping_add(rhs.hi).wrapping_add(carry);

		Self::from_parts(hi, lo)
	}
}

impl Word64 for Emulated64 {
	const ZERO: Self = Emulated64::ZERO;
	const ONE: Self = Emulated64::ONE;
	const MAX: Self = Emulated64::MAX;

	#[inline(always)]
	fn from_parts(hi: u32, lo: u32) -> Self {
		Self::from_parts(hi, lo)
	}

	#[inline(always)]
	fn from_size(size: usize) -> Self {
		Self::from_size(size)
	}

	#[inline(always)]
	fn high(self) -> u32 {
		self.hi
	}

	#[inline(always)]
	fn low(self) -> u32 {
		self.lo
	}

	#[inline]
	fn less_than(self, rhs: Self) -> bool {
		trace_operation!(less_than);
		Self::less_than(self, rhs)
	}

	#[inline]
	fn and(self, rhs: Self) -> Self {
		trace_operation!(and);
		Self::and(self, rhs)
	}

	#[inline]
	fn or(self, rhs: Self) -> Self {
		trace_operation!(or);
		Self::or(self, rhs)
	}

	#[inline]
	fn xor(self, rhs: Self) -> Self {
		trace_operation!(xor);
		Self::xor(self, rhs)
	}

	#[inline]
	fn shift_left(self, n: u32) -> Self {
		trace_operation!(shift_left);
		Self::shift_left(self, n)
	}

	#[inline]
	fn shift_right(self, n: u32) -> Self {
		trace_operation!(shift_right);
		Self::shift_right(self, n)
	}

	#[inline]
	fn wrapping_add(self, rhs: Self) -> Self {
		trace_operation!(wrapping_add);
		Self::wrapping_add(self, rhs)
	}
}

impl Debug for Emulated64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Emulated64")
			.field("hi", &format_args!("{:#010x}", self.hi))
			.field("lo", &format_args!("{:#010x}", self.lo))
			.finish()
	}
}

impl PartialOrd for Emulated64 {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Emulated64 {
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		if self.less_than(*other) {
			Ordering::Less
		} else if other.less_than(*self) {
			Ordering::Greater
		} else {
			Ordering::Equal
		}
	}
}

impl Shl<u32> for Emulated64 {
	type Output = Self;

	#[inline(always)]
	fn shl(self, rhs: u32) -> Self::Output {
		self.shift_left(rhs)
	}
}

impl ShlAssign<u32> for Emulated64 {
	#[inline(always)]
	fn shl_assign(&mut self, rhs: u32) {
		*self = self.shift_left(rhs);
	}
}

impl Shr<u32> for Emulated64 {
	type Output = Self;

	#[inline(always)]
	fn shr(self, rhs: u32) -> Self::Output {
		self.shift_right(rhs)
	}
}

impl ShrAssign<u32> for Emulated64 {
	#[inline(always)]
	fn shr_assign(&mut self, rhs: u32) {
		*self = self.shift_right(rhs);
	}
}

impl Add for Emulated64 {
	type Output = Self;

	#[inline(always)]
	fn add(self, rhs: Self) -> Self::Output {
		self.wrapping_add(rhs)
	}
}

impl AddAssign for Emulated64 {
	#[inline(always)]
	fn add_assign(&mut self, rhs: Self) {
		*self = self.wrapping_add(rhs);
	}
}

impl ConstantTimeEq for Emulated64 {
	fn ct_eq(&self, other: &Self) -> Choice {
		self.hi.ct_eq(&other.hi) & self.lo.ct_eq(&other.lo)
	}
}

impl ConditionallySelectable for Emulated64 {
	fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
		Self::from_parts(
			u32::conditional_select(&a.hi, &b.hi, choice),
			u32::conditional_select(&a.lo, &b.lo, choice),
		)
	}
}

impl Distribution<Emulated64> for Standard {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Emulated64 {
		Emulated64::from_parts(rng.gen(), rng.gen())
	}
}

impl From<u32> for Emulated64 {
	#[inline(always)]
	fn from(value: u32) -> Self {
		Self::from_low(value)
	}
}

impl From<(u32, u32)> for Emulated64 {
	#[inline(always)]
	fn from((hi, lo): (u32, u32)) -> Self {
		Self::from_parts(hi, lo)
	}
}

impl From<u64> for Emulated64 {
	#[inline(always)]
	fn from(value: u64) -> Self {
		Self::from_parts((value >> 32) as u32, value as u32)
	}
}

impl From<Emulated64> for u64 {
	#[inline(always)]
	fn from(value: Emulated64) -> Self {
		((value.hi as u64) << 32) | value.lo as u64
	}
}

impl TryFrom<Emulated64> for u32 {
	type Error = Error;

	fn try_from(value: Emulated64) -> Result<Self, Self::Error> {
		ensure!(value.hi == 0, out_of_range(value, "u32"));

		Ok(value.lo)
	}
}

impl TryFrom<Emulated64> for usize {
	type Error = Error;

	fn try_from(value: Emulated64) -> Result<Self, Self::Error> {
		ensure!(value.hi == 0 || usize::BITS >= 64, out_of_range(value, "usize"));

		let lo = usize::try_from(value.lo).map_err(|_| out_of_range(value, "usize"))?;
		Ok(((value.hi as usize) << 31 << 1) | lo)
	}
}

fn out_of_range(value: Emulated64, target: &'static str) -> Error {
	Error::ValueOutOfRange {
		hi: value.hi,
		lo: value.lo,
		target,
	}
}
