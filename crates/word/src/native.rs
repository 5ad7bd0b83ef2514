// Copyright 2025 Irreducible Inc.

use crate::word::Word64;

impl Word64 for u64 {
	const ZERO: Self = 0;
	const ONE: Self = 1;
	const MAX: Self = u64::MAX;

	#[inline(always)]
	fn from_parts(hi: u32, lo: u32) -> Self {
		((hi as u64) << 32) + lo as u64
	}

	#[inline(always)]
	fn from_size(size: usize) -> Self {
		size as u64
	}

	#[inline(always)]
	fn high(self) -> u32 {
		(self >> 32) as u32
	}

	#[inline(always)]
	fn low(self) -> u32 {
		self as u32
	}

	#[inline(always)]
	fn less_than(self, rhs: Self) -> bool {
		self < rhs
	}

	#[inline(always)]
	fn and(self, rhs: Self) -> Self {
		self & rhs
	}

	#[inline(always)]
	fn or(self, rhs: Self) -> Self {
		self | rhs
	}

	#[inline(always)]
	fn xor(self, rhs: Self) -> Self {
		self ^ rhs
	}

	#[inline(always)]
	fn shift_left(self, n: u32) -> Self {
		self << n
	}

	#[inline(always)]
	fn shift_right(self, n: u32) -> Self {
		self >> n
	}

	#[inline(always)]
	fn rotl(self, n: u32) -> Self {
		debug_assert!(n > 0 && n < 64, "rotation amount must be in 1..64");
		self.rotate_left(n)
	}

	#[inline(always)]
	fn wrapping_add(self, rhs: Self) -> Self {
		u64::wrapping_add(self, rhs)
	}
}
