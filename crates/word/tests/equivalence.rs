// Copyright 2025 Irreducible Inc.
use hilo_word::{Emulated64, Word64, IS_EMULATED, U64};
use proptest::{arbitrary::any, prelude::*, proptest};
// NOTE: Every operation of the two-word representation is checked against the native one

fn lift(value: u64) -> Emulated64 {
	Emulated64::from_parts((value >> 32) as u32, value as u32)
}

fn lower(value: Emulated64) -> u64 {
	((value.high() as u64) << 32) | value.low() as u64
}

/// Shift amounts near the word boundary are where the two-word code branches.
fn shift_amount() -> impl Strategy<Value = u32> {
	prop_oneof![Just(0u32), Just(1), Just(31), Just(32), Just(33), Just(63), 0u32..64]
}

fn check_word_laws<W: Word64>(x: W, y: W) {
	assert_eq!(x.and(x), x);
	assert_eq!(x.or(x), x);
	assert_eq!(x.xor(x), W::from_low(0));
	assert_eq!(x.shift_left(0), x);
	assert_eq!(x.shift_left(32), W::from_parts(x.low(), 0));
	assert_eq!(x.wrapping_add(y), y.wrapping_add(x));
	assert_eq!(x.wrapping_add(W::ZERO), x);
	assert!(!x.less_than(x));
	assert_eq!(x.less_than(y), x < y);
}

#[test]
fn test_wraparound_scenario() {
	let max = Emulated64::from_parts(0xFFFFFFFF, 0xFFFFFFFF);
	assert_eq!(Word64::wrapping_add(max, Emulated64::from_low(1)), Emulated64::from_parts(0, 0));
	assert_eq!(Word64::wrapping_add(u64::MAX, <u64 as Word64>::from_low(1)), 0);
}

#[test]
fn test_ordering_scenario() {
	assert!(Word64::less_than(Emulated64::from_parts(0, 0xFFFFFFFF), Emulated64::from_parts(1, 0)));
	assert!(Word64::less_than(<u64 as Word64>::from_parts(0, 0xFFFFFFFF), 1 << 32));
}

#[test]
fn test_selected_backend() {
	let x = U64::from_parts(0x00000001, 0x00000000);
	assert_eq!(x.shift_right(32), U64::from_low(1));
	assert_eq!(U64::from_low(1).shift_left(32), x);
	assert_eq!(IS_EMULATED, std::any::TypeId::of::<U64>() == std::any::TypeId::of::<Emulated64>());
}

proptest! {
	#[test]
	fn test_from_parts(hi in any::<u32>(), lo in any::<u32>()) {
		assert_eq!(lower(Emulated64::from_parts(hi, lo)), <u64 as Word64>::from_parts(hi, lo));
		assert_eq!(Word64::to_parts(lift(<u64 as Word64>::from_parts(hi, lo))), (hi, lo));
	}

	#[test]
	fn test_from_size(size in any::<usize>()) {
		assert_eq!(lower(<Emulated64 as Word64>::from_size(size)), <u64 as Word64>::from_size(size));
	}

	#[test]
	fn test_less_than(a in any::<u64>(), b in any::<u64>()) {
		assert_eq!(Word64::less_than(lift(a), lift(b)), a < b);
		assert_eq!(lift(a).cmp(&lift(b)), a.cmp(&b));
	}

	#[test]
	fn test_bitwise(a in any::<u64>(), b in any::<u64>()) {
		assert_eq!(lower(Word64::and(lift(a), lift(b))), a & b);
		assert_eq!(lower(Word64::or(lift(a), lift(b))), a | b);
		assert_eq!(lower(Word64::xor(lift(a), lift(b))), a ^ b);
	}

	#[test]
	fn test_shift_left(a in any::<u64>(), n in shift_amount()) {
		assert_eq!(lower(Word64::shift_left(lift(a), n)), a << n);
	}

	#[test]
	fn test_shift_right(a in any::<u64>(), n in shift_amount()) {
		assert_eq!(lower(Word64::shift_right(lift(a), n)), a >> n);
	}

	#[test]
	fn test_rotl(a in any::<u64>(), n in 1u32..64) {
		assert_eq!(lower(Word64::rotl(lift(a), n)), a.rotate_left(n));
		assert_eq!(Word64::rotl(a, n), a.rotate_left(n));
	}

	#[test]
	fn test_wrapping_add(a in any::<u64>(), b in any::<u64>()) {
		assert_eq!(lower(Word64::wrapping_add(lift(a), lift(b))), a.wrapping_add(b));
	}

	#[test]
	fn test_conversions(a in any::<u64>()) {
		assert_eq!(u64::from(Emulated64::from(a)), a);
		assert_eq!(Emulated64::from(a), lift(a));
	}

	#[test]
	fn test_word_laws(a in any::<u64>(), b in any::<u64>()) {
		check_word_laws(a, b);
		check_word_laws(lift(a), lift(b));
	}
}
