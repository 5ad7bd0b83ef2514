// Copyright 2025 Irreducible Inc.

use hilo_word::Word64;

/// The four-word internal state of SipHash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct SipState<W> {
	v0: W,
	v1: W,
	v2: W,
	v3: W,
}

impl<W: Word64> SipState<W> {
	pub fn new(k0: W, k1: W) -> Self {
		Self {
			v0: k0.xor(W::from_parts(0x736f6d65, 0x70736575)),
			v1: k1.xor(W::from_parts(0x646f7261, 0x6e646f6d)),
			v2: k0.xor(W::from_parts(0x6c796765, 0x6e657261)),
			v3: k1.xor(W::from_parts(0x74656462, 0x79746573)),
		}
	}

	#[inline]
	fn round(&mut self) {
		self.v0 = self.v0.wrapping_add(self.v1);
		self.v1 = self.v1.rotl(13).xor(self.v0);
		self.v0 = self.v0.rotl(32);
		self.v2 = self.v2.wrapping_add(self.v3);
		self.v3 = self.v3.rotl(16).xor(self.v2);
		self.v0 = self.v0.wrapping_add(self.v3);
		self.v3 = self.v3.rotl(21).xor(self.v0);
		self.v2 = self.v2.wrapping_add(self.v1);
		self.v1 = self.v1.rotl(17).xor(self.v2);
		self.v2 = self.v2.rotl(32);
	}

	/// Absorb one message word with `C` rounds.
	#[inline]
	pub fn compress<const C: usize>(&mut self, m: W) {
		self.v3 = self.v3.xor(m);
		for _ in 0..C {
			self.round();
		}
		self.v0 = self.v0.xor(m);
	}

	/// Run the `D` finalization rounds and fold the state into the output word.
	pub fn finish<const D: usize>(mut self) -> W {
		self.v2 = self.v2.xor(W::from_low(0xff));
		for _ in 0..D {
			self.round();
		}

		self.v0.xor(self.v1).xor(self.v2.xor(self.v3))
	}
}

/// Reads eight bytes as a little-endian word.
#[inline]
pub(super) fn load_le<W: Word64>(bytes: &[u8]) -> W {
	debug_assert_eq!(bytes.len(), 8);

	let lo = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
	let hi = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
	W::from_parts(hi, lo)
}

/// Writes a word as eight little-endian bytes.
#[inline]
pub fn to_le_bytes<W: Word64>(word: W) -> [u8; 8] {
	let (hi, lo) = word.to_parts();
	let mut out = [0u8; 8];
	out[..4].copy_from_slice(&lo.to_le_bytes());
	out[4..].copy_from_slice(&hi.to_le_bytes());
	out
}
