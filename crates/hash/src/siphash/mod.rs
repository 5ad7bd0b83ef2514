// Copyright 2025 Irreducible Inc.

//! [SipHash](https://www.aumasson.jp/siphash/siphash.pdf) over any [`Word64`] implementation.
//!
//! SipHash only needs addition, XOR and rotation of 64-bit words, so it runs unchanged on the
//! native `u64` and on the two-word emulation. The message length is counted in a word as well,
//! so no native 64-bit type is needed anywhere in the hash.

mod build_hasher;
mod state;

pub use build_hasher::SipBuildHasher;
pub use state::to_le_bytes;

use std::cmp;

use hilo_utils::ensure;
use hilo_word::Word64;
use state::{load_le, SipState};

use crate::hasher::{HashError, Hasher};

/// SipHash-2-4, the variant recommended by the SipHash authors.
pub type SipHasher24<W> = SipHasher<W, 2, 4>;

/// SipHash-1-3, the faster variant used for hash tables.
pub type SipHasher13<W> = SipHasher<W, 1, 3>;

const BLOCK_LEN_U8: usize = 8;
const KEY_LEN_U8: usize = 16;

/// Streaming SipHash with `C` compression rounds and `D` finalization rounds.
#[derive(Debug, Clone)]
pub struct SipHasher<W, const C: usize, const D: usize> {
	k0: W,
	k1: W,
	state: SipState<W>,
	current_block: [u8; BLOCK_LEN_U8],
	current_len: W,
}

impl<W: Word64, const C: usize, const D: usize> SipHasher<W, C, D> {
	pub fn new_with_keys(k0: W, k1: W) -> Self {
		Self {
			k0,
			k1,
			state: SipState::new(k0, k1),
			current_block: [0; BLOCK_LEN_U8],
			current_len: W::ZERO,
		}
	}

	/// Creates a hasher from a 128-bit key, read as two little-endian words.
	pub fn from_key(key: &[u8; KEY_LEN_U8]) -> Self {
		Self::new_with_keys(load_le(&key[..8]), load_le(&key[8..]))
	}

	pub fn from_key_slice(key: &[u8]) -> Result<Self, HashError> {
		ensure!(
			key.len() == KEY_LEN_U8,
			HashError::InvalidKeyLength {
				expected: KEY_LEN_U8,
				actual: key.len(),
			}
		);

		Ok(Self::new_with_keys(load_le(&key[..8]), load_le(&key[8..])))
	}

	/// Number of bytes hashed so far, modulo 2^64.
	pub fn current_len(&self) -> W {
		self.current_len
	}

	fn cur_block(&self) -> usize {
		(self.current_len.low() as usize) % BLOCK_LEN_U8
	}

	fn update_bytes(&mut self, mut msg: &[u8]) {
		let mut cur_block = self.cur_block();
		self.current_len = self.current_len.wrapping_add(W::from_size(msg.len()));

		while !msg.is_empty() {
			if cur_block == 0 && msg.len() >= BLOCK_LEN_U8 {
				let (block, rest) = msg.split_at(BLOCK_LEN_U8);
				self.state.compress::<C>(load_le(block));
				msg = rest;
				continue;
			}

			let to_process = cmp::min(BLOCK_LEN_U8 - cur_block, msg.len());
			self.current_block[cur_block..cur_block + to_process]
				.copy_from_slice(&msg[..to_process]);

			// absorb if ready
			if cur_block + to_process == BLOCK_LEN_U8 {
				self.state.compress::<C>(load_le(&self.current_block));
				cur_block = 0;
			} else {
				cur_block += to_process;
			}

			msg = &msg[to_process..];
		}
	}

	fn finalize_word(&self) -> W {
		let cur_block = self.cur_block();
		let mut last_block = [0u8; BLOCK_LEN_U8];
		last_block[..cur_block].copy_from_slice(&self.current_block[..cur_block]);

		// The top byte of the last block carries the message length modulo 256.
		let len_byte = W::from_low(self.current_len.low() & 0xff).shift_left(56);
		let m = load_le::<W>(&last_block).or(len_byte);

		let mut state = self.state;
		state.compress::<C>(m);

		tracing::trace!(len = ?self.current_len, "siphash finalized");
		state.finish::<D>()
	}
}

impl<W: Word64, const C: usize, const D: usize> Default for SipHasher<W, C, D> {
	fn default() -> Self {
		Self::new_with_keys(W::ZERO, W::ZERO)
	}
}

impl<W: Word64, const C: usize, const D: usize> Hasher<u8> for SipHasher<W, C, D> {
	type Digest = W;

	fn new() -> Self {
		Self::default()
	}

	fn update(&mut self, data: impl AsRef<[u8]>) {
		self.update_bytes(data.as_ref());
	}

	fn chain_update(mut self, data: impl AsRef<[u8]>) -> Self {
		self.update(data);
		self
	}

	fn finalize(self) -> Self::Digest {
		self.finalize_word()
	}

	fn finalize_into(self, out: &mut Self::Digest) {
		*out = self.finalize();
	}

	fn finalize_reset(&mut self) -> Self::Digest {
		let out = self.finalize_word();
		self.reset();
		out
	}

	fn finalize_into_reset(&mut self, out: &mut Self::Digest) {
		*out = self.finalize_reset();
	}

	fn reset(&mut self) {
		*self = Self::new_with_keys(self.k0, self.k1);
	}
}

impl<W: Word64, const C: usize, const D: usize> std::hash::Hasher for SipHasher<W, C, D> {
	fn write(&mut self, bytes: &[u8]) {
		self.update_bytes(bytes);
	}

	fn finish(&self) -> u64 {
		let (hi, lo) = self.finalize_word().to_parts();
		((hi as u64) << 32) | lo as u64
	}
}
