// Copyright 2025 Irreducible Inc.

use std::hash::BuildHasher;

use hilo_word::{Random, Word64};
use rand::RngCore;

use super::SipHasher13;

/// Builds keyed SipHash-1-3 hashers, for use as the hasher of a `HashMap` or `HashSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SipBuildHasher<W> {
	k0: W,
	k1: W,
}

impl<W: Word64> SipBuildHasher<W> {
	pub fn new_with_keys(k0: W, k1: W) -> Self {
		Self { k0, k1 }
	}

	/// Draws a fresh key from `rng`.
	pub fn random(mut rng: impl RngCore) -> Self {
		Self {
			k0: W::random(&mut rng),
			k1: W::random(&mut rng),
		}
	}
}

impl<W: Word64> BuildHasher for SipBuildHasher<W> {
	type Hasher = SipHasher13<W>;

	fn build_hasher(&self) -> Self::Hasher {
		SipHasher13::new_with_keys(self.k0, self.k1)
	}
}
