// Copyright 2025 Irreducible Inc.

/// Trait representing hash functions which is generic over the input type.
///
/// This interface is largely based on the `digest::Digest` trait, except that instead of
/// requiring byte arrays as output, the digest type is left to the implementation. Hashes
/// built on [`hilo_word::Word64`] return a word.
pub trait Hasher<T> {
	/// The hash function output type.
	type Digest;

	fn new() -> Self;
	fn update(&mut self, data: impl AsRef<[T]>);
	fn chain_update(self, data: impl AsRef<[T]>) -> Self;
	fn finalize(self) -> Self::Digest;
	fn finalize_into(self, out: &mut Self::Digest);

	fn finalize_reset(&mut self) -> Self::Digest;
	fn finalize_into_reset(&mut self, out: &mut Self::Digest);
	fn reset(&mut self);
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HashError {
	#[error("Invalid key length (expected {expected} bytes, received {actual} bytes)")]
	InvalidKeyLength { expected: usize, actual: usize },
}

pub fn hash<T, H: Hasher<T>>(data: impl AsRef<[T]>) -> H::Digest {
	H::new().chain_update(data).finalize()
}
