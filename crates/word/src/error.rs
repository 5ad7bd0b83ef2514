// Copyright 2025 Irreducible Inc.

/// Error thrown when a word conversion fails.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	/// Thrown when narrowing a word to an integer type that cannot hold its value.
	#[error("value {hi:#010x}_{lo:08x} does not fit in {target}")]
	ValueOutOfRange {
		hi: u32,
		lo: u32,
		target: &'static str,
	},
}
