// Copyright 2025 Irreducible Inc.

//! Unsigned 64-bit words for targets without native 64-bit integer arithmetic.
//!
//! The [`Word64`] trait is the single interface callers program against. It has two
//! implementations:
//!
//! * `u64`, a direct pass-through to the native integer;
//! * [`Emulated64`], a pair of 32-bit words that reproduces every operation with 32-bit
//!   arithmetic only.
//!
//! The [`U64`] alias picks one of them at build time. 32-bit (and narrower) targets get the
//! emulated representation, as does any build with the `force_emulated` feature. Both
//! implementations are bit-for-bit equivalent on every operation in their documented domain.

mod emulated;
pub mod error;
mod native;
mod tracing;
pub mod word;

pub use emulated::Emulated64;
pub use error::*;
pub use word::*;

use cfg_if::cfg_if;

cfg_if! {
	if #[cfg(any(feature = "force_emulated", target_pointer_width = "16", target_pointer_width = "32"))] {
		/// 64-bit word type selected for this build.
		pub type U64 = Emulated64;

		/// Whether [`U64`] is the two-word emulation.
		pub const IS_EMULATED: bool = true;
	} else {
		/// 64-bit word type selected for this build.
		pub type U64 = u64;

		/// Whether [`U64`] is the two-word emulation.
		pub const IS_EMULATED: bool = false;
	}
}
