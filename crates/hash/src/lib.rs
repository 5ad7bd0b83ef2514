// Copyright 2025 Irreducible Inc.

pub mod hasher;
pub mod siphash;

pub use hasher::*;
pub use siphash::*;
