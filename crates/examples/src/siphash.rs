// Copyright 2025 Irreducible Inc.

//! Hashes a message with SipHash-2-4 on both the native and the two-word 64-bit representation,
//! and checks that they agree.
//!
//! ```text
//! cargo run --bin siphash -- --key 000102030405060708090a0b0c0d0e0f "hello world"
//! ```

use std::{fs, path::PathBuf};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use hilo_hash::{to_le_bytes, Hasher, SipHasher24};
use hilo_word::{Emulated64, Word64, IS_EMULATED};
use tracing::{info, instrument};

#[derive(Debug, Parser)]
struct Args {
	/// 128-bit key as 32 hex digits.
	#[arg(long, default_value = "000102030405060708090a0b0c0d0e0f")]
	key: String,
	/// Read the message from this file instead of the command line.
	#[arg(long, conflicts_with = "message")]
	file: Option<PathBuf>,
	/// Hash the message this many times over, to exercise long inputs.
	#[arg(long, default_value_t = 1)]
	repeat: usize,
	/// The message to hash.
	message: Option<String>,
}

fn parse_key(hex: &str) -> Result<[u8; 16]> {
	ensure!(hex.len() == 32, "key must be 32 hex digits, got {}", hex.len());

	let mut key = [0u8; 16];
	for (i, byte) in key.iter_mut().enumerate() {
		let digits = hex.get(2 * i..2 * i + 2).context("key is not ASCII hex")?;
		*byte = u8::from_str_radix(digits, 16)
			.with_context(|| format!("invalid hex byte {digits:?} in key"))?;
	}
	Ok(key)
}

fn siphash<W: Word64>(key: &[u8; 16], msg: &[u8], repeat: usize) -> W {
	let mut hasher = SipHasher24::<W>::from_key(key);
	for _ in 0..repeat {
		hasher.update(msg);
	}
	hasher.finalize()
}

#[instrument(skip_all, fields(len = msg.len(), repeat = repeat))]
fn run(key: &[u8; 16], msg: &[u8], repeat: usize) -> Result<[u8; 8]> {
	let native = siphash::<u64>(key, msg, repeat);
	let emulated = siphash::<Emulated64>(key, msg, repeat);
	info!(?native, ?emulated, "hashed with both word types");

	ensure!(
		u64::from(emulated) == native,
		"emulated digest {emulated:?} differs from native digest {native:#018x}"
	);
	Ok(to_le_bytes(emulated))
}

fn main() -> Result<()> {
	hilo_utils::tracing::init_tracing();

	let args = Args::parse();
	let key = parse_key(&args.key)?;
	let msg = match (&args.file, &args.message) {
		(Some(path), _) => {
			fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
		}
		(None, Some(message)) => message.clone().into_bytes(),
		(None, None) => Vec::new(),
	};
	info!(emulated_build = IS_EMULATED, "selected 64-bit word type");

	let digest = run(&key, &msg, args.repeat)?;
	let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
	println!("{hex}");

	Ok(())
}
