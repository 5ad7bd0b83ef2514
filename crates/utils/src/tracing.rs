// Copyright 2025 Irreducible Inc.

use crate::env::boolean_env_flag_set;

/// Environment flag that turns off ANSI colours in log output.
pub const LOG_PLAIN_ENV: &str = "HILO_LOG_PLAIN";

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Calling this more than once is harmless;
/// later calls leave the first subscriber in place.
pub fn init_tracing() {
	use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_ansi(!boolean_env_flag_set(LOG_PLAIN_ENV)))
		.try_init();
}
