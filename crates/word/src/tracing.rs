// Copyright 2025 Irreducible Inc.
use cfg_if::cfg_if;

cfg_if! {
	if #[cfg(feature = "trace_ops")] {
		use std::cell::Cell;

		thread_local! {
			static IS_IN_WORD_OPERATION: Cell<bool> = const { Cell::new(false) };
		}

		/// This guard suppresses events for operations that are composed from other ones,
		/// e.g. the shifts and the OR inside a rotation.
		pub(crate) struct TraceGuard(bool);

		impl TraceGuard {
			pub fn new(op: &'static str) -> Self {
				let val = IS_IN_WORD_OPERATION.with(|v| {
					if !v.get() {
						v.set(true);
						tracing::event!(name: "word_op", tracing::Level::TRACE, {op});

						true
					} else {
						false
					}
				});
				Self(val)
			}
		}

		impl Drop for TraceGuard {
			fn drop(&mut self) {
				if self.0 {
					IS_IN_WORD_OPERATION.with(|v| {
						v.set(false);
					});
				};
			}
		}

		macro_rules! trace_operation {
			($name: ident) => {
				let _guard = $crate::tracing::TraceGuard::new(stringify!($name));
			};
		}
	} else {
		macro_rules! trace_operation {
			($name: ident) => {};
		}
	}
}

pub(crate) use trace_operation;
