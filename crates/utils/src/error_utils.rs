// Copyright 2025 Irreducible Inc.

#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}

#[cfg(all(test, not(feature = "bail_panic")))]
mod tests {
	#[derive(Debug, PartialEq, thiserror::Error)]
	#[error("value {0} is odd")]
	struct OddValue(u32);

	fn halve(value: u32) -> Result<u32, OddValue> {
		crate::ensure!(value % 2 == 0, OddValue(value));
		Ok(value / 2)
	}

	#[test]
	fn test_ensure() {
		assert_eq!(halve(8), Ok(4));
		assert_eq!(halve(7), Err(OddValue(7)));
	}
}
