use crate::macros::static_assert;

/// The size (in bytes) of the store buffer. Fixed for the life of the store.
pub const STORE_CAPACITY: usize = 1024;

/// Package name, used by the logger to shorten module targets.
pub const CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");

static_assert!(STORE_CAPACITY > 0);
// Seek arithmetic happens in i64
static_assert!(STORE_CAPACITY <= i64::MAX as usize);
