/// A single operation request, as decoded from the request source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Read `len` bytes at the cursor. Negative counts are rejected at
    /// dispatch, before the store is asked anything.
    Read(i64),
    /// Overwrite the bytes at the cursor with `data`.
    Write(Vec<u8>),
    /// Move the cursor. The origin stays a raw token here so an unknown one
    /// is rejected per request without reaching the store.
    Seek { offset: i64, origin: String },
}

/// Decodes a numeric token. A malformed or empty token decodes as 0 rather
/// than erroring; a numeric prefix of a junk token does not count ("12abc"
/// is 0).
pub(crate) fn parse_number(token: &str) -> i64 {
    token.trim().parse().unwrap_or(0)
}
