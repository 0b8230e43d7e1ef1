use std::error::Error;

#[derive(Debug)]
pub enum StoreError {
    /// The operation would run past the end of the buffer.
    OutOfRangeHigh,
    /// The operation would touch a position before the start of the buffer.
    OutOfRangeLow,
    /// The seek target falls outside `[0, capacity]`.
    SeekOutOfRange,
    /// The seek origin is not a recognized name or numeric code.
    InvalidOrigin,
    /// The request source or sink is not accessible.
    Backing(std::io::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::OutOfRangeHigh => {
                write!(f, "Attempting to access beyond the end of the buffer")
            }
            StoreError::OutOfRangeLow => {
                write!(f, "Attempting to access before the start of the buffer")
            }
            StoreError::SeekOutOfRange => {
                write!(f, "Attempting to move the cursor outside the buffer")
            }
            StoreError::InvalidOrigin => {
                write!(f, "Undefined seek origin, choose SEEK_SET, SEEK_CUR or SEEK_END")
            }
            StoreError::Backing(err) => write!(f, "Backing store unavailable: {}", err),
        }
    }
}

impl std::convert::From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Backing(err)
    }
}

impl Error for StoreError {}
