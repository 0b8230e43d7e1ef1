use std::str::FromStr;

use crate::errors::StoreError;

/// Reference point for a seek computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOrigin {
    /// From the start of the buffer (`SEEK_SET` / `0`).
    Start,
    /// From the current cursor (`SEEK_CUR` / `1`).
    Current,
    /// From the end of the buffer (`SEEK_END` / `2`).
    End,
}

impl FromStr for SeekOrigin {
    type Err = StoreError;

    /// Accepts the case-sensitive symbolic names or the numeric codes.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "SEEK_SET" | "0" => Ok(SeekOrigin::Start),
            "SEEK_CUR" | "1" => Ok(SeekOrigin::Current),
            "SEEK_END" | "2" => Ok(SeekOrigin::End),
            _ => Err(StoreError::InvalidOrigin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbolic_tokens() {
        assert_eq!("SEEK_SET".parse::<SeekOrigin>().unwrap(), SeekOrigin::Start);
        assert_eq!("SEEK_CUR".parse::<SeekOrigin>().unwrap(), SeekOrigin::Current);
        assert_eq!("SEEK_END".parse::<SeekOrigin>().unwrap(), SeekOrigin::End);
    }

    #[test]
    fn test_numeric_codes() {
        assert_eq!("0".parse::<SeekOrigin>().unwrap(), SeekOrigin::Start);
        assert_eq!("1".parse::<SeekOrigin>().unwrap(), SeekOrigin::Current);
        assert_eq!("2".parse::<SeekOrigin>().unwrap(), SeekOrigin::End);
    }

    #[test]
    fn test_unknown_tokens_are_rejected() {
        for token in ["BOGUS", "seek_set", "SEEK_SET ", "3", "-1", ""] {
            let err = token.parse::<SeekOrigin>().unwrap_err();
            assert!(matches!(err, StoreError::InvalidOrigin), "token {token:?}");
        }
    }
}
