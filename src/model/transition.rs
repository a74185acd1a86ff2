// src/model/transition.rs

use crate::error::{RepositoryError, Result};
use std::fmt;

const SEPARATOR: &str = " -> ";

/// One end of a transition: a principal quantum number or a term label such as `2p`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Level {
    Index(u32),
    Label(String),
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Index(n) => write!(f, "{}", n),
            Level::Label(s) => f.write_str(s),
        }
    }
}

impl From<u32> for Level {
    fn from(n: u32) -> Self {
        Level::Index(n)
    }
}

impl From<&str> for Level {
    fn from(s: &str) -> Self {
        Level::Label(s.to_string())
    }
}

impl From<String> for Level {
    fn from(s: String) -> Self {
        Level::Label(s)
    }
}

impl Level {
    /// Numeric text becomes an index, anything else a lower-cased label.
    fn parse(s: &str) -> Self {
        let s = s.trim();
        match s.parse::<u32>() {
            Ok(n) => Level::Index(n),
            Err(_) => Level::Label(s.to_lowercase()),
        }
    }
}

/// Builds the repository key for an `(upper, lower)` transition, e.g. `"1 -> 0"`.
///
/// Integer and string levels are both accepted; each side is lower-cased.
pub fn encode_transition<U, L>(transition: (U, L)) -> String
where
    U: fmt::Display,
    L: fmt::Display,
{
    let (upper, lower) = transition;
    format!(
        "{}{}{}",
        upper.to_string().to_lowercase(),
        SEPARATOR,
        lower.to_string().to_lowercase()
    )
}

/// Splits a key produced by [`encode_transition`] back into its levels.
pub fn decode_transition(key: &str) -> Result<(Level, Level)> {
    let (upper, lower) = key
        .split_once(SEPARATOR)
        .ok_or_else(|| RepositoryError::InvalidTransition(key.to_string()))?;

    if upper.trim().is_empty() || lower.trim().is_empty() {
        return Err(RepositoryError::InvalidTransition(key.to_string()));
    }

    Ok((Level::parse(upper), Level::parse(lower)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_integers() {
        assert_eq!(encode_transition((1, 0)), "1 -> 0");
        assert_eq!(encode_transition((3u32, 2u32)), "3 -> 2");
    }

    #[test]
    fn test_encode_labels_are_lowercased() {
        assert_eq!(encode_transition(("2P", "1S")), "2p -> 1s");
        assert_eq!(encode_transition((Level::from("3D"), Level::from(2))), "3d -> 2");
    }

    #[test]
    fn test_decode() {
        assert_eq!(
            decode_transition("1 -> 0").unwrap(),
            (Level::Index(1), Level::Index(0))
        );
        assert_eq!(
            decode_transition("2p -> 1s").unwrap(),
            (Level::from("2p"), Level::from("1s"))
        );
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(
            decode_transition("1->0"),
            Err(RepositoryError::InvalidTransition(_))
        ));
        assert!(decode_transition(" -> 0").is_err());
        assert!(decode_transition("").is_err());
    }
}
