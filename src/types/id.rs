use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Server-assigned identifier of an author or book.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct Id(pub uuid::Uuid);

impl Id {
    /// The all-zero id. The service never issues it, so it is used to probe
    /// not-found behavior.
    pub const fn nil() -> Self {
        Self(uuid::Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for Id {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(uuid::Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nil_renders_as_zeroes() {
        assert_eq!(
            Id::nil().to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
        assert!(Id::default().is_nil());
    }

    #[test]
    fn parses_hyphenated_form() {
        let id: Id = "5b3621eb-97e2-4be1-b0c6-8d0e2f7e0b1a".parse().unwrap();
        assert_eq!(id.to_string(), "5b3621eb-97e2-4be1-b0c6-8d0e2f7e0b1a");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = Id::nil();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"00000000-0000-0000-0000-000000000000\""
        );
    }
}
