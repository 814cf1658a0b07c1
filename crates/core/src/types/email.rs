//! Email address newtype.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors produced by [`Email::parse`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Input is empty or whitespace.
    #[error("email cannot be empty")]
    Empty,
    /// Input exceeds the RFC 5321 length cap.
    #[error("email longer than {} characters", Email::MAX_LENGTH)]
    TooLong,
    /// Input does not have the `local@domain` shape.
    #[error("email must have the form local@domain")]
    Malformed,
}

/// A validated, lowercased email address.
///
/// Validation is deliberately loose: a non-empty local part and domain around
/// an `@`, within the RFC 5321 length cap. Accepted input is lowercased so
/// the unique-email rule holds however the address was typed.
///
/// ```
/// use sabzi_core::Email;
///
/// let email = Email::parse("Ravi.Kumar@Example.COM")?;
/// assert_eq!(email.as_str(), "ravi.kumar@example.com");
/// assert!(Email::parse("no-at-sign").is_err());
/// # Ok::<(), sabzi_core::EmailError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "String", try_from = "String")]
pub struct Email(String);

impl Email {
    /// Longest accepted address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse and normalize an address.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError`] when the input is blank, too long, or not of
    /// the `local@domain` shape.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        if trimmed.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong);
        }

        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(trimmed.to_lowercase()))
            }
            _ => Err(EmailError::Malformed),
        }
    }

    /// The normalized address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the `@`.
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Everything after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Stored as TEXT; rows were validated on the way in.
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Email {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Email {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        <String as sqlx::Decode<sqlx::Postgres>>::decode(value).map(Self)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Email {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_shapes() {
        for input in [
            "ravi@sabzimandi.dev",
            "ravi.kumar+orders@sabzimandi.dev",
            "ravi@mail.sabzimandi.dev",
            "a@b.c",
        ] {
            assert!(Email::parse(input).is_ok(), "{input} should parse");
        }
    }

    #[test]
    fn test_rejects_blank_input() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
        assert_eq!(Email::parse("   "), Err(EmailError::Empty));
    }

    #[test]
    fn test_rejects_overlong_input() {
        let input = format!("{}@sabzimandi.dev", "r".repeat(Email::MAX_LENGTH));
        assert_eq!(Email::parse(&input), Err(EmailError::TooLong));
    }

    #[test]
    fn test_rejects_malformed_shapes() {
        for input in ["no-at-sign", "@sabzimandi.dev", "ravi@"] {
            assert_eq!(Email::parse(input), Err(EmailError::Malformed), "{input}");
        }
    }

    #[test]
    fn test_lowercases_and_trims() {
        let email = Email::parse("  Ravi.Kumar@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "ravi.kumar@example.com");
    }

    #[test]
    fn test_parts() {
        let email = Email::parse("ravi@sabzimandi.dev").unwrap();
        assert_eq!(email.local_part(), "ravi");
        assert_eq!(email.domain(), "sabzimandi.dev");
        assert_eq!(email.to_string(), "ravi@sabzimandi.dev");
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let email: Email = serde_json::from_str("\"Ravi@Example.com\"").unwrap();
        assert_eq!(email.as_str(), "ravi@example.com");

        assert!(serde_json::from_str::<Email>("\"not-an-email\"").is_err());
    }

    #[test]
    fn test_serde_serializes_as_string() {
        let email = Email::parse("ravi@sabzimandi.dev").unwrap();
        assert_eq!(
            serde_json::to_string(&email).unwrap(),
            "\"ravi@sabzimandi.dev\""
        );
    }

    #[test]
    fn test_from_str() {
        let email: Email = "ravi@sabzimandi.dev".parse().unwrap();
        assert_eq!(email.as_str(), "ravi@sabzimandi.dev");
    }
}
