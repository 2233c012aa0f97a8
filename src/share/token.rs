//! Compact collectible identifier codec
//!
//! Collectibles travel through links and slot values as `slug-number`
//! (`plushpepe-1234`). Slugs are ASCII alphanumeric, start with a letter,
//! and never contain the separator; numbers are positive decimals without
//! leading zeros, so parsing and formatting are bijective.

use std::fmt;
use std::str::FromStr;

/// Failure to parse a compact collectible identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("collectible token is empty")]
    Empty,

    #[error("collectible token has no number part")]
    MissingNumber,

    #[error("collectible slug must be ASCII alphanumeric and start with a letter: {0:?}")]
    BadSlug(String),

    #[error("collectible number must be a positive decimal without leading zeros: {0:?}")]
    BadNumber(String),
}

/// Reference to a single collectible: collection slug plus item number.
/// Slugs are canonicalized to lowercase on construction, matching how the
/// host lowercases deep links.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectibleRef {
    slug: String,
    number: u64,
}

impl CollectibleRef {
    pub fn new(slug: impl Into<String>, number: u64) -> Result<Self, TokenError> {
        let raw = slug.into();
        let slug = raw.to_ascii_lowercase();
        validate_slug(&slug, &raw)?;
        if number == 0 {
            return Err(TokenError::BadNumber("0".to_string()));
        }
        Ok(Self { slug, number })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn number(&self) -> u64 {
        self.number
    }
}

impl fmt::Display for CollectibleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.slug, self.number)
    }
}

impl FromStr for CollectibleRef {
    type Err = TokenError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TokenError::Empty);
        }

        let (slug_part, number_part) = input
            .rsplit_once('-')
            .ok_or(TokenError::MissingNumber)?;

        let slug = slug_part.to_ascii_lowercase();
        validate_slug(&slug, slug_part)?;

        if number_part.is_empty()
            || !number_part.bytes().all(|b| b.is_ascii_digit())
            || (number_part.len() > 1 && number_part.starts_with('0'))
        {
            return Err(TokenError::BadNumber(number_part.to_string()));
        }
        let number: u64 = number_part
            .parse()
            .map_err(|_| TokenError::BadNumber(number_part.to_string()))?;
        if number == 0 {
            return Err(TokenError::BadNumber(number_part.to_string()));
        }

        Ok(Self { slug, number })
    }
}

fn validate_slug(slug: &str, raw: &str) -> Result<(), TokenError> {
    let mut bytes = slug.bytes();
    let valid = match bytes.next() {
        Some(first) => {
            first.is_ascii_lowercase() && bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(TokenError::BadSlug(raw.to_string()))
    }
}
