//! Validation policy.
//!
//! Fees, whitelists and bounds are policy rather than algorithm, so every one
//! of them is configurable. Defaults match the values of the live network.

use crate::domain::PolicyError;
use serde::{Deserialize, Serialize};
use shared_types::{Amount, BASE_UNITS_PER_COIN};

/// Default dapp registration fee (25 coins).
pub const DEFAULT_REGISTRATION_FEE: Amount = 25 * BASE_UNITS_PER_COIN;

/// Inclusive integer range for a numeric field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerBounds {
    pub min: i64,
    pub max: i64,
}

impl IntegerBounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

/// Inclusive length range (in characters) for a string field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub const fn up_to(max: usize) -> Self {
        Self { min: 0, max }
    }

    pub const fn unbounded() -> Self {
        Self {
            min: 0,
            max: usize::MAX,
        }
    }
}

/// Validation configuration shared by admission and block application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Fixed fee for registering a dapp.
    pub registration_fee: Amount,
    /// Length bounds for `name`.
    pub name_length: LengthBounds,
    /// Maximum length of `description`.
    pub description_max_length: usize,
    /// Maximum length of the raw `tags` string.
    pub tags_max_length: usize,
    /// Schema range for `category`.
    pub category: IntegerBounds,
    /// Schema range for `type`.
    pub dapp_type: IntegerBounds,
    /// Application types accepted by the business rules.
    pub supported_types: Vec<u8>,
    /// Extensions accepted for the application archive (`link`).
    pub link_extensions: Vec<String>,
    /// Extensions accepted for the application icon.
    pub icon_extensions: Vec<String>,
    /// URL schemes accepted for `link` and `icon`. A parseable URL with
    /// any other scheme is reported as an invalid link.
    pub url_schemes: Vec<String>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            registration_fee: DEFAULT_REGISTRATION_FEE,
            name_length: LengthBounds::new(1, 32),
            description_max_length: 160,
            tags_max_length: 160,
            category: IntegerBounds::new(0, 8),
            dapp_type: IntegerBounds::new(0, 1),
            supported_types: vec![0],
            link_extensions: vec![".zip".into()],
            icon_extensions: vec![".png".into(), ".jpeg".into(), ".jpg".into()],
            url_schemes: vec!["http".into(), "https".into(), "ftp".into()],
        }
    }
}

impl ValidationPolicy {
    /// Creates a policy with a small fee for testing.
    pub fn for_testing() -> Self {
        Self {
            registration_fee: 25,
            ..Default::default()
        }
    }

    /// Checks that the policy is internally consistent.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.name_length.min > self.name_length.max {
            return Err(PolicyError::InvertedBounds { field: "name" });
        }
        for (field, bounds) in [("category", self.category), ("type", self.dapp_type)] {
            if bounds.min > bounds.max {
                return Err(PolicyError::InvertedBounds { field });
            }
            if bounds.min < 0 || bounds.max > i64::from(u8::MAX) {
                return Err(PolicyError::OutOfRange { field });
            }
        }
        if self.link_extensions.is_empty() {
            return Err(PolicyError::EmptyWhitelist {
                name: "link_extensions",
            });
        }
        if self.icon_extensions.is_empty() {
            return Err(PolicyError::EmptyWhitelist {
                name: "icon_extensions",
            });
        }
        if self.url_schemes.is_empty() {
            return Err(PolicyError::EmptyWhitelist {
                name: "url_schemes",
            });
        }
        Ok(())
    }
}
