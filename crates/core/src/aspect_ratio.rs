//! Gallery image framing.
//!
//! The set is closed: anything other than the three lowercase names is
//! rejected rather than mapped to a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

/// Intended framing of a gallery item's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    Square,
    Portrait,
    Landscape,
}

/// All accepted wire values, in declaration order.
pub const VALID_ASPECT_RATIOS: &[&str] = &["square", "portrait", "landscape"];

impl AspectRatio {
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Square => "square",
            AspectRatio::Portrait => "portrait",
            AspectRatio::Landscape => "landscape",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of [`VALID_ASPECT_RATIOS`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown aspect ratio '{0}'")]
pub struct UnknownAspectRatio(pub String);

impl FromStr for AspectRatio {
    type Err = UnknownAspectRatio;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(AspectRatio::Square),
            "portrait" => Ok(AspectRatio::Portrait),
            "landscape" => Ok(AspectRatio::Landscape),
            other => Err(UnknownAspectRatio(other.to_string())),
        }
    }
}

// Lets sqlx decode the TEXT column straight into the enum.
impl TryFrom<String> for AspectRatio {
    type Error = UnknownAspectRatio;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// `validator` hook for DTO fields that carry an aspect ratio as text.
pub fn validate_aspect_ratio(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<AspectRatio>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("aspect_ratio"))
}
