use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Named aggregation interval of the signals table, e.g. `100day` or `3minute`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Window(String);

impl Window {
    /// Window used by the four fixed "100 Day Window" panels.
    pub const FIXED: &'static str = "100day";

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyWindow);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn fixed() -> Self {
        Self(String::from(Self::FIXED))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Window {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Window {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Window> for String {
    fn from(value: Window) -> Self {
        value.0
    }
}

/// Sub-grouping of signal rows inside a window, e.g. `day` or `15minute`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CandleSize(String);

impl CandleSize {
    /// Candle size used by the comparison panels.
    pub const DAY: &'static str = "day";

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCandle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn day() -> Self {
        Self(String::from(Self::DAY))
    }

    pub(crate) fn from_static(name: &'static str) -> Self {
        Self(String::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CandleSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CandleSize {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CandleSize> for String {
    fn from(value: CandleSize) -> Self {
        value.0
    }
}
