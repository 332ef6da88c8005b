use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Stock identifier shared by the three datasets.
///
/// Case is preserved: upstream identifiers such as `M&M` or `BAJAJ-AUTO`
/// are matched verbatim. Length is not capped; an id no dataset knows is
/// reported as an unknown stock.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StockId(String);

impl StockId {
    /// Trim and validate a stock identifier.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyStock);
        }

        if let Some(index) = trimmed.chars().position(char::is_control) {
            return Err(ValidationError::StockControlChar { index });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StockId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for StockId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for StockId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<StockId> for String {
    fn from(value: StockId) -> Self {
        value.0
    }
}
