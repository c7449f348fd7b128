use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A dynamically typed key or value: an integer or a piece of text.
///
/// Both variants render through `Display`, so `Int(30)` and `Text("30")`
/// hash to the same bucket while remaining distinct keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for Value {
    type Err = Infallible;

    /// Integers become `Int`, anything else `Text`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(input
            .parse::<i64>()
            .map_or_else(|_| Self::Text(input.to_string()), Self::Int))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
