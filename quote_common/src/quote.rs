//! Quote entity and its display form.
//!
//! A `Quote` is a plain immutable value: a line of text and its attribution.
//! Every pattern renders a quote the same way, `"<text> -<source>"`, which is
//! what the `Display` implementation produces.
use std::fmt;

use serde::{Deserialize, Serialize};

/// A quote and the character or person it is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// The quoted line.
    pub text: String,
    /// Attribution (who said it).
    pub source: String,
}

impl Quote {
    /// Creates a new quote from its text and attribution.
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Quote {
            text: text.into(),
            source: source.into(),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{}", self.text, self.source)
    }
}
