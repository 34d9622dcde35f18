//! Simple selectors used by delegated bindings

use std::fmt;
use std::str::FromStr;

use super::Element;

/// Error type for selector parsing
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Unsupported selector: {0}")]
    Unsupported(String),
}

/// An `#id` or `.class` selector
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
}

impl Selector {
    pub fn id(id: impl Into<String>) -> Self {
        Selector::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Selector::Class(class.into())
    }

    /// Parse `#name` or `.name`
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        let mut chars = input.chars();
        let Some(kind) = chars.next() else {
            return Err(SelectorError::Empty);
        };

        let name = chars.as_str();
        if name.is_empty() || !name.chars().all(is_name_char) {
            return Err(SelectorError::Unsupported(input.to_string()));
        }

        match kind {
            '#' => Ok(Selector::Id(name.to_string())),
            '.' => Ok(Selector::Class(name.to_string())),
            _ => Err(SelectorError::Unsupported(input.to_string())),
        }
    }

    /// Check whether an element matches this selector
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        match self {
            Selector::Id(id) => element.element_id().as_deref() == Some(id.as_str()),
            Selector::Class(class) => element.has_class(class),
        }
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "#{id}"),
            Selector::Class(class) => write!(f, ".{class}"),
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}
