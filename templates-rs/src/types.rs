//! Template types and data structures

use serde::Serialize;

/// A named substitution point in a template body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    /// Token name as it appears between `{` and `}` in the body
    pub name: &'static str,
    /// What the external drafting step substitutes for this token
    pub description: &'static str,
}

/// A static email template and its placeholder contract
///
/// Every `{name}` token appearing in `body` is documented in `placeholders`;
/// the body contains no other dynamic content. Instances are built in `const`
/// position and never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EmailTemplate {
    /// Unique identifier
    pub id: &'static str,
    /// Body text with `{name}` placeholder tokens
    pub body: &'static str,
    /// Every placeholder token appearing in `body`
    pub placeholders: &'static [Placeholder],
}

impl EmailTemplate {
    /// Iterate over the placeholder token names
    pub fn placeholder_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.placeholders.iter().map(|p| p.name)
    }

    /// True if the contract documents a placeholder with this name
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.placeholders.iter().any(|p| p.name == name)
    }
}
