//! Package-qualified type names.
//!
//! Every declaration, supertype reference and generated type is addressed by
//! a [`QualifiedName`]. Names compare by package and simple name, and order
//! lexicographically so they can key deterministic collections.

use std::fmt;

/// A package-qualified name such as `com.example.Repository`.
///
/// The empty package is allowed and displays as the bare simple name.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct QualifiedName {
    package: String,
    simple: String,
}

impl QualifiedName {
    /// Create from an explicit package and simple name.
    pub fn new(package: impl Into<String>, simple: impl Into<String>) -> Self {
        QualifiedName {
            package: package.into(),
            simple: simple.into(),
        }
    }

    /// Parse a dotted name, splitting the package off at the last `.`.
    pub fn parse(dotted: &str) -> Self {
        match dotted.rsplit_once('.') {
            Some((package, simple)) => Self::new(package, simple),
            None => Self::new("", dotted),
        }
    }

    /// The package part (may be empty).
    #[inline]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The simple (unqualified) name.
    #[inline]
    pub fn simple(&self) -> &str {
        &self.simple
    }

    /// A name in the same package with a different simple name.
    #[must_use]
    pub fn sibling(&self, simple: impl Into<String>) -> Self {
        Self::new(self.package.clone(), simple)
    }

    /// Whether this name lives in the given package.
    pub fn is_in_package(&self, package: &str) -> bool {
        self.package == package
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.simple)
        } else {
            write!(f, "{}.{}", self.package, self.simple)
        }
    }
}

impl From<String> for QualifiedName {
    fn from(dotted: String) -> Self {
        Self::parse(&dotted)
    }
}

impl From<&str> for QualifiedName {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}

impl From<QualifiedName> for String {
    fn from(name: QualifiedName) -> Self {
        name.to_string()
    }
}
