// ABOUTME: Opaque VCS revision identifiers compared only by equality.
// ABOUTME: Includes the sentinel pair reported after a fresh clone.

use std::fmt;

/// A commit identifier as reported by the VCS.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Two distinct placeholders returned after a fresh clone, so the first
    /// run always counts as changed.
    pub fn initial_pair() -> (Self, Self) {
        (Self::new("__init_a__"), Self::new("__init_b__"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_pair_is_distinct() {
        let (a, b) = Revision::initial_pair();
        assert_ne!(a, b);
    }

    #[test]
    fn equality_is_textual() {
        assert_eq!(Revision::new("abc123"), Revision::new("abc123"));
        assert_ne!(Revision::new("abc123"), Revision::new("abc124"));
    }
}
