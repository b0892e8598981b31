// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt;

/// Position of a company in the displayed list.
///
/// Stored zero-based; users type and see one-based positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    pub const fn from_zero_based(value: usize) -> Self {
        Self(value)
    }

    /// Returns `None` for 0, which has no one-based meaning.
    pub const fn from_one_based(value: usize) -> Option<Self> {
        match value {
            0 => None,
            value => Some(Self(value - 1)),
        }
    }

    pub const fn zero_based(self) -> usize {
        self.0
    }

    pub const fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::Index;

    #[test]
    fn one_based_zero_is_rejected() {
        assert_eq!(Index::from_one_based(0), None);
    }

    #[test]
    fn one_and_zero_based_views_agree() {
        let index = Index::from_one_based(2).expect("two is a valid position");
        assert_eq!(index.zero_based(), 1);
        assert_eq!(index.one_based(), 2);
        assert_eq!(index, Index::from_zero_based(1));
        assert_eq!(index.to_string(), "2");
    }
}
