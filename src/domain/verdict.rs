//! Outcome of validating an edge list.

use std::fmt;

use crate::domain::error::Violation;

/// Tagged validation result.
///
/// `is_valid()` is the plain yes/no answer; the `Invalid` payload says which
/// invariant failed first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<N> {
    Valid,
    Invalid(Violation<N>),
}

impl<N> Verdict<N> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn violation(&self) -> Option<&Violation<N>> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(v) => Some(v),
        }
    }
}

impl<N> From<Violation<N>> for Verdict<N> {
    fn from(violation: Violation<N>) -> Self {
        Verdict::Invalid(violation)
    }
}

impl<N: fmt::Debug> fmt::Display for Verdict<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "proper binary tree"),
            Verdict::Invalid(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_invalid_verdict_when_converting_then_exposes_violation() {
        let verdict: Verdict<u32> = Violation::MultipleRoots { count: 2 }.into();
        assert!(!verdict.is_valid());
        assert_eq!(
            verdict.violation(),
            Some(&Violation::MultipleRoots { count: 2 })
        );
        assert_eq!(verdict.to_string(), "found 2 roots, expected exactly one");
    }

    #[test]
    fn given_valid_verdict_then_has_no_violation() {
        let verdict: Verdict<u32> = Verdict::Valid;
        assert!(verdict.is_valid());
        assert_eq!(verdict.violation(), None);
        assert_eq!(verdict.to_string(), "proper binary tree");
    }
}
