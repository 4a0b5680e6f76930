//! Symbolic parameter identifiers for circuit fragments

use crate::QuantumError;
use std::fmt;
use std::str::FromStr;

/// Identifier of a variational parameter referenced by a circuit fragment
///
/// A `ParameterId` is a copyable handle around the parameter's position in
/// the ansatz parameter vector. It renders as `x<index>`, the identifier
/// handed to instruction factories when a pool operator is turned into a
/// circuit fragment.
///
/// # Example
/// ```
/// use adaptq_core::ParameterId;
///
/// let id = ParameterId::new(3);
/// assert_eq!(id.to_string(), "x3");
/// assert_eq!("x3".parse::<ParameterId>().unwrap(), id);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParameterId {
    index: usize,
}

impl ParameterId {
    /// Prefix used in the textual form
    pub const PREFIX: char = 'x';

    /// Create a new parameter ID
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Get the position in the parameter vector
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.index)
    }
}

impl FromStr for ParameterId {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| QuantumError::parse(s, "parameter identifiers start with 'x'"))?;
        digits
            .parse::<usize>()
            .map(Self::new)
            .map_err(|e| QuantumError::parse(s, e.to_string()))
    }
}

impl From<usize> for ParameterId {
    fn from(index: usize) -> Self {
        Self { index }
    }
}

impl From<ParameterId> for usize {
    fn from(id: ParameterId) -> Self {
        id.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_id_display() {
        assert_eq!(ParameterId::new(42).to_string(), "x42");
    }

    #[test]
    fn test_parameter_id_ordering() {
        assert!(ParameterId::new(1) < ParameterId::new(2));
    }

    #[test]
    fn test_parameter_id_parse() {
        let id: ParameterId = "x17".parse().unwrap();
        assert_eq!(id.index(), 17);
    }

    #[test]
    fn test_parameter_id_parse_rejects_other_prefix() {
        assert!("theta0".parse::<ParameterId>().is_err());
        assert!("x".parse::<ParameterId>().is_err());
        assert!("x-1".parse::<ParameterId>().is_err());
    }

    #[test]
    fn test_usize_conversions() {
        let id: ParameterId = 9.into();
        let back: usize = id.into();
        assert_eq!(back, 9);
    }
}
