//! Error type for operations whose result is mathematically undefined.

/// Reason an operation could not produce a well-defined result.
///
/// Every variant carries the name of the public operation that failed so that
/// diagnostics and FFI error messages can point at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum V3Error {
    /// A direction was required but the vector has zero length.
    ZeroLength {
        /// Operation that rejected the input (e.g. `"normalize"`)
        operation: &'static str,
    },
    /// A direction was required but the vector length is infinite or NaN.
    NonFiniteLength {
        /// Operation that rejected the input (e.g. `"angle_quick"`)
        operation: &'static str,
    },
}

impl V3Error {
    /// Name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match *self {
            V3Error::ZeroLength { operation } | V3Error::NonFiniteLength { operation } => {
                operation
            }
        }
    }

    /// Classify a vector length, returning the matching error if it cannot be
    /// used as a divisor. Zero is checked before finiteness.
    pub(crate) fn check_length(len: f32, operation: &'static str) -> Result<f32, V3Error> {
        if len == 0.0 {
            Err(V3Error::ZeroLength { operation })
        } else if !len.is_finite() {
            Err(V3Error::NonFiniteLength { operation })
        } else {
            Ok(len)
        }
    }

    /// Same error, reattributed to the operation that propagated it.
    pub(crate) fn propagated_by(self, operation: &'static str) -> Self {
        match self {
            V3Error::ZeroLength { .. } => V3Error::ZeroLength { operation },
            V3Error::NonFiniteLength { .. } => V3Error::NonFiniteLength { operation },
        }
    }
}

impl std::fmt::Display for V3Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            V3Error::ZeroLength { operation } => {
                write!(f, "{operation}: undefined for zero-length vector")
            }
            V3Error::NonFiniteLength { operation } => {
                write!(f, "{operation}: undefined for non-finite vector")
            }
        }
    }
}

impl std::error::Error for V3Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_length_zero_before_finite() {
        assert_eq!(
            V3Error::check_length(0.0, "normalize"),
            Err(V3Error::ZeroLength {
                operation: "normalize"
            })
        );
        assert_eq!(
            V3Error::check_length(f32::NAN, "normalize"),
            Err(V3Error::NonFiniteLength {
                operation: "normalize"
            })
        );
        assert_eq!(
            V3Error::check_length(f32::INFINITY, "angle"),
            Err(V3Error::NonFiniteLength { operation: "angle" })
        );
        assert_eq!(V3Error::check_length(2.5, "angle"), Ok(2.5));
    }

    #[test]
    fn test_propagated_by_keeps_kind() {
        let err = V3Error::ZeroLength {
            operation: "normalize",
        }
        .propagated_by("reflect");
        assert_eq!(err.operation(), "reflect");
        assert!(matches!(err, V3Error::ZeroLength { .. }));
    }

    #[test]
    fn test_display() {
        let err = V3Error::NonFiniteLength {
            operation: "angle_quick",
        };
        assert_eq!(
            err.to_string(),
            "angle_quick: undefined for non-finite vector"
        );
    }
}
