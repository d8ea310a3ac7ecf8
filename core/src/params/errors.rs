use std::fmt;

// ---------------------------------------------------------------------------
// Parameter lookup errors
// ---------------------------------------------------------------------------

/// Why a strict lookup (`ParameterStore::require`) produced no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// The key was never set.
    Missing { key: String },
    /// The key is set to the null marker.
    Null { key: String },
    /// The key holds a value of a different type.
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ParamError {
    /// The key the failed lookup was made for.
    pub fn key(&self) -> &str {
        match self {
            ParamError::Missing { key }
            | ParamError::Null { key }
            | ParamError::TypeMismatch { key, .. } => key,
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Missing { key } => {
                write!(f, "parameter not set: '{}'", key)
            }
            ParamError::Null { key } => {
                write!(f, "parameter '{}' is null", key)
            }
            ParamError::TypeMismatch { key, expected, found } => {
                write!(
                    f,
                    "parameter '{}' has type {}, expected {}",
                    key, found, expected
                )
            }
        }
    }
}

impl std::error::Error for ParamError {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let missing = ParamError::Missing { key: "title".into() };
        assert_eq!(missing.to_string(), "parameter not set: 'title'");

        let null = ParamError::Null { key: "icon".into() };
        assert_eq!(null.to_string(), "parameter 'icon' is null");

        let mismatch = ParamError::TypeMismatch {
            key: "count".into(),
            expected: "i32",
            found: "alloc::string::String",
        };
        assert_eq!(
            mismatch.to_string(),
            "parameter 'count' has type alloc::string::String, expected i32"
        );
    }

    #[test]
    fn key_accessor() {
        let err = ParamError::Null { key: "".into() };
        assert_eq!(err.key(), "");
        let err = ParamError::TypeMismatch {
            key: "k".into(),
            expected: "u8",
            found: "bool",
        };
        assert_eq!(err.key(), "k");
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(ParamError::Missing { key: "x".into() });
        assert!(err.to_string().contains("'x'"));
    }
}
