/// The outcome of a single numeric estimate.
///
/// A value is either computed from valid inputs or explicitly marked as not computable
/// because a required input was missing, zero, or outside its domain. Consumers must
/// match on the variant instead of relying on a sentinel number.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Estimate {
    Value(f64),
    #[default]
    NotComputable,
}

impl Estimate {
    /// Wraps a raw number, rejecting NaN and infinities.
    #[inline]
    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Self::Value(value)
        } else {
            Self::NotComputable
        }
    }

    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::NotComputable => None,
        }
    }

    #[inline]
    pub fn is_computable(self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Self::Value(v) => Self::from_value(f(v)),
            Self::NotComputable => Self::NotComputable,
        }
    }

    pub fn and_then(self, f: impl FnOnce(f64) -> Estimate) -> Self {
        match self {
            Self::Value(v) => f(v),
            Self::NotComputable => Self::NotComputable,
        }
    }

    /// Combines two estimates, yielding `NotComputable` if either side is.
    pub fn zip_with(self, other: Estimate, f: impl FnOnce(f64, f64) -> f64) -> Self {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => Self::from_value(f(a, b)),
            _ => Self::NotComputable,
        }
    }
}
