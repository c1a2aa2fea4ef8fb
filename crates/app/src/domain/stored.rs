//! Enumerations stored as `TEXT` columns.

use thiserror::Error;

/// A stored name that matches no variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

/// Closed set of values with a fixed stored name each.
pub trait StoredValue: Copy + 'static {
    /// Human name of the set, used in error messages.
    const KIND: &'static str;

    /// Every variant, in display order.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    /// Parse a stored name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownValue`] if no variant has that name.
    fn parse_stored(value: &str) -> Result<Self, UnknownValue> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| UnknownValue {
                kind: Self::KIND,
                value: value.to_string(),
            })
    }
}

/// Implements `Display` and `FromStr` through [`StoredValue`].
macro_rules! stored_value_traits {
    ($ty:ty) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::domain::StoredValue::as_str(*self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::domain::UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::domain::StoredValue>::parse_stored(s)
            }
        }
    };
}

pub(crate) use stored_value_traits;
