//! Error type for fallible variant operations.

use core::any;
use core::fmt;

use crate::registry::{TypeDescriptor, TypeSet};

/// Errors raised by [`Variant`](crate::Variant).
///
/// Every failing operation leaves the variant exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantError {
    /// The value's type is not a candidate of the set (and is not a text
    /// literal the set could redirect).
    UnsupportedType {
        set: &'static str,
        type_name: &'static str,
    },
    /// Typed access asked for a type the variant does not hold.
    ///
    /// `found` is `None` when the variant is empty.
    TypeMismatch {
        expected: &'static str,
        found: Option<TypeDescriptor>,
    },
}

impl VariantError {
    pub(crate) fn unsupported<S: TypeSet, T: ?Sized>() -> Self {
        VariantError::UnsupportedType {
            set: S::NAME,
            type_name: any::type_name::<T>(),
        }
    }

    pub(crate) fn mismatch<T: ?Sized>(found: Option<TypeDescriptor>) -> Self {
        VariantError::TypeMismatch {
            expected: any::type_name::<T>(),
            found,
        }
    }

    /// Returns `true` for a typed access against an empty variant.
    pub fn is_empty_access(&self) -> bool {
        matches!(self, VariantError::TypeMismatch { found: None, .. })
    }
}

impl fmt::Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantError::UnsupportedType { set, type_name } => {
                write!(f, "type `{}` is not a candidate of `{}`", type_name, set)
            }
            VariantError::TypeMismatch { expected, found: Some(found) } => {
                write!(f, "expected `{}`, but the variant holds `{}`", expected, found)
            }
            VariantError::TypeMismatch { expected, found: None } => {
                write!(f, "expected `{}`, but the variant is empty", expected)
            }
        }
    }
}

impl core::error::Error for VariantError {}
