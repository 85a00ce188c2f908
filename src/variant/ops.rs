//! Standard trait impls for `Variant`. Copy and equality go through dispatch.

use alloc::string::String;
use core::fmt;

use super::container::Variant;
use super::visit::{AssignPayload, CopyPayload, EqPayloads};
use crate::registry::{Candidate, TextSet, TypeSet};

// =============================================================================
// Copy / copy-assign
// =============================================================================

impl<S: TypeSet> Clone for Variant<S> {
    /// Deep copy: a fresh payload of the same candidate, never an alias.
    fn clone(&self) -> Self {
        let payload = self
            .payload()
            .map(|payload| S::dispatch(payload.ordinal(), CopyPayload(payload)));
        Self::from_payload_opt(payload)
    }

    /// Copy-assign. Reuses the held value via `T::clone_from` when both
    /// sides hold the same candidate.
    fn clone_from(&mut self, source: &Self) {
        if let (Some(target), Some(held)) = (self.payload_mut(), source.payload()) {
            if target.ordinal() == held.ordinal() {
                S::dispatch(held.ordinal(), AssignPayload { target, source: held });
                return;
            }
        }
        *self = source.clone();
    }
}

// =============================================================================
// Variant == Variant
// =============================================================================

impl<S: TypeSet> PartialEq for Variant<S> {
    /// Equal when both are empty, or both hold the same candidate and the
    /// candidate's own `==` agrees.
    fn eq(&self, other: &Self) -> bool {
        match (self.payload(), other.payload()) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => {
                lhs.ordinal() == rhs.ordinal() && S::dispatch(lhs.ordinal(), EqPayloads(lhs, rhs))
            }
            _ => false,
        }
    }
}

// =============================================================================
// Variant == value
// =============================================================================

// Coherence rules out a blanket `PartialEq<T: Candidate<S>>`, so the common
// value types get concrete impls. Anything else goes through `eq_value`.
macro_rules! impl_value_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<S: TypeSet> PartialEq<$ty> for Variant<S> {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    self.eq_value(other)
                }
            }

            impl<S: TypeSet> PartialEq<Variant<S>> for $ty {
                #[inline]
                fn eq(&self, other: &Variant<S>) -> bool {
                    other.eq_value(self)
                }
            }
        )*
    };
}

impl_value_eq!(
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    String,
);

impl<S> PartialEq<str> for Variant<S>
where
    S: TextSet,
    S::Text: PartialEq<str>,
{
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.get_pointer::<S::Text>().is_some_and(|text| text == other)
    }
}

impl<'a, S> PartialEq<&'a str> for Variant<S>
where
    S: TextSet,
    S::Text: PartialEq<str>,
{
    #[inline]
    fn eq(&self, other: &&'a str) -> bool {
        *self == **other
    }
}

// =============================================================================
// Variant -> value
// =============================================================================

// `let n: i32 = variant.try_into()?` for the same value types. The error
// hands the variant back untouched.
macro_rules! impl_value_try_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<S: TypeSet> TryFrom<Variant<S>> for $ty
            where
                $ty: Candidate<S>,
            {
                type Error = Variant<S>;

                #[inline]
                fn try_from(variant: Variant<S>) -> Result<Self, Self::Error> {
                    variant.into_value()
                }
            }
        )*
    };
}

impl_value_try_from!(
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    String,
);

// =============================================================================
// Formatting
// =============================================================================

impl<S: TypeSet> fmt::Debug for Variant<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant")
            .field("set", &S::NAME)
            .field("held", &self.type_descriptor())
            .finish()
    }
}
