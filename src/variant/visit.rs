//! Visitors over the held value, and the internal ones the container is
//! built from.

use super::payload::Payload;
use crate::registry::{Candidate, TypeSet, Visitor};

// =============================================================================
// Public: operations against the held value
// =============================================================================

/// An operation run against the value a [`Variant`](crate::Variant) holds,
/// typed as its concrete candidate.
///
/// ```
/// use tola_variant::{type_set, Candidate, ValueVisitor, Variant};
///
/// type_set! { Shapes: u32, String; }
///
/// struct Size;
///
/// impl ValueVisitor<Shapes> for Size {
///     type Output = usize;
///
///     fn visit<T: Candidate<Shapes>>(self, value: &T) -> usize {
///         core::mem::size_of_val(value)
///     }
/// }
///
/// let v = Variant::<Shapes>::new(7u32);
/// assert_eq!(v.visit(Size), Some(4));
/// assert_eq!(Variant::<Shapes>::empty().visit(Size), None);
/// ```
pub trait ValueVisitor<S: TypeSet> {
    type Output;

    fn visit<T: Candidate<S>>(self, value: &T) -> Self::Output;
}

/// Mutable counterpart of [`ValueVisitor`].
pub trait ValueVisitorMut<S: TypeSet> {
    type Output;

    fn visit_mut<T: Candidate<S>>(self, value: &mut T) -> Self::Output;
}

pub(crate) struct WithValue<'a, V> {
    pub(crate) payload: &'a Payload,
    pub(crate) visitor: V,
}

impl<S: TypeSet, V: ValueVisitor<S>> Visitor<S> for WithValue<'_, V> {
    type Output = V::Output;

    #[inline]
    fn visit<T: Candidate<S>>(self) -> V::Output {
        self.visitor.visit(self.payload.typed::<S, T>())
    }
}

pub(crate) struct WithValueMut<'a, V> {
    pub(crate) payload: &'a mut Payload,
    pub(crate) visitor: V,
}

impl<S: TypeSet, V: ValueVisitorMut<S>> Visitor<S> for WithValueMut<'_, V> {
    type Output = V::Output;

    #[inline]
    fn visit<T: Candidate<S>>(self) -> V::Output {
        self.visitor.visit_mut(self.payload.typed_mut::<S, T>())
    }
}

// =============================================================================
// Internal: copy, copy-assign, equality, text
// =============================================================================

/// Deep copy into a fresh payload of the same candidate.
pub(crate) struct CopyPayload<'a>(pub(crate) &'a Payload);

impl<S: TypeSet> Visitor<S> for CopyPayload<'_> {
    type Output = Payload;

    #[inline]
    fn visit<T: Candidate<S>>(self) -> Payload {
        Payload::new::<S, T>(self.0.typed::<S, T>().clone())
    }
}

/// Copy-assign between two payloads of the same candidate.
pub(crate) struct AssignPayload<'a> {
    pub(crate) target: &'a mut Payload,
    pub(crate) source: &'a Payload,
}

impl<S: TypeSet> Visitor<S> for AssignPayload<'_> {
    type Output = ();

    #[inline]
    fn visit<T: Candidate<S>>(self) {
        self.target
            .typed_mut::<S, T>()
            .clone_from(self.source.typed::<S, T>());
    }
}

/// Candidate equality between two payloads of the same candidate.
pub(crate) struct EqPayloads<'a>(pub(crate) &'a Payload, pub(crate) &'a Payload);

impl<S: TypeSet> Visitor<S> for EqPayloads<'_> {
    type Output = bool;

    #[inline]
    fn visit<T: Candidate<S>>(self) -> bool {
        self.0.typed::<S, T>() == self.1.typed::<S, T>()
    }
}

/// Builds the text candidate from a string slice.
pub(crate) struct LiftText<'a>(pub(crate) &'a str);

impl<S: TypeSet> Visitor<S> for LiftText<'_> {
    type Output = Option<Payload>;

    fn visit<T: Candidate<S>>(self) -> Option<Payload> {
        T::from_text(self.0).map(Payload::new::<S, T>)
    }
}

