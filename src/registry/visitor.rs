//! Generic operations run through [`TypeSet::dispatch`].

use core::any::TypeId;
use core::marker::PhantomData;

use super::candidate::{Candidate, TypeSet};
use super::descriptor::TypeDescriptor;

/// An operation generic over "some candidate of `S`".
///
/// Closures cannot be generic, so dispatch takes a type implementing this
/// trait instead. [`TypeSet::dispatch`] calls `visit` exactly once, with `T`
/// set to the candidate at the requested ordinal.
///
/// # Example
///
/// ```
/// use tola_variant::{type_set, Candidate, TypeSet, Visitor};
///
/// type_set! { Small: u8, u64; }
///
/// struct Width;
///
/// impl Visitor<Small> for Width {
///     type Output = usize;
///
///     fn visit<T: Candidate<Small>>(self) -> usize {
///         core::mem::size_of::<T>()
///     }
/// }
///
/// assert_eq!(Small::dispatch(0, Width), 1);
/// assert_eq!(Small::dispatch(1, Width), 8);
/// ```
pub trait Visitor<S: TypeSet> {
    type Output;

    fn visit<T: Candidate<S>>(self) -> Self::Output;
}

/// Answers "is the candidate `T`?".
pub(crate) struct MatchesType<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> MatchesType<T> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self(PhantomData)
    }
}

impl<S: TypeSet, T: ?Sized + 'static> Visitor<S> for MatchesType<T> {
    type Output = bool;

    #[inline]
    fn visit<U: Candidate<S>>(self) -> bool {
        TypeId::of::<U>() == TypeId::of::<T>()
    }
}

/// Produces the descriptor of the candidate.
pub(crate) struct Describe;

impl<S: TypeSet> Visitor<S> for Describe {
    type Output = TypeDescriptor;

    #[inline]
    fn visit<T: Candidate<S>>(self) -> TypeDescriptor {
        T::descriptor()
    }
}
