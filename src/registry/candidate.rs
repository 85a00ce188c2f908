//! Candidate sets and their members.

use core::any::{Any, TypeId};

use super::descriptor::TypeDescriptor;
use super::visitor::{Describe, MatchesType, Visitor};
use super::Ordinal;

// =============================================================================
// TypeSet - the fixed, ordered list of candidate types
// =============================================================================

/// A closed, ordered set of candidate types.
///
/// Implemented by the marker struct that [`type_set!`](crate::type_set)
/// declares. The order of the declaration defines every ordinal and never
/// changes afterwards.
///
/// Only [`dispatch`](TypeSet::dispatch) is generated; everything else is
/// derived from it.
///
/// A type may appear only once, so every ordinal names exactly one type:
///
/// ```compile_fail
/// use tola_variant::type_set;
///
/// type_set! { Twice: i32, u8, i32; }
/// ```
pub trait TypeSet: Sized + 'static {
    /// Name of the marker type, for diagnostics.
    const NAME: &'static str;

    /// Number of candidate types.
    const COUNT: usize;

    /// Ordinal of the designated text candidate, if the set has one.
    const TEXT: Option<Ordinal>;

    /// Runs `visitor` specialised for the candidate at `ordinal`.
    ///
    /// # Panics
    ///
    /// Panics if `ordinal >= Self::COUNT`. Use
    /// [`try_dispatch`](TypeSet::try_dispatch) for unchecked input.
    fn dispatch<V: Visitor<Self>>(ordinal: Ordinal, visitor: V) -> V::Output;

    /// Like [`dispatch`](TypeSet::dispatch), but returns `None` for an
    /// out-of-range ordinal.
    #[inline]
    fn try_dispatch<V: Visitor<Self>>(ordinal: Ordinal, visitor: V) -> Option<V::Output> {
        if ordinal < Self::COUNT {
            Some(Self::dispatch(ordinal, visitor))
        } else {
            None
        }
    }

    /// Ordinal of `T`, or `None` if `T` is not a candidate.
    ///
    /// For members the same value is available as a constant through
    /// [`Candidate::ORDINAL`]; this form also answers for arbitrary types.
    fn index_of<T: ?Sized + 'static>() -> Option<Ordinal> {
        (0..Self::COUNT).find(|&ordinal| Self::dispatch(ordinal, MatchesType::<T>::new()))
    }

    /// Returns `true` if `T` is one of the candidates.
    #[inline]
    fn contains<T: ?Sized + 'static>() -> bool {
        Self::index_of::<T>().is_some()
    }

    /// Descriptor of the candidate at `ordinal`, or `None` if out of range.
    #[inline]
    fn descriptor_of(ordinal: Ordinal) -> Option<TypeDescriptor> {
        Self::try_dispatch(ordinal, Describe)
    }

    /// All descriptors in ordinal order.
    fn descriptors() -> impl Iterator<Item = TypeDescriptor> {
        (0..Self::COUNT).filter_map(Self::descriptor_of)
    }

    /// Returns `true` if a value like `value` may be stored.
    ///
    /// Text literals (`str` and `&'static str`) count as legal when the set
    /// has a text candidate, since they are stored as that candidate.
    fn is_legal<T: ?Sized + 'static>(value: &T) -> bool {
        let _ = value;
        Self::contains::<T>() || (is_text_literal::<T>() && Self::TEXT.is_some())
    }
}

// =============================================================================
// Candidate - membership of one type in one set
// =============================================================================

/// Membership of `Self` in the set `S`.
///
/// Generated by [`type_set!`](crate::type_set) for every listed type. The
/// supertraits are the whole capability contract of a candidate: it can be
/// copied (`Clone`), compared (`PartialEq`) and type-erased (`Any`).
///
/// The set declaration is the only source of ordinals. A hand-written impl
/// does not satisfy the hidden `Registered` seal:
///
/// ```compile_fail
/// use tola_variant::{type_set, Candidate, Ordinal};
///
/// type_set! { Small: char, String; }
///
/// #[derive(Clone, PartialEq)]
/// struct Stray;
///
/// impl Candidate<Small> for Stray {
///     const ORDINAL: Ordinal = 0;
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a candidate type of `{S}`",
    label = "not listed in the type set",
    note = "add the type to the `type_set!` declaration of `{S}`"
)]
pub trait Candidate<S: TypeSet>: Any + Clone + PartialEq + Registered<S> {
    /// Position of `Self` in `S`.
    const ORDINAL: Ordinal;

    /// Builds a value from text; only the text candidate returns `Some`.
    #[inline]
    fn from_text(text: &str) -> Option<Self> {
        let _ = text;
        None
    }

    #[inline]
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(Self::ORDINAL)
    }
}

/// Seal on [`Candidate`], emitted by `type_set!` next to each candidate impl.
#[doc(hidden)]
pub trait Registered<S: TypeSet> {}

// =============================================================================
// TextSet - sets that accept text literals
// =============================================================================

/// A set with a designated text candidate.
///
/// Text literals are redirected to [`TextSet::Text`] instead of being
/// candidates in their own right.
pub trait TextSet: TypeSet {
    type Text: Candidate<Self> + for<'a> From<&'a str>;
}

/// `str` or `&'static str`.
#[inline]
pub(crate) fn is_text_literal<T: ?Sized + 'static>() -> bool {
    let id = TypeId::of::<T>();
    id == TypeId::of::<str>() || id == TypeId::of::<&'static str>()
}
