//! The variant container itself.

use alloc::boxed::Box;
use core::any::Any;
use core::marker::PhantomData;

use super::payload::Payload;
use super::visit::{LiftText, ValueVisitor, ValueVisitorMut, WithValue, WithValueMut};
use crate::error::VariantError;
use crate::registry::{Candidate, Ordinal, TextSet, TypeDescriptor, TypeSet};
use crate::sets::Primitives;

/// Holds at most one value drawn from the candidate set `S`.
///
/// A variant is either **empty** or **holding** exactly one candidate. The
/// ordinal and the value always change together, so a holding variant's
/// value is always the candidate its [`index`](Variant::index) names.
///
/// There is no internal synchronisation and the type is neither `Send` nor
/// `Sync`. Callers that share a variant between threads must wrap it in
/// their own lock.
///
/// # Example
///
/// ```
/// use tola_variant::Variant;
///
/// let mut v: Variant = Variant::new('A');
/// assert_eq!(v.index(), Some(0));
///
/// let copy = v.clone();
/// assert_eq!(v, copy);
///
/// v.set(String::from("Hello"));
/// assert_eq!(v.get_value::<String>().unwrap(), "Hello");
/// assert_ne!(v, copy);
/// ```
pub struct Variant<S: TypeSet = Primitives> {
    payload: Option<Payload>,
    set: PhantomData<S>,
}

impl<S: TypeSet> Variant<S> {
    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    /// Creates an empty variant.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            payload: None,
            set: PhantomData,
        }
    }

    #[inline]
    fn from_payload(payload: Payload) -> Self {
        Self {
            payload: Some(payload),
            set: PhantomData,
        }
    }

    /// Creates a variant holding `value`.
    ///
    /// Membership is checked at compile time:
    ///
    /// ```compile_fail
    /// use tola_variant::{type_set, Variant};
    ///
    /// type_set! { Ints: i32, i64; }
    ///
    /// let v = Variant::<Ints>::new(1.5f64);
    /// ```
    #[inline]
    pub fn new<T: Candidate<S>>(value: T) -> Self {
        Self::from_payload(Payload::new::<S, T>(value))
    }

    /// Creates a variant from a value whose membership is only known at
    /// runtime.
    ///
    /// A `&'static str` is stored as the set's text candidate.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::UnsupportedType`] if `T` is not a candidate
    /// and not a text literal the set can redirect.
    pub fn try_new<T: Any>(value: T) -> Result<Self, VariantError> {
        if let Some(ordinal) = S::index_of::<T>() {
            return Ok(Self::from_payload(Payload::from_parts(ordinal, Box::new(value))));
        }
        match (&value as &dyn Any).downcast_ref::<&'static str>() {
            Some(text) => Self::try_from_text(text),
            None => Err(VariantError::unsupported::<S, T>()),
        }
    }

    /// Creates a variant holding `text` as the set's text candidate.
    ///
    /// Only sets with a text candidate accept text:
    ///
    /// ```compile_fail
    /// use tola_variant::{type_set, Variant};
    ///
    /// type_set! { Ints: i32, i64; }
    ///
    /// let v = Variant::<Ints>::from_text("nope");
    /// ```
    #[inline]
    pub fn from_text(text: &str) -> Self
    where
        S: TextSet,
    {
        Self::new(<S::Text as From<&str>>::from(text))
    }

    /// Runtime-checked form of [`from_text`](Variant::from_text).
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::UnsupportedType`] if the set has no text
    /// candidate.
    pub fn try_from_text(text: &str) -> Result<Self, VariantError> {
        S::TEXT
            .and_then(|ordinal| S::dispatch(ordinal, LiftText(text)))
            .map(Self::from_payload)
            .ok_or_else(VariantError::unsupported::<S, &str>)
    }

    // -------------------------------------------------------------------------
    // Assignment
    // -------------------------------------------------------------------------

    /// Replaces the content with `value`.
    #[inline]
    pub fn set<T: Candidate<S>>(&mut self, value: T) {
        *self = Self::new(value);
    }

    /// Replaces the content with `value` if its type is legal for the set.
    ///
    /// # Errors
    ///
    /// Same as [`try_new`](Variant::try_new). On error `self` is unchanged.
    pub fn try_set<T: Any>(&mut self, value: T) -> Result<(), VariantError> {
        *self = Self::try_new(value)?;
        Ok(())
    }

    /// Replaces the content with `value`, returning the previous content.
    #[inline]
    pub fn replace<T: Candidate<S>>(&mut self, value: T) -> Self {
        core::mem::replace(self, Self::new(value))
    }

    /// Move-assignment: exchanges contents with `other`.
    ///
    /// `other` ends up with what `self` held before, so nothing is dropped.
    #[inline]
    pub fn assign(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.payload, &mut other.payload);
    }

    /// Moves the content out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            payload: self.payload.take(),
            set: PhantomData,
        }
    }

    /// Drops the content, leaving `self` empty.
    #[inline]
    pub fn clear(&mut self) {
        self.payload = None;
    }

    // -------------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------------

    /// Returns `true` if the variant holds a value.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.payload.is_some()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.payload.is_none()
    }

    /// Ordinal of the held candidate, `None` when empty.
    #[inline]
    pub fn index(&self) -> Option<Ordinal> {
        self.payload.as_ref().map(Payload::ordinal)
    }

    /// Descriptor of the held candidate, `None` when empty.
    #[inline]
    pub fn type_descriptor(&self) -> Option<TypeDescriptor> {
        self.index().and_then(S::descriptor_of)
    }

    /// Returns `true` if the variant holds exactly a `T`.
    #[inline]
    pub fn holds<T: ?Sized + 'static>(&self) -> bool {
        self.type_descriptor().is_some_and(|d| d.is::<T>())
    }

    /// Returns `true` if the variant holds a value of the same type as
    /// `value`.
    #[inline]
    pub fn same_type<T: ?Sized + 'static>(&self, value: &T) -> bool {
        let _ = value;
        self.holds::<T>()
    }

    // -------------------------------------------------------------------------
    // Typed access
    // -------------------------------------------------------------------------

    /// Borrows the held value as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::TypeMismatch`] if the variant is empty or
    /// holds another candidate.
    pub fn get_value<T: Candidate<S>>(&self) -> Result<&T, VariantError> {
        match self.get_pointer::<T>() {
            Some(value) => Ok(value),
            None => Err(VariantError::mismatch::<T>(self.type_descriptor())),
        }
    }

    /// Mutably borrows the held value as `T`.
    ///
    /// # Errors
    ///
    /// Same as [`get_value`](Variant::get_value).
    pub fn get_value_mut<T: Candidate<S>>(&mut self) -> Result<&mut T, VariantError> {
        let found = self.type_descriptor();
        self.get_pointer_mut::<T>()
            .ok_or_else(|| VariantError::mismatch::<T>(found))
    }

    /// Probes for a `T` without failing: `None` if empty or holding another
    /// type.
    #[inline]
    pub fn get_pointer<T: 'static>(&self) -> Option<&T> {
        self.payload.as_ref()?.downcast_ref::<T>()
    }

    #[inline]
    pub fn get_pointer_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.payload.as_mut()?.downcast_mut::<T>()
    }

    /// Copies the held value out as `T`.
    ///
    /// # Errors
    ///
    /// Same as [`get_value`](Variant::get_value).
    #[inline]
    pub fn to_value<T: Candidate<S>>(&self) -> Result<T, VariantError> {
        self.get_value::<T>().cloned()
    }

    /// Moves the held value out as `T`, or gives the variant back unchanged.
    pub fn into_value<T: Candidate<S>>(self) -> Result<T, Self> {
        let Some(payload) = self.payload else {
            return Err(Self::empty());
        };
        payload.downcast::<T>().map_err(Self::from_payload)
    }

    // -------------------------------------------------------------------------
    // Comparison against plain values
    // -------------------------------------------------------------------------

    /// Returns `true` if the variant holds a `T` equal to `value`.
    ///
    /// Never equal when empty or holding another type. A `&'static str`
    /// that is not itself a candidate is compared as the text candidate,
    /// the same way [`try_new`](Variant::try_new) stores it.
    pub fn eq_value<T: PartialEq + 'static>(&self, value: &T) -> bool {
        if let Some(text) = (value as &dyn Any).downcast_ref::<&'static str>() {
            if !S::contains::<&'static str>() {
                return Self::try_from_text(text).is_ok_and(|lifted| lifted == *self);
            }
        }
        self.get_pointer::<T>().is_some_and(|held| held == value)
    }

    #[inline]
    pub fn ne_value<T: PartialEq + 'static>(&self, value: &T) -> bool {
        !self.eq_value(value)
    }

    // -------------------------------------------------------------------------
    // Visiting
    // -------------------------------------------------------------------------

    /// Runs `visitor` against the held value; `None` when empty.
    pub fn visit<V: ValueVisitor<S>>(&self, visitor: V) -> Option<V::Output> {
        let payload = self.payload.as_ref()?;
        Some(S::dispatch(payload.ordinal(), WithValue { payload, visitor }))
    }

    /// Runs `visitor` against the held value mutably; `None` when empty.
    pub fn visit_mut<V: ValueVisitorMut<S>>(&mut self, visitor: V) -> Option<V::Output> {
        let payload = self.payload.as_mut()?;
        let ordinal = payload.ordinal();
        Some(S::dispatch(ordinal, WithValueMut { payload, visitor }))
    }

    #[inline]
    pub(crate) fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    #[inline]
    pub(crate) fn payload_mut(&mut self) -> Option<&mut Payload> {
        self.payload.as_mut()
    }

    #[inline]
    pub(crate) fn from_payload_opt(payload: Option<Payload>) -> Self {
        Self {
            payload,
            set: PhantomData,
        }
    }
}

impl<S: TypeSet> Default for Variant<S> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: TextSet> From<&str> for Variant<S> {
    #[inline]
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
