//! Owned, type-erased storage for the held value.

use alloc::boxed::Box;
use core::any::{self, Any};

use crate::registry::visitor::MatchesType;
use crate::registry::{misregistered, Candidate, Ordinal, TypeSet};

/// The held value together with its ordinal.
///
/// Keeping both in one struct means "ordinal present" and "value present"
/// cannot disagree. Dropping the box runs the concrete destructor.
pub(crate) struct Payload {
    ordinal: Ordinal,
    value: Box<dyn Any>,
}

impl Payload {
    /// Panics if `T::ORDINAL` does not dispatch back to `T`.
    #[inline]
    pub(crate) fn new<S: TypeSet, T: Candidate<S>>(value: T) -> Self {
        if S::try_dispatch(T::ORDINAL, MatchesType::<T>::new()) != Some(true) {
            misregistered(S::NAME, any::type_name::<T>(), T::ORDINAL);
        }
        Self {
            ordinal: T::ORDINAL,
            value: Box::new(value),
        }
    }

    /// Caller guarantees `value` is the candidate of `S` at `ordinal`.
    #[inline]
    pub(crate) fn from_parts(ordinal: Ordinal, value: Box<dyn Any>) -> Self {
        Self { ordinal, value }
    }

    #[inline]
    pub(crate) fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    #[inline]
    pub(crate) fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    #[inline]
    pub(crate) fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut::<T>()
    }

    /// Unboxes the value, handing the payload back untouched on a mismatch.
    pub(crate) fn downcast<T: 'static>(self) -> Result<T, Self> {
        let ordinal = self.ordinal;
        match self.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Self { ordinal, value }),
        }
    }

    /// The value as the candidate named by the ordinal.
    ///
    /// Only called from dispatch on `self.ordinal`, where `T` is that
    /// candidate by construction.
    #[inline]
    pub(crate) fn typed<S: TypeSet, T: Candidate<S>>(&self) -> &T {
        let ordinal = self.ordinal;
        match self.downcast_ref::<T>() {
            Some(value) => value,
            None => corrupted::<S>(ordinal),
        }
    }

    #[inline]
    pub(crate) fn typed_mut<S: TypeSet, T: Candidate<S>>(&mut self) -> &mut T {
        let ordinal = self.ordinal;
        match self.downcast_mut::<T>() {
            Some(value) => value,
            None => corrupted::<S>(ordinal),
        }
    }
}

#[cold]
#[track_caller]
fn corrupted<S: TypeSet>(ordinal: Ordinal) -> ! {
    unreachable!(
        "payload does not hold candidate {} of type set `{}`",
        ordinal,
        S::NAME
    )
}
