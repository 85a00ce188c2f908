//! Comparable descriptors for candidate types.

use core::any::{self, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

use super::Ordinal;

/// Identity of one candidate type inside a [`TypeSet`](super::TypeSet).
///
/// Descriptors compare equal when they describe the same type at the same
/// ordinal. The name is carried for diagnostics only.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
    ordinal: Ordinal,
}

impl TypeDescriptor {
    /// Describes `T` sitting at `ordinal`.
    #[inline]
    pub fn of<T: ?Sized + 'static>(ordinal: Ordinal) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
            ordinal,
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Full type name as reported by [`core::any::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    /// Returns `true` if this descriptor names `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.ordinal == other.ordinal
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.ordinal.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.ordinal)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
