//! # Layer 0: Type Registry
//!
//! Compile-time mapping between candidate types and their ordinals, plus the
//! dispatch primitive that turns a runtime ordinal back into a type parameter.
//!
//! ## Module Structure
//!
//! ```text
//! registry/
//! ├── candidate.rs  - TypeSet, Candidate, TextSet
//! ├── visitor.rs    - Visitor (the generic operation handed to dispatch)
//! └── descriptor.rs - TypeDescriptor (comparable type identity)
//! ```
//!
//! ## How a set is wired
//!
//! ```text
//! type_set! { pub Small: char, i32, String; }
//!
//!   impl TypeSet for Small         dispatch(ordinal, v) = match ordinal {
//!   impl Candidate<Small> for char     0 => v.visit::<char>(),
//!   impl Candidate<Small> for i32      1 => v.visit::<i32>(),
//!   impl Candidate<Small> for String   2 => v.visit::<String>(),
//!   impl TextSet for Small           }
//! ```
//!
//! Type to ordinal is a constant (`<T as Candidate<S>>::ORDINAL`); only the
//! ordinal itself ever exists at runtime.

pub mod candidate;
pub mod descriptor;
pub mod visitor;

#[doc(hidden)]
pub use candidate::Registered;
pub use candidate::{Candidate, TextSet, TypeSet};
pub use descriptor::TypeDescriptor;
pub use visitor::Visitor;

/// Position of a type inside its candidate set.
///
/// "No type" is spelled `None` wherever an `Option<Ordinal>` appears.
pub type Ordinal = usize;

/// Failure path of generated `dispatch` impls.
#[doc(hidden)]
#[cold]
#[track_caller]
pub fn invalid_ordinal(set: &'static str, ordinal: Ordinal, count: usize) -> ! {
    panic!("ordinal {ordinal} is out of range for type set `{set}` ({count} candidates)")
}

/// A `Candidate` impl whose ordinal names another entry of its set.
#[cold]
#[track_caller]
pub(crate) fn misregistered(set: &'static str, type_name: &'static str, ordinal: Ordinal) -> ! {
    panic!("`{type_name}` is not registered at ordinal {ordinal} of type set `{set}`")
}
