#![cfg_attr(not(feature = "std"), no_std)]

//! # tola-variant
//!
//! Closed-set variant container with compile-time type ordinals.
//!
//! A [`Variant`] holds at most one value whose type is drawn from a fixed,
//! ordered candidate set declared once with [`type_set!`]. The set assigns
//! every type an ordinal at compile time; the variant stores the ordinal next
//! to a type-erased payload and recovers the concrete type through O(1)
//! dispatch.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Declaration: type_set! { pub Numbers: char, i32, String; }       |
//! |  - marker struct, TypeSet impl, Candidate impls, TextSet impl     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 0: Registry                                                |
//! |  - Candidate::ORDINAL (type -> ordinal, constant)                 |
//! |  - TypeSet::dispatch  (ordinal -> type, exhaustive match)         |
//! |  - TypeDescriptor, index_of, is_legal                             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Variant                                                 |
//! |  - construct / assign / take / clone                              |
//! |  - get_value, get_pointer, to_value, ==                           |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_variant::{type_set, Variant, VariantError};
//!
//! type_set! {
//!     pub Scalars: char, i16, i32, i64, i128, String;
//! }
//!
//! let v1 = Variant::<Scalars>::new('A');
//! assert_eq!(v1.index(), Some(0));
//!
//! let mut v2 = v1.clone();
//! assert_eq!(v1, v2);
//!
//! v2.set(50i32);
//! assert_ne!(v1, v2);
//! assert_eq!(v2.index(), Some(2));
//!
//! // Text literals are stored as the text candidate.
//! let hello = Variant::<Scalars>::from("Hello");
//! assert_eq!(hello.get_value::<String>().unwrap(), "Hello");
//!
//! // Wrong-type access fails loudly, probing does not.
//! assert!(matches!(v2.get_value::<char>(), Err(VariantError::TypeMismatch { .. })));
//! assert_eq!(v2.get_pointer::<char>(), None);
//!
//! // Types outside the set are rejected at runtime on the permissive path.
//! assert!(Variant::<Scalars>::try_new(1.5f32).is_err());
//! ```
//!
//! ## Threading
//!
//! A variant owns its payload exclusively and does no locking. It is
//! neither `Send` nor `Sync`; share it across threads only behind your own
//! synchronisation.

// Allow `::tola_variant` paths emitted by `type_set!` to resolve in here.
extern crate self as tola_variant;

extern crate alloc;

// =============================================================================
// Layer 0: Registry
// =============================================================================
pub mod registry;

// =============================================================================
// Layer 1: Variant
// =============================================================================
pub mod variant;

pub mod error;
pub mod sets;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use error::VariantError;
pub use registry::{Candidate, Ordinal, TextSet, TypeDescriptor, TypeSet, Visitor};
pub use sets::Primitives;
pub use variant::{ValueVisitor, ValueVisitorMut, Variant};

pub use macros::type_set;

/// Common items for declaring sets and working with variants.
pub mod prelude {
    pub use crate::registry::{Candidate, Ordinal, TextSet, TypeDescriptor, TypeSet, Visitor};
    pub use crate::variant::{ValueVisitor, ValueVisitorMut, Variant};
    pub use crate::VariantError;
    pub use macros::type_set;
}
