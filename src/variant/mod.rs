//! # Layer 1: Variant Container
//!
//! Owns at most one candidate value behind a type-erased payload and answers
//! every "what is in there" question through [`TypeSet::dispatch`].
//!
//! ```text
//!            Variant<S>
//!   +--------------------------+
//!   | payload: Option<Payload> |   Empty       : payload = None
//!   +------------|-------------+   Holding(T)  : payload = Some { ordinal, Box<T> }
//!                v
//!   +--------------------------+
//!   | ordinal | Box<dyn Any>   | --- S::dispatch(ordinal, op) ---> op::<T>()
//!   +--------------------------+
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! variant/
//! ├── payload.rs   - Payload (ordinal + erased value)
//! ├── container.rs - Variant: construct, assign, access, introspect
//! ├── ops.rs       - Clone, PartialEq, Debug
//! └── visit.rs     - ValueVisitor, internal dispatch visitors
//! ```
//!
//! [`TypeSet::dispatch`]: crate::TypeSet::dispatch

mod container;
mod ops;
mod payload;
mod visit;

pub use container::Variant;
pub use visit::{ValueVisitor, ValueVisitorMut};
