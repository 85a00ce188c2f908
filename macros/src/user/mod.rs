//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `type_set!` | function macro | Declare a candidate type set |

mod type_set;

pub use type_set::{expand_type_sets, TypeSetInput};
