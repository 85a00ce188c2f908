//! Procedural macros for the tola-variant type registry
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `type_set!{}` | - | Declare a closed candidate type set |
//!
//! ## Example
//!
//! ```ignore
//! type_set! {
//!     /// Values a config entry may take.
//!     pub ConfigValue: bool, i64, f64, #[text] String;
//! }
//!
//! let v = Variant::<ConfigValue>::new(42i64);
//! assert_eq!(v.index(), Some(1));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Declare one or more closed candidate type sets.
///
/// # Syntax
///
/// ```ignore
/// type_set! {
///     #[attrs]
///     VIS Name: Type0, Type1, #[text] TypeN;
///     ...
/// }
/// ```
///
/// Each declaration expands to:
/// - a unit marker struct `Name` (deriving `Debug, Clone, Copy, PartialEq,
///   Eq, Hash, Default`)
/// - `impl TypeSet for Name` with an exhaustive `match` for `dispatch`
/// - `impl Candidate<Name> for TypeK` with `ORDINAL = K` for every entry
/// - `impl TextSet for Name` when a text candidate exists
///
/// The text candidate is the entry marked `#[text]`, otherwise the first
/// entry whose path ends in `String`.
///
/// # Errors
///
/// - empty type list
/// - the same type listed twice
/// - more than one `#[text]` entry
/// - any attribute other than `#[text]` on an entry
#[proc_macro]
pub fn type_set(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::TypeSetInput);
    match user::expand_type_sets(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
