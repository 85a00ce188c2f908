//! Common parsing utilities

use quote::ToTokens;
use syn::{Attribute, Meta, Type};

// =============================================================================
// Type Normalisation
// =============================================================================

/// Token text of a type with all whitespace removed.
///
/// `Vec < i32 >` and `Vec<i32>` normalise to the same key.
pub fn normalize_type(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}

/// Check if the last path segment of `ty` is `ident` (ignoring generics).
pub fn last_segment_is(ty: &Type, ident: &str) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == ident),
        Type::Group(group) => last_segment_is(&group.elem, ident),
        Type::Paren(paren) => last_segment_is(&paren.elem, ident),
        _ => false,
    }
}

// =============================================================================
// Marker Attributes
// =============================================================================

/// Remove every `#[name]` from `attrs`, returning the removed ones.
///
/// Marker attributes take no arguments; `#[name(...)]` and `#[name = ...]`
/// are rejected.
pub fn take_marker_attrs(attrs: &mut Vec<Attribute>, name: &str) -> syn::Result<Vec<Attribute>> {
    let mut taken = Vec::new();
    let mut kept = Vec::with_capacity(attrs.len());
    for attr in attrs.drain(..) {
        if !attr.path().is_ident(name) {
            kept.push(attr);
            continue;
        }
        if !matches!(attr.meta, Meta::Path(_)) {
            return Err(syn::Error::new_spanned(
                &attr,
                format!("`#[{}]` takes no arguments", name),
            ));
        }
        taken.push(attr);
    }
    *attrs = kept;
    Ok(taken)
}
