// Common utilities shared by the macros
//
// This module contains:
// - parse_utils: type normalisation and marker attribute helpers

mod parse_utils;

pub use parse_utils::*;
