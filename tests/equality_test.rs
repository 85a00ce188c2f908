//! Equality semantics: variant vs variant, variant vs value

use tola_variant::prelude::*;

type_set! {
    pub Scalars: char, i16, i32, i64, i128, String;

    Floats: f64, u8;
}

type V = Variant<Scalars>;

#[test]
fn test_scenario_char_int_string() {
    let mut v1 = V::new('A');
    assert_eq!(v1.index(), Some(0));

    let mut v2 = v1.clone();
    assert!(v1 == v2);

    v2 = V::new(50i32);
    assert!(v1 != v2);
    assert_eq!(v1.index(), Some(0));
    assert_eq!(v2.index(), Some(2));

    v1 = V::new(String::from("Hello"));
    assert_eq!(v1.get_value::<String>().unwrap(), "Hello");
}

#[test]
fn test_empty_equals_empty() {
    assert_eq!(V::empty(), V::default());
    assert_ne!(V::empty(), V::new('D'));
    assert_ne!(V::new('D'), V::empty());
}

#[test]
fn test_same_ordinal_compares_values() {
    assert_eq!(V::new(7i64), V::new(7i64));
    assert_ne!(V::new(7i64), V::new(8i64));
}

#[test]
fn test_equal_numbers_different_candidates() {
    // Same numeric value, different ordinals.
    assert_ne!(V::new(7i32), V::new(7i64));
}

#[test]
fn test_candidate_equality_is_used() {
    let nan = Variant::<Floats>::new(f64::NAN);
    assert_ne!(nan, nan.clone());
    assert_eq!(Variant::<Floats>::new(0.5f64), Variant::<Floats>::new(0.5f64));
}

#[test]
fn test_variant_eq_value() {
    let v = V::new(123i32);
    let i = 123i32;
    assert!(v == i);
    assert!(i == v);
    assert!(v != 124i32);
    // Same number, other type: never equal.
    assert!(v != 123i64);
    assert!(v != 123u8);

    assert!(v.eq_value(&123i32));
    assert!(v.ne_value(&123i16));
}

#[test]
fn test_empty_never_equals_value() {
    let v = V::empty();
    assert!(v != 0i32);
    assert!(v != 'x');
    assert!(!v.eq_value(&String::new()));
}

#[test]
fn test_eq_value_for_user_types() {
    #[derive(Clone, PartialEq)]
    struct Id(u32);

    let v = V::new(5i16);
    assert!(!v.eq_value(&Id(5)));
}

#[test]
fn test_text_comparisons() {
    let v = V::new(String::from("Hello"));
    assert!(v == "Hello");
    assert!(v == *"Hello");
    assert!(v == String::from("Hello"));
    assert!(String::from("Hello") == v);
    assert!(v != "World");
    assert!(V::new('H') != "H");
}

#[test]
fn test_eq_value_lifts_text_literals() {
    let v = V::from("Hello");
    assert!(v == "Hello");
    assert!(v.eq_value(&"Hello"));
    assert!(v.ne_value(&"World"));
    assert!(!V::new('H').eq_value(&"H"));
    assert!(!V::empty().eq_value(&"Hello"));

    // No text candidate: a literal never matches.
    assert!(!Variant::<Floats>::new(1.0f64).eq_value(&"1"));
}
