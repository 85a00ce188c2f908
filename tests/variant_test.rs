//! Variant container: construction, transfer, assignment, access

use tola_variant::prelude::*;

type_set! {
    pub Scalars: char, i16, i32, i64, i128, String;

    pub Bag: i32, Vec<i32>, [i32; 5], Vec<[f32; 5]>, Point;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

type V = Variant<Scalars>;

// -----------------------------------------------------------------------------
// Construction
// -----------------------------------------------------------------------------

#[test]
fn test_default_is_empty() {
    let v = V::default();
    assert!(v.is_empty());
    assert!(!v.has_value());
    assert_eq!(v.index(), None);
    assert_eq!(v.type_descriptor(), None);
    assert_eq!(v, V::empty());
}

#[test]
fn test_new_sets_ordinal() {
    let v = V::new('A');
    assert!(v.has_value());
    assert_eq!(v.index(), Some(0));

    let v = V::new(100i64);
    assert_eq!(v.index(), Some(3));
    assert_eq!(*v.get_value::<i64>().unwrap(), 100);
}

#[test]
fn test_ordinal_descriptor_agree() {
    let samples = [
        V::new('c'),
        V::new(1i16),
        V::new(2i32),
        V::new(3i64),
        V::new(4i128),
        V::new(String::from("five")),
    ];
    for v in &samples {
        let index = v.index().unwrap();
        assert_eq!(Scalars::descriptor_of(index), v.type_descriptor());
    }
    assert!(samples[2].get_value::<i32>().is_ok());
    assert!(samples[2].get_value::<i64>().is_err());
}

#[test]
fn test_try_new_accepts_members() {
    let v = V::try_new(81i16).unwrap();
    assert_eq!(v.index(), Some(1));
    assert_eq!(v.to_value::<i16>().unwrap(), 81);
}

#[test]
fn test_try_new_rejects_non_members() {
    let err = V::try_new(1.5f32).unwrap_err();
    assert_eq!(
        err,
        VariantError::UnsupportedType {
            set: "Scalars",
            type_name: "f32",
        }
    );
    assert_eq!(err.to_string(), "type `f32` is not a candidate of `Scalars`");
}

#[test]
fn test_user_defined_candidates() {
    let mut crazy = Variant::<Bag>::empty();
    crazy.set(vec![[0.0f32; 5]]);
    assert_eq!(crazy.index(), Some(3));

    crazy.set(vec![1i32, 2, 3]);
    assert_eq!(crazy.index(), Some(1));

    crazy.set([7i32; 5]);
    assert_eq!(crazy.get_value::<[i32; 5]>().unwrap(), &[7; 5]);

    crazy.set(Point { x: 5.0, y: 10.0 });
    assert!(crazy.eq_value(&Point { x: 5.0, y: 10.0 }));
    assert_eq!(crazy.type_descriptor().unwrap().name(), std::any::type_name::<Point>());
}

// -----------------------------------------------------------------------------
// Copy
// -----------------------------------------------------------------------------

#[test]
fn test_clone_of_empty_is_empty() {
    let a = V::empty();
    let b = a.clone();
    assert!(b.is_empty());
    assert_eq!(a, b);
}

#[test]
fn test_clone_is_independent() {
    let a = V::new(String::from("Hello"));
    let mut b = a.clone();
    assert_eq!(a, b);

    b.get_value_mut::<String>().unwrap().push_str(", World");
    assert_eq!(a.get_value::<String>().unwrap(), "Hello");
    assert_eq!(b.get_value::<String>().unwrap(), "Hello, World");
    assert_ne!(a, b);
}

#[test]
fn test_clone_from_same_and_different_candidate() {
    let source = V::new(String::from("source"));

    let mut same = V::new(String::from("target"));
    same.clone_from(&source);
    assert_eq!(same, source);

    let mut other = V::new(5i32);
    other.clone_from(&source);
    assert_eq!(other.index(), Some(5));
    assert_eq!(other, source);

    let mut emptied = V::new(5i32);
    emptied.clone_from(&V::empty());
    assert!(emptied.is_empty());
}

// -----------------------------------------------------------------------------
// Move
// -----------------------------------------------------------------------------

#[test]
fn test_take_leaves_source_empty() {
    let mut a = V::new('A');
    let b = a.take();
    assert!(!a.has_value());
    assert_eq!(a.index(), None);
    assert_eq!(*b.get_value::<char>().unwrap(), 'A');
}

#[test]
fn test_rust_move_keeps_content() {
    let a = V::new(1000i128);
    let b = a;
    assert_eq!(b.index(), Some(4));
    assert_eq!(*b.get_value::<i128>().unwrap(), 1000);
}

#[test]
fn test_assign_swaps_contents() {
    let mut a = V::new(50i32);
    let mut b = V::new(1000i128);
    a.assign(&mut b);
    assert_eq!(a.index(), Some(4));
    assert_eq!(*a.get_value::<i128>().unwrap(), 1000);
    assert_eq!(b.index(), Some(2));
    assert_eq!(*b.get_value::<i32>().unwrap(), 50);

    let mut empty = V::empty();
    a.assign(&mut empty);
    assert!(a.is_empty());
    assert_eq!(empty.index(), Some(4));
}

// -----------------------------------------------------------------------------
// Value assignment
// -----------------------------------------------------------------------------

#[test]
fn test_set_changes_type() {
    let mut v = V::new('B');
    v.set('C');
    assert_eq!(*v.get_value::<char>().unwrap(), 'C');
    v.set(81i16);
    assert_eq!(*v.get_value::<i16>().unwrap(), 81);
    assert_eq!(v.index(), Some(1));
}

#[test]
fn test_try_set_failure_keeps_state() {
    let mut v = V::new(7i32);
    assert!(v.try_set(7u64).is_err());
    assert_eq!(v.index(), Some(2));
    assert_eq!(*v.get_value::<i32>().unwrap(), 7);

    v.try_set(9i64).unwrap();
    assert_eq!(v.index(), Some(3));
}

#[test]
fn test_replace_returns_previous() {
    let mut v = V::new('x');
    let old = v.replace(3i32);
    assert_eq!(*old.get_value::<char>().unwrap(), 'x');
    assert_eq!(*v.get_value::<i32>().unwrap(), 3);
}

#[test]
fn test_clear() {
    let mut v = V::new(String::from("gone"));
    v.clear();
    assert!(v.is_empty());
}

// -----------------------------------------------------------------------------
// Typed access
// -----------------------------------------------------------------------------

#[test]
fn test_get_value_mismatch() {
    let v = V::new(50i32);
    let err = v.get_value::<i64>().unwrap_err();
    match err {
        VariantError::TypeMismatch { expected, found: Some(found) } => {
            assert_eq!(expected, "i64");
            assert!(found.is::<i32>());
            assert_eq!(found.ordinal(), 2);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.to_string(), "expected `i64`, but the variant holds `i32`");
    assert!(!err.is_empty_access());
}

#[test]
fn test_get_value_on_empty() {
    let v = V::empty();
    let err = v.get_value::<char>().unwrap_err();
    assert!(err.is_empty_access());
    assert_eq!(err.to_string(), "expected `char`, but the variant is empty");
}

#[test]
fn test_get_pointer_probes() {
    let mut v = V::new(10i16);
    assert_eq!(v.get_pointer::<i16>(), Some(&10));
    assert_eq!(v.get_pointer::<i32>(), None);
    assert_eq!(v.get_pointer::<f64>(), None);
    assert_eq!(V::empty().get_pointer::<i16>(), None);

    *v.get_pointer_mut::<i16>().unwrap() += 1;
    assert_eq!(v.to_value::<i16>().unwrap(), 11);
    assert!(v.get_pointer_mut::<char>().is_none());
}

#[test]
fn test_holds_and_same_type() {
    let v = V::new(3i64);
    assert!(v.holds::<i64>());
    assert!(!v.holds::<i32>());
    assert!(v.same_type(&0i64));
    assert!(!v.same_type(&0i32));
    assert!(!V::empty().same_type(&0i64));
}

// -----------------------------------------------------------------------------
// Conversion
// -----------------------------------------------------------------------------

#[test]
fn test_round_trip_every_candidate() {
    assert_eq!(V::new('z').to_value::<char>().unwrap(), 'z');
    assert_eq!(V::new(-3i16).to_value::<i16>().unwrap(), -3);
    assert_eq!(V::new(123i32).to_value::<i32>().unwrap(), 123);
    assert_eq!(V::new(i64::MAX).to_value::<i64>().unwrap(), i64::MAX);
    assert_eq!(V::new(i128::MIN).to_value::<i128>().unwrap(), i128::MIN);
    assert_eq!(
        V::new(String::from("text")).to_value::<String>().unwrap(),
        "text"
    );
}

#[test]
fn test_into_value() {
    let v = V::new(String::from("owned"));
    let s: String = v.into_value().unwrap();
    assert_eq!(s, "owned");

    let v = V::new(5i32);
    let back = v.into_value::<String>().unwrap_err();
    assert_eq!(*back.get_value::<i32>().unwrap(), 5);

    assert!(V::empty().into_value::<i32>().unwrap_err().is_empty());
}

#[test]
fn test_try_into_value_types() {
    let n: i32 = V::new(42i32).try_into().unwrap();
    assert_eq!(n, 42);

    let s = String::try_from(V::from("moved")).unwrap();
    assert_eq!(s, "moved");

    let back = i64::try_from(V::new('c')).unwrap_err();
    assert_eq!(back, V::new('c'));

    let empty: Result<char, V> = V::empty().try_into();
    assert!(empty.unwrap_err().is_empty());
}

#[test]
fn test_debug_output() {
    let v = V::new(1i32);
    assert_eq!(
        format!("{:?}", v),
        "Variant { set: \"Scalars\", held: Some(i32@2) }"
    );
    assert_eq!(
        format!("{:?}", V::empty()),
        "Variant { set: \"Scalars\", held: None }"
    );
}

#[test]
fn test_default_set_is_primitives() {
    let v: Variant = Variant::new(2.5f64);
    assert_eq!(v.index(), Some(11));
    assert_eq!(v.to_value::<f64>().unwrap(), 2.5);
}
