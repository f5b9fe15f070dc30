//! Tests for the Simple C type model: shape predicates, promotion,
//! equality, compatibility, and rendering.

use pretty_assertions::assert_eq;
use simplec::{Specifier, Type};

fn char_t() -> Type {
    Type::scalar(Specifier::Char, 0)
}

fn int_t() -> Type {
    Type::scalar(Specifier::Int, 0)
}

fn long_t() -> Type {
    Type::scalar(Specifier::Long, 0)
}

fn ptr(specifier: Specifier, indirection: usize) -> Type {
    Type::scalar(specifier, indirection)
}

// ---------------------------------------------------------------------------
// Shape predicates
// ---------------------------------------------------------------------------

#[test]
fn shape_predicates_match_each_shape() {
    let scalar = int_t();
    let array = Type::array(Specifier::Int, 0, 3);
    let function = Type::function(Specifier::Int, 0, None);

    assert!(scalar.is_scalar());
    assert!(!scalar.is_array() && !scalar.is_function() && !scalar.is_error());

    assert!(array.is_array());
    assert!(!array.is_scalar() && !array.is_function() && !array.is_error());

    assert!(function.is_function());
    assert!(!function.is_scalar() && !function.is_array() && !function.is_error());

    assert!(Type::Error.is_error());
    assert!(!Type::Error.is_scalar() && !Type::Error.is_array() && !Type::Error.is_function());
}

#[test]
fn pointers_are_scalars_with_indirection_or_arrays() {
    assert!(ptr(Specifier::Int, 1).is_pointer());
    assert!(ptr(Specifier::Void, 2).is_pointer());
    assert!(Type::array(Specifier::Char, 0, 8).is_pointer());
    assert!(Type::array(Specifier::Char, 1, 8).is_pointer());

    assert!(!int_t().is_pointer());
    assert!(!Type::function(Specifier::Int, 1, None).is_pointer());
    assert!(!Type::Error.is_pointer());
}

#[test]
fn numerics_are_plain_non_void_scalars() {
    assert!(char_t().is_numeric());
    assert!(int_t().is_numeric());
    assert!(long_t().is_numeric());

    assert!(!Type::scalar(Specifier::Void, 0).is_numeric());
    assert!(!ptr(Specifier::Int, 1).is_numeric());
    assert!(!Type::array(Specifier::Int, 0, 3).is_numeric());
    assert!(!Type::function(Specifier::Int, 0, None).is_numeric());
    assert!(!Type::Error.is_numeric());
}

#[test]
fn predicates_are_pointers_or_numerics() {
    assert!(int_t().is_predicate());
    assert!(ptr(Specifier::Char, 1).is_predicate());
    assert!(Type::array(Specifier::Long, 0, 2).is_predicate());

    assert!(!Type::scalar(Specifier::Void, 0).is_predicate());
    assert!(!Type::function(Specifier::Int, 0, None).is_predicate());
    assert!(!Type::Error.is_predicate());
}

// ---------------------------------------------------------------------------
// Promotion
// ---------------------------------------------------------------------------

#[test]
fn char_values_promote_to_int() {
    assert_eq!(char_t().promote(), int_t());
}

#[test]
fn char_pointers_do_not_promote() {
    let p = ptr(Specifier::Char, 1);
    assert_eq!(p.promote(), p);
}

#[test]
fn arrays_decay_to_pointers() {
    assert_eq!(
        Type::array(Specifier::Int, 0, 3).promote(),
        ptr(Specifier::Int, 1)
    );
    assert_eq!(
        Type::array(Specifier::Char, 2, 10).promote(),
        ptr(Specifier::Char, 3)
    );
}

#[test]
fn other_shapes_promote_to_themselves() {
    let function = Type::function(Specifier::Int, 0, Some(vec![int_t()]));
    assert_eq!(int_t().promote(), int_t());
    assert_eq!(long_t().promote(), long_t());
    assert_eq!(function.promote(), function);
    assert_eq!(Type::Error.promote(), Type::Error);
}

#[test]
fn promotion_is_idempotent_on_its_output() {
    let samples = [
        char_t(),
        int_t(),
        long_t(),
        Type::scalar(Specifier::Void, 0),
        ptr(Specifier::Char, 1),
        ptr(Specifier::Void, 1),
        Type::array(Specifier::Int, 0, 4),
        Type::array(Specifier::Char, 1, 4),
        Type::function(Specifier::Long, 0, None),
        Type::Error,
    ];
    for ty in &samples {
        assert_eq!(ty.promote().promote(), ty.promote(), "sample: {}", ty);
    }
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

#[test]
fn equality_is_reflexive() {
    let samples = [
        int_t(),
        ptr(Specifier::Char, 2),
        Type::array(Specifier::Long, 0, 7),
        Type::function(Specifier::Int, 1, Some(vec![int_t(), char_t()])),
        Type::Error,
    ];
    for ty in &samples {
        assert_eq!(ty, ty);
    }
}

#[test]
fn different_shapes_are_never_equal() {
    assert_ne!(int_t(), Type::array(Specifier::Int, 0, 3));
    assert_ne!(int_t(), Type::function(Specifier::Int, 0, None));
    assert_ne!(Type::array(Specifier::Int, 0, 3), Type::function(Specifier::Int, 0, None));
    assert_ne!(int_t(), Type::Error);
}

#[test]
fn scalars_compare_specifier_and_indirection() {
    assert_ne!(int_t(), long_t());
    assert_ne!(int_t(), ptr(Specifier::Int, 1));
    assert_eq!(ptr(Specifier::Int, 2), ptr(Specifier::Int, 2));
}

#[test]
fn arrays_also_compare_length() {
    assert_eq!(Type::array(Specifier::Int, 0, 3), Type::array(Specifier::Int, 0, 3));
    assert_ne!(Type::array(Specifier::Int, 0, 3), Type::array(Specifier::Int, 0, 4));
    assert_ne!(Type::array(Specifier::Int, 0, 3), Type::array(Specifier::Char, 0, 3));
}

#[test]
fn functions_with_an_absent_parameter_list_match_any_list() {
    let unprototyped = Type::function(Specifier::Int, 0, None);
    let with_int = Type::function(Specifier::Int, 0, Some(vec![int_t()]));
    let with_char = Type::function(Specifier::Int, 0, Some(vec![char_t()]));

    assert_eq!(unprototyped, with_int);
    assert_eq!(with_int, unprototyped);
    assert_eq!(unprototyped, Type::function(Specifier::Int, 0, None));
    assert_ne!(with_int, with_char);
}

#[test]
fn function_prototypes_compare_elementwise() {
    let f = Type::function(Specifier::Int, 0, Some(vec![int_t(), ptr(Specifier::Char, 1)]));
    let g = Type::function(Specifier::Int, 0, Some(vec![int_t(), ptr(Specifier::Char, 1)]));
    let shorter = Type::function(Specifier::Int, 0, Some(vec![int_t()]));
    let empty = Type::function(Specifier::Int, 0, Some(vec![]));

    assert_eq!(f, g);
    assert_ne!(f, shorter);
    assert_ne!(shorter, empty);
    assert_ne!(f, Type::function(Specifier::Long, 0, Some(vec![int_t(), ptr(Specifier::Char, 1)])));
}

#[test]
fn error_equals_only_error() {
    assert_eq!(Type::Error, Type::Error);
    assert_ne!(Type::Error, int_t());
}

// ---------------------------------------------------------------------------
// Compatibility
// ---------------------------------------------------------------------------

#[test]
fn all_numerics_are_mutually_compatible() {
    assert!(char_t().is_compatible_with(&long_t()));
    assert!(long_t().is_compatible_with(&char_t()));
    assert!(int_t().is_compatible_with(&int_t()));
}

#[test]
fn identical_pointers_are_compatible() {
    assert!(ptr(Specifier::Int, 1).is_compatible_with(&ptr(Specifier::Int, 1)));
    assert!(ptr(Specifier::Char, 2).is_compatible_with(&ptr(Specifier::Char, 2)));
}

#[test]
fn distinct_pointer_types_are_incompatible() {
    assert!(!ptr(Specifier::Int, 1).is_compatible_with(&ptr(Specifier::Long, 1)));
    assert!(!ptr(Specifier::Int, 1).is_compatible_with(&ptr(Specifier::Int, 2)));
    assert!(!ptr(Specifier::Char, 1).is_compatible_with(&int_t()));
}

#[test]
fn void_pointer_is_compatible_with_any_pointer_either_direction() {
    assert!(ptr(Specifier::Void, 1).is_compatible_with(&ptr(Specifier::Int, 1)));
    assert!(ptr(Specifier::Int, 1).is_compatible_with(&ptr(Specifier::Void, 1)));
    assert!(ptr(Specifier::Void, 1).is_compatible_with(&ptr(Specifier::Void, 2)));
}

#[test]
fn double_void_pointers_get_no_special_treatment() {
    assert!(!ptr(Specifier::Void, 2).is_compatible_with(&ptr(Specifier::Void, 3)));
    assert!(!ptr(Specifier::Void, 2).is_compatible_with(&ptr(Specifier::Int, 1)));
}

#[test]
fn compatibility_applies_promotion_first() {
    // char promotes to int; an array decays to a pointer
    assert!(char_t().is_compatible_with(&int_t()));
    assert!(Type::array(Specifier::Int, 0, 3).is_compatible_with(&ptr(Specifier::Int, 1)));
    assert!(Type::array(Specifier::Int, 0, 3).is_compatible_with(&ptr(Specifier::Void, 1)));
}

#[test]
fn compatibility_is_reflexive_for_predicates() {
    let samples = [int_t(), char_t(), ptr(Specifier::Int, 1), Type::array(Specifier::Long, 0, 5)];
    for ty in &samples {
        assert!(ty.is_compatible_with(ty), "sample: {}", ty);
    }
}

#[test]
fn non_predicates_are_compatible_with_nothing() {
    let void = Type::scalar(Specifier::Void, 0);
    let function = Type::function(Specifier::Int, 0, None);

    assert!(!void.is_compatible_with(&void));
    assert!(!void.is_compatible_with(&int_t()));
    assert!(!function.is_compatible_with(&function));
    assert!(!Type::Error.is_compatible_with(&Type::Error));
    assert!(!Type::Error.is_compatible_with(&int_t()));
}

// ---------------------------------------------------------------------------
// Accessors and rendering
// ---------------------------------------------------------------------------

#[test]
fn accessors_report_shape_fields() {
    let array = Type::array(Specifier::Char, 1, 4);
    let function = Type::function(Specifier::Long, 0, Some(vec![int_t()]));

    assert_eq!(array.specifier(), Some(Specifier::Char));
    assert_eq!(array.indirection(), Some(1));
    assert_eq!(array.length(), Some(4));
    assert_eq!(int_t().length(), None);

    assert_eq!(function.parameters(), Some(&Some(vec![int_t()])));
    assert_eq!(int_t().parameters(), None);

    assert_eq!(Type::Error.specifier(), None);
    assert_eq!(Type::Error.indirection(), None);
}

#[test]
fn display_renders_like_a_declaration() {
    assert_eq!(int_t().to_string(), "int");
    assert_eq!(ptr(Specifier::Char, 1).to_string(), "char *");
    assert_eq!(ptr(Specifier::Int, 2).to_string(), "int **");
    assert_eq!(Type::array(Specifier::Char, 0, 4).to_string(), "char[4]");
    assert_eq!(Type::array(Specifier::Int, 1, 3).to_string(), "int *[3]");
    assert_eq!(Type::function(Specifier::Long, 0, None).to_string(), "long ()");
    assert_eq!(Type::function(Specifier::Void, 1, Some(vec![])).to_string(), "void *()");
    assert_eq!(Type::Error.to_string(), "error");
}

#[test]
fn specifier_display_is_the_keyword() {
    assert_eq!(Specifier::Char.to_string(), "char");
    assert_eq!(Specifier::Int.to_string(), "int");
    assert_eq!(Specifier::Long.to_string(), "long");
    assert_eq!(Specifier::Void.to_string(), "void");
}
