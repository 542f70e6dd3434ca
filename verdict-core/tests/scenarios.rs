// End-to-end routing over the `validator` adapter.

use std::sync::Arc;
use thiserror::Error;
use validator::{Validate, ValidationError};
use verdict_core::domain::{SelectionPolicy, ViolationError};
use verdict_core::infrastructure::adapters::ValidatorEngine;
use verdict_core::{BindingRegistry, ConstraintError, ConstraintKind, Group, Violation};
use verdict_core::{ViolationHandler, ViolationRouter};

const NON_NEGATIVE_AGE: ConstraintKind = ConstraintKind::new("non_negative_age");
const NOT_BLANK: ConstraintKind = ConstraintKind::new("not_blank");

#[derive(Debug, Error, PartialEq)]
#[error("{0}")]
struct NegativeAgeError(String);

impl ConstraintError for NegativeAgeError {
    fn from_message(message: &str) -> Self {
        Self(message.to_string())
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Validate)]
struct Person {
    #[validate(custom(function = "not_blank"))]
    name: String,

    #[validate(range(min = 0, code = "non_negative_age", message = "age must be >= 0"))]
    age: i32,
}

fn person(name: &str, age: i32) -> Person {
    Person {
        name: name.to_string(),
        age,
    }
}

fn router() -> ViolationRouter<ValidatorEngine> {
    let registry = BindingRegistry::builder()
        .bind::<NegativeAgeError>(NON_NEGATIVE_AGE)
        .build();
    ViolationRouter::new(ValidatorEngine, registry)
}

#[test]
fn test_valid_object_raises_nothing() {
    assert!(router().validate(&person("Ada", 36), &[]).is_ok());
}

#[test]
fn test_negative_age_raises_bound_error() {
    let err = router().validate(&person("Ada", -1), &[]).unwrap_err();
    assert_eq!(
        err.downcast_bound::<NegativeAgeError>(),
        Some(&NegativeAgeError("age must be >= 0".into()))
    );
    insta::assert_snapshot!(err.to_string(), @"age must be >= 0");
}

#[test]
fn test_blank_name_without_binding_raises_default_error() {
    let err = router().validate(&person("", 36), &[]).unwrap_err();
    assert!(matches!(err, ViolationError::InvalidArgument { .. }));
    insta::assert_snapshot!(err.to_string(), @"name must not be blank");
}

#[test]
fn test_several_violations_raise_exactly_one_mapped_error() {
    let err = router().validate(&person("", -1), &[]).unwrap_err();
    let message = err.to_string();
    assert!(
        message == "age must be >= 0" || message == "name must not be blank",
        "unexpected error: {}",
        message
    );
}

#[test]
fn test_field_path_order_picks_age_first() {
    let router = router().with_selection(SelectionPolicy::FieldPathOrder);
    for _ in 0..8 {
        let err = router.validate(&person("", -1), &[]).unwrap_err();
        assert_eq!(err.kind(), "bound");
    }
}

#[test]
fn test_same_input_same_outcome() {
    let subject = person("Ada", -1);
    let router = router();
    let a = router.validate(&subject, &[Group::new("default")]).unwrap_err();
    let b = router.validate(&subject, &[Group::new("default")]).unwrap_err();
    assert_eq!((a.kind(), a.to_string()), (b.kind(), b.to_string()));
}

#[test]
fn test_overriding_handler_keeps_default_arm() {
    #[derive(Debug, Error)]
    #[error("a display name is required")]
    struct DisplayNameRequired;

    struct ProfileHandler;
    impl ViolationHandler for ProfileHandler {
        fn handle(&self, violation: &Violation) -> ViolationError {
            match (violation.field_path.leaf(), violation.kind()) {
                (Some("name"), kind) if *kind == NOT_BLANK => {
                    ViolationError::handler(DisplayNameRequired)
                }
                _ => self.fallback(violation),
            }
        }
    }

    let router = router().with_handler(Arc::new(ProfileHandler));
    let err = router.validate(&person(" ", 3), &[]).unwrap_err();
    assert!(err.downcast_handler::<DisplayNameRequired>().is_some());

    // Bound constraints never reach the handler.
    let err = router.validate(&person("Ada", -3), &[]).unwrap_err();
    assert_eq!(err.kind(), "bound");
}

#[test]
fn test_router_is_shareable_across_threads() {
    let router = Arc::new(router());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let router = Arc::clone(&router);
            std::thread::spawn(move || router.validate(&person("Ada", -i - 1), &[]).is_err())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
