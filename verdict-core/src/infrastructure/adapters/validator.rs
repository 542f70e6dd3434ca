// verdict-core/src/infrastructure/adapters/validator.rs

use tracing::{debug, trace};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::domain::constraint::{ConstraintDescriptor, Group};
use crate::domain::violation::{FieldPath, Violation, ViolationSet};
use crate::ports::engine::ValidationEngine;

/// Key under which `validator` reports struct-level (`schema`) errors.
const SCHEMA_KEY: &str = "__all__";

/// Param `validator` uses to echo the rejected value back.
const VALUE_PARAM: &str = "value";

/// Adapter over `#[derive(Validate)]` types.
///
/// The error `code` becomes the constraint kind, so
/// `#[validate(range(min = 0, code = "non_negative_age"))]` is resolved
/// against bindings registered for `"non_negative_age"`.
///
/// `validator` has no notion of groups: every declared constraint is
/// evaluated regardless of the groups passed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorEngine;

impl ValidatorEngine {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Validate> ValidationEngine<T> for ValidatorEngine {
    fn validate(&self, object: &T, groups: &[Group]) -> ViolationSet {
        if !groups.is_empty() {
            trace!(?groups, "validator has no group support, evaluating all constraints");
        }

        match object.validate() {
            Ok(()) => ViolationSet::new(),
            Err(errors) => {
                let mut set = ViolationSet::new();
                flatten(&errors, &FieldPath::root(), &mut set);
                debug!(count = set.len(), "validator reported violations");
                set
            }
        }
    }
}

fn flatten(errors: &ValidationErrors, prefix: &FieldPath, out: &mut ViolationSet) {
    for (field, kind) in errors.errors() {
        let field = field.to_string();
        let path = if field == SCHEMA_KEY {
            prefix.clone()
        } else {
            prefix.clone().field(field)
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    out.push(to_violation(&path, error));
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten(nested, &path, out),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    flatten(nested, &path.clone().index(*index), out);
                }
            }
        }
    }
}

fn to_violation(path: &FieldPath, error: &ValidationError) -> Violation {
    let code = error.code.to_string();

    let mut constraint = ConstraintDescriptor::new(code.clone());
    for (name, value) in &error.params {
        let name = name.to_string();
        if name != VALUE_PARAM {
            constraint = constraint.with_param(name, value.clone());
        }
    }

    let message = match &error.message {
        Some(message) => message.to_string(),
        None => format!("failed '{}' constraint", code),
    };

    Violation {
        field_path: path.clone(),
        message,
        constraint,
    }
}
