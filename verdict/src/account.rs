// verdict/src/account.rs
//
// Account registration documents: constraints, the errors bound to them, and
// the handler for the unbound ones.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;
use validator::{Validate, ValidationError};
use verdict_core::domain::{BindingRegistry, ConstraintError, ConstraintKind};
use verdict_core::{Violation, ViolationError, ViolationHandler};

// --- CONSTRAINT KINDS ---

pub const NOT_BLANK: ConstraintKind = ConstraintKind::new("not_blank");
pub const NON_NEGATIVE_AGE: ConstraintKind = ConstraintKind::new("non_negative_age");
pub const EMAIL: ConstraintKind = ConstraintKind::new("email");
pub const USERNAME_FORMAT: ConstraintKind = ConstraintKind::new("username_format");

/// Every kind `AccountRequest` declares, bound or not.
pub const DECLARED_KINDS: [ConstraintKind; 4] = [NOT_BLANK, NON_NEGATIVE_AGE, EMAIL, USERNAME_FORMAT];

#[allow(clippy::unwrap_used)]
static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9_]{3,16}$").unwrap());

#[derive(Debug, Deserialize, Validate)]
pub struct AccountRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(range(min = 0, code = "non_negative_age", message = "age must be >= 0"))]
    pub age: i32,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(regex(
        path = *USERNAME_RE,
        code = "username_format",
        message = "must be 3 to 16 lowercase letters, digits or underscores"
    ))]
    pub username: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
    }
    Ok(())
}

// --- BOUND ERRORS ---

#[derive(Debug, Error, PartialEq)]
#[error("{0}")]
pub struct NegativeAgeError(pub String);

impl ConstraintError for NegativeAgeError {
    fn from_message(message: &str) -> Self {
        Self(message.to_string())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("email {0}")]
pub struct InvalidEmailError(pub String);

impl ConstraintError for InvalidEmailError {
    fn from_message(message: &str) -> Self {
        Self(message.to_string())
    }
}

pub fn registry() -> BindingRegistry {
    BindingRegistry::builder()
        .bind::<NegativeAgeError>(NON_NEGATIVE_AGE)
        .bind::<InvalidEmailError>(EMAIL)
        .build()
}

// --- UNBOUND VIOLATIONS ---

#[derive(Debug, Error)]
#[error("username '{username}' rejected: {reason}")]
pub struct UsernameRejectedError {
    pub username: String,
    pub reason: String,
}

/// Usernames get their own error, everything else goes to the default arm.
pub struct AccountViolationHandler<'a> {
    pub request: &'a AccountRequest,
}

impl ViolationHandler for AccountViolationHandler<'_> {
    fn handle(&self, violation: &Violation) -> ViolationError {
        match violation.field_path.leaf() {
            Some("username") if *violation.kind() == USERNAME_FORMAT => {
                ViolationError::handler(UsernameRejectedError {
                    username: self.request.username.clone(),
                    reason: violation.message.clone(),
                })
            }
            _ => self.fallback(violation),
        }
    }
}
