// verdict-core/src/domain/handler.rs

use std::sync::Arc;

use super::error::ViolationError;
use super::violation::Violation;

/// Hook invoked for violations whose constraint kind has no error binding.
///
/// Implementations narrow on the violation (usually its field path) and must
/// return to `fallback` for everything they do not handle:
///
/// ```
/// use verdict_core::domain::{Violation, ViolationError, ViolationHandler};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("username is taken or invalid")]
/// struct UsernameRejected;
///
/// struct SignupHandler;
///
/// impl ViolationHandler for SignupHandler {
///     fn handle(&self, violation: &Violation) -> ViolationError {
///         match violation.field_path.to_string().as_str() {
///             "username" => ViolationError::handler(UsernameRejected),
///             _ => self.fallback(violation),
///         }
///     }
/// }
/// ```
pub trait ViolationHandler: Send + Sync {
    fn handle(&self, violation: &Violation) -> ViolationError {
        self.fallback(violation)
    }

    /// Mandatory default arm: a generic invalid-argument error carrying the
    /// field path and the message.
    fn fallback(&self, violation: &Violation) -> ViolationError {
        ViolationError::InvalidArgument {
            field_path: violation.field_path.clone(),
            message: violation.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultViolationHandler;

impl ViolationHandler for DefaultViolationHandler {}

impl<H: ViolationHandler + ?Sized> ViolationHandler for &H {
    fn handle(&self, violation: &Violation) -> ViolationError {
        (**self).handle(violation)
    }

    fn fallback(&self, violation: &Violation) -> ViolationError {
        (**self).fallback(violation)
    }
}

impl<H: ViolationHandler + ?Sized> ViolationHandler for Box<H> {
    fn handle(&self, violation: &Violation) -> ViolationError {
        (**self).handle(violation)
    }

    fn fallback(&self, violation: &Violation) -> ViolationError {
        (**self).fallback(violation)
    }
}

impl<H: ViolationHandler + ?Sized> ViolationHandler for Arc<H> {
    fn handle(&self, violation: &Violation) -> ViolationError {
        (**self).handle(violation)
    }

    fn fallback(&self, violation: &Violation) -> ViolationError {
        (**self).fallback(violation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::constraint::ConstraintDescriptor;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("username rejected")]
    struct UsernameRejected;

    struct NarrowHandler;

    impl ViolationHandler for NarrowHandler {
        fn handle(&self, violation: &Violation) -> ViolationError {
            match violation.field_path.leaf() {
                Some("username") => ViolationError::handler(UsernameRejected),
                _ => self.fallback(violation),
            }
        }
    }

    fn blank(path: &str) -> Violation {
        Violation::new(
            path,
            "must not be blank",
            ConstraintDescriptor::new("not_blank"),
        )
    }

    #[test]
    fn test_default_handler_raises_invalid_argument() {
        let err = DefaultViolationHandler.handle(&blank("name"));
        assert_eq!(err.kind(), "invalid_argument");
        assert_eq!(err.to_string(), "name must not be blank");
    }

    #[test]
    fn test_narrowing_arm_and_default_arm() {
        let handler = NarrowHandler;

        let narrowed = handler.handle(&blank("username"));
        assert!(narrowed.downcast_handler::<UsernameRejected>().is_some());

        let defaulted = handler.handle(&blank("name"));
        assert_eq!(defaulted.to_string(), "name must not be blank");
    }

    #[test]
    fn test_shared_handlers_delegate() {
        let shared: Arc<dyn ViolationHandler> = Arc::new(NarrowHandler);
        let err = shared.handle(&blank("username"));
        assert_eq!(err.kind(), "handler");

        let boxed: Box<dyn ViolationHandler> = Box::new(DefaultViolationHandler);
        assert_eq!(boxed.handle(&blank("name")).kind(), "invalid_argument");
    }
}
