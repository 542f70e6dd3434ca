// verdict-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

use super::constraint::ConstraintKind;
use super::violation::FieldPath;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("A process-wide binding registry is already installed")]
    #[diagnostic(
        code(verdict::domain::registry_installed),
        help("Bindings are registered once at startup; build a single registry and install it once.")
    )]
    RegistryAlreadyInstalled,

    #[error("No process-wide binding registry has been installed")]
    #[diagnostic(
        code(verdict::domain::registry_missing),
        help("Call `install_global` during startup, before the first validation.")
    )]
    RegistryNotInstalled,
}

/// The single error raised by a failed `validate` call.
#[derive(Error, Debug, Diagnostic)]
pub enum ViolationError {
    /// The error bound to the violated constraint kind.
    #[error("{source}")]
    #[diagnostic(code(verdict::violation::bound))]
    Bound {
        constraint: ConstraintKind,
        #[source]
        source: BoxedError,
    },

    /// The bound constructor itself failed. Never treated as a pass.
    #[error("Failed to construct {error_type} bound to constraint '{constraint}': {reason}")]
    #[diagnostic(
        code(verdict::violation::binding_construction),
        help("Check the constructor registered for this constraint kind.")
    )]
    BindingConstruction {
        constraint: ConstraintKind,
        error_type: &'static str,
        reason: String,
    },

    /// Default handler output for violations with no binding.
    #[error("{}", render_invalid_argument(.field_path, .message))]
    #[diagnostic(code(verdict::violation::invalid_argument))]
    InvalidArgument { field_path: FieldPath, message: String },

    /// Domain error raised by an application-specific handler.
    #[error(transparent)]
    #[diagnostic(code(verdict::violation::handler))]
    Handler(BoxedError),
}

impl ViolationError {
    pub fn handler<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Handler(Box::new(error))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bound { .. } => "bound",
            Self::BindingConstruction { .. } => "binding_construction",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::Handler(_) => "handler",
        }
    }

    /// Typed access to a bound error.
    pub fn downcast_bound<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Bound { source, .. } => source.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Typed access to a handler-raised error.
    pub fn downcast_handler<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Handler(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}

fn render_invalid_argument(field_path: &FieldPath, message: &str) -> String {
    if field_path.is_empty() {
        message.to_string()
    } else {
        format!("{} {}", field_path, message)
    }
}
