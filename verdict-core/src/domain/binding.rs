// verdict-core/src/domain/binding.rs

// Each constraint kind declares, once at startup, the error it raises on
// violation. The table is read-only afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, info, warn};

use super::constraint::ConstraintKind;
use super::error::{BoxedError, DomainError, ViolationError};

/// An error type that can be raised for a violated constraint, built from the
/// violation message alone.
pub trait ConstraintError: std::error::Error + Send + Sync + 'static {
    fn from_message(message: &str) -> Self;
}

type Constructor = dyn Fn(&str) -> Result<BoxedError, BoxedError> + Send + Sync;

/// `ConstraintKind -> ErrorConstructor` association.
#[derive(Clone)]
pub struct ErrorBinding {
    constraint: ConstraintKind,
    error_type: &'static str,
    constructor: Arc<Constructor>,
}

impl ErrorBinding {
    pub fn constraint(&self) -> &ConstraintKind {
        &self.constraint
    }

    pub fn error_type(&self) -> &'static str {
        self.error_type
    }

    /// Invokes the bound constructor with exactly the message. A failing
    /// constructor is logged and surfaced as `BindingConstruction`.
    pub fn construct(&self, message: &str) -> ViolationError {
        match (self.constructor)(message) {
            Ok(source) => ViolationError::Bound {
                constraint: self.constraint.clone(),
                source,
            },
            Err(cause) => {
                error!(
                    constraint = %self.constraint,
                    error_type = self.error_type,
                    cause = %cause,
                    "Bound error constructor failed"
                );
                ViolationError::BindingConstruction {
                    constraint: self.constraint.clone(),
                    error_type: self.error_type,
                    reason: cause.to_string(),
                }
            }
        }
    }
}

impl fmt::Debug for ErrorBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorBinding")
            .field("constraint", &self.constraint)
            .field("error_type", &self.error_type)
            .finish_non_exhaustive()
    }
}

pub trait BindingResolver {
    fn resolve(&self, kind: &ConstraintKind) -> Option<&ErrorBinding>;
}

/// Collects bindings during startup. Consumed by `build`.
#[derive(Default)]
pub struct BindingRegistryBuilder {
    bindings: HashMap<ConstraintKind, ErrorBinding>,
}

impl BindingRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `E` to `kind` through its `ConstraintError::from_message`.
    pub fn bind<E: ConstraintError>(self, kind: impl Into<ConstraintKind>) -> Self {
        self.bind_with(kind, |message| Ok::<E, E>(E::from_message(message)))
    }

    /// Binds a fallible constructor. Its failures surface as
    /// `ViolationError::BindingConstruction` at validation time.
    pub fn bind_with<E, X, F>(mut self, kind: impl Into<ConstraintKind>, constructor: F) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
        X: Into<BoxedError>,
        F: Fn(&str) -> Result<E, X> + Send + Sync + 'static,
    {
        let kind = kind.into();
        let error_type = std::any::type_name::<E>();

        // First declaration wins.
        if let Some(existing) = self.bindings.get(&kind) {
            warn!(
                constraint = %kind,
                kept = existing.error_type,
                ignored = error_type,
                "Duplicate error binding ignored"
            );
            return self;
        }

        debug!(constraint = %kind, error_type, "Registering error binding");
        let constructor: Arc<Constructor> = Arc::new(move |message: &str| {
            constructor(message)
                .map(|e| Box::new(e) as BoxedError)
                .map_err(Into::into)
        });
        self.bindings.insert(
            kind.clone(),
            ErrorBinding {
                constraint: kind,
                error_type,
                constructor,
            },
        );
        self
    }

    pub fn build(self) -> BindingRegistry {
        BindingRegistry {
            bindings: Arc::new(self.bindings),
        }
    }
}

/// Read-only `ConstraintKind -> ErrorBinding` table. Cheap to clone and safe
/// to share between threads.
#[derive(Clone, Default)]
pub struct BindingRegistry {
    bindings: Arc<HashMap<ConstraintKind, ErrorBinding>>,
}

impl BindingRegistry {
    pub fn builder() -> BindingRegistryBuilder {
        BindingRegistryBuilder::new()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bindings, sorted by constraint kind.
    pub fn bindings(&self) -> Vec<&ErrorBinding> {
        let mut all: Vec<_> = self.bindings.values().collect();
        all.sort_by(|a, b| a.constraint.cmp(&b.constraint));
        all
    }
}

impl BindingResolver for BindingRegistry {
    fn resolve(&self, kind: &ConstraintKind) -> Option<&ErrorBinding> {
        self.bindings.get(kind)
    }
}

impl fmt::Debug for BindingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.bindings()).finish()
    }
}

// --- PROCESS-WIDE REGISTRY ---

static GLOBAL_REGISTRY: OnceLock<BindingRegistry> = OnceLock::new();

/// Installs the process-wide registry. Only the first call succeeds; later
/// calls are rejected and leave the installed registry untouched.
pub fn install_global(registry: BindingRegistry) -> Result<&'static BindingRegistry, DomainError> {
    let count = registry.len();
    GLOBAL_REGISTRY
        .set(registry)
        .map_err(|_| DomainError::RegistryAlreadyInstalled)?;
    info!(bindings = count, "Error binding registry installed");
    global()
}

pub fn global() -> Result<&'static BindingRegistry, DomainError> {
    GLOBAL_REGISTRY.get().ok_or(DomainError::RegistryNotInstalled)
}
