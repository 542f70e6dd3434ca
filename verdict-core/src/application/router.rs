// verdict-core/src/application/router.rs

use tracing::{debug, instrument};

use crate::domain::binding::{self, BindingRegistry, BindingResolver};
use crate::domain::configuration::RouterConfig;
use crate::domain::constraint::Group;
use crate::domain::error::{DomainError, ViolationError};
use crate::domain::handler::{DefaultViolationHandler, ViolationHandler};
use crate::domain::violation::{SelectionPolicy, Violation};
use crate::ports::engine::ValidationEngine;

/// Runs the engine and turns the reported violation into its bound error,
/// or hands it to the violation handler when no binding exists.
///
/// Only one violation is ever reported per call. With
/// `SelectionPolicy::FirstEncountered` (the default) which one depends on the
/// engine's ordering and is not guaranteed to be stable.
pub struct ViolationRouter<E, H = DefaultViolationHandler> {
    engine: E,
    registry: BindingRegistry,
    handler: H,
    selection: SelectionPolicy,
}

impl<E> ViolationRouter<E, DefaultViolationHandler> {
    pub fn new(engine: E, registry: BindingRegistry) -> Self {
        Self {
            engine,
            registry,
            handler: DefaultViolationHandler,
            selection: SelectionPolicy::default(),
        }
    }

    /// Router over the process-wide registry installed at startup.
    pub fn with_global_registry(engine: E) -> Result<Self, DomainError> {
        let registry = binding::global()?.clone();
        Ok(Self::new(engine, registry))
    }

    pub fn from_config(engine: E, registry: BindingRegistry, config: &RouterConfig) -> Self {
        Self::new(engine, registry).with_selection(config.selection)
    }
}

impl<E, H> ViolationRouter<E, H> {
    pub fn with_handler<H2: ViolationHandler>(self, handler: H2) -> ViolationRouter<E, H2> {
        ViolationRouter {
            engine: self.engine,
            registry: self.registry,
            handler,
            selection: self.selection,
        }
    }

    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    pub fn registry(&self) -> &BindingRegistry {
        &self.registry
    }

    pub fn selection(&self) -> SelectionPolicy {
        self.selection
    }
}

impl<E, H: ViolationHandler> ViolationRouter<E, H> {
    /// Validates `object` and raises at most one error.
    #[instrument(skip_all, fields(groups = groups.len()))]
    pub fn validate<T>(&self, object: &T, groups: &[Group]) -> Result<(), ViolationError>
    where
        T: ?Sized,
        E: ValidationEngine<T>,
    {
        let violations = self.engine.validate(object, groups);

        let Some(selected) = violations.select(self.selection) else {
            debug!("No violations");
            return Ok(());
        };

        debug!(
            count = violations.len(),
            field = %selected.field_path,
            constraint = %selected.constraint.kind,
            policy = %self.selection,
            "Violation selected"
        );
        Err(self.route(selected))
    }

    /// Error raised for one violation: the bound error when the constraint
    /// kind has a binding, the handler's output otherwise.
    pub fn route(&self, violation: &Violation) -> ViolationError {
        match self.registry.resolve(violation.kind()) {
            Some(binding) => {
                debug!(
                    constraint = %violation.kind(),
                    error_type = binding.error_type(),
                    "Raising bound error"
                );
                binding.construct(&violation.message)
            }
            None => {
                debug!(constraint = %violation.kind(), "No binding, delegating to handler");
                self.handler.handle(violation)
            }
        }
    }
}
