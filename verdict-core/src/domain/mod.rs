pub mod binding;
pub mod configuration;
pub mod constraint;
pub mod error;
pub mod handler;
pub mod violation;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use binding::{
    BindingRegistry, BindingRegistryBuilder, BindingResolver, ConstraintError, ErrorBinding,
};
pub use configuration::RouterConfig;
pub use constraint::{ConstraintDescriptor, ConstraintKind, Group};
pub use error::{BoxedError, DomainError, ViolationError};
pub use handler::{DefaultViolationHandler, ViolationHandler};
pub use violation::{FieldPath, PathSegment, SelectionPolicy, Violation, ViolationSet};
