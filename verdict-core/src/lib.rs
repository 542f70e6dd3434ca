// verdict-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports (Interfaces / Traits)
// Contract expected from a validation engine.
pub mod ports;

// 2. Domain (Cœur du métier)
// Constraint kinds, violations, error bindings, violation handlers.
// Ne dépend de RIEN d'autre (ni infra, ni app).
pub mod domain;

// 3. Infrastructure (Adapters)
// `validator` crate adapter, configuration files.
pub mod infrastructure;

// 4. Application (Use Cases)
// Violation routing.
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use application::ViolationRouter;
pub use domain::binding::{global, install_global};
pub use domain::{
    BindingRegistry, ConstraintError, ConstraintKind, Group, Violation, ViolationError,
    ViolationHandler,
};
pub use error::VerdictError;
pub use ports::ValidationEngine;
