// verdict-core/src/application/mod.rs

pub mod bootstrap;
pub mod router;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use verdict_core::application::{ViolationRouter, build_router};`

pub use bootstrap::build_router;
pub use router::ViolationRouter;
