// verdict-core/src/application/bootstrap.rs

use std::path::Path;
use tracing::{info, instrument};

use crate::application::router::ViolationRouter;
use crate::domain::binding::BindingRegistry;
use crate::error::VerdictError;
use crate::infrastructure::config::load_router_config_or_default;

/// Wires a router from the project's `verdict.yaml` (or defaults).
#[instrument(skip(engine, registry))]
pub fn build_router<E>(
    engine: E,
    registry: BindingRegistry,
    project_dir: &Path,
) -> Result<ViolationRouter<E>, VerdictError> {
    let config = load_router_config_or_default(project_dir)?;
    info!(
        bindings = registry.len(),
        selection = %config.selection,
        "Violation router ready"
    );
    Ok(ViolationRouter::from_config(engine, registry, &config))
}
