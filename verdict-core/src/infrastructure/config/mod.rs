pub mod router;

pub use router::{load_router_config, load_router_config_or_default};
