pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config};
pub use self::tracing::{init_tracing_subscriber, TracingOptions};
pub use wiring::{wire_dependencies, AppDeps};
