// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod python_json;

// Re-exports
pub use config::{CalculatorConfig, ENV_ERROR_WORDING};
pub use logging::init_logging;
pub use python_json::to_python_json;
