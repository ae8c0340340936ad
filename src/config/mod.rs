mod settings;

pub use settings::{Config, DEFAULT_EXPORT_FILE, EXAMPLE_CONFIG};
