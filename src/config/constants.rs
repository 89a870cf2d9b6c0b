//! Environment variable names and their fallback values.

pub const SERVER_URL_VAR: &str = "SERVER_URL";
pub const PORT_VAR: &str = "PORT";
pub const ENV_VAR: &str = "ENV";
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

pub const DEFAULT_SERVER_URL: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8000";
pub const DEFAULT_ENVIRONMENT: &str = "prod";

/// Environment tag treated as local development.
pub const DEVELOPMENT_ENVIRONMENT: &str = "dev";
