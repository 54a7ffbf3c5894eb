// ABOUTME: Environment variable names and value interpretation.
// ABOUTME: Boolean flags accept true/1/yes/on; blank strings count as unset.

pub const DELETE_REMOTE: &str = "DELETE_REMOTE";
pub const REG_USER: &str = "REG_USER";
pub const REG_PASS: &str = "REG_PASS";
pub const INSECURE_REGISTRY: &str = "INSECURE_REGISTRY";

/// Interpret an optional environment value as a boolean flag.
pub fn is_truthy(value: Option<&str>) -> bool {
    match value {
        Some(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "on"
        ),
        None => false,
    }
}

/// Treat empty values like missing ones.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Lookup backed by the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
