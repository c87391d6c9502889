//! ErrorCode trait: a stable, machine-readable code for every error.

/// Every error enum implements this to expose a structured code string
/// that survives log scraping and the JSON run report.
pub trait ErrorCode {
    /// Returns the code string (e.g., "ROW_WRITE_FAILED").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const INVALID_TABLE_NAME: &str = "INVALID_TABLE_NAME";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONNECTION_FAILED: &str = "CONNECTION_FAILED";
pub const CATALOG_READ_FAILED: &str = "CATALOG_READ_FAILED";
pub const REGISTRY_PROVISIONING_FAILED: &str = "REGISTRY_PROVISIONING_FAILED";
pub const PROVISIONING_FAILED: &str = "PROVISIONING_FAILED";
pub const ROW_READ_FAILED: &str = "ROW_READ_FAILED";
pub const ROW_WRITE_FAILED: &str = "ROW_WRITE_FAILED";
pub const LEGACY_DROP_FAILED: &str = "LEGACY_DROP_FAILED";
