//! Build-time configuration. The browser has no process environment, so
//! overrides are baked in through `option_env!` when the frontend is compiled.

pub const DEFAULT_API_BASE_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_MOUNT_ID: &str = "app";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the REST Countries API, without a trailing slash.
    pub api_base_url: String,
    /// Id of the element the application is mounted on.
    pub mount_id: String,
}

impl Config {
    pub fn new(api_base_url: &str, mount_id: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            mount_id: mount_id.to_string(),
        }
    }

    /// Reads `ATLAS_API_URL` and `ATLAS_MOUNT_ID` as they were at compile time.
    pub fn load() -> Self {
        Self::new(
            option_env!("ATLAS_API_URL").unwrap_or(DEFAULT_API_BASE_URL),
            option_env!("ATLAS_MOUNT_ID").unwrap_or(DEFAULT_MOUNT_ID),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, DEFAULT_MOUNT_ID)
    }
}
