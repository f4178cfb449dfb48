use serde::Deserialize;

/// Service configuration, injected into constructors rather than read from
/// ambient process state.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Upstream monitor-listing endpoint (or a CORS proxy in front of it).
    pub api_url: String,
    /// Opaque credential passed through to the upstream API.
    pub api_key: String,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_request_timeout_seconds() -> u64 {
    30
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::Environment::with_prefix("UPTIME"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
