use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub interceptor: InterceptorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which form to intercept and where its indicator lives.
#[derive(Debug, Deserialize, Clone)]
pub struct InterceptorConfig {
    pub form_selector: String,
    /// Looked up inside the form, not the whole document.
    pub indicator_selector: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "debug".to_string()
}

/// Default configuration embedded in the wasm module
const DEFAULT_CONFIG: &str = r##"
[interceptor]
form_selector = "#search-form"
indicator_selector = ".spinner"

[logging]
level = "debug"
"##;

impl Config {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Level for `console_log`; unknown names fall back to `Debug`.
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Load the embedded default configuration
pub fn load_config() -> anyhow::Result<Config> {
    Config::from_toml(DEFAULT_CONFIG)
}
