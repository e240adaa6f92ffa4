/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub format: LogFormat,
    /// Directive used when `RUST_LOG` is not set.
    pub default_filter: String,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, level: &str, json: bool) -> Self {
        Self {
            environment: environment.into(),
            format: if json { LogFormat::Json } else { LogFormat::Pretty },
            default_filter: format!("{level},voxrelay=debug,tower_http=debug"),
        }
    }
}
