use std::sync::Once;

/// Filter used when neither the config nor the environment provides one.
///
/// wgpu and naga are chatty at info; keep them at warn.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
///
/// Filters use the `env_logger` syntax (e.g. "debug", "planar_engine=debug,wgpu=warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter; wins over everything else.
    pub env_filter: Option<String>,
    /// Environment variable consulted when `env_filter` is unset.
    /// `RUST_LOG` is consulted after it.
    pub env_var: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            env_var: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Reads the filter from `var` before falling back to `RUST_LOG`.
    pub fn from_env_var(var: impl Into<String>) -> Self {
        Self {
            env_var: Some(var.into()),
            ..Self::default()
        }
    }

    /// Resolves the filter string: explicit, then `env_var`, then `RUST_LOG`,
    /// then [`DEFAULT_FILTER`].
    pub fn resolve_filter(&self, lookup: impl Fn(&str) -> Option<String>) -> String {
        if let Some(f) = &self.env_filter {
            return f.clone();
        }
        self.env_var
            .as_deref()
            .and_then(&lookup)
            .or_else(|| lookup("RUST_LOG"))
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(|name| std::env::var(name).ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized ({filter})");
    });
}
