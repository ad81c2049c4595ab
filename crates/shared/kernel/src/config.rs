use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

#[skit_derive::skit_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a settings file and overlays `SITEKIT__*` environment variables.
///
/// Without a path the loader looks for a `sitekit` file (any format the
/// `config` crate knows) in the working directory. Nested keys use double
/// underscores, so `SITEKIT__WIDGETS__KEY_METRICS_CTA_THRESHOLD=5` maps to
/// `widgets.key_metrics_cta_threshold`.
///
/// # Errors
/// Fails if the file is missing or its content does not fit `T`.
///
/// # Example
/// ```rust
/// use skit_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     threshold: u32,
/// }
///
/// let cfg: Settings = load_config(Some("does/not/exist")).unwrap_or_default();
/// assert_eq!(cfg.threshold, 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from("sitekit"), |p| p.as_ref().to_path_buf());

    info!(path = %effective_path.display(), "Loading config");

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(Environment::with_prefix("SITEKIT").separator("__"))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize)]
    struct Sample {
        widgets: Widgets,
    }

    #[derive(Debug, Deserialize)]
    struct Widgets {
        key_metrics_cta_threshold: u32,
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[widgets]\nkey_metrics_cta_threshold = 4").unwrap();

        let cfg: Sample = load_config(Some(file.path())).unwrap();
        assert_eq!(cfg.widgets.key_metrics_cta_threshold, 4);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_config::<Sample>(Some("/nonexistent/sitekit.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Config error (Failed to build config)"));
    }
}
