use crate::error::{SitekitError, SitekitErrorExt};
use skit_domain::config::LoggingConfig;
use skit_logger::{Logger, parse_level};

/// Installs the global subscriber from the `logging` section.
///
/// Keep the returned [`Logger`] alive for as long as logs should be written.
///
/// # Errors
/// [`SitekitError::Logger`] for an unknown level, a bad filter, an unusable
/// directory, or when a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<Logger, SitekitError> {
    let mut builder = Logger::builder(config.name.as_str())
        .level(parse_level(&config.level).context("logging.level")?)
        .console(config.console)
        .json(config.json)
        .max_files(config.max_files);

    if let Some(filter) = &config.env_filter {
        builder = builder.env_filter(filter.as_str());
    }
    if let Some(directory) = &config.directory {
        builder = builder.directory(directory);
    }

    Ok(builder.init()?)
}
