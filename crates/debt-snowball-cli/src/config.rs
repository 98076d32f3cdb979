use tracing::debug;

use debt_snowball_core::DashboardConfig;

use crate::input;

/// Load the `--config` file, if one was given. YAML and JSON are accepted.
pub fn load_config(
    path: Option<&str>,
) -> Result<Option<DashboardConfig>, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let config: DashboardConfig = input::file::read_document(path)?;
    config.validate()?;
    debug!(path, "loaded dashboard config");
    Ok(Some(config))
}
