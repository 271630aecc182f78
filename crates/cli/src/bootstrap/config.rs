use cachedump_domain::{CliOverrides, Config};

/// Load and validate the configuration. Runs before logging is set up, so
/// it reports through its return value only.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
