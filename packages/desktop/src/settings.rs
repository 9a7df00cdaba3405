use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use store::RewardsConfig;

/// `<config_dir>/rewards/rewards.toml`, when the platform has a config dir.
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rewards").join(RewardsConfig::filename()))
}

/// Layered settings: built-in defaults, then `rewards.toml` in the working
/// directory, then the per-user file, then `REWARDS__<SECTION>__<KEY>`
/// environment variables (e.g. `REWARDS__API__BASE_URL`).
pub fn load() -> Result<RewardsConfig, ConfigError> {
    load_from(user_settings_path().as_deref())
}

pub(crate) fn load_from(user_file: Option<&Path>) -> Result<RewardsConfig, ConfigError> {
    let defaults = RewardsConfig::default();
    let mut builder = Config::builder()
        .set_default("api.base_url", defaults.api.base_url)?
        .set_default("api.timeout_secs", defaults.api.timeout_secs)?
        .add_source(
            File::with_name(RewardsConfig::filename())
                .format(FileFormat::Toml)
                .required(false),
        );
    if let Some(path) = user_file {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
    }

    builder
        .add_source(Environment::with_prefix("REWARDS").separator("__"))
        .build()?
        .try_deserialize()
}
