use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::encoding::Encoding;


const FILE_NAME: &str = "mpeg4audio.yml";
const ENV_PREFIX: &str = "MPEG4AUDIO";


#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub encoding: Encoding,

    /// Maximum level for this tool's own log targets
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Loads `mpeg4audio.yml` from `config_dir` if it exists, then applies
    /// `MPEG4AUDIO_*` environment overrides.
    pub fn try_from_path<P>(config_dir: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = config_dir.as_ref().join(FILE_NAME);

        let config = ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
