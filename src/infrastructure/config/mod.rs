//! 사용자 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정을 우선순위대로 병합한다.

mod loader;
mod types;

use anyhow::Result;
use tracing::debug;

pub use loader::{CONFIG_ENV, LoadedConfig, config_paths, load_from_paths};
pub use types::{Config, DotConfigSettings, EngineConfig, ReplConfig};

impl Config {
    /// 병합된 최종 설정을 로딩한다.
    pub fn load() -> Result<Self> {
        let loaded = load_from_paths(&config_paths())?;
        debug!(paths = ?loaded.loaded_paths, "settings loaded");
        Ok(loaded.config)
    }
}
