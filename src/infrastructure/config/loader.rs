//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::Config;

pub const CONFIG_ENV: &str = "CRYPTOL_CLI_CONFIG";

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub loaded_paths: Vec<PathBuf>,
}

/// 주어진 경로를 앞에서부터 병합한다. 없는 파일은 건너뛴다.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<LoadedConfig> {
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.clone());
    }

    Ok(LoadedConfig {
        config: merged,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위
    let mut paths = vec![PathBuf::from("/etc/cryptol/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("cryptol").join("config.json"));
    }

    paths.push(PathBuf::from(".cryptol/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
