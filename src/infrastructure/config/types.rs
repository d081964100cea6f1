//! 설정 스키마와 병합/해석 규칙.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::infrastructure::engine::{DEFAULT_ENGINE_COMMAND, EngineCommand};

pub const ENGINE_ENV: &str = "CRYPTOL_ENGINE";
pub const DEFAULT_DOT_CONFIG_FILE: &str = ".cryptolrc";

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// 외부 엔진 실행 설정
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub repl: ReplConfig,
    /// 보조 시작 스크립트 탐색 설정
    #[serde(default)]
    pub dot_config: DotConfigSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub command: Option<String>,
    /// 모든 호출 앞에 붙는 인자
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: Option<String>,
    /// 내장 prelude 대신 읽을 시작 모듈 경로
    pub prelude_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct DotConfigSettings {
    pub file_names: Option<Vec<String>>,
}

impl Config {
    /// 엔진 명령은 `CRYPTOL_ENGINE` 환경변수가 설정 파일보다 우선한다.
    pub fn engine_command(&self) -> EngineCommand {
        let program = env::var(ENGINE_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.engine.command.clone())
            .unwrap_or_else(|| DEFAULT_ENGINE_COMMAND.to_string());

        EngineCommand {
            program,
            args: self.engine.args.clone().unwrap_or_default(),
        }
    }

    pub fn dot_config_file_names(&self) -> Vec<String> {
        self.dot_config
            .file_names
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_DOT_CONFIG_FILE.to_string()])
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub(crate) fn merge_from(&mut self, other: Config) {
        if other.engine.command.is_some() {
            self.engine.command = other.engine.command;
        }
        if other.engine.args.is_some() {
            self.engine.args = other.engine.args;
        }
        if other.repl.prompt.is_some() {
            self.repl.prompt = other.repl.prompt;
        }
        if other.repl.prelude_path.is_some() {
            self.repl.prelude_path = other.repl.prelude_path;
        }
        if other.dot_config.file_names.is_some() {
            self.dot_config.file_names = other.dot_config.file_names;
        }
    }
}
