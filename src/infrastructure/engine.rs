//! 외부 Cryptol 엔진 프로세스 실행기.

use std::env;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::domain::session::Outcome;

pub const DEFAULT_ENGINE_COMMAND: &str = "cryptol-engine";

/// 엔진 실행 파일과 공통 인자.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EngineCommand {
    /// 표준 입출력을 그대로 물려주고 종료까지 기다린다.
    pub fn run(&self, extra: &[OsString]) -> Result<ExitStatus> {
        if !command_exists(&self.program) {
            bail!("engine program not found in PATH: '{}'", self.program);
        }

        debug!(program = %self.program, args = ?extra, "running engine");
        Command::new(&self.program)
            .args(&self.args)
            .args(extra)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("failed to run engine '{}'", self.program))
    }
}

/// 시그널로 끝난 경우 등 종료 코드가 없으면 일반 실패로 본다.
pub fn outcome_of(status: ExitStatus) -> Outcome {
    status.code().map(Outcome::from_code).unwrap_or(Outcome::Failure(1))
}

/// 로컬 명령이 실행 가능한지 탐지한다.
pub fn command_exists(command: &str) -> bool {
    if command.trim().is_empty() {
        return false;
    }

    // 경로가 주어지면 파일 존재만 검사한다.
    let command_path = Path::new(command);
    if command_path.components().count() > 1 {
        return command_path.is_file();
    }

    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };

    #[cfg(windows)]
    {
        let pathext = env::var_os("PATHEXT").unwrap_or_else(|| ".EXE;.CMD;.BAT;.COM".into());
        let exts: Vec<String> = pathext
            .to_string_lossy()
            .split(';')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        return env::split_paths(&path_var).any(|dir| {
            dir.join(command).is_file()
                || (command_path.extension().is_none()
                    && exts.iter().any(|ext| dir.join(format!("{command}{ext}")).is_file()))
        });
    }

    #[cfg(not(windows))]
    {
        env::split_paths(&path_var).any(|dir| dir.join(command).is_file())
    }
}
