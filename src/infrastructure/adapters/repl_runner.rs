//! REPL/배치 실행 포트 구현 어댑터.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::application::ports::ReplRunner;
use crate::domain::dot_config::DotConfig;
use crate::domain::session::{Outcome, ReplRequest};
use crate::infrastructure::config::Config;
use crate::infrastructure::engine::{EngineCommand, outcome_of};

/// 외부 엔진의 `repl` 하위 명령으로 세션을 넘긴다.
pub struct EngineReplRunner {
    engine: EngineCommand,
    prompt: Option<String>,
    dot_file_names: Vec<String>,
    search_dirs: Vec<PathBuf>,
}

impl EngineReplRunner {
    pub fn new(config: &Config) -> Self {
        Self {
            engine: config.engine_command(),
            prompt: config.repl.prompt.clone(),
            dot_file_names: config.dot_config_file_names(),
            search_dirs: default_search_dirs(),
        }
    }
}

impl ReplRunner for EngineReplRunner {
    fn run(&self, request: &ReplRequest<'_>) -> Result<Outcome> {
        let scripts =
            resolve_dot_scripts(request.dot_config, &self.dot_file_names, &self.search_dirs);
        debug!(policy = %request.dot_config, scripts = ?scripts, "dot-config scripts resolved");

        if let Some(batch) = request.batch_script {
            info!(script = %batch.display(), "running batch script");
        }
        let args = repl_args(request, &scripts, self.prompt.as_deref());
        Ok(outcome_of(self.engine.run(&args)?))
    }
}

/// 현재 디렉터리, 홈 디렉터리 순.
fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs_out = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        dirs_out.push(cwd);
    }
    if let Some(home) = dirs::home_dir()
        && !dirs_out.contains(&home)
    {
        dirs_out.push(home);
    }
    dirs_out
}

/// 정책에 따라 실제로 읽을 보조 스크립트 목록을 정한다.
/// 기본 정책은 존재하는 파일만, 명시 정책은 명령행 순서 그대로 넘긴다.
pub(crate) fn resolve_dot_scripts(
    policy: &DotConfig,
    file_names: &[String],
    search_dirs: &[PathBuf],
) -> Vec<PathBuf> {
    match policy {
        DotConfig::Disabled => Vec::new(),
        DotConfig::ExplicitFiles(_) => policy.explicit_in_order().unwrap_or_default(),
        DotConfig::Default => search_dirs
            .iter()
            .flat_map(|dir| file_names.iter().map(move |name| dir.join(name)))
            .filter(|path| path.is_file())
            .collect(),
    }
}

/// `repl [--prompt P] [--script F]... [--load F | --no-load] [--batch F]`
pub(crate) fn repl_args(
    request: &ReplRequest<'_>,
    scripts: &[PathBuf],
    prompt: Option<&str>,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["repl".into()];

    if let Some(prompt) = prompt {
        args.push("--prompt".into());
        args.push(prompt.into());
    }
    for script in scripts {
        args.push("--script".into());
        args.push(script.clone().into_os_string());
    }

    // 내장 prelude는 엔진이 스스로 불러온다.
    match request.startup {
        Some(module) => {
            if let Some(path) = &module.path {
                args.push("--load".into());
                args.push(path.clone().into_os_string());
            }
        }
        None => args.push("--no-load".into()),
    }

    if let Some(batch) = request.batch_script {
        args.push("--batch".into());
        args.push(batch.as_os_str().to_os_string());
    }
    args
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;
    use crate::domain::session::LoadedModule;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn default_policy_finds_existing_files_in_search_order() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        fs::write(cwd.path().join(".cryptolrc"), ":set base=16\n").unwrap();
        fs::write(home.path().join(".cryptolrc"), ":set ascii=on\n").unwrap();

        let scripts = resolve_dot_scripts(
            &DotConfig::Default,
            &[".cryptolrc".to_string(), ".missingrc".to_string()],
            &[cwd.path().to_path_buf(), home.path().to_path_buf()],
        );
        assert_eq!(
            scripts,
            vec![
                cwd.path().join(".cryptolrc"),
                home.path().join(".cryptolrc")
            ]
        );
    }

    #[test]
    fn disabled_policy_reads_nothing() {
        let cwd = tempfile::tempdir().unwrap();
        fs::write(cwd.path().join(".cryptolrc"), "").unwrap();
        let scripts = resolve_dot_scripts(
            &DotConfig::Disabled,
            &[".cryptolrc".to_string()],
            &[cwd.path().to_path_buf()],
        );
        assert!(scripts.is_empty());
    }

    #[test]
    fn explicit_scripts_keep_command_line_order() {
        let policy = DotConfig::Default
            .add_path("first.icry".into())
            .add_path("second.icry".into());
        let scripts = resolve_dot_scripts(&policy, &[], &[]);
        assert_eq!(
            scripts,
            vec![PathBuf::from("first.icry"), PathBuf::from("second.icry")]
        );
    }

    #[test]
    fn failed_startup_load_starts_empty_session() {
        let args = repl_args(
            &ReplRequest {
                dot_config: &DotConfig::Default,
                startup: None,
                batch_script: None,
            },
            &[],
            None,
        );
        assert_eq!(strings(&args), vec!["repl", "--no-load"]);
    }

    #[test]
    fn builtin_prelude_needs_no_load_flag() {
        let prelude = LoadedModule::builtin("Cryptol");
        let args = repl_args(
            &ReplRequest {
                dot_config: &DotConfig::Default,
                startup: Some(&prelude),
                batch_script: None,
            },
            &[],
            Some("cry> "),
        );
        assert_eq!(strings(&args), vec!["repl", "--prompt", "cry> "]);
    }

    #[test]
    fn file_scripts_and_batch_are_forwarded() {
        let module = LoadedModule {
            name: "Main".into(),
            path: Some("b.cry".into()),
        };
        let args = repl_args(
            &ReplRequest {
                dot_config: &DotConfig::Default,
                startup: Some(&module),
                batch_script: Some(Path::new("run.icry")),
            },
            &[PathBuf::from("rc.icry")],
            None,
        );
        assert_eq!(
            strings(&args),
            vec![
                "repl", "--script", "rc.icry", "--load", "b.cry", "--batch", "run.icry"
            ]
        );
    }
}
