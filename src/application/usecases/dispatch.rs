//! 최종 설정을 보고 정확히 하나의 외부 협력자를 호출하는 모드 디스패처.

use anyhow::Result;
use tracing::debug;

use crate::application::ports::{CodeGenerator, ModuleLoader, ReplRunner, Reporter, VersionProvider};
use crate::application::usecases::generate_code::GenerateCodeUseCase;
use crate::application::usecases::start_repl::StartReplUseCase;
use crate::domain::options::{Mode, Options};
use crate::domain::session::Outcome;

pub struct DispatchUseCase<'a> {
    pub loader: &'a dyn ModuleLoader,
    pub generator: &'a dyn CodeGenerator,
    pub repl: &'a dyn ReplRunner,
    pub version: &'a dyn VersionProvider,
    pub reporter: &'a dyn Reporter,
}

impl<'a> DispatchUseCase<'a> {
    /// 모드를 한 번 선택하고 해당 협력자를 호출한다.
    /// 협력자 오류는 여기서 출력하고 실패 결과로 바꾼다.
    pub fn execute(&self, options: &Options) -> Outcome {
        let mode = Mode::select(options);
        debug!(mode = mode.label(), "dispatching");

        match mode {
            Mode::Help => {
                self.reporter.usage(&[]);
                Outcome::Success
            }
            Mode::Version => {
                self.reporter.version(&self.version.current_version());
                Outcome::Success
            }
            Mode::CodeGenerate(root) => {
                let usecase = GenerateCodeUseCase {
                    loader: self.loader,
                    generator: self.generator,
                };
                self.report(usecase.execute(root, options))
            }
            Mode::RunBatch | Mode::InteractiveRepl => {
                let usecase = StartReplUseCase {
                    loader: self.loader,
                    repl: self.repl,
                    reporter: self.reporter,
                };
                self.report(usecase.execute(options))
            }
        }
    }

    fn report(&self, result: Result<Outcome>) -> Outcome {
        match result {
            Ok(outcome) => outcome,
            Err(err) => {
                self.reporter.error(&format!("{err:#}"));
                Outcome::Failure(1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use anyhow::bail;

    use super::*;
    use crate::domain::dot_config::DotConfig;
    use crate::domain::session::{GenerateRequest, LoadedModule, ReplRequest, VersionInfo};
    use crate::domain::target::{GenerationRoot, GenerationTarget};

    /// 모든 포트를 구현하고 호출 순서를 기록하는 가짜 협력자.
    #[derive(Default)]
    struct Recorder {
        fail_load: bool,
        fail_prelude: bool,
        fail_generate: bool,
        events: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn record(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }

        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        fn dispatch(&self, options: &Options) -> Outcome {
            DispatchUseCase {
                loader: self,
                generator: self,
                repl: self,
                version: self,
                reporter: self,
            }
            .execute(options)
        }
    }

    impl ModuleLoader for Recorder {
        fn load(&self, path: &Path) -> Result<LoadedModule> {
            self.record(format!("load {}", path.display()));
            if self.fail_load {
                bail!("parse error in {}", path.display());
            }
            Ok(LoadedModule {
                name: "Main".into(),
                path: Some(path.to_path_buf()),
            })
        }

        fn load_prelude(&self) -> Result<LoadedModule> {
            self.record("load prelude".into());
            if self.fail_prelude {
                bail!("prelude missing");
            }
            Ok(LoadedModule::builtin("Cryptol"))
        }
    }

    impl CodeGenerator for Recorder {
        fn generate(&self, request: &GenerateRequest<'_>) -> Result<()> {
            let out = request
                .output_dir
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "stdout".into());
            self.record(format!(
                "generate {} {} {} {}",
                request.module.name, request.root, request.target, out
            ));
            if self.fail_generate {
                bail!("backend crashed");
            }
            Ok(())
        }
    }

    impl ReplRunner for Recorder {
        fn run(&self, request: &ReplRequest<'_>) -> Result<Outcome> {
            let startup = request
                .startup
                .map(|m| m.name.clone())
                .unwrap_or_else(|| "none".into());
            let batch = request
                .batch_script
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".into());
            self.record(format!("repl {} {} {}", request.dot_config, startup, batch));
            Ok(Outcome::Success)
        }
    }

    impl VersionProvider for Recorder {
        fn current_version(&self) -> VersionInfo {
            VersionInfo {
                version: "9.9.9".into(),
                commit: None,
                branch: None,
                dirty: false,
            }
        }
    }

    impl Reporter for Recorder {
        fn usage(&self, errors: &[String]) {
            self.record(format!("usage {}", errors.len()));
        }

        fn version(&self, info: &VersionInfo) {
            self.record(format!("version {}", info.version));
        }

        fn error(&self, message: &str) {
            self.record(format!("error {message}"));
        }

        fn warn(&self, message: &str) {
            self.record(format!("warn {message}"));
        }
    }

    fn codegen(files: &[&str]) -> Options {
        Options {
            generation_root: Some(GenerationRoot::from_cli("foo")),
            load_paths: files.iter().map(PathBuf::from).collect(),
            ..Options::default()
        }
    }

    #[test]
    fn help_wins_over_codegen() {
        let recorder = Recorder::default();
        let options = Options {
            show_help: true,
            ..codegen(&["file.cry"])
        };
        assert_eq!(recorder.dispatch(&options), Outcome::Success);
        assert_eq!(recorder.events(), vec!["usage 0"]);
    }

    #[test]
    fn version_is_reported() {
        let recorder = Recorder::default();
        let options = Options {
            show_version: true,
            ..Options::default()
        };
        assert_eq!(recorder.dispatch(&options), Outcome::Success);
        assert_eq!(recorder.events(), vec!["version 9.9.9"]);
    }

    #[test]
    fn codegen_without_file_fails_before_loading() {
        let recorder = Recorder::default();
        assert_eq!(recorder.dispatch(&codegen(&[])), Outcome::Failure(1));
        assert_eq!(
            recorder.events(),
            vec!["error must specify exactly one file to load"]
        );
    }

    #[test]
    fn codegen_with_two_files_fails_before_loading() {
        let recorder = Recorder::default();
        assert_eq!(
            recorder.dispatch(&codegen(&["a.cry", "b.cry"])),
            Outcome::Failure(1)
        );
        assert_eq!(
            recorder.events(),
            vec!["error must specify exactly one file to load"]
        );
    }

    #[test]
    fn codegen_uses_defaults_for_target_and_sink() {
        let recorder = Recorder::default();
        assert_eq!(recorder.dispatch(&codegen(&["file.x"])), Outcome::Success);
        assert_eq!(
            recorder.events(),
            vec!["load file.x", "generate Main identifier:foo sbv-c stdout"]
        );
    }

    #[test]
    fn codegen_passes_output_directory() {
        let recorder = Recorder::default();
        let options = Options {
            output_dir: Some("out".into()),
            generation_target: GenerationTarget::SbvC,
            ..codegen(&["file.x"])
        };
        recorder.dispatch(&options);
        assert_eq!(
            recorder.events()[1],
            "generate Main identifier:foo sbv-c out"
        );
    }

    #[test]
    fn codegen_stops_when_load_fails() {
        let recorder = Recorder {
            fail_load: true,
            ..Recorder::default()
        };
        assert_eq!(recorder.dispatch(&codegen(&["file.x"])), Outcome::Failure(1));
        let events = recorder.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], "load file.x");
        assert!(events[1].starts_with("error failed to load file.x"));
        assert!(events[1].contains("parse error"));
    }

    #[test]
    fn generator_failure_is_reported() {
        let recorder = Recorder {
            fail_generate: true,
            ..Recorder::default()
        };
        assert_eq!(recorder.dispatch(&codegen(&["file.x"])), Outcome::Failure(1));
        assert_eq!(recorder.events().last().unwrap(), "error backend crashed");
    }

    #[test]
    fn no_flags_loads_prelude_and_starts_repl() {
        let recorder = Recorder::default();
        assert_eq!(recorder.dispatch(&Options::default()), Outcome::Success);
        assert_eq!(
            recorder.events(),
            vec!["load prelude", "repl default Cryptol -"]
        );
    }

    #[test]
    fn prelude_failure_does_not_abort_startup() {
        let recorder = Recorder {
            fail_prelude: true,
            ..Recorder::default()
        };
        assert_eq!(recorder.dispatch(&Options::default()), Outcome::Success);
        assert_eq!(
            recorder.events(),
            vec!["load prelude", "warn prelude missing", "repl default none -"]
        );
    }

    #[test]
    fn user_file_failure_does_not_abort_startup() {
        let recorder = Recorder {
            fail_load: true,
            ..Recorder::default()
        };
        let options = Options {
            load_paths: vec!["b.x".into()],
            ..Options::default()
        };
        assert_eq!(recorder.dispatch(&options), Outcome::Success);
        let events = recorder.events();
        assert_eq!(events[0], "load b.x");
        assert!(events[1].starts_with("warn parse error"));
        assert_eq!(events[2], "repl default none -");
    }

    #[test]
    fn batch_script_and_dot_config_pass_through() {
        let recorder = Recorder::default();
        let options = Options {
            batch_script: Some("run.icry".into()),
            dot_config: DotConfig::Disabled,
            load_paths: vec!["b.x".into()],
            ..Options::default()
        };
        assert_eq!(recorder.dispatch(&options), Outcome::Success);
        assert_eq!(
            recorder.events(),
            vec!["load b.x", "repl disabled Main run.icry"]
        );
    }

    #[test]
    fn more_than_one_file_is_rejected_in_repl_mode() {
        let recorder = Recorder::default();
        let options = Options {
            load_paths: vec!["a.x".into(), "b.x".into()],
            ..Options::default()
        };
        assert_eq!(recorder.dispatch(&options), Outcome::Failure(1));
        assert_eq!(recorder.events(), vec!["error only one file may be loaded"]);
    }
}
