//! 애플리케이션 조립(composition root) 모듈.

use anyhow::Result;

use crate::application::usecases::dispatch::DispatchUseCase;
use crate::domain::options::{Mode, Options};
use crate::infrastructure::adapters::{
    BuildVersionProvider, ConsoleReporter, EngineCodeGenerator, EngineReplRunner,
    FileModuleLoader,
};
use crate::infrastructure::config::Config;
use crate::interface::cli::command::Cli;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    loader: FileModuleLoader,
    generator: EngineCodeGenerator,
    repl: EngineReplRunner,
    version: BuildVersionProvider,
    reporter: ConsoleReporter,
}

impl AppComposition {
    /// 설정 파일 내용으로 어댑터를 만든다.
    pub fn new(config: &Config) -> Self {
        Self {
            loader: FileModuleLoader::new(config.repl.prelude_path.clone()),
            generator: EngineCodeGenerator::new(config.engine_command()),
            repl: EngineReplRunner::new(config),
            version: BuildVersionProvider,
            reporter: reporter(),
        }
    }

    /// help/version 모드에서는 설정 파일을 읽지 않는다.
    pub fn for_options(options: &Options) -> Result<Self> {
        let config = if Mode::select(options).needs_engine() {
            Config::load()?
        } else {
            Config::default()
        };
        Ok(Self::new(&config))
    }

    /// 모드 디스패치 유스케이스를 생성한다.
    pub fn dispatch_usecase(&self) -> DispatchUseCase<'_> {
        DispatchUseCase {
            loader: &self.loader,
            generator: &self.generator,
            repl: &self.repl,
            version: &self.version,
            reporter: &self.reporter,
        }
    }
}

/// 사용법 문서를 담은 콘솔 리포터.
pub fn reporter() -> ConsoleReporter {
    ConsoleReporter::new(Cli::help_text())
}
