//! 대화형/배치 모드 유스케이스.

use anyhow::Result;
use tracing::debug;

use crate::application::ports::{ModuleLoader, ReplRunner, Reporter};
use crate::application::usecases::DispatchError;
use crate::domain::options::Options;
use crate::domain::session::{Outcome, ReplRequest};

/// 시작 모듈을 불러온 뒤 REPL(또는 배치 스크립트)을 실행한다.
pub struct StartReplUseCase<'a> {
    pub loader: &'a dyn ModuleLoader,
    pub repl: &'a dyn ReplRunner,
    pub reporter: &'a dyn Reporter,
}

impl<'a> StartReplUseCase<'a> {
    /// 시작 모듈 로딩 실패는 경고만 남기고 세션은 그대로 시작한다.
    pub fn execute(&self, options: &Options) -> Result<Outcome> {
        let loaded = match options.load_paths.as_slice() {
            [] => self.loader.load_prelude(),
            [path] => self.loader.load(path),
            _ => return Err(DispatchError::OnlyOneFile.into()),
        };

        let startup = match loaded {
            Ok(module) => {
                debug!(module = %module.name, "startup module loaded");
                Some(module)
            }
            Err(err) => {
                self.reporter.warn(&format!("{err:#}"));
                None
            }
        };

        self.repl.run(&ReplRequest {
            dot_config: &options.dot_config,
            startup: startup.as_ref(),
            batch_script: options.batch_script.as_deref(),
        })
    }
}
