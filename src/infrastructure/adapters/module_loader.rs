//! 모듈 로더 포트 구현 어댑터.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::ModuleLoader;
use crate::domain::session::LoadedModule;

pub const PRELUDE_MODULE: &str = "Cryptol";

/// 파일시스템에서 소스를 읽는 로더.
/// 파싱/타입 검사는 엔진 몫이고, 여기서는 읽기와 모듈 이름 결정만 한다.
#[derive(Debug, Clone, Default)]
pub struct FileModuleLoader {
    prelude_path: Option<PathBuf>,
}

impl FileModuleLoader {
    pub fn new(prelude_path: Option<PathBuf>) -> Self {
        Self { prelude_path }
    }
}

impl ModuleLoader for FileModuleLoader {
    fn load(&self, path: &Path) -> Result<LoadedModule> {
        debug!(path = %path.display(), "loading module");
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read module at {}", path.display()))?;

        let name = module_header_name(&source)
            .or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .map(ToString::to_string)
            })
            .with_context(|| format!("cannot determine module name for {}", path.display()))?;

        Ok(LoadedModule {
            name,
            path: Some(path.to_path_buf()),
        })
    }

    fn load_prelude(&self) -> Result<LoadedModule> {
        match &self.prelude_path {
            Some(path) => self.load(path).context("failed to load the prelude"),
            None => Ok(LoadedModule::builtin(PRELUDE_MODULE)),
        }
    }
}

/// 주석/빈 줄을 건너뛴 첫 줄이 `module <Name>`이면 그 이름.
fn module_header_name(source: &str) -> Option<String> {
    let line = source
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with("//"))?;

    let rest = line.strip_prefix("module")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    rest.split_whitespace().next().map(ToString::to_string)
}
