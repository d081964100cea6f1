//! 코드 생성 모드 유스케이스.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::{CodeGenerator, ModuleLoader};
use crate::application::usecases::DispatchError;
use crate::domain::options::Options;
use crate::domain::session::{GenerateRequest, Outcome};
use crate::domain::target::GenerationRoot;

/// 입력 파일 하나를 불러와 지정한 루트/백엔드로 코드를 생성한다.
pub struct GenerateCodeUseCase<'a> {
    pub loader: &'a dyn ModuleLoader,
    pub generator: &'a dyn CodeGenerator,
}

impl<'a> GenerateCodeUseCase<'a> {
    /// 로딩 실패 시 생성 단계로 넘어가지 않는다.
    pub fn execute(&self, root: &GenerationRoot, options: &Options) -> Result<Outcome> {
        let [path] = options.load_paths.as_slice() else {
            return Err(DispatchError::ExactlyOneFile.into());
        };

        let module = self
            .loader
            .load(path)
            .with_context(|| format!("failed to load {}", path.display()))?;

        info!(
            module = %module.name,
            root = %root,
            target = %options.generation_target,
            "generating code"
        );
        self.generator.generate(&GenerateRequest {
            module: &module,
            output_dir: options.output_dir.as_deref(),
            root,
            target: options.generation_target,
        })?;

        Ok(Outcome::Success)
    }
}
