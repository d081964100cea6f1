//! 코드 생성 포트 구현 어댑터. 실제 백엔드는 외부 엔진이 수행한다.

use std::ffi::OsString;
use std::fs;

use anyhow::{Context, Result, bail};

use crate::application::ports::CodeGenerator;
use crate::domain::session::GenerateRequest;
use crate::infrastructure::engine::EngineCommand;

pub struct EngineCodeGenerator {
    engine: EngineCommand,
}

impl EngineCodeGenerator {
    pub fn new(engine: EngineCommand) -> Self {
        Self { engine }
    }
}

impl CodeGenerator for EngineCodeGenerator {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<()> {
        if let Some(dir) = request.output_dir {
            fs::create_dir_all(dir).with_context(|| {
                format!("failed to create output directory {}", dir.display())
            })?;
        }

        let status = self.engine.run(&codegen_args(request))?;
        if !status.success() {
            bail!(
                "code generation for {} with {} failed ({status})",
                request.root,
                request.target
            );
        }
        Ok(())
    }
}

/// `codegen --target T --root kind:value --module M [--source F] [--output-dir D]`
pub(crate) fn codegen_args(request: &GenerateRequest<'_>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "codegen".into(),
        "--target".into(),
        request.target.name().into(),
        "--root".into(),
        request.root.to_string().into(),
        "--module".into(),
        request.module.name.clone().into(),
    ];

    if let Some(path) = &request.module.path {
        args.push("--source".into());
        args.push(path.clone().into_os_string());
    }
    if let Some(dir) = request.output_dir {
        args.push("--output-dir".into());
        args.push(dir.as_os_str().to_os_string());
    }
    args
}
