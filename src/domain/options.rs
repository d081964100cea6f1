//! 명령행 누적 설정과 실행 모드.

use std::path::PathBuf;

use crate::domain::dot_config::DotConfig;
use crate::domain::target::{GenerationRoot, GenerationTarget};

/// 명령행을 한 번 접어 만든 최종 설정. 생성 후에는 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// 불러올 파일. 최대 한 개(마지막 위치 인자가 이긴다).
    pub load_paths: Vec<PathBuf>,
    pub show_version: bool,
    pub show_help: bool,
    /// 대화형 프롬프트 대신 실행할 배치 스크립트
    pub batch_script: Option<PathBuf>,
    pub dot_config: DotConfig,
    /// 생성 코드 출력 디렉터리(없으면 stdout)
    pub output_dir: Option<PathBuf>,
    /// 존재하면 코드 생성 모드로 동작한다.
    pub generation_root: Option<GenerationRoot>,
    pub generation_target: GenerationTarget,
}

/// 최종 설정에서 한 번 계산되는 실행 모드.
/// 코드 생성 모드는 선택 근거인 생성 루트를 함께 들고 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    Help,
    Version,
    CodeGenerate(&'a GenerationRoot),
    RunBatch,
    InteractiveRepl,
}

impl<'a> Mode<'a> {
    /// 우선순위: help > version > 코드 생성 > 배치/대화형.
    pub fn select(options: &'a Options) -> Self {
        if options.show_help {
            return Self::Help;
        }
        if options.show_version {
            return Self::Version;
        }
        if let Some(root) = &options.generation_root {
            return Self::CodeGenerate(root);
        }
        if options.batch_script.is_some() {
            return Self::RunBatch;
        }
        Self::InteractiveRepl
    }

    /// 외부 엔진(로더/생성기/REPL)이 필요한 모드인지.
    pub fn needs_engine(self) -> bool {
        !matches!(self, Self::Help | Self::Version)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Version => "version",
            Self::CodeGenerate(_) => "codegen",
            Self::RunBatch => "batch",
            Self::InteractiveRepl => "repl",
        }
    }
}
