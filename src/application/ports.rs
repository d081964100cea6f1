//! 애플리케이션 계층이 의존하는 포트(외부 협력자 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;

use crate::domain::session::{GenerateRequest, LoadedModule, Outcome, ReplRequest, VersionInfo};

/// 소스 파일을 읽어 모듈로 만드는 포트.
pub trait ModuleLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<LoadedModule>;
    /// REPL 기본 시작 모듈.
    fn load_prelude(&self) -> Result<LoadedModule>;
}

/// 코드 생성 백엔드 포트.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<()>;
}

/// 대화형/배치 실행 포트. 세션이 끝날 때의 결과를 돌려준다.
pub trait ReplRunner: Send + Sync {
    fn run(&self, request: &ReplRequest<'_>) -> Result<Outcome>;
}

pub trait VersionProvider: Send + Sync {
    fn current_version(&self) -> VersionInfo;
}

/// 콘솔 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    /// 사용법을 출력한다. `errors`가 비어 있지 않으면 오류와 함께 stderr로 보낸다.
    fn usage(&self, errors: &[String]);
    fn version(&self, info: &VersionInfo);
    fn error(&self, message: &str);
    fn warn(&self, message: &str);
}
