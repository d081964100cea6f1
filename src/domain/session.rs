//! 외부 협력자(로더/생성기/REPL)와 주고받는 값 객체.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::domain::dot_config::DotConfig;
use crate::domain::target::{GenerationRoot, GenerationTarget};

/// 로더가 읽어 들인 모듈.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedModule {
    pub name: String,
    /// 내장 prelude는 경로가 없다.
    pub path: Option<PathBuf>,
}

impl LoadedModule {
    pub fn builtin(name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateRequest<'a> {
    pub module: &'a LoadedModule,
    /// `None`이면 stdout으로 출력한다.
    pub output_dir: Option<&'a Path>,
    pub root: &'a GenerationRoot,
    pub target: GenerationTarget,
}

#[derive(Debug, Clone)]
pub struct ReplRequest<'a> {
    pub dot_config: &'a DotConfig,
    /// 시작 모듈 로딩이 실패했으면 `None`.
    pub startup: Option<&'a LoadedModule>,
    pub batch_script: Option<&'a Path>,
}

/// 빌드 시점 버전 정보.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: String,
    pub commit: Option<String>,
    pub branch: Option<String>,
    pub dirty: bool,
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cryptol {}", self.version)?;
        if let Some(commit) = &self.commit {
            write!(f, "\nGit commit {commit}")?;
        }
        if let Some(branch) = &self.branch {
            write!(f, "\n    branch {branch}")?;
            if self.dirty {
                f.write_str(" (non-committed files present during build)")?;
            }
        }
        Ok(())
    }
}

/// 한 번의 실행 결과. 프로세스 종료 코드로 변환된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(u8),
}

impl Outcome {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Success,
            1..=255 => Self::Failure(code as u8),
            _ => Self::Failure(1),
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure(code) => ExitCode::from(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_without_build_metadata_is_one_line() {
        let info = VersionInfo {
            version: "0.1.0".into(),
            commit: None,
            branch: None,
            dirty: false,
        };
        assert_eq!(info.to_string(), "Cryptol 0.1.0");
    }

    #[test]
    fn dirty_build_is_flagged_after_branch() {
        let info = VersionInfo {
            version: "0.1.0".into(),
            commit: Some("abc123".into()),
            branch: Some("main".into()),
            dirty: true,
        };
        assert_eq!(
            info.to_string(),
            "Cryptol 0.1.0\nGit commit abc123\n    branch main (non-committed files present during build)"
        );
    }

    #[test]
    fn exit_codes_outside_byte_range_become_generic_failure() {
        assert_eq!(Outcome::from_code(0), Outcome::Success);
        assert_eq!(Outcome::from_code(3), Outcome::Failure(3));
        assert_eq!(Outcome::from_code(-9), Outcome::Failure(1));
        assert_eq!(Outcome::from_code(300), Outcome::Failure(1));
    }
}
