//! 보조 시작 스크립트(dot-config) 병합 정책.

use std::fmt;
use std::path::PathBuf;

/// `--ignore-dot-cryptol`/`--cryptol-script` 요청이 누적된 결과.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DotConfig {
    /// 아무 요청도 없음. 기본 위치의 스크립트를 읽는다.
    #[default]
    Default,
    /// 스크립트 읽기를 명시적으로 끔. 이후 요청은 모두 무시된다.
    Disabled,
    /// 명시된 스크립트 목록. 최신 요청이 앞에 온다.
    ExplicitFiles(Vec<PathBuf>),
}

impl DotConfig {
    /// 비활성화 요청을 반영한다.
    /// `Default`에서만 `Disabled`로 전이하고, 이미 파일이 추가된 상태는 그대로 둔다.
    pub fn disable(self) -> Self {
        match self {
            Self::Default => Self::Disabled,
            other => other,
        }
    }

    /// 스크립트 추가 요청을 반영한다. 새 경로는 목록 앞에 붙는다.
    pub fn add_path(self, path: PathBuf) -> Self {
        match self {
            Self::Default => Self::ExplicitFiles(vec![path]),
            Self::Disabled => Self::Disabled,
            Self::ExplicitFiles(mut paths) => {
                paths.insert(0, path);
                Self::ExplicitFiles(paths)
            }
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// 명시 스크립트를 명령행에 나온 순서대로 돌려준다.
    pub fn explicit_in_order(&self) -> Option<Vec<PathBuf>> {
        match self {
            Self::ExplicitFiles(paths) => Some(paths.iter().rev().cloned().collect()),
            _ => None,
        }
    }
}

impl fmt::Display for DotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Disabled => f.write_str("disabled"),
            Self::ExplicitFiles(paths) => {
                let joined: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                write!(f, "explicit({})", joined.join(", "))
            }
        }
    }
}
