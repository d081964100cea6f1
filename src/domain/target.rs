//! 코드 생성 대상(백엔드)과 생성 루트 해석 모듈.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// 지원하는 코드 생성 백엔드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationTarget {
    /// SBV 기반 C 코드 생성기
    #[default]
    SbvC,
}

impl GenerationTarget {
    pub const ALL: &'static [GenerationTarget] = &[GenerationTarget::SbvC];

    /// 사용자에게 노출되는 정식 이름.
    pub fn name(self) -> &'static str {
        match self {
            Self::SbvC => "sbv-c",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.name()).collect()
    }

    /// 정식 이름과 정확히(대소문자 구분) 일치하는 백엔드를 찾는다.
    pub fn resolve(input: &str) -> Result<Self, UnknownTarget> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == input)
            .ok_or_else(|| UnknownTarget {
                attempted: input.to_string(),
                valid: Self::names(),
            })
    }
}

impl fmt::Display for GenerationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown target '{attempted}'; valid targets are: {}", .valid.join(", "))]
pub struct UnknownTarget {
    pub attempted: String,
    pub valid: Vec<&'static str>,
}

/// 코드를 생성할 단위.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRoot {
    Identifier(String),
    Module(String),
    File(PathBuf),
    Directory(PathBuf),
}

impl GenerationRoot {
    /// 명령행 값은 현재 항상 식별자로 해석한다.
    /// 모듈/파일/디렉터리 구분은 아직 하지 않는다.
    pub fn from_cli(raw: &str) -> Self {
        Self::Identifier(raw.to_string())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "identifier",
            Self::Module(_) => "module",
            Self::File(_) => "file",
            Self::Directory(_) => "directory",
        }
    }

    pub fn value(&self) -> String {
        match self {
            Self::Identifier(name) | Self::Module(name) => name.clone(),
            Self::File(path) | Self::Directory(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for GenerationRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_canonical_name() {
        assert_eq!(GenerationTarget::resolve("sbv-c"), Ok(GenerationTarget::SbvC));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(GenerationTarget::resolve("SBV-C").is_err());
    }

    #[test]
    fn unknown_target_lists_every_valid_name() {
        let err = GenerationTarget::resolve("bogus").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        for name in GenerationTarget::names() {
            assert!(msg.contains(name), "missing {name} in {msg}");
        }
    }

    #[test]
    fn cli_root_is_always_an_identifier() {
        let root = GenerationRoot::from_cli("src/Foo.cry");
        assert_eq!(root, GenerationRoot::Identifier("src/Foo.cry".into()));
        assert_eq!(root.to_string(), "identifier:src/Foo.cry");
    }
}
