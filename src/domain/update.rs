//! 옵션 업데이트 누적기.
//! 플래그마다 만든 업데이트를 명령행 순서대로 이어 붙인 뒤 기본 설정에서 한 번에 접는다.
//! 오류가 생겨도 나머지 업데이트는 계속 적용해 한 번에 모든 오류를 모은다.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::options::Options;
use crate::domain::target::{GenerationRoot, GenerationTarget};

/// 사람이 읽는 설정 오류 목록. 이어 붙이기로 합쳐진다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .0.join("\n"))]
pub struct OptErrors(Vec<String>);

impl OptErrors {
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn merge(mut self, other: OptErrors) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

impl Extend<String> for OptErrors {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

type Modify = Box<dyn FnOnce(Options) -> Options>;

enum Step {
    Modify(Modify),
    Error(String),
}

/// 설정 변환 또는 오류 추가로 이루어진 업데이트 묶음.
/// `then`은 결합 법칙을 만족하고 `noop`이 항등원이다.
#[derive(Default)]
pub struct OptUpdate {
    steps: Vec<Step>,
}

impl OptUpdate {
    pub fn noop() -> Self {
        Self::default()
    }

    pub fn modify(f: impl FnOnce(Options) -> Options + 'static) -> Self {
        Self {
            steps: vec![Step::Modify(Box::new(f))],
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            steps: vec![Step::Error(message.into())],
        }
    }

    /// `self` 다음에 `next`를 적용하는 업데이트.
    pub fn then(mut self, next: OptUpdate) -> Self {
        self.steps.extend(next.steps);
        self
    }

    /// `init`에서 시작해 왼쪽부터 차례로 접는다.
    pub fn apply(self, init: Options) -> Result<Options, OptErrors> {
        let mut errors = OptErrors::default();
        let mut options = init;
        for step in self.steps {
            match step {
                Step::Modify(f) => options = f(options),
                Step::Error(message) => errors.push(message),
            }
        }

        if errors.is_empty() {
            Ok(options)
        } else {
            Err(errors)
        }
    }

    /// 기본 설정에서 접는다.
    pub fn finish(self) -> Result<Options, OptErrors> {
        self.apply(Options::default())
    }
}

impl FromIterator<OptUpdate> for OptUpdate {
    fn from_iter<I: IntoIterator<Item = OptUpdate>>(iter: I) -> Self {
        iter.into_iter().fold(Self::noop(), Self::then)
    }
}

impl fmt::Debug for OptUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self
            .steps
            .iter()
            .filter(|s| matches!(s, Step::Error(_)))
            .count();
        f.debug_struct("OptUpdate")
            .field("steps", &self.steps.len())
            .field("errors", &errors)
            .finish()
    }
}

// 플래그별 업데이트

pub fn batch_script(path: PathBuf) -> OptUpdate {
    OptUpdate::modify(move |o| Options {
        batch_script: Some(path),
        ..o
    })
}

pub fn show_version() -> OptUpdate {
    OptUpdate::modify(|o| Options {
        show_version: true,
        ..o
    })
}

pub fn show_help() -> OptUpdate {
    OptUpdate::modify(|o| Options {
        show_help: true,
        ..o
    })
}

pub fn ignore_dot_config() -> OptUpdate {
    OptUpdate::modify(|o| Options {
        dot_config: o.dot_config.disable(),
        ..o
    })
}

pub fn add_dot_config_script(path: PathBuf) -> OptUpdate {
    OptUpdate::modify(move |o| Options {
        dot_config: o.dot_config.add_path(path),
        ..o
    })
}

pub fn output_dir(path: PathBuf) -> OptUpdate {
    OptUpdate::modify(move |o| Options {
        output_dir: Some(path),
        ..o
    })
}

pub fn generation_root(raw: &str) -> OptUpdate {
    let root = GenerationRoot::from_cli(raw);
    OptUpdate::modify(move |o| Options {
        generation_root: Some(root),
        ..o
    })
}

/// 이름 해석에 실패하면 설정은 그대로 두고 오류만 남긴다.
pub fn generation_target(name: &str) -> OptUpdate {
    match GenerationTarget::resolve(name) {
        Ok(target) => OptUpdate::modify(move |o| Options {
            generation_target: target,
            ..o
        }),
        Err(err) => OptUpdate::error(err.to_string()),
    }
}

/// 불러올 파일 슬롯은 하나뿐이다. 나중 값이 이전 값을 덮는다.
pub fn load_path(path: PathBuf) -> OptUpdate {
    OptUpdate::modify(move |o| Options {
        load_paths: vec![path],
        ..o
    })
}
