//! 모드별 유스케이스.

pub mod dispatch;
pub mod generate_code;
pub mod start_repl;

use thiserror::Error;

/// 디스패치 시점에 검사하는 파일 개수 조건 위반.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("must specify exactly one file to load")]
    ExactlyOneFile,
    #[error("only one file may be loaded")]
    OnlyOneFile,
}
