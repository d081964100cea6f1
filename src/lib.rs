//! Cryptol 명령행 프런트엔드 library root.
//! 인자 누적, 모드 선택, 외부 엔진 호출 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::options::Options;
use domain::session::Outcome;
use interface::cli::AppComposition;

/// 라이브러리 직접 호출용 실행 함수.
pub fn run(options: &Options) -> Result<Outcome> {
    let composition = AppComposition::for_options(options)?;
    Ok(composition.dispatch_usecase().execute(options))
}
