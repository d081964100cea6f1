//! Domain layer
//! 명령행 설정/모드 선택 규칙을 외부 의존성 없이 표현한다.

pub mod dot_config;
pub mod options;
pub mod session;
pub mod target;
pub mod update;
