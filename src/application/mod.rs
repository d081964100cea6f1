//! Application layer
//! 모드별 유스케이스를 정의하고 포트(추상 인터페이스)를 통해 외부 협력자를 사용한다.

pub mod ports;
pub mod usecases;
