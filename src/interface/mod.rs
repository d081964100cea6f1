//! Interface layer
//! 명령행 입력을 받아 유스케이스를 조립/호출한다.

pub mod cli;
