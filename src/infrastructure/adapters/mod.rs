//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod code_generator;
mod module_loader;
mod repl_runner;
mod reporter;
mod version_provider;

pub use code_generator::EngineCodeGenerator;
pub use module_loader::{FileModuleLoader, PRELUDE_MODULE};
pub use repl_runner::EngineReplRunner;
pub use reporter::ConsoleReporter;
pub use version_provider::BuildVersionProvider;
