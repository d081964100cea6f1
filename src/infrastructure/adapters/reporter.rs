//! 콘솔 리포터 포트 구현 어댑터.

use crate::application::ports::Reporter;
use crate::domain::session::VersionInfo;

/// 사용법/버전은 stdout, 오류/경고는 stderr로 출력한다.
pub struct ConsoleReporter {
    help: String,
}

impl ConsoleReporter {
    /// 출력할 사용법 문서를 받아 생성한다.
    pub fn new(help: String) -> Self {
        Self { help }
    }
}

impl Reporter for ConsoleReporter {
    fn usage(&self, errors: &[String]) {
        if errors.is_empty() {
            println!("{}", self.help.trim_end());
            return;
        }

        for error in errors {
            eprintln!("{}", error.trim_end());
        }
        eprintln!();
        eprintln!("{}", self.help.trim_end());
    }

    fn version(&self, info: &VersionInfo) {
        println!("{info}");
    }

    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("warning: {message}");
    }
}
