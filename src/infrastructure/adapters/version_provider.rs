//! 빌드 메타데이터 기반 버전 제공 어댑터.

use crate::application::ports::VersionProvider;
use crate::domain::session::VersionInfo;

/// 패키지 버전과 빌드 시 주입된 git 정보(`CRYPTOL_COMMIT`, `CRYPTOL_BRANCH`, `CRYPTOL_DIRTY`).
pub struct BuildVersionProvider;

impl VersionProvider for BuildVersionProvider {
    fn current_version(&self) -> VersionInfo {
        VersionInfo {
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit: non_empty(option_env!("CRYPTOL_COMMIT")),
            branch: non_empty(option_env!("CRYPTOL_BRANCH")),
            dirty: option_env!("CRYPTOL_DIRTY")
                .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true")),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}
