//! CLI 명령 파싱 모듈.
//! clap이 문법 검사를 맡고, 통과한 플래그는 명령행 순서대로 옵션 업데이트로 바꿔 접는다.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, CommandFactory, Parser};
use tracing::{debug, warn};

use crate::domain::options::Options;
use crate::domain::update::{self, OptErrors, OptUpdate};

/// help/version도 일반 플래그로 누적해야 하므로 clap 기본 플래그는 끈다.
/// 값 없는 플래그는 출현마다 인덱스가 남도록 `Append` + `num_args = 0`으로 선언한다.
#[derive(Debug, Parser)]
#[command(name = "cryptol")]
#[command(about = "Cryptol interpreter and code generator")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Run FILE as a batch script, then exit
    #[arg(short = 'b', long = "batch", value_name = "FILE", action = ArgAction::Append)]
    batch: Vec<PathBuf>,

    /// Print version and build information
    #[arg(short = 'v', long = "version", action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    version: Vec<bool>,

    /// Print this usage message
    #[arg(short = 'h', long = "help", action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    help: Vec<bool>,

    /// Do not read any .cryptolrc startup scripts
    #[arg(long = "ignore-dot-cryptol", action = ArgAction::Append, num_args = 0, default_missing_value = "true")]
    ignore_dot_cryptol: Vec<bool>,

    /// Read FILE as a startup script instead of .cryptolrc (repeatable)
    #[arg(long = "cryptol-script", value_name = "FILE", action = ArgAction::Append)]
    cryptol_script: Vec<PathBuf>,

    /// Write generated code to DIR instead of stdout
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", action = ArgAction::Append)]
    output_dir: Vec<PathBuf>,

    /// Generate code for UNIT (selects code generation mode)
    #[arg(long = "root", value_name = "UNIT", action = ArgAction::Append)]
    root: Vec<String>,

    /// Code generation backend
    #[arg(short = 't', long = "target", value_name = "BACKEND", action = ArgAction::Append)]
    target: Vec<String>,

    /// File to load
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

/// 파싱 실패 유형.
#[derive(Debug)]
pub enum ParseFailure {
    /// 알 수 없는 플래그, 값 누락 등 문법 오류
    Syntax(clap::Error),
    /// 누적 단계에서 모은 의미 오류
    Semantic(OptErrors),
}

impl Cli {
    /// 인자 벡터(프로그램 이름 포함)를 최종 옵션으로 변환한다.
    pub fn parse_options<I, T>(args: I) -> Result<Options, ParseFailure>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Cli::command()
            .try_get_matches_from(args)
            .map_err(ParseFailure::Syntax)?;

        collect_updates(&matches)
            .finish()
            .map_err(ParseFailure::Semantic)
    }

    /// 사용법 문서.
    pub fn help_text() -> String {
        Cli::command().render_help().to_string()
    }
}

/// 모든 플래그 출현을 (인덱스, 업데이트)로 모아 명령행 순서대로 잇는다.
fn collect_updates(matches: &ArgMatches) -> OptUpdate {
    let mut events: Vec<(usize, OptUpdate)> = Vec::new();

    push_values(&mut events, matches, "batch", |p: &PathBuf| {
        update::batch_script(p.clone())
    });
    push_flags(&mut events, matches, "version", update::show_version);
    push_flags(&mut events, matches, "help", update::show_help);
    push_flags(
        &mut events,
        matches,
        "ignore_dot_cryptol",
        update::ignore_dot_config,
    );
    push_values(&mut events, matches, "cryptol_script", |p: &PathBuf| {
        update::add_dot_config_script(p.clone())
    });
    push_values(&mut events, matches, "output_dir", |p: &PathBuf| {
        update::output_dir(p.clone())
    });
    push_values(&mut events, matches, "root", |s: &String| {
        update::generation_root(s)
    });
    push_values(&mut events, matches, "target", |s: &String| {
        update::generation_target(s)
    });
    push_values(&mut events, matches, "files", |p: &PathBuf| {
        update::load_path(p.clone())
    });

    warn_dropped_files(matches);

    debug!(updates = events.len(), "folding option updates");
    events.sort_by_key(|(index, _)| *index);
    events.into_iter().map(|(_, u)| u).collect()
}

fn push_values<T, F>(events: &mut Vec<(usize, OptUpdate)>, matches: &ArgMatches, id: &str, build: F)
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T) -> OptUpdate,
{
    if matches.value_source(id) != Some(ValueSource::CommandLine) {
        return;
    }
    let (Some(indices), Some(values)) = (matches.indices_of(id), matches.get_many::<T>(id)) else {
        return;
    };
    events.extend(indices.zip(values).map(|(index, value)| (index, build(value))));
}

fn push_flags(
    events: &mut Vec<(usize, OptUpdate)>,
    matches: &ArgMatches,
    id: &str,
    build: fn() -> OptUpdate,
) {
    push_values(events, matches, id, |_: &bool| build());
}

fn warn_dropped_files(matches: &ArgMatches) {
    let Some(files) = matches.get_many::<PathBuf>("files") else {
        return;
    };
    let files: Vec<&PathBuf> = files.collect();
    if let Some((last, dropped)) = files.split_last()
        && !dropped.is_empty()
    {
        warn!(
            dropped = ?dropped,
            loading = %last.display(),
            "only one file can be loaded; earlier file arguments are ignored"
        );
    }
}
