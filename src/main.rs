//! hanfold - 우회 표기 변형 생성 CLI
//!
//! 인자로 받은 각 문자열(없으면 표준 입력의 각 줄)의 변형 집합을 JSON 배열로 출력합니다.

use clap::Parser;
use hanfold::config::{load_config, load_config_from, save_config, save_config_to, HanfoldConfig};
use hanfold::VariantGenerator;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// 명령행 인자
#[derive(Parser, Debug)]
#[command(name = "hanfold", about = "한글 우회 표기 변형 집합 생성")]
struct CliArgs {
    /// 설정 파일 경로 (기본: $HANFOLD_CONFIG 또는 ~/.config/hanfold/config.json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// 기본 설정 파일을 만들고 종료
    #[arg(long)]
    init_config: bool,
    /// 변형을 만들 문자열 (없으면 표준 입력의 각 줄)
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,
}

fn print_variants(generator: &VariantGenerator, text: &str, out: &mut impl Write) -> Result<(), String> {
    let variants = generator.generate(Some(text)).map_err(|e| e.to_string())?;
    let json = serde_json::to_string(&variants).map_err(|e| format!("직렬화 실패: {}", e))?;
    writeln!(out, "{}", json).map_err(|e| format!("출력 실패: {}", e))
}

fn run(args: CliArgs) -> Result<(), String> {
    if args.init_config {
        let result = match &args.config {
            Some(path) => save_config_to(&HanfoldConfig::default(), path),
            None => save_config(&HanfoldConfig::default()),
        };
        return result.map_err(|e| format!("설정 파일 저장 실패: {}", e));
    }

    let config = match &args.config {
        Some(path) => load_config_from(path).map_err(|e| format!("{}: {}", path.display(), e))?,
        None => load_config(),
    };
    let generator = VariantGenerator::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.texts.is_empty() {
        for text in &args.texts {
            print_variants(&generator, text, &mut out)?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| format!("입력 읽기 실패: {}", e))?;
        print_variants(&generator, &line, &mut out)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
