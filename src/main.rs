use std::{path::PathBuf, process};

use clap::{error::ErrorKind, Parser};
use paper_checker::{
    read_document, write_score, CheckError, CheckerConfig, JiebaSegmenter, Segmenter, SegmenterKind,
    SimilarityEngine, WhitespaceSegmenter,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// 原文と比較対象の類似度を計算し、答えファイルに小数点以下2桁で書き込む
#[derive(Debug, Parser)]
#[command(name = "paper-checker", version)]
struct Cli {
    /// 原文ファイルのパス
    #[arg(allow_hyphen_values = true)]
    original: PathBuf,
    /// 比較対象 (盗用の疑いがある文書) ファイルのパス
    #[arg(allow_hyphen_values = true)]
    candidate: PathBuf,
    /// 答えファイルのパス
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    };

    // stdout と答えファイルを汚さないようにログは stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CheckError> {
    let config = CheckerConfig::from_env()?;
    debug!(?config, "loaded configuration");

    match config.segmenter {
        SegmenterKind::Jieba => check(
            cli,
            SimilarityEngine::with_segmenter(JiebaSegmenter::with_options(config.cut_mode, config.hmm)),
        ),
        SegmenterKind::Whitespace => check(cli, SimilarityEngine::with_segmenter(WhitespaceSegmenter)),
    }
}

fn check<S: Segmenter>(cli: &Cli, engine: SimilarityEngine<S>) -> Result<(), CheckError> {
    let original = read_document(&cli.original)?;
    let candidate = read_document(&cli.candidate)?;

    let report = engine.report(&original, &candidate);
    info!(
        segmenter = engine.segmenter().name(),
        score = report.score,
        original_tokens = report.original_tokens,
        candidate_tokens = report.candidate_tokens,
        vocabulary = report.vocabulary_size,
        shared = report.shared_terms,
        "computed similarity"
    );

    write_score(&cli.output, report.score)
}
