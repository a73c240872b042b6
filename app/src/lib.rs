use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use kdw_ai::dataset_builder::{build_dataset, DatasetBuildSummary};
use kdw_ai::embeddings::{Embedder, OllamaEmbedder};
use kdw_ai::fetch::HttpDatasetFetcher;
use kdw_ai::llm::OllamaLlm;
use kdw_ai::ollama::OllamaClient;
use kdw_ai::passages::PassageIndexStatus;
use kdw_ai::session::WisdomService;
use kdw_core::config::{
    WisdomConfig, DATASET_CSV_PATH, DATASET_INPUT_DIR, DATASET_JSONL_PATH, DEFAULT_EMBED_DIMS,
};
use kdw_core::corpus::{DatasetFetcher, OmittedSource};
use kdw_core::error::AppError;
use rand::Rng;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

pub const AWAKENED: &str = "Divine wisdom has been awakened!";
pub const INTERRUPTED: &str = "Divine contemplation was interrupted.";
pub const RETRY_HINT: &str = "Please try again or rephrase your question";

pub const SAMPLE_QUESTIONS: [&str; 8] = [
    "How to find peace in difficult times?",
    "What is my true purpose?",
    "How to deal with overwhelming emotions?",
    "How to cultivate true love?",
    "How to make difficult decisions?",
    "What is the nature of the soul?",
    "How to overcome fear?",
    "How to find meaning in suffering?",
];

#[derive(Parser, Debug)]
#[command(name = "krishnawisdom", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a single question and print the response
    Ask {
        question: String,
    },
    /// Index once, then answer one question per input line until EOF or an empty line
    Chat,
    /// Print the sample questions
    Samples,
    /// Index and list the loaded and omitted scripture sources
    Sources {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the instruction-tuning dataset from ./gita_pdfs
    BuildDataset,
}

#[derive(Debug, serde::Serialize)]
pub struct SourcesReport {
    pub loaded: Vec<String>,
    pub omitted: Vec<OmittedSource>,
    pub index: PassageIndexStatus,
}

type Service = WisdomService<HttpDatasetFetcher, OllamaEmbedder>;

fn connect(config: &WisdomConfig) -> Result<OllamaClient, AppError> {
    let client = OllamaClient::new(&config.ollama_url)?;
    client.health_check()?;
    Ok(client)
}

/// The production embedder must produce vectors of the expected width.
fn verify_index_dims(status: &PassageIndexStatus, expected: u32) -> Result<(), AppError> {
    match status.dims {
        Some(d) if d == expected => Ok(()),
        other => Err(AppError::new(
            "AI_INDEX_BUILD_FAILED",
            "Embedding model produced vectors of an unexpected width",
        )
        .with_details(format!(
            "expected_dims={}; got={}; model={}",
            expected,
            other.map(|d| d.to_string()).unwrap_or_else(|| "none".to_string()),
            status.model.as_deref().unwrap_or("-")
        ))),
    }
}

fn awaken(config: WisdomConfig) -> Result<Service, AppError> {
    let client = connect(&config)?;
    let mut svc = WisdomService::new(HttpDatasetFetcher::new(), OllamaEmbedder::new(client), config);
    svc.ensure_ready()?;
    verify_index_dims(&svc.index_status(), DEFAULT_EMBED_DIMS)?;
    eprintln!("{AWAKENED}");
    Ok(svc)
}

/// Answer one question. Failures are logged, shown to the user as one generic
/// message and swallowed so a chat can continue.
fn answer<F, E, R>(
    svc: &WisdomService<F, E>,
    question: &str,
    rng: &mut R,
    out: &mut impl Write,
) -> io::Result<()>
where
    F: DatasetFetcher,
    E: Embedder,
    R: Rng + ?Sized,
{
    let started = Instant::now();
    match svc.ask(question, rng) {
        Ok(resp) => {
            writeln!(out, "{}", resp.render())?;
            writeln!(
                out,
                "\n(Divine response in {:.1} seconds)",
                started.elapsed().as_secs_f64()
            )?;
        }
        Err(e) => {
            error!(code = %e.code, error = %e, "query failed");
            writeln!(out, "{INTERRUPTED}")?;
            writeln!(out, "{RETRY_HINT}")?;
        }
    }
    Ok(())
}

fn write_samples(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Sample questions:")?;
    for q in SAMPLE_QUESTIONS {
        writeln!(out, "  - {q}")?;
    }
    Ok(())
}

fn io_error(e: io::Error) -> AppError {
    AppError::new("CLI_IO_FAILED", "Failed to write to the terminal").with_details(e.to_string())
}

fn cmd_ask(config: WisdomConfig, question: &str) -> Result<(), AppError> {
    let svc = awaken(config)?;
    answer(&svc, question, &mut rand::thread_rng(), &mut io::stdout().lock()).map_err(io_error)
}

fn cmd_chat(config: WisdomConfig) -> Result<(), AppError> {
    let svc = awaken(config)?;
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut rng = rand::thread_rng();
    write_samples(&mut out).map_err(io_error)?;
    writeln!(out, "\nWhat troubles your heart? What wisdom do you seek?").map_err(io_error)?;
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| {
            AppError::new("CLI_IO_FAILED", "Failed to read from stdin").with_details(e.to_string())
        })?;
        let question = line.trim();
        if question.is_empty() {
            break;
        }
        answer(&svc, question, &mut rng, &mut out).map_err(io_error)?;
        writeln!(out).map_err(io_error)?;
    }
    Ok(())
}

fn sources_report<F: DatasetFetcher, E: Embedder>(svc: &WisdomService<F, E>) -> SourcesReport {
    SourcesReport {
        loaded: svc.loaded_sources(),
        omitted: svc.omitted_sources(),
        index: svc.index_status(),
    }
}

fn cmd_sources(config: WisdomConfig, json: bool) -> Result<(), AppError> {
    let svc = awaken(config)?;
    let report = sources_report(&svc);
    if json {
        let text = serde_json::to_string_pretty(&report).map_err(|e| {
            AppError::new("CLI_OUTPUT_FAILED", "Failed to encode sources report")
                .with_details(e.to_string())
        })?;
        println!("{text}");
        return Ok(());
    }
    println!("Loaded sources:");
    for label in &report.loaded {
        println!("  - {label}");
    }
    if !report.omitted.is_empty() {
        println!("Omitted sources:");
        for o in &report.omitted {
            println!("  - {} ({})", o.label, o.reason);
        }
    }
    println!(
        "Index: {} chunks, {} dims, model {}",
        report.index.chunk_count,
        report.index.dims.unwrap_or(0),
        report.index.model.as_deref().unwrap_or("-")
    );
    Ok(())
}

fn cmd_build_dataset(config: WisdomConfig) -> Result<DatasetBuildSummary, AppError> {
    let llm = OllamaLlm::new(connect(&config)?);
    let summary = build_dataset(
        Path::new(DATASET_INPUT_DIR),
        &llm,
        &config.gen_model,
        Path::new(DATASET_JSONL_PATH),
        Some(Path::new(DATASET_CSV_PATH)),
    )?;
    println!(
        "Processed {} PDF file(s); wrote {} record(s) to {}",
        summary.files_processed,
        summary.records,
        summary.jsonl_path.display()
    );
    if let Some(csv) = &summary.csv_path {
        println!("CSV saved to {}", csv.display());
    }
    Ok(summary)
}

fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .compact()
        .finish();
    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn dispatch(cli: Cli) -> Result<(), AppError> {
    let config = WisdomConfig::default();
    info!(ollama_url = %config.ollama_url, embed_model = %config.embed_model, "starting");
    match cli.command {
        Commands::Ask { question } => cmd_ask(config, &question),
        Commands::Chat => cmd_chat(config),
        Commands::Samples => write_samples(&mut io::stdout().lock()).map_err(io_error),
        Commands::Sources { json } => cmd_sources(config, json),
        Commands::BuildDataset => cmd_build_dataset(config).map(|_| ()),
    }
}

pub fn run() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Divine connection issue: {e}");
            ExitCode::FAILURE
        }
    }
}
