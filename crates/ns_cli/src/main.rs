use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use ns_core::{Credentials, PipelineConfig};
use ns_inference::ModelKind;
use ns_pipeline::Pipeline;
use ns_report::{render_html, ReportStyle};
use ns_scrappers::logging::init_logging;
use ns_web::AppState;

#[derive(Debug, Clone, Copy, PartialEq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        const OVERFLOW: &str = "Duration is too large";

        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_unit = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if !current_number.is_empty() {
                let num = current_number
                    .parse::<u64>()
                    .map_err(|_| OVERFLOW.to_string())?;
                let unit_seconds = match c {
                    's' => 1,
                    'm' => 60,
                    'h' => 3600,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                };
                total_seconds = num
                    .checked_mul(unit_seconds)
                    .and_then(|secs| total_seconds.checked_add(secs))
                    .ok_or_else(|| OVERFLOW.to_string())?;
                current_number.clear();
                has_unit = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // A bare number means seconds
        if !current_number.is_empty() {
            let num = current_number
                .parse::<u64>()
                .map_err(|_| OVERFLOW.to_string())?;
            total_seconds = total_seconds
                .checked_add(num)
                .ok_or_else(|| OVERFLOW.to_string())?;
            has_unit = true;
        }

        if !has_unit {
            return Err("Duration must include a number".to_string());
        }
        if total_seconds == 0 {
            return Err("Duration must be greater than zero".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Find recent news on a topic and summarize it into a report", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, default_value = "groq", help = "Model to use for inference. Available models: groq (default), dummy")]
    model: String,
    /// Model identifier sent to the provider
    #[arg(long, global = true)]
    model_name: Option<String>,
    /// Per-article fetch timeout (e.g. 10s, 1m30s)
    #[arg(long, global = true, default_value = "10s")]
    fetch_timeout: HumanDuration,
    /// How many articles to fetch and summarize at once
    #[arg(long, global = true, default_value_t = 1)]
    concurrency: usize,
    /// Directory that receives saved reports
    #[arg(long, global = true, default_value = ".")]
    output_dir: PathBuf,
    /// Do not write the report to disk
    #[arg(long, global = true)]
    no_save: bool,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Summarize the news for a topic and print the report
    Summarize {
        /// Topic to search for. Read from stdin when omitted.
        topic: Option<String>,
        /// HTML style: standard, serif, mono or corporate
        #[arg(long, default_value = "corporate")]
        style: String,
        /// Also write an HTML rendering of the report to this file
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "0.0.0.0:5000")]
        addr: String,
    },
}

impl Cli {
    fn pipeline_config(&self) -> PipelineConfig {
        let defaults = PipelineConfig::default();
        PipelineConfig {
            model_name: self.model_name.clone().unwrap_or(defaults.model_name),
            fetch_timeout_secs: self.fetch_timeout.0.as_secs(),
            concurrency: self.concurrency.max(1),
            save_reports: !self.no_save,
            ..defaults
        }
    }
}

fn prompt_topic() -> anyhow::Result<String> {
    print!("\n🎯 Enter a news topic to summarize: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

async fn summarize(pipeline: Pipeline, topic: Option<String>, style: &str, html: Option<PathBuf>) -> anyhow::Result<()> {
    let topic = match topic {
        Some(topic) => topic.trim().to_string(),
        None => prompt_topic()?,
    };
    if topic.is_empty() {
        println!("❌ Topic cannot be empty!");
        return Ok(());
    }

    let report = pipeline.run(&topic).await.into_text();
    println!("\n{}", report);

    if let Some(path) = html {
        let style = ReportStyle::from_key(style);
        tokio::fs::write(&path, render_html(&report, style))
            .await
            .with_context(|| format!("Failed to write HTML report to {}", path.display()))?;
        info!("🖨️  HTML report written to {} ({} style)", path.display(), style);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(if cli.verbose { Level::DEBUG } else { Level::INFO });

    let credentials = Credentials::from_env();
    let model_kind: ModelKind = cli.model.parse()?;
    let config = cli.pipeline_config();
    let storage = if cli.no_save {
        ns_storage::create_storage("memory", None)?
    } else {
        ns_storage::create_storage("file", Some(cli.output_dir.clone()))?
    };
    let pipeline = Pipeline::connect(&credentials, model_kind, storage, &config)?;

    match cli.command {
        Commands::Summarize { topic, style, html } => summarize(pipeline, topic, &style, html).await,
        Commands::Serve { addr } => ns_web::serve(&addr, AppState::new(pipeline)).await,
    }
}
