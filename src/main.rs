use std::io::Read;
use std::sync::Arc;

use clap::Parser;
use sentiment_analyzer_web::{
    config::Config,
    page::memory::MemoryDocument,
    page::{DisplayRegion, Notifier, Page, INPUT_ID, RESPONSE_ID},
    Analyzer, HttpEndpoint,
};

#[derive(Parser)]
#[command(name = "sentiment-analyzer", about = "Send text to a sentiment analyzer endpoint and print the verdict")]
struct Cli {
    /// Endpoint base URL (overrides SENTIMENT_API_URL)
    #[arg(long)]
    url: Option<String>,

    /// Print a JSON report instead of the rendered result
    #[arg(long)]
    json: bool,

    /// Text to analyze; read from stdin when omitted
    text: Vec<String>,
}

struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Drops the single line ending a pipe or heredoc leaves behind.
fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load()?;
    if let Some(url) = cli.url {
        config = config.with_api_url(url)?;
    }
    log::info!("Using sentiment endpoint at {}", config.api_url);

    let text = if cli.text.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        strip_line_ending(buf)
    } else {
        cli.text.join(" ")
    };

    // Build the page the trigger renders into
    let document = MemoryDocument::standard();
    if let Some(input) = document.get(INPUT_ID) {
        input.set_value(text);
    }
    let page = Page::from_document(&document, Arc::new(StderrNotifier))?;

    let analyzer = Analyzer::new(Arc::new(HttpEndpoint::from_config(&config)?));
    let report = analyzer.run(&page).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(display) = document.get(RESPONSE_ID) {
        let rendered = display.inner_html();
        if !rendered.is_empty() {
            println!("{}", rendered);
        }
    }

    if !report.outcome.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
