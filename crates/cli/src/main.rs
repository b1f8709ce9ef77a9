//! Triglot command-line entry point
//!
//! Detects the language of text given as arguments, or of each stdin
//! line when run without arguments. Results are printed to stdout as
//! JSON, one object per input; logs go to stderr.

use std::io::BufRead;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use triglot_config::{load_settings, Settings};
use triglot_core::LanguageIdentifier;
use triglot_detect::LexicalDetector;
use triglot_policy::validate_message;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("TRIGLOT_ENV").ok();
    let config = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.environment,
        "Starting triglot"
    );

    let detector = LexicalDetector::new();
    let max_length = config.chat.max_message_length;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        let text = args.join(" ");
        detect_and_print(&detector, &text, max_length).await;
        return Ok(());
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        detect_and_print(&detector, &line, max_length).await;
    }

    Ok(())
}

async fn detect_and_print(detector: &LexicalDetector, text: &str, max_length: usize) {
    if let Err(e) = validate_message(text, max_length) {
        tracing::warn!(error = %e, "skipping input");
        return;
    }
    let result = detector.identify(text).await;
    match serde_json::to_string(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!(error = %e, "failed to serialize result"),
    }
}

/// Initialize tracing on stderr so stdout stays machine-readable
fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("triglot={level},triglot_detect={level},triglot_policy={level}").into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .json()
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}
