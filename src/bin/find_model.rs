//! Manual connectivity check: tries each candidate model against the provider
//! until one answers. Candidates come from `llm.candidate_models`, or from the
//! command line when any arguments are given.

use anyhow::Result;
use clap::Parser;
use campus_notes::{
    config,
    llm::{OpenAiClient, probe},
    telemetry,
};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find the first provider model that answers", long_about = None)]
struct Args {
    /// Models to try in order (default: llm.candidate_models from the config)
    #[arg(value_name = "MODEL")]
    models: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    let config = config::load().await?;
    telemetry::init(&config.server.logs.level)?;

    let candidates = if args.models.is_empty() {
        config.llm.candidate_models.clone()
    } else {
        args.models
    };

    let client = match OpenAiClient::new(&config.llm) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("--- STARTING CONNECTIVITY TEST ---");
    println!("Testing {} models with actual API calls...\n", candidates.len());

    let report = probe::find_working_model(&client, &candidates).await;

    for attempt in &report.attempts {
        println!("Testing {}... {}", attempt.model, attempt.outcome);
    }

    let exit = match report.working_model() {
        Some(attempt) => {
            println!("\nWORKING MODEL FOUND: {}", attempt.model);
            ExitCode::SUCCESS
        }
        None => {
            println!("\nNo candidate model answered");
            ExitCode::FAILURE
        }
    };

    println!("\n--- TEST COMPLETE ---");

    Ok(exit)
}
