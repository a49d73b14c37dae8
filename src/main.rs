mod artifacts;
mod config;
mod core;
mod models;

use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use crate::config::Settings;
use crate::core::Assessor;
use crate::models::{AssessmentResponse, ScreeningRequest};

/// One-shot assessment CLI: loads the artifacts, reads a screening request
/// as JSON (from a file argument or stdin) and prints the assessment as
/// JSON. Artifact problems are fatal before any input is read, matching
/// the serving precondition.
fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting HemoScan assessment...");

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (model, scaler) =
        match artifacts::load_artifacts(&settings.artifacts.model_path, &settings.artifacts.scaler_path)
        {
            Ok(artifacts) => artifacts,
            Err(e) => {
                error!("Failed to load artifacts: {}", e);
                return ExitCode::FAILURE;
            }
        };

    let assessor = match Assessor::new(Arc::clone(&model), Arc::clone(&scaler)) {
        Ok(assessor) => assessor,
        Err(e) => {
            error!("Artifact schema rejected: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let raw = match read_request_json() {
        Ok(raw) => raw,
        Err(e) => {
            error!("Failed to read request: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let request: ScreeningRequest = match serde_json::from_str(&raw) {
        Ok(request) => request,
        Err(e) => {
            error!("Invalid request JSON: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let assessment = match assessor.assess(&request) {
        Ok(assessment) => assessment,
        Err(e) => {
            error!("Validation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let response = AssessmentResponse::from(assessment);
    match serde_json::to_string_pretty(&response) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Read the request payload from the first CLI argument (a path) or,
/// absent one, from stdin.
fn read_request_json() -> std::io::Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
