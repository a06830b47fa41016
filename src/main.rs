//! bedrock-drawing - Korean text-to-image Lambda function.

mod adapters;
mod cassette;
mod cli;
mod config;
mod context;
mod error;
mod event;
mod handler;
mod naming;
mod params;
mod ports;
mod scratch;

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::Parser;
use lambda_runtime::{service_fn, LambdaEvent};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::{Config, Settings};
use crate::context::ServiceContext;
use crate::error::DrawingError;
use crate::event::InvocationRequest;
use crate::handler::RequestHandler;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "bedrock_drawing=debug,info" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

async fn run(cli: Cli) -> Result<(), DrawingError> {
    // Loaded once per process; every invocation shares the same settings.
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(DrawingError::Config)?;
    let settings = config.settings()?;

    match cli.load_event()? {
        Some(event) => run_once(event, settings).await,
        None => serve(settings).await,
    }
}

/// Run as a Lambda custom runtime until the platform shuts the process down.
async fn serve(settings: Settings) -> Result<(), DrawingError> {
    let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let handler = Arc::new(RequestHandler::new(ServiceContext::live(&aws), settings));
    info!("lambda runtime starting");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<InvocationRequest>| {
        let handler = Arc::clone(&handler);
        async move { handler.handle(&event.payload).await.map_err(lambda_runtime::Error::from) }
    }))
    .await
    .map_err(|e| DrawingError::Runtime(e.to_string()))
}

/// Run a single invocation locally (live, recording, or replaying).
async fn run_once(event: InvocationRequest, settings: Settings) -> Result<(), DrawingError> {
    let replay_path = std::env::var("DRAWING_REPLAY").ok();
    let is_recording = std::env::var("DRAWING_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        info!(cassette = %cassette_path, "replaying");
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else {
        let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let live = ServiceContext::live(&aws);
        if is_recording {
            let dir = std::env::var("DRAWING_CASSETTE_DIR")
                .map_or_else(|_| PathBuf::from(".drawing/cassettes"), PathBuf::from);
            info!(dir = %dir.display(), "recording");
            let (ctx, session) = ServiceContext::recording(live, &dir);
            (ctx, Some(session))
        } else {
            (live, None)
        }
    };

    let handler = RequestHandler::new(ctx, settings);
    let result = handler.handle(&event).await;
    // The recorder is shared with the handler's adapters until it is dropped.
    drop(handler);

    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => warn!("failed to save cassette: {e}"),
        }
    }

    let ok = result?;
    println!("{ok}");
    Ok(())
}
