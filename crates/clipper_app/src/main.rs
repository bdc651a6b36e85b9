//! `clipper` command-line host.
mod cli;
mod settings;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use clipper_engine::{
    AtomicFileWriter, Clipper, EngineEvent, EngineHandle, FetchSettings, ReqwestFetcher,
};
use engine_logging::{engine_error, engine_info, LogDestination};
use log::LevelFilter;

use crate::cli::Cli;
use crate::settings::load_settings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let destination = match cli.log_file.clone() {
        Some(path) => LogDestination::Both(path),
        None => LogDestination::Terminal,
    };
    engine_logging::initialize(destination, level);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            engine_error!("{:#}", err);
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every request succeeded or was skipped.
fn run(cli: Cli) -> Result<bool> {
    let settings = load_settings(&cli.settings)?;
    let fetcher = ReqwestFetcher::new(FetchSettings::default())
        .context("building HTTP client")?;
    let clipper = Clipper::new(settings, Arc::new(fetcher));
    let engine = EngineHandle::new(clipper).context("starting engine runtime")?;
    let writer = AtomicFileWriter::new(cli.output.clone());

    for (request_id, input) in cli.inputs.iter().enumerate() {
        engine.enqueue(request_id as u64, input.as_str());
    }

    let mut pending = cli.inputs.len();
    let mut all_ok = true;
    while pending > 0 {
        let Some(event) = engine.recv() else {
            anyhow::bail!("engine stopped with {pending} request(s) outstanding");
        };
        match event {
            EngineEvent::Started { request_id, source } => {
                engine_info!("Request {} recognised as {}", request_id, source);
            }
            EngineEvent::Completed { input, result, .. } => {
                pending -= 1;
                match result {
                    Ok(Some(note)) => match writer.write_note(&note) {
                        Ok(path) => println!("{}", path.display()),
                        Err(err) => {
                            all_ok = false;
                            eprintln!("{input}: could not write note: {err}");
                        }
                    },
                    Ok(None) => println!("skipped (not a recognised link): {input}"),
                    Err(err) => {
                        all_ok = false;
                        eprintln!("{input}: {err}");
                    }
                }
            }
        }
    }
    Ok(all_ok)
}
