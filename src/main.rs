use clap::Parser;
use site_scripts::results::ScriptResult;
use site_scripts::{ScriptConfig, ScriptGenerator, server};
use std::process::ExitCode;
use std::sync::Arc;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match ScriptConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut config = ScriptConfig::default();
            config.apply_env_overrides();
            config
        }
    };

    let generator = match ScriptGenerator::from_config(&config) {
        Ok(generator) => generator,
        Err(e) => {
            ::log::error!("Failed to set up script generator: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.serve {
        let address = args.bind.as_deref().unwrap_or(&config.bind_address);
        return match server::serve(address, Arc::new(generator)).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                ::log::error!("Server failed: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let request = match args.to_request() {
        Ok(request) => request,
        Err(e) => {
            ::log::error!("Failed to read pasted text: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let start_time = std::time::Instant::now();
    match generator.generate(&request).await {
        Ok(result) => {
            ::log::info!(
                "Generated scripts in {:.2} seconds",
                start_time.elapsed().as_secs_f64()
            );
            print_result(&result, args.json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(if e.is_input() { 2 } else { 1 })
        }
    }
}

fn print_result(result: &ScriptResult, json: bool) {
    if json {
        match serde_json::to_string_pretty(result) {
            Ok(out) => println!("{}", out),
            Err(e) => ::log::error!("Failed to serialize scripts: {}", e),
        }
        return;
    }

    println!("=== 60 second script ===\n{}\n", result.script60);
    println!("=== 30 second script ===\n{}", result.script30);
}
