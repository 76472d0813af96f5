use chart_axis_spacing::api::{AutoSpacingRequest, AutoSpacingResponse, AxisSpacingEngine};
use chart_axis_spacing::{AxisSpacingConfig, telemetry};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

const USAGE: &str =
    "usage: auto_spacing_tool [--input <path>] [--output <path>] [--config <path>] [--verbose]";

#[derive(Debug, Default)]
struct CliArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let _ = if args.verbose {
        telemetry::init_tracing(telemetry::VERBOSE_LOG_DIRECTIVE)
    } else {
        telemetry::init_default_tracing()
    };

    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("failed to read config `{}`: {e}", path.display()))?;
            AxisSpacingConfig::from_json_str(&text).map_err(|e| e.to_string())?
        }
        None => AxisSpacingConfig::default(),
    };
    let engine = AxisSpacingEngine::new(config).map_err(|e| e.to_string())?;

    let input = match &args.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("failed to read input `{}`: {e}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
            buffer
        }
    };

    let response = match AutoSpacingRequest::from_json_str(&input) {
        Ok(request) => engine.handle_request(&request),
        Err(err) => AutoSpacingResponse::failure(err.to_string()),
    };
    let mut body = response.to_json_pretty().map_err(|e| e.to_string())?;
    body.push('\n');

    match &args.output {
        Some(path) => fs::write(path, body)
            .map_err(|e| format!("failed to write output `{}`: {e}", path.display()))?,
        None => io::stdout()
            .write_all(body.as_bytes())
            .map_err(|e| format!("failed to write stdout: {e}"))?,
    }

    if response.success {
        Ok(())
    } else {
        Err(response
            .error
            .unwrap_or_else(|| "auto-spacing request rejected".to_owned()))
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs::default();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                parsed.input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                parsed.output = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--verbose" | "-v" => parsed.verbose = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    Ok(parsed)
}
