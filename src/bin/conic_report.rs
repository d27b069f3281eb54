use clap::Parser;
use conic::{ConicError, PlotConfig, Session};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Derive and print the geometry of a standard-form ellipse or hyperbola.
#[derive(Parser, Debug)]
#[command(name = "conic-report", version, about)]
struct Args {
    /// Print geometry, report and plot scene as JSON
    #[arg(long)]
    json: bool,

    /// Plot configuration file (JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Equation such as (x-3)^2/16 + (y-2)^2/9 = 1; words are joined with spaces
    #[arg(required = true)]
    equation: Vec<String>,
}

fn run(args: &Args) -> conic::Result<String> {
    let config = match &args.config {
        Some(path) => PlotConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => PlotConfig::default(),
    };
    let mut session = Session::new(config)?;
    session.submit(&args.equation.join(" "))?;

    if args.json {
        let out = serde_json::json!({
            "geometry": session.geometry(),
            "report": session.report(),
            "scene": session.scene(),
        });
        Ok(serde_json::to_string_pretty(&out)?)
    } else {
        Ok(session.report().map(|r| r.to_string()).unwrap_or_default())
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(ConicError::Parse(e)) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
