use std::path::PathBuf;
use std::sync::Arc;

use topsecret::utils::config::CONFIG_PATH_ENV;
use topsecret::{start_server, ServiceConfig, TopSecretService};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [config.json]");
    eprintln!("   or: {program} --print-config [config.json]");
    eprintln!("The config path may also be set with {CONFIG_PATH_ENV}.");
}

fn load_config(path: Option<PathBuf>) -> Result<ServiceConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(ServiceConfig::load_from_file(path)?),
        None => Ok(ServiceConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("topsecret", |s| s.as_str());

    let (print_config, path_arg) = match args.get(1..).unwrap_or(&[]) {
        [] => (false, None),
        [flag] if flag == "--print-config" => (true, None),
        [flag, path] if flag == "--print-config" => (true, Some(path.clone())),
        [flag] if flag == "--help" || flag == "-h" => {
            print_usage(program);
            return Ok(());
        }
        [path] => (false, Some(path.clone())),
        _ => {
            print_usage(program);
            return Err("Invalid arguments".into());
        }
    };

    let path = path_arg
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok())
        .map(PathBuf::from);
    let config = load_config(path.clone())?;

    if print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_target(true)
        .init();

    match &path {
        Some(path) => info!(path = %path.display(), "configuration loaded"),
        None => info!("using built-in configuration"),
    }
    for warning in config.validate().warnings {
        warn!("{warning}");
    }

    let service = Arc::new(TopSecretService::new(&config));
    start_server(&config.server, service).await?;

    Ok(())
}
