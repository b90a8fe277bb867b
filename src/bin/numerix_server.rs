//! Site Backend Server
//!
//! Serves the contact relay and ping endpoints, and optionally the built
//! front-end assets.
//!
//! Usage:
//!   cargo run --release --bin numerix_server
//!   cargo run --release --bin numerix_server -- --port 3000 --static-dir dist/spa
//!
//! Configuration is read from the environment first (`RESEND_API_KEY`,
//! `RESEND_FROM_EMAIL`, `CONTACT_TO_EMAIL`, `PING_MESSAGE`, `NUMERIX_HOST`,
//! `NUMERIX_PORT`, `NUMERIX_STATIC_DIR`); flags override it.

use numerix_site::config::SiteConfig;
use std::process::ExitCode;

fn config_from_args(mut config: SiteConfig) -> Result<SiteConfig, String> {
    let args: Vec<String> = std::env::args().collect();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--host" => {
                i += 1;
                let host = args.get(i).ok_or("--host needs a value")?;
                config = config.with_host(host.clone());
            },
            "--port" | "-p" => {
                i += 1;
                let port = args.get(i).ok_or("--port needs a value")?;
                let port = port
                    .parse()
                    .map_err(|_| format!("invalid port: {}", port))?;
                config = config.with_port(port);
            },
            "--static-dir" => {
                i += 1;
                let dir = args.get(i).ok_or("--static-dir needs a value")?;
                config = config.with_static_dir(dir);
            },
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match config_from_args(SiteConfig::from_env()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = numerix_site::server::serve(config).await {
        log::error!("Server stopped: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
