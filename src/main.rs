mod config;
mod error;
mod http;
mod logger;
mod server;

use crate::config::Config;
use crate::error::SetupError;

fn main() {
    if let Err(err) = run() {
        logger::log_fatal(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SetupError> {
    let cfg = Config::load()?;
    logger::log_starting(&cfg);

    // One thread drives everything; connections are served strictly in turn
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(SetupError::Runtime)?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), SetupError> {
    let addr = cfg.resolve_socket_addr()?;
    let listener = server::create_listener(addr)?;

    let bound_addr = listener.local_addr().unwrap_or(addr);
    logger::log_server_start(&bound_addr, server::LISTEN_BACKLOG);

    server::start_server_loop(listener).await
}
