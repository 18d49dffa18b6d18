mod api;
mod config;
mod server;
mod state;

use flowdeck_core::storage::local::LocalStore;
use flowdeck_core::storage::Persistence;
use flowdeck_core::BoardStore;

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    log::info!("Board state dir: {}", config.state_dir.display());

    let persistence = Persistence::new(Box::new(LocalStore::new(config.state_dir.clone())));
    let store = BoardStore::open(persistence);
    let state = AppState::new(store);

    if let Err(e) = server::run(&config.bind_address, config.port, state).await {
        log::error!("HTTP server exited with error: {}", e);
        std::process::exit(1);
    }
}
