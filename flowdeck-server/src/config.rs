use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 7317;

/// Server configuration from environment overrides with platform defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub state_dir: PathBuf,
}

impl ServerConfig {
    /// FLOWDECK_ADDR, FLOWDECK_PORT and FLOWDECK_STATE_DIR override the
    /// defaults (loopback, 7317, `<platform data dir>/flowdeck`).
    pub fn from_env() -> Self {
        let bind_address =
            env::var("FLOWDECK_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("FLOWDECK_PORT")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(port) => Some(port),
                Err(e) => {
                    log::warn!("Ignoring invalid FLOWDECK_PORT {:?}: {}", raw, e);
                    None
                }
            })
            .unwrap_or(DEFAULT_PORT);
        let state_dir = env::var("FLOWDECK_STATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_state_dir());
        ServerConfig {
            bind_address,
            port,
            state_dir,
        }
    }
}

fn default_state_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("flowdeck"))
        .unwrap_or_else(|| PathBuf::from(".flowdeck"))
}
