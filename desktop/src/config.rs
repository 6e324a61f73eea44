//! Runtime configuration read from environment variables.
//!
//! Everything has a development-friendly default, so `cargo run` against a
//! local backend needs no setup.

use std::env;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_SESSION_FILE: &str = "./minitweet-session.json";

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL, without the `/api` prefix.
    pub api_url: String,
    /// Where the session file lives.
    pub session_file: PathBuf,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// - `MINITWEET_API_URL` overrides the backend base URL.
    /// - `MINITWEET_SESSION_FILE` overrides the session file path.
    pub fn from_env() -> Self {
        let api_url =
            env::var("MINITWEET_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let session_file = env::var("MINITWEET_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        Config {
            api_url,
            session_file,
        }
    }
}
