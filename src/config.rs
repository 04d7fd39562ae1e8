//! Server configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Anything unset falls back to the
//! values in [`BlogConfig::default`].

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use chrono::{FixedOffset, Local};

/// Top-level server configuration.
///
/// Loaded once at startup via [`BlogConfig::from_env`].
#[derive(Debug, Clone)]
pub struct BlogConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Directory holding the collection files.
    pub data_dir: PathBuf,

    /// File name of the post collection inside `data_dir`.
    pub posts_file: String,

    /// File name of the comment collection inside `data_dir`.
    pub comments_file: String,

    /// Root directory for static assets.
    pub static_dir: PathBuf,

    /// UTC offset used when rendering document `date` strings.
    pub display_offset: FixedOffset,

    /// Upper bound on the time spent serving a single request.
    pub request_timeout: Duration,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 3000)),
            data_dir: PathBuf::from("."),
            posts_file: "posts.db".to_string(),
            comments_file: "comments.db".to_string(),
            static_dir: PathBuf::from("."),
            display_offset: *Local::now().offset(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl BlogConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but is not a valid
    /// [`SocketAddr`], or if `DISPLAY_UTC_OFFSET` is set but is not an
    /// offset such as `+09:00`.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("LISTEN_ADDR") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.listen_addr,
        };

        let display_offset = match std::env::var("DISPLAY_UTC_OFFSET") {
            Ok(raw) => raw.parse::<FixedOffset>()?,
            Err(_) => defaults.display_offset,
        };

        let request_timeout = Duration::from_secs(parse_env(
            "REQUEST_TIMEOUT_SECS",
            defaults.request_timeout.as_secs(),
        ));

        Ok(Self {
            listen_addr,
            data_dir: parse_env("DATA_DIR", defaults.data_dir),
            posts_file: parse_env("POSTS_FILE", defaults.posts_file),
            comments_file: parse_env("COMMENTS_FILE", defaults.comments_file),
            static_dir: parse_env("STATIC_DIR", defaults.static_dir),
            display_offset,
            request_timeout,
        })
    }

    /// Full path of the post collection file.
    #[must_use]
    pub fn posts_path(&self) -> PathBuf {
        self.data_dir.join(&self.posts_file)
    }

    /// Full path of the comment collection file.
    #[must_use]
    pub fn comments_path(&self) -> PathBuf {
        self.data_dir.join(&self.comments_file)
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_3000_with_local_files() {
        let config = BlogConfig::default();
        assert_eq!(config.listen_addr.port(), 3000);
        assert_eq!(config.posts_path(), PathBuf::from("./posts.db"));
        assert_eq!(config.comments_path(), PathBuf::from("./comments.db"));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn paths_follow_data_dir() {
        let config = BlogConfig {
            data_dir: PathBuf::from("/var/lib/blog"),
            ..BlogConfig::default()
        };
        assert_eq!(config.posts_path(), PathBuf::from("/var/lib/blog/posts.db"));
    }

    #[test]
    fn offset_strings_parse() {
        let parsed = "+09:00".parse::<FixedOffset>().ok();
        assert_eq!(parsed, FixedOffset::east_opt(9 * 3600));
    }
}
