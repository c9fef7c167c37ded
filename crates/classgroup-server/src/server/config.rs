use anyhow::bail;
use axum_extra::extract::cookie::Key;
use clap::Parser;
use classgroup::GroupSize;
use core::fmt;
use core::time::Duration;

/// Minimum length of `SESSION_SECRET`, in bytes. The cookie signing key is
/// derived from the first 64 bytes.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

/// Runtime configuration for the `classgroup-server` binary.
///
/// All values are parsed from CLI arguments or environment variables (a `.env`
/// file is loaded first, if present).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "classgroup-server",
    version,
    about = "Shuffle a class roster into groups and download them as a PDF"
)]
pub struct CliArgs {
    /// Address to listen on.
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:5000"))]
    pub server_addr: String,

    /// Group size used when the submitted value is not a positive integer.
    ///
    /// The form never rejects a bad group size; it silently uses this value.
    /// This flag itself must be a positive integer.
    ///
    /// Environment variable: `DEFAULT_GROUP_SIZE`
    #[arg(long, env = "DEFAULT_GROUP_SIZE", default_value_t = GroupSize::DEFAULT)]
    pub default_group_size: GroupSize,

    /// Secret used to sign session cookies. At least 64 bytes.
    ///
    /// When unset, a random key is generated at startup, so sessions are lost
    /// on restart and cannot be shared between replicas.
    ///
    /// Environment variable: `SESSION_SECRET`
    #[arg(long, env = "SESSION_SECRET", hide_env_values = true)]
    pub session_secret: Option<String>,

    /// Seconds of inactivity after which a stored grouping is discarded.
    ///
    /// Environment variable: `SESSION_TTL_SECS`
    #[arg(long, env = "SESSION_TTL_SECS", default_value_t = 3600)]
    pub session_ttl_secs: u64,

    /// Maximum number of names accepted in one submission.
    ///
    /// Environment variable: `MAX_NAMES`
    #[arg(long, env = "MAX_NAMES", default_value_t = 10_000)]
    pub max_names: usize,

    /// Maximum number of live sessions kept in memory. When full, the
    /// session closest to expiry is evicted to make room.
    ///
    /// Environment variable: `MAX_SESSIONS`
    #[arg(long, env = "MAX_SESSIONS", default_value_t = 10_000)]
    pub max_sessions: usize,
}

#[derive(Clone)]
pub struct ServerConfig {
    pub server_addr: String,
    pub default_group_size: GroupSize,
    pub session_key: Key,
    pub session_key_generated: bool,
    pub session_ttl: Duration,
    pub max_names: usize,
    pub max_sessions: usize,
}

impl ServerConfig {
    /// How often expired sessions are swept: a quarter of the TTL, at least
    /// once per second.
    pub fn sweep_interval(&self) -> Duration {
        (self.session_ttl / 4).max(Duration::from_secs(1))
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("server_addr", &self.server_addr)
            .field("default_group_size", &self.default_group_size)
            .field("session_key", &"<redacted>")
            .field("session_key_generated", &self.session_key_generated)
            .field("session_ttl", &self.session_ttl)
            .field("max_names", &self.max_names)
            .field("max_sessions", &self.max_sessions)
            .finish()
    }
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.session_ttl_secs == 0 {
            bail!("SESSION_TTL_SECS must be greater than 0");
        }

        if args.max_names == 0 {
            bail!("MAX_NAMES must be greater than 0");
        }

        if args.max_sessions == 0 {
            bail!("MAX_SESSIONS must be greater than 0");
        }

        let (session_key, session_key_generated) = match args.session_secret {
            Some(secret) if secret.len() < MIN_SESSION_SECRET_LEN => {
                bail!(
                    "SESSION_SECRET is too short ({} bytes, need at least {})",
                    secret.len(),
                    MIN_SESSION_SECRET_LEN
                );
            }
            Some(secret) => (Key::from(secret.as_bytes()), false),
            None => (Key::generate(), true),
        };

        Ok(Self {
            server_addr: args.server_addr,
            default_group_size: args.default_group_size,
            session_key,
            session_key_generated,
            session_ttl: Duration::from_secs(args.session_ttl_secs),
            max_names: args.max_names,
            max_sessions: args.max_sessions,
        })
    }
}
