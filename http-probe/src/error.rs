use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for probe operations
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Error taxonomy for a probe attempt.
///
/// The classifier produces exactly one of the first four variants per failed
/// attempt; recovery code matches them from most to least specific. The
/// remaining variants cover configuration loading and never reach the
/// recovery match.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The backend answered 500.
    #[error("{reason}")]
    Server { reason: String },

    /// The backend answered with a 4xx status; the tag refines which one.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Any non-200 status outside the 4xx and 500 carve-outs.
    #[error("Response {status}, {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The transport failed before any status code was produced.
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Client-side (4xx) failures, tagged so callers match structure rather than
/// message text. All tags render with the same `Client issues...` prefix the
/// collapsed classifier used to emit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Status 401.
    #[error("Client issues...{body}")]
    Unauthorized { body: String },

    /// Status 418; keeps the teapot body text.
    #[error("Client issues...{body}")]
    Teapot { body: String },

    /// Any other 4xx status.
    #[error("Client issues...{body}")]
    Other { status: u16, body: String },
}

/// Failures below the status-code layer: the request never yielded a
/// response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection failed: {message}")]
    Connection { message: String },
}

impl ProbeError {
    /// Create a new server error
    pub fn server<S: Into<String>>(reason: S) -> Self {
        Self::Server {
            reason: reason.into(),
        }
    }

    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigNotFound { path } => format!(
                "Configuration file not found at {}. Run with --init to generate a template.",
                path.display()
            ),
            Self::ConfigParse(err) => format!("Could not parse configuration: {err}"),
            _ => format!("{self}"),
        }
    }

    /// The status code this error was classified from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { .. } => Some(500),
            Self::Client(client) => Some(client.status()),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short taxonomy label, stable for operator output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Server { .. } => "server error",
            Self::Client(ClientError::Unauthorized { .. }) => "client error (unauthorized)",
            Self::Client(ClientError::Teapot { .. }) => "client error (teapot)",
            Self::Client(ClientError::Other { .. }) => "client error",
            Self::UnexpectedStatus { .. } => "http error",
            Self::Transport(_) => "transport error",
            Self::UrlParse(_) => "url error",
            Self::Io(_) => "io error",
            Self::ConfigParse(_) | Self::ConfigNotFound { .. } | Self::InvalidConfig { .. } => {
                "configuration error"
            }
        }
    }
}

impl ClientError {
    /// The status code behind this tag.
    pub fn status(&self) -> u16 {
        match self {
            Self::Unauthorized { .. } => 401,
            Self::Teapot { .. } => 418,
            Self::Other { status, .. } => *status,
        }
    }

    /// The response body carried with the failure.
    pub fn body(&self) -> &str {
        match self {
            Self::Unauthorized { body } | Self::Teapot { body } | Self::Other { body, .. } => body,
        }
    }
}

impl TransportError {
    /// Create a new connection failure
    pub fn connection<S: Into<String>>(message: S) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }
}
