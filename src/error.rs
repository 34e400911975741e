use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

/// Structured error payload returned by the table store's REST dialect.
///
/// The backend reports failures as a JSON body with `message`, `code`,
/// `details` and `hint` fields alongside the HTTP status.
#[derive(Error, Debug, Clone)]
#[error("backend returned {status}: {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub code: Option<String>,
    pub details: Option<String>,
    pub hint: Option<String>,
}

impl ApiError {
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
            details: None,
            hint: None,
        }
    }

    /// True when a single-object request matched no row (code PGRST116).
    #[must_use]
    pub fn is_no_rows(&self) -> bool {
        self.code.as_deref() == Some("PGRST116")
    }
}

/// Authentication and authorization errors for admin workflows.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("missing credential: {var} is not set")]
    MissingCredential { var: &'static str },

    #[error("sign-in rejected: {0}")]
    SignInFailed(String),

    #[error("account {user_id} is not an admin")]
    NotAdmin { user_id: uuid::Uuid },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("refusing to update {table} with no filters")]
    UnfilteredUpdate { table: &'static str },

    #[error("empty patch for {table}: no fields to update")]
    EmptyPatch { table: &'static str },

    #[error("no {table} row matched the given filter")]
    NotFound { table: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
