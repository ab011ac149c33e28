use std::fmt::Display;

use reqwest::StatusCode;

/// Step of the per-test seeding that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupPhase {
    CreateAuthor,
    AssignBook,
}

impl Display for SetupPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupPhase::CreateAuthor => write!(f, "creating the seed author"),
            SetupPhase::AssignBook => write!(f, "assigning the seed book"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url `{0}`")]
    Url(String),

    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not decode response at `{path}`: {source}")]
    Decode {
        path:   String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{entity} came back without an id")]
    MissingId { entity: &'static str },

    #[error("fixture setup failed while {phase}: {source}")]
    Setup {
        phase:  SetupPhase,
        #[source]
        source: Box<Error>,
    },

    #[error("expected status {expected}, got {actual}: {body}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual:   StatusCode,
        body:     String,
    },

    #[error("expected {field} to be {expected:?}, got {actual:?}")]
    UnexpectedBody {
        field:    &'static str,
        expected: String,
        actual:   Option<String>,
    },

    #[error("configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("could not render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

impl Error {
    pub fn setup(phase: SetupPhase, source: Error) -> Self {
        Error::Setup {
            phase,
            source: Box::new(source),
        }
    }

    /// Setup failures abort a scenario before its request is sent, so they are
    /// reported apart from contract failures.
    pub fn is_setup(&self) -> bool {
        matches!(self, Error::Setup { .. })
    }
}

impl From<figment::Error> for Error {
    fn from(value: figment::Error) -> Self {
        Error::Config(Box::new(value))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
