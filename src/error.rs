use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    InvalidInput(String),
    Authentication(String),
    Fetch(String),
    ModifierFetch { item_id: u64, reason: String },
    Http(String),
    Io(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Http(e.to_string())
    }
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
    pub fn authentication(msg: impl Display) -> Self {
        Self::Authentication(msg.to_string())
    }
    pub fn fetch(msg: impl Display) -> Self {
        Self::Fetch(msg.to_string())
    }
    pub fn modifier_fetch(item_id: u64, reason: impl Display) -> Self {
        Self::ModifierFetch {
            item_id,
            reason: reason.to_string(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::Authentication(msg) => write!(f, "Authentication error: {msg}"),
            Error::Fetch(msg) => write!(f, "Restaurant fetch error: {msg}"),
            Error::ModifierFetch { item_id, reason } => {
                write!(f, "Modifier fetch error for menu item {item_id}: {reason}")
            }
            Error::Http(msg) => write!(f, "HTTP client error: {msg}"),
            Error::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
