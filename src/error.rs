use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Problem-configuration failures. A missing solution is never an error;
/// these only cover malformed problem setups, reported at registration time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("constraint references undeclared variable {0}")]
    UndeclaredVariable(String),
    #[error("variable {0} was declared without a domain")]
    MissingDomain(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<ConfigError>,
        backtrace: Box<Backtrace>,
    },
}

impl Error {
    /// The configuration failure carried by this error.
    pub fn config(&self) -> &ConfigError {
        match self {
            Error::Inner { inner, .. } => inner,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(inner: ConfigError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
