use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Backend(#[from] fleetcore::error::BackendError),
    #[error(transparent)]
    Value(#[from] fleetcore::error::ValueError),
    #[error(transparent)]
    Resolution(#[from] fleetrbac::error::Error),
    #[error("unknown principal: {0}")]
    UnknownPrincipal(String),
    #[error("platform misconfigured: {0}")]
    Misconfiguration(&'static str),
}
