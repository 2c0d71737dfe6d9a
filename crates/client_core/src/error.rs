use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("no frame registered under id '{0}'")]
    UnknownFrame(String),
}
