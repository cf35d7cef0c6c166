#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown node condition type {0:?}")]
    UnknownKind(String),
}
