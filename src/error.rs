#![allow(missing_docs)]

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Listener is released")]
    ListenerReleased,

    #[cfg(feature = "dummy")]
    #[error("Relay {0} already exists")]
    RelayAlreadyExists(String),

    #[cfg(feature = "dummy")]
    #[error("Relay {0} not found")]
    RelayNotFound(String),

    #[cfg(feature = "dummy")]
    #[error("Dispatcher delivery task has stopped")]
    DispatcherClosed,
}
