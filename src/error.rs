use thiserror::Error;


/// Errors from parsing a combo-spec string .. these surface synchronously at bind/unbind time, never during dispatch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComboError {
    #[error("unknown key '{0}'")]
    UnknownKey(String),

    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),

    #[error("malformed combination '{0}'")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, ComboError>;
