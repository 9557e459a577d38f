use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid length prefix: {0}")]
    LengthPrefix(#[source] prost::DecodeError),
    #[error("length prefix declares {declared} bytes, but {actual} bytes follow")]
    LengthMismatch { declared: u64, actual: usize },
    #[error("failed to decode envelope: {0}")]
    Protobuf(#[from] prost::DecodeError),
    #[error("envelope carries no messages")]
    EmptyMessages,
}

#[derive(Error, Debug)]
pub enum NodeError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid node url: {0}")]
    Url(#[from] url::ParseError),
    #[error("node responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("rpc error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<String>,
    },
    #[error("rpc response has neither result nor error")]
    MissingResult,
    #[error("invalid rpc payload: {0}")]
    InvalidPayload(String),
}

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,
    #[error("invalid bech32 prefix: {0}")]
    InvalidPrefix(String),
    #[error("bech32 encoding failed: {0}")]
    Encode(String),
}

#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
    #[error("node error: {0}")]
    Node(#[from] NodeError),
    #[error("page processing panicked: {0}")]
    Panic(String),
}
