use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum OriginationError {
    /// malformed or out-of-sequence input, rejected before any mutation
    #[error("prescoring failed: {message}")]
    Prescoring { message: String },

    /// the application was denied; terminal for the statement
    #[error("credit denied: {reason}")]
    Denied { reason: String },

    /// the supplied signature code does not match the issued one;
    /// terminal like a denial, but distinguishable by callers
    #[error("signature codes do not match")]
    SignatureMismatch,

    #[error("statement not found: {id}")]
    StatementNotFound { id: Uuid },

    #[error("client not found: {id}")]
    ClientNotFound { id: Uuid },

    #[error("credit not found: {id}")]
    CreditNotFound { id: Uuid },

    /// mutation attempted on a statement that is already CC_DENIED
    #[error("statement change blocked: statement {id} had been denied earlier")]
    ChangeBlocked { id: Uuid },

    /// a remote collaborator failed or returned an unexpected status
    #[error("{service} returned status {status}: {message}")]
    Upstream {
        service: String,
        status: u16,
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

pub type Result<T> = std::result::Result<T, OriginationError>;
