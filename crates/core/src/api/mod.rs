//! The client-facing error taxonomy and the `{code, message}` envelope.

mod kind;
mod message;

pub use kind::{error_kind_to_status_code, ErrorKind};
pub use message::ApiMessage;
