pub mod decode;
pub mod error;
pub mod form;
pub mod forward;
pub mod handler;
pub mod lambda;
pub mod types;

pub use decode::{decode_body, DecodedBody};
pub use error::RelayError;
pub use form::parse_form;
pub use forward::{Forwarder, HttpForwarder};
pub use handler::{RelayHandler, RelayOutcome, HTTP_ERROR_SENTINEL};
pub use types::{FormValue, InboundEvent, ParsedPayload, RelayResponse};
