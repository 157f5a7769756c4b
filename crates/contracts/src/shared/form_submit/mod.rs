//! Form submission contract shared between the browser interceptor and
//! the endpoints it talks to.
//!
//! A submission is gathered into a [`SubmissionIntent`], turned into a
//! transport-independent [`OutboundRequest`], and the answer is reduced to
//! an [`InboundResponse`] that decides whether the page navigates.

pub mod error;
pub mod fields;
pub mod intent;
pub mod method;
pub mod protocol;

pub use error::SubmitError;
pub use fields::FieldSet;
pub use intent::{OutboundRequest, SubmissionIntent};
pub use method::FormMethod;
pub use protocol::{InboundResponse, SubmitOutcome};
