//! Lead registration: form state, validation, logo encoding and the single
//! outbound request.

pub mod error;
pub mod guard;
pub mod logo;
pub mod payload;
pub mod request;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{SubmitError, ValidationError};
pub use guard::SubmitGuard;
pub use logo::{BrowserLogo, LogoFile};
pub use request::{FieldUpdate, RegistrationRequest, TextField};
pub use workflow::{SubmissionWorkflow, WorkflowPhase};
