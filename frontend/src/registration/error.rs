//! Error types for the registration workflow.

/// Text shown for any failure that is not the user's fault.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Input problems caught before anything leaves the browser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Mobile number is not exactly ten ASCII digits.
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidMobile,

    /// No logo file was attached to the form.
    #[error("Please attach your logo")]
    MissingLogo,
}

/// Errors that can end a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The form did not pass validation. Phase is left untouched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Submit was triggered while another attempt was still in flight.
    #[error("a registration is already being submitted")]
    InProgress,

    /// The logo file could not be read into memory.
    #[error("failed to read logo file: {reason}")]
    Encoding { reason: String },

    /// The request could not be handed to the network.
    #[error("failed to dispatch registration to '{url}': {reason}")]
    Transport { url: String, reason: String },
}

impl SubmitError {
    /// Text for the blocking notification shown to the user.
    ///
    /// Validation problems are explained, everything else collapses into a
    /// generic message.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(err) => err.to_string(),
            SubmitError::InProgress | SubmitError::Encoding { .. } | SubmitError::Transport { .. } => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}
