use log::{info, warn};

use super::error::SubmitError;
use super::logo::LogoFile;
use super::payload::RegistrationPayload;
use super::request::{FieldUpdate, RegistrationRequest};
use crate::utils::api::{Dispatched, FireAndForgetSender};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
}

/// State of the registration form from mount until the user acknowledges a
/// successful registration.
#[derive(Debug, Clone)]
pub struct SubmissionWorkflow<L: LogoFile> {
    request: RegistrationRequest<L>,
    preview: Option<L::Preview>,
    phase: WorkflowPhase,
}

impl<L: LogoFile> Default for SubmissionWorkflow<L> {
    fn default() -> Self {
        Self {
            request: RegistrationRequest::default(),
            preview: None,
            phase: WorkflowPhase::Editing,
        }
    }
}

/// Snapshot of the form taken when a submission starts.
///
/// Edits made while the request is in flight do not leak into it.
#[derive(Debug, Clone)]
pub struct Submission<L> {
    request: RegistrationRequest<L>,
}

impl<L: LogoFile> Submission<L> {
    /// Encodes the logo, then dispatches exactly one request.
    pub async fn send<S: FireAndForgetSender>(self, sender: &S) -> Result<Dispatched, SubmitError> {
        let payload = RegistrationPayload::encode(&self.request).await?;
        sender.dispatch(&payload).await
    }
}

impl<L: LogoFile> SubmissionWorkflow<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    pub fn request(&self) -> &RegistrationRequest<L> {
        &self.request
    }

    pub fn preview(&self) -> Option<&L::Preview> {
        self.preview.as_ref()
    }

    pub fn update_field(&mut self, update: FieldUpdate<L>) {
        match update {
            FieldUpdate::Text(field, value) => self.request.set_text(field, value),
            FieldUpdate::Logo(file) => {
                self.preview = Some(file.preview());
                self.request.logo = Some(file);
            }
        }
    }

    /// Validates the form without changing any state.
    pub fn prepare(&self) -> Result<Submission<L>, SubmitError> {
        if self.phase != WorkflowPhase::Editing {
            return Err(SubmitError::InProgress);
        }
        self.request.validate()?;
        Ok(Submission {
            request: self.request.clone(),
        })
    }

    /// Editing -> Submitting. On error the phase is left as it was.
    pub fn begin_submit(&mut self) -> Result<Submission<L>, SubmitError> {
        let submission = self.prepare()?;
        info!("Submitting registration");
        self.phase = WorkflowPhase::Submitting;
        Ok(submission)
    }

    /// Submitting -> Succeeded, or back to Editing when the attempt failed.
    pub fn complete_submit(&mut self, outcome: &Result<Dispatched, SubmitError>) {
        if self.phase != WorkflowPhase::Submitting {
            warn!("Ignoring submission result outside of the submitting phase");
            return;
        }
        self.phase = match outcome {
            Ok(Dispatched) => {
                info!("Registration dispatched");
                WorkflowPhase::Succeeded
            }
            Err(e) => {
                warn!("Registration failed: {}", e);
                WorkflowPhase::Editing
            }
        };
    }

    /// Runs a whole attempt: validate, encode, dispatch, transition.
    pub async fn submit<S: FireAndForgetSender>(&mut self, sender: &S) -> Result<Dispatched, SubmitError> {
        let submission = self.begin_submit()?;
        let outcome = submission.send(sender).await;
        self.complete_submit(&outcome);
        outcome
    }

    /// Drops every field and the preview, back to a blank form.
    pub fn acknowledge(&mut self) {
        info!("Registration acknowledged, resetting form");
        *self = Self::default();
    }
}
