//! In-memory stand-ins for the browser file and the network.

use std::cell::RefCell;

use async_trait::async_trait;

use super::error::SubmitError;
use super::logo::LogoFile;
use super::payload::RegistrationPayload;
use crate::utils::api::{Dispatched, FireAndForgetSender};

#[derive(Debug, Clone, PartialEq)]
pub struct FakeLogo {
    bytes: Option<Vec<u8>>,
}

impl FakeLogo {
    pub fn readable(bytes: &[u8]) -> Self {
        Self { bytes: Some(bytes.to_vec()) }
    }

    pub fn unreadable() -> Self {
        Self { bytes: None }
    }
}

#[async_trait(?Send)]
impl LogoFile for FakeLogo {
    type Preview = String;

    fn preview(&self) -> String {
        "blob:preview/logo".to_string()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, SubmitError> {
        self.bytes.clone().ok_or_else(|| SubmitError::Encoding {
            reason: "file is no longer readable".to_string(),
        })
    }
}

/// Records every payload it is handed. Optionally fails like a dropped
/// connection would.
#[derive(Debug, Default)]
pub struct RecordingSender {
    pub sent: RefCell<Vec<RegistrationPayload>>,
    fail: bool,
}

impl RecordingSender {
    pub fn failing() -> Self {
        Self {
            sent: RefCell::default(),
            fail: true,
        }
    }

    pub fn count(&self) -> usize {
        self.sent.borrow().len()
    }
}

#[async_trait(?Send)]
impl FireAndForgetSender for RecordingSender {
    async fn dispatch(&self, payload: &RegistrationPayload) -> Result<Dispatched, SubmitError> {
        if self.fail {
            return Err(SubmitError::Transport {
                url: "https://sheets.invalid/exec".to_string(),
                reason: "TypeError: Failed to fetch".to_string(),
            });
        }
        self.sent.borrow_mut().push(payload.clone());
        Ok(Dispatched)
    }
}
