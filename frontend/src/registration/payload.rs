use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use super::error::SubmitError;
use super::logo::LogoFile;
use super::request::RegistrationRequest;

/// JSON body posted to the registration endpoint.
///
/// Field order is the order the sheet script expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub insta: String,
    pub youtube: String,
    pub website: String,
    /// Base64 of the raw file bytes, without a `data:` prefix. Empty when no
    /// logo is attached.
    pub logo: String,
}

impl RegistrationPayload {
    /// Reads and encodes the logo, then copies every text field.
    pub async fn encode<L: LogoFile>(request: &RegistrationRequest<L>) -> Result<Self, SubmitError> {
        let logo = match &request.logo {
            Some(file) => encode_logo(&file.read_bytes().await?),
            None => String::new(),
        };

        Ok(Self {
            name: request.name.clone(),
            mobile: request.mobile.clone(),
            email: request.email.clone(),
            insta: request.insta.clone(),
            youtube: request.youtube.clone(),
            website: request.website.clone(),
            logo,
        })
    }
}

pub fn encode_logo(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
