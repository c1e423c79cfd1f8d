use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ValidationError;

static MOBILE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid mobile regex"));

/// Text inputs of the registration form, keyed by their `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Mobile,
    Email,
    Insta,
    Youtube,
    Website,
}

impl TextField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextField::Name => "name",
            TextField::Mobile => "mobile",
            TextField::Email => "email",
            TextField::Insta => "insta",
            TextField::Youtube => "youtube",
            TextField::Website => "website",
        }
    }
}

impl FromStr for TextField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(TextField::Name),
            "mobile" => Ok(TextField::Mobile),
            "email" => Ok(TextField::Email),
            "insta" => Ok(TextField::Insta),
            "youtube" => Ok(TextField::Youtube),
            "website" => Ok(TextField::Website),
            other => Err(format!("unknown form field '{}'", other)),
        }
    }
}

/// One edit coming from the form.
#[derive(Debug, Clone)]
pub enum FieldUpdate<L> {
    Text(TextField, String),
    Logo(L),
}

/// Everything the user typed or attached, as it currently stands.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationRequest<L> {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub logo: Option<L>,
    pub insta: String,
    pub youtube: String,
    pub website: String,
}

impl<L> Default for RegistrationRequest<L> {
    fn default() -> Self {
        Self {
            name: String::new(),
            mobile: String::new(),
            email: String::new(),
            logo: None,
            insta: String::new(),
            youtube: String::new(),
            website: String::new(),
        }
    }
}

impl<L> RegistrationRequest<L> {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Mobile => &self.mobile,
            TextField::Email => &self.email,
            TextField::Insta => &self.insta,
            TextField::Youtube => &self.youtube,
            TextField::Website => &self.website,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: String) {
        let slot = match field {
            TextField::Name => &mut self.name,
            TextField::Mobile => &mut self.mobile,
            TextField::Email => &mut self.email,
            TextField::Insta => &mut self.insta,
            TextField::Youtube => &mut self.youtube,
            TextField::Website => &mut self.website,
        };
        *slot = value;
    }

    /// Checks run at submit time. Nothing is checked while the user types.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_mobile(&self.mobile) {
            return Err(ValidationError::InvalidMobile);
        }
        if self.logo.is_none() {
            return Err(ValidationError::MissingLogo);
        }
        Ok(())
    }
}

pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_PATTERN.is_match(mobile)
}
