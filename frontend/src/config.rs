/// Google Apps Script that appends registrations to the leads sheet.
const DEFAULT_REGISTRATION_URL: &str =
    "https://script.google.com/macros/s/AKfycbyWtlls_SjcOiNkSBmF2LMXmnG3a5XwiFfXi54Tkr191JndhuLRbGJIZ-6hYMU3_sNgMg/exec";

/// Endpoint registrations are posted to. Override at build time with
/// `REGISTRATION_URL=... trunk build`.
pub fn get_registration_url() -> &'static str {
    option_env!("REGISTRATION_URL").unwrap_or(DEFAULT_REGISTRATION_URL)
}

pub const BRAND_NAME: &str = "AKSHAYA CREATIVE ADS";
pub const CONTACT_NUMBER: &str = "824-7707-851";
pub const OFFER_PRICE: &str = "15K / month";
pub const OFFER_ITEMS: &[&str] = &["5 Hollywood Style Video Ads", "5 Hollywood Style Posters"];
