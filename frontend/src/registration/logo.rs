use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_file::{File, ObjectUrl};

use super::error::SubmitError;

/// An attached logo that can be previewed and read back as bytes.
///
/// The browser implementation wraps a `File` from the upload input. Reading is
/// a suspension point, so it is async and must not block the UI thread.
#[async_trait(?Send)]
pub trait LogoFile: Clone + std::fmt::Debug {
    /// Local reference the page can display before anything is uploaded.
    type Preview: Clone + std::fmt::Debug;

    fn preview(&self) -> Self::Preview;

    /// Read the whole file into memory.
    async fn read_bytes(&self) -> Result<Vec<u8>, SubmitError>;
}

/// Logo picked through the `<input type="file">` element.
#[derive(Debug, Clone)]
pub struct BrowserLogo {
    file: File,
}

impl BrowserLogo {
    pub fn new(file: web_sys::File) -> Self {
        Self { file: File::from(file) }
    }
}

/// Object URL of the picked file. The URL is revoked when the last clone is
/// dropped, which happens on reset.
#[derive(Clone)]
pub struct LogoPreview(Rc<ObjectUrl>);

impl LogoPreview {
    pub fn src(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LogoPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LogoPreview").field(&self.src()).finish()
    }
}

#[async_trait(?Send)]
impl LogoFile for BrowserLogo {
    type Preview = LogoPreview;

    fn preview(&self) -> Self::Preview {
        LogoPreview(Rc::new(ObjectUrl::from(self.file.clone())))
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, SubmitError> {
        gloo_file::futures::read_as_bytes(&self.file)
            .await
            .map_err(|e| SubmitError::Encoding {
                reason: format!("{} ({} bytes): {}", self.file.name(), self.file.size(), e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_debug<T: fmt::Debug>() {}

    #[test]
    fn browser_logo_types_are_debug() {
        assert_debug::<BrowserLogo>();
        assert_debug::<LogoPreview>();
        assert_debug::<<BrowserLogo as LogoFile>::Preview>();
    }
}
