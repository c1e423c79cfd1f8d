use log::info;

use super::catalog::{self, VideoAd};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("no video with id {id} in the catalog")]
    UnknownVideo { id: u32 },
}

/// Where a pointer interaction on the open overlay started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    Backdrop,
    CloseButton,
    /// The player itself. Never closes the overlay.
    MediaSurface,
}

/// Which video, if any, is open in the full-screen overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MediaViewer {
    selected: Option<&'static VideoAd>,
}

impl MediaViewer {
    pub fn selected(&self) -> Option<&'static VideoAd> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Opens the overlay on a catalog entry. Unknown ids leave the viewer as
    /// it was.
    pub fn select(&mut self, id: u32) -> Result<&'static VideoAd, MediaError> {
        let video = catalog::find_video(id).ok_or(MediaError::UnknownVideo { id })?;
        info!("Opening video {} in overlay", video.id);
        self.selected = Some(video);
        Ok(video)
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn handle_click(&mut self, origin: OverlayClick) {
        match origin {
            OverlayClick::Backdrop | OverlayClick::CloseButton => self.dismiss(),
            OverlayClick::MediaSurface => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MediaViewer::default().is_open());
    }

    #[test]
    fn select_then_dismiss_clears_selection() {
        let mut viewer = MediaViewer::default();

        let video = viewer.select(2).unwrap();
        assert_eq!(video.src, "/video2.mp4");
        assert_eq!(viewer.selected().map(|v| v.id), Some(2));

        viewer.dismiss();
        assert_eq!(viewer.selected(), None);
    }

    #[test]
    fn clicks_on_the_player_keep_it_open() {
        let mut viewer = MediaViewer::default();
        viewer.select(4).unwrap();

        viewer.handle_click(OverlayClick::MediaSurface);
        assert_eq!(viewer.selected().map(|v| v.id), Some(4));

        viewer.handle_click(OverlayClick::Backdrop);
        assert!(!viewer.is_open());
    }

    #[test]
    fn close_button_dismisses() {
        let mut viewer = MediaViewer::default();
        viewer.select(1).unwrap();
        viewer.handle_click(OverlayClick::CloseButton);
        assert!(!viewer.is_open());
    }

    #[test]
    fn unknown_id_is_rejected_and_state_kept() {
        let mut viewer = MediaViewer::default();
        viewer.select(3).unwrap();

        assert_eq!(viewer.select(42), Err(MediaError::UnknownVideo { id: 42 }));
        assert_eq!(viewer.selected().map(|v| v.id), Some(3));
    }

    #[test]
    fn selection_points_into_the_catalog() {
        let mut viewer = MediaViewer::default();
        let video = viewer.select(6).unwrap();
        assert!(catalog::VIDEO_ADS.iter().any(|v| std::ptr::eq(v, video)));
    }
}
