//! Static video/poster catalog and the full-screen video overlay state.

pub mod catalog;
pub mod viewer;

pub use catalog::{Poster, VideoAd, POSTERS, VIDEO_ADS};
pub use viewer::{MediaViewer, OverlayClick};
