/// A video ad shown in the grid and playable in the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoAd {
    pub id: u32,
    pub src: &'static str,
}

/// A still poster image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poster {
    pub id: u32,
    pub image: &'static str,
}

pub static VIDEO_ADS: &[VideoAd] = &[
    VideoAd { id: 1, src: "/video1.mp4" },
    VideoAd { id: 2, src: "/video2.mp4" },
    VideoAd { id: 3, src: "/video3.mp4" },
    VideoAd { id: 4, src: "/video4.mp4" },
    VideoAd { id: 5, src: "/video6.mp4" },
    VideoAd { id: 6, src: "/video7.mp4" },
];

pub static POSTERS: &[Poster] = &[
    Poster { id: 1, image: "/image.jpeg" },
    Poster { id: 2, image: "/image2.jpeg" },
    Poster { id: 3, image: "/image3.jpeg" },
];

pub fn find_video(id: u32) -> Option<&'static VideoAd> {
    VIDEO_ADS.iter().find(|video| video.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u32> = VIDEO_ADS.iter().map(|v| v.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), VIDEO_ADS.len());

        let mut ids: Vec<u32> = POSTERS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), POSTERS.len());
    }

    #[test]
    fn find_video_by_id() {
        assert_eq!(find_video(5).map(|v| v.src), Some("/video6.mp4"));
        assert!(find_video(0).is_none());
        assert!(find_video(7).is_none());
    }
}
