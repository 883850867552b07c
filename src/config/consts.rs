// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!("playlist_scrape/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_INVIDIOUS_INSTANCE: &str = "https://inv.nadeko.net";
pub const INVIDIOUS_INSTANCE_ENV: &str = "PLAYLIST_SCRAPE_INVIDIOUS";

// YouTube links built from API video ids
pub const YOUTUBE_WATCH_PREFIX: &str = "https://www.youtube.com/watch?v=";
pub const YOUTUBE_PLAYLIST_PREFIX: &str = "https://www.youtube.com/playlist?list=";
pub const YOUTUBE_TAG: &str = "Youtube";

// Export
pub const DEFAULT_FILE_STEM: &str = "playlist";
