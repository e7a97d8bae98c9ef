//! Mixtape CLI library: argument surface, interactive menu, and the two
//! download pipelines (tagged MP3 audio, merged MP4 video).

pub mod audio;
pub mod cli;
pub mod config;
pub mod menu;
pub mod preflight;
pub mod ui;
pub mod video;
