//! Cover art preparation and ID3 tagging for downloaded MP3s.
//!
//! ## Modules
//!
//! - [`cover`] - Thumbnail normalization: extension probe, rename to `.jpg`, square resize
//! - [`embed`] - ID3v2 writing: front cover picture, title, artist
//! - [`error`] - Typed processing errors
//!
//! ## Quick Start
//!
//! ```no_run
//! use mixtape_tag::{cover, embed};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = Path::new("/music");
//!
//! if let Some(art) = cover::normalize_thumbnail(dir, "My Song")? {
//!     cover::resize_cover(&art)?;
//!     embed::embed_cover(&dir.join("My Song.mp3"), &art, "My Song", "Some Artist")?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod cover;
pub mod embed;
pub mod error;
