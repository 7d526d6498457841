//! Thread-safe registry of media format descriptors
//!
//! Formats are registered by name, looked up by name or identifier, and one
//! of them can be selected as the default for callers that don't name one.
//!
//! ```
//! use media_formats::media::{AudioCodec, Format, VideoCodec};
//! use media_formats::registry::FormatRegistry;
//!
//! let registry = FormatRegistry::new();
//! registry.register(
//!     Format::new("MP4", "mp4")
//!         .with_video(VideoCodec::new("libx264", "H.264"))
//!         .with_audio(AudioCodec::new("aac", "AAC")),
//! );
//! registry.register(Format::new("WebM", "webm").with_video(VideoCodec::new("libvpx", "VP8")));
//! registry.set_default("WebM");
//!
//! assert_eq!(registry.get_by_id("mp4").unwrap().name, "MP4");
//! assert_eq!(registry.get_or_default("OGG").unwrap().name, "WebM");
//! ```

pub mod media;
pub mod registry;

pub use media::{AudioCodec, Format, FormatKind, VideoCodec};
pub use registry::{FormatRegistry, Lookup, RegistryConfig, RegistryError, Result};
