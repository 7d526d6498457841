//! Media format descriptors
//!
//! This module provides:
//! - Format records keyed by name and identifier
//! - Video and audio codec parameters

pub mod format;

pub use format::{AudioCodec, Format, FormatKind, VideoCodec};
