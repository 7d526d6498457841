//! Media format descriptors
//!
//! A [`Format`] names a container or codec combination that the rest of the
//! pipeline can encode to or decode from. The registry only cares about the
//! `name` and `id` keys; the codec parameters are carried along for consumers.
//!
//! ```text
//! Format "MP4"  (id "mp4", Multiplex)
//!   ├── VideoCodec "H.264"  (id "libx264", 640x480 @ 25fps)
//!   └── AudioCodec "AAC"    (id "aac", 2ch @ 44100Hz)
//! ```

use std::fmt;

/// Kind of a format, derived from the codecs it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Neither video nor audio configured
    None,
    /// Video only
    Video,
    /// Audio only
    Audio,
    /// Both video and audio (muxed container)
    Multiplex,
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FormatKind::None => "none",
            FormatKind::Video => "video",
            FormatKind::Audio => "audio",
            FormatKind::Multiplex => "multiplex",
        };
        f.write_str(s)
    }
}

/// Video stream parameters
#[derive(Debug, Clone, PartialEq)]
pub struct VideoCodec {
    /// Encoder/decoder identifier (e.g., "libx264")
    pub id: String,
    /// Display name (e.g., "H.264")
    pub name: String,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Frames per second
    pub fps: f64,
    /// Target bitrate (bits/sec, 0 = encoder default)
    pub bit_rate: u32,
    /// Pixel format (e.g., "yuv420p")
    pub pixel_fmt: String,
    /// Whether the codec is enabled
    pub enabled: bool,
}

impl VideoCodec {
    /// Create a video codec with default parameters (640x480 @ 25fps, yuv420p)
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width: 640,
            height: 480,
            fps: 25.0,
            bit_rate: 0,
            pixel_fmt: "yuv420p".to_string(),
            enabled: true,
        }
    }

    /// Set frame dimensions
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set frame rate
    pub fn fps(mut self, fps: f64) -> Self {
        self.fps = fps;
        self
    }

    /// Set target bitrate
    pub fn bit_rate(mut self, bit_rate: u32) -> Self {
        self.bit_rate = bit_rate;
        self
    }

    /// Set pixel format
    pub fn pixel_fmt(mut self, pixel_fmt: impl Into<String>) -> Self {
        self.pixel_fmt = pixel_fmt.into();
        self
    }

    /// Disable the codec
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {}x{} @ {}fps {}",
            self.name, self.id, self.width, self.height, self.fps, self.pixel_fmt
        )?;
        if self.bit_rate > 0 {
            write!(f, " {}bps", self.bit_rate)?;
        }
        Ok(())
    }
}

/// Audio stream parameters
#[derive(Debug, Clone, PartialEq)]
pub struct AudioCodec {
    /// Encoder/decoder identifier (e.g., "aac")
    pub id: String,
    /// Display name (e.g., "AAC")
    pub name: String,
    /// Number of channels
    pub channels: u8,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Target bitrate (bits/sec, 0 = encoder default)
    pub bit_rate: u32,
    /// Sample format (e.g., "s16")
    pub sample_fmt: String,
    /// Whether the codec is enabled
    pub enabled: bool,
}

impl AudioCodec {
    /// Create an audio codec with default parameters (stereo, 44.1kHz, s16)
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            channels: 2,
            sample_rate: 44100,
            bit_rate: 0,
            sample_fmt: "s16".to_string(),
            enabled: true,
        }
    }

    /// Set channel count
    pub fn channels(mut self, channels: u8) -> Self {
        self.channels = channels;
        self
    }

    /// Set sample rate
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set target bitrate
    pub fn bit_rate(mut self, bit_rate: u32) -> Self {
        self.bit_rate = bit_rate;
        self
    }

    /// Set sample format
    pub fn sample_fmt(mut self, sample_fmt: impl Into<String>) -> Self {
        self.sample_fmt = sample_fmt.into();
        self
    }

    /// Disable the codec
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {}ch @ {}Hz {}",
            self.name, self.id, self.channels, self.sample_rate, self.sample_fmt
        )?;
        if self.bit_rate > 0 {
            write!(f, " {}bps", self.bit_rate)?;
        }
        Ok(())
    }
}

/// A media format descriptor
///
/// `name` is the registry key. `id` is a secondary identifier that is not
/// required to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Format {
    /// Human-facing name (e.g., "MP4")
    pub name: String,
    /// Secondary identifier (e.g., "mp4")
    pub id: String,
    /// Video parameters, if the format carries video
    pub video: Option<VideoCodec>,
    /// Audio parameters, if the format carries audio
    pub audio: Option<AudioCodec>,
    /// Preference hint; higher wins when a consumer picks among formats
    pub priority: i32,
}

impl Format {
    /// Create a format with no codecs attached
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            video: None,
            audio: None,
            priority: 0,
        }
    }

    /// Attach video parameters
    pub fn with_video(mut self, video: VideoCodec) -> Self {
        self.video = Some(video);
        self
    }

    /// Attach audio parameters
    pub fn with_audio(mut self, audio: AudioCodec) -> Self {
        self.audio = Some(audio);
        self
    }

    /// Set priority
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Kind of format, based on which enabled codecs are present
    pub fn kind(&self) -> FormatKind {
        let video = self.video.as_ref().is_some_and(|v| v.enabled);
        let audio = self.audio.as_ref().is_some_and(|a| a.enabled);

        match (video, audio) {
            (true, true) => FormatKind::Multiplex,
            (true, false) => FormatKind::Video,
            (false, true) => FormatKind::Audio,
            (false, false) => FormatKind::None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.id, self.kind())?;
        if let Some(ref video) = self.video {
            write!(f, " video: [{}]", video)?;
        }
        if let Some(ref audio) = self.audio {
            write!(f, " audio: [{}]", audio)?;
        }
        Ok(())
    }
}
