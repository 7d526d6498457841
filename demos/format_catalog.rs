//! Format catalog example
//!
//! Run with: cargo run --example format_catalog [DEFAULT_FORMAT]
//!
//! Registers a handful of common formats in the process-wide registry,
//! selects a default, and resolves a few lookups against it.
//!
//! Set `RUST_LOG=media_formats=debug` to see registry activity.

use media_formats::{AudioCodec, Format, FormatRegistry, VideoCodec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("media_formats=info".parse()?),
        )
        .init();

    let default_format = std::env::args().nth(1);

    let registry = FormatRegistry::instance();

    registry.register(
        Format::new("MP4", "mp4")
            .with_video(
                VideoCodec::new("libx264", "H.264")
                    .dimensions(1280, 720)
                    .fps(30.0),
            )
            .with_audio(AudioCodec::new("aac", "AAC").sample_rate(48000))
            .priority(10),
    );
    registry.register(
        Format::new("FLV", "flv")
            .with_video(VideoCodec::new("libx264", "H.264"))
            .with_audio(AudioCodec::new("aac", "AAC")),
    );
    registry.register(
        Format::new("WebM", "webm")
            .with_video(VideoCodec::new("libvpx", "VP8"))
            .with_audio(AudioCodec::new("libvorbis", "Vorbis")),
    );
    registry.register(
        Format::new("MP3", "mp3").with_audio(AudioCodec::new("libmp3lame", "MP3").bit_rate(128_000)),
    );

    if let Some(ref name) = default_format {
        registry.set_default(name);
    }

    println!("Registered formats:");
    for format in registry.formats() {
        println!("  {}", format);
    }
    println!();

    match registry.get_default() {
        Ok(format) => println!("Default: {}", format.name),
        Err(e) => println!("Default: {}", e),
    }

    for name in ["WebM", "OGG"] {
        match registry.get_or_default(name) {
            Ok(format) => println!("get_or_default({}) -> {}", name, format.name),
            Err(e) => println!("get_or_default({}) -> {}", name, e),
        }
    }

    match registry.get_by_id("mkv") {
        Ok(format) => println!("get_by_id(mkv) -> {}", format.name),
        Err(e) => println!("get_by_id(mkv) -> {}", e),
    }

    Ok(())
}
