//! Format registry implementation
//!
//! The central store of media formats, keyed by name with insertion order
//! preserved for snapshots and default fallback.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::media::Format;

use super::config::RegistryConfig;
use super::error::{Lookup, RegistryError, Result};

/// State guarded by the registry lock
#[derive(Debug, Default)]
struct RegistryState {
    /// Formats by name, in insertion order
    formats: IndexMap<String, Arc<Format>>,

    /// Explicit default format name
    default_name: Option<String>,
}

impl RegistryState {
    fn get(&self, name: &str) -> Result<Arc<Format>> {
        self.formats
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(Lookup::Name(name.to_string())))
    }

    fn get_default(&self) -> Result<Arc<Format>> {
        if let Some(ref name) = self.default_name {
            return self.get(name);
        }

        self.formats
            .first()
            .map(|(_, format)| Arc::clone(format))
            .ok_or(RegistryError::NotFound(Lookup::Default))
    }
}

/// Central registry of media formats
///
/// Thread-safe via a single `Mutex` guarding both the formats and the default
/// name. Lookups hand out `Arc<Format>` handles, so a result stays valid
/// after the record is replaced or removed.
#[derive(Debug)]
pub struct FormatRegistry {
    state: Mutex<RegistryState>,

    /// Configuration
    config: RegistryConfig,
}

impl FormatRegistry {
    /// Create a new, empty format registry with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a new format registry with custom configuration
    ///
    /// Formats listed in the config are registered in order, so a later
    /// entry replaces an earlier one with the same name.
    pub fn with_config(config: RegistryConfig) -> Self {
        let mut state = RegistryState {
            formats: IndexMap::with_capacity(config.formats.len()),
            default_name: config.default_format.clone().filter(|n| !n.is_empty()),
        };

        for format in &config.formats {
            state.formats.shift_remove(&format.name);
            state
                .formats
                .insert(format.name.clone(), Arc::new(format.clone()));
        }

        tracing::debug!(
            formats = state.formats.len(),
            default = ?state.default_name,
            "Format registry created"
        );

        Self {
            state: Mutex::new(state),
            config,
        }
    }

    /// Get the registry configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<Arc<Format>> {
        self.state.lock().get(name)
    }

    /// Get the first format (in insertion order) with the given identifier
    pub fn get_by_id(&self, id: &str) -> Result<Arc<Format>> {
        let state = self.state.lock();

        state
            .formats
            .values()
            .find(|format| format.id == id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(Lookup::Id(id.to_string())))
    }

    /// Get a format by name, falling back to the default format
    ///
    /// Both steps run under one lock acquisition, so the fallback sees the
    /// same registry contents as the failed lookup.
    pub fn get_or_default(&self, name: &str) -> Result<Arc<Format>> {
        let state = self.state.lock();

        match state.get(name) {
            Ok(format) => Ok(format),
            Err(_) => state.get_default(),
        }
    }

    /// Get the default format
    ///
    /// Returns the format named by [`set_default`](Self::set_default) if one
    /// is set (failing if that format is missing), otherwise the first
    /// registered format.
    pub fn get_default(&self) -> Result<Arc<Format>> {
        self.state.lock().get_default()
    }

    /// Check if a format with the given name is registered
    pub fn exists(&self, name: &str) -> bool {
        self.state.lock().formats.contains_key(name)
    }

    /// Register a format
    ///
    /// An existing format with the same name is replaced, and the new entry
    /// moves to the end of the insertion order.
    pub fn register(&self, format: impl Into<Arc<Format>>) {
        let format = format.into();
        let mut state = self.state.lock();

        let replaced = state.formats.shift_remove(&format.name).is_some();
        state.formats.insert(format.name.clone(), Arc::clone(&format));

        tracing::info!(
            format = %format.name,
            id = %format.id,
            kind = %format.kind(),
            replaced = replaced,
            total = state.formats.len(),
            "Format registered"
        );
    }

    /// Unregister a format by name
    ///
    /// Clears the default if it named the removed format. Returns whether a
    /// format was removed.
    pub fn unregister(&self, name: &str) -> bool {
        let mut state = self.state.lock();

        if state.formats.shift_remove(name).is_none() {
            return false;
        }

        if state.default_name.as_deref() == Some(name) {
            state.default_name = None;
            tracing::debug!(format = %name, "Default format unregistered, default cleared");
        }

        tracing::info!(
            format = %name,
            total = state.formats.len(),
            "Format unregistered"
        );

        true
    }

    /// Set the default format by name
    ///
    /// The name is not checked against registered formats; a missing default
    /// surfaces later as a `NotFound` from [`get_default`](Self::get_default).
    /// An empty name unsets the default.
    pub fn set_default(&self, name: &str) {
        let mut state = self.state.lock();

        state.default_name = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };

        tracing::debug!(
            format = %name,
            registered = state.formats.contains_key(name),
            "Default format set"
        );
    }

    /// Get the explicitly configured default name, if any
    pub fn default_name(&self) -> Option<String> {
        self.state.lock().default_name.clone()
    }

    /// Remove all formats
    ///
    /// The default name is kept unless `reset_default_on_clear` is configured.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        let removed = state.formats.len();

        state.formats.clear();
        if self.config.reset_default_on_clear {
            state.default_name = None;
        }

        tracing::info!(
            removed = removed,
            default = ?state.default_name,
            "Format registry cleared"
        );
    }

    /// Snapshot of all formats in insertion order
    pub fn formats(&self) -> Vec<Arc<Format>> {
        self.state.lock().formats.values().cloned().collect()
    }

    /// Snapshot of all format names in insertion order
    pub fn names(&self) -> Vec<String> {
        self.state.lock().formats.keys().cloned().collect()
    }

    /// Get total number of formats
    pub fn len(&self) -> usize {
        self.state.lock().formats.len()
    }

    /// Check if the registry has no formats
    pub fn is_empty(&self) -> bool {
        self.state.lock().formats.is_empty()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{AudioCodec, VideoCodec};

    fn h264() -> Format {
        Format::new("h264", "27").with_video(VideoCodec::new("libx264", "H.264"))
    }

    fn vp8() -> Format {
        Format::new("vp8", "8").with_video(VideoCodec::new("libvpx", "VP8"))
    }

    #[test]
    fn test_register_and_get() {
        let registry = FormatRegistry::new();

        registry.register(h264());
        registry.register(vp8());

        assert!(registry.exists("h264"));
        assert!(registry.exists("vp8"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("h264").unwrap().id, "27");

        let result = registry.get("theora");
        assert_eq!(
            result.unwrap_err(),
            RegistryError::NotFound(Lookup::Name("theora".into()))
        );
    }

    #[test]
    fn test_get_by_id_first_match() {
        let registry = FormatRegistry::new();

        registry.register(Format::new("mp4-a", "mp4"));
        registry.register(Format::new("mp4-b", "mp4"));

        assert_eq!(registry.get_by_id("mp4").unwrap().name, "mp4-a");

        let result = registry.get_by_id("mkv");
        assert_eq!(
            result.unwrap_err(),
            RegistryError::NotFound(Lookup::Id("mkv".into()))
        );
    }

    #[test]
    fn test_replace_moves_to_end() {
        let registry = FormatRegistry::new();

        registry.register(h264());
        registry.register(vp8());

        let replacement = Format::new("h264", "28")
            .with_video(VideoCodec::new("libx264", "H.264").dimensions(1920, 1080))
            .with_audio(AudioCodec::new("aac", "AAC"));
        registry.register(replacement.clone());

        assert_eq!(registry.len(), 2);
        assert_eq!(*registry.get("h264").unwrap(), replacement);
        assert_eq!(registry.names(), vec!["vp8", "h264"]);
    }

    #[test]
    fn test_unregister() {
        let registry = FormatRegistry::new();
        registry.register(h264());

        assert!(registry.unregister("h264"));
        assert!(!registry.exists("h264"));

        // Absent name leaves the store untouched
        registry.register(vp8());
        assert!(!registry.unregister("h264"));
        assert_eq!(registry.names(), vec!["vp8"]);
    }

    #[test]
    fn test_default_empty_registry() {
        let registry = FormatRegistry::new();

        assert_eq!(
            registry.get_default().unwrap_err(),
            RegistryError::NotFound(Lookup::Default)
        );
        assert!(registry.get_or_default("h264").is_err());
    }

    #[test]
    fn test_default_falls_back_to_first() {
        let registry = FormatRegistry::new();

        registry.register(h264());
        assert_eq!(registry.get_default().unwrap().name, "h264");

        registry.register(vp8());
        assert_eq!(registry.get_default().unwrap().name, "h264");
    }

    #[test]
    fn test_set_default_unvalidated() {
        let registry = FormatRegistry::new();
        registry.register(h264());

        registry.set_default("vp8");
        assert_eq!(registry.default_name().as_deref(), Some("vp8"));
        assert_eq!(
            registry.get_default().unwrap_err(),
            RegistryError::NotFound(Lookup::Name("vp8".into()))
        );

        // Registering it later makes the default resolvable
        registry.register(vp8());
        assert_eq!(registry.get_default().unwrap().name, "vp8");
    }

    #[test]
    fn test_set_default_empty_unsets() {
        let registry = FormatRegistry::new();
        registry.register(h264());
        registry.register(vp8());

        registry.set_default("vp8");
        registry.set_default("");

        assert!(registry.default_name().is_none());
        assert_eq!(registry.get_default().unwrap().name, "h264");
    }

    #[test]
    fn test_unregister_default_clears_it() {
        let registry = FormatRegistry::new();
        registry.register(h264());
        registry.register(vp8());
        registry.set_default("vp8");

        assert!(registry.unregister("vp8"));
        assert!(registry.default_name().is_none());
        assert_eq!(registry.get_default().unwrap().name, "h264");
    }

    #[test]
    fn test_replace_keeps_default() {
        let registry = FormatRegistry::new();
        registry.register(h264());
        registry.register(vp8());
        registry.set_default("h264");

        registry.register(Format::new("h264", "99"));

        assert_eq!(registry.default_name().as_deref(), Some("h264"));
        assert_eq!(registry.get_default().unwrap().id, "99");
    }

    #[test]
    fn test_get_or_default() {
        let registry = FormatRegistry::new();
        registry.register(h264());
        registry.register(vp8());
        registry.set_default("vp8");

        assert_eq!(registry.get_or_default("h264").unwrap().name, "h264");
        assert_eq!(registry.get_or_default("nope").unwrap().name, "vp8");
    }

    #[test]
    fn test_clear_keeps_default_name() {
        let registry = FormatRegistry::new();
        registry.register(h264());
        registry.set_default("h264");

        registry.clear();

        assert!(registry.is_empty());
        assert_eq!(registry.default_name().as_deref(), Some("h264"));

        // The default resolves again once the format comes back
        registry.register(vp8());
        registry.register(h264());
        assert_eq!(registry.get_default().unwrap().name, "h264");
    }

    #[test]
    fn test_clear_resets_default_when_configured() {
        let config = RegistryConfig::default().reset_default_on_clear(true);
        let registry = FormatRegistry::with_config(config);
        registry.register(h264());
        registry.set_default("h264");

        registry.clear();

        assert!(registry.default_name().is_none());
    }

    #[test]
    fn test_with_config_preloads_formats() {
        let config = RegistryConfig::default()
            .format(h264())
            .format(vp8())
            .format(Format::new("h264", "28"))
            .default_format("vp8");
        let registry = FormatRegistry::with_config(config);

        assert_eq!(registry.names(), vec!["vp8", "h264"]);
        assert_eq!(registry.get("h264").unwrap().id, "28");
        assert_eq!(registry.get_default().unwrap().name, "vp8");
    }

    #[test]
    fn test_snapshot_is_independent() {
        let registry = FormatRegistry::new();
        registry.register(h264());
        registry.register(vp8());

        let snapshot = registry.formats();
        registry.unregister("h264");
        registry.register(Format::new("theora", "30"));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].name, "h264");
        assert_eq!(snapshot[1].name, "vp8");
        assert_eq!(registry.names(), vec!["vp8", "theora"]);
    }

    #[test]
    fn test_handle_outlives_removal() {
        let registry = FormatRegistry::new();
        registry.register(h264());

        let handle = registry.get("h264").unwrap();
        registry.clear();

        assert_eq!(handle.name, "h264");
        assert_eq!(handle.id, "27");
    }
}
