//! Configuration file handling.
//!
//! Settings live in a TOML file under the platform config directory
//! (`~/.config/ipja/config.toml` on Linux). Every field is optional; a
//! missing or unparsable file silently falls back to defaults so the app
//! always starts.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use ipja_core::{AnimationSpeed, SceneKind};
use ipja_scene::PARTICLE_COUNT;
use ipja_shapes::DEFAULT_SEED;

/// User-facing settings, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scene shown at startup ("convergence", "orbit" or "fluid").
    pub scene: String,
    /// Playback speed ("slow", "medium" or "fast").
    pub speed: String,
    /// Target frames per second.
    pub fps: u16,
    /// Number of point samples in the cloud.
    pub particle_count: usize,
    /// Seed for shape generation.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scene: SceneKind::default().as_name().to_string(),
            speed: AnimationSpeed::default().as_name().to_string(),
            fps: 30,
            particle_count: PARTICLE_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it is missing
    /// or malformed.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|body| Self::parse(&body))
            .unwrap_or_default()
    }

    /// Parse a TOML document, falling back to defaults on any error.
    pub fn parse(body: &str) -> Self {
        toml::from_str(body).unwrap_or_default()
    }

    /// Write the current settings back to the config file, creating the
    /// directory if needed.
    pub fn save(&self) -> io::Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let body = toml::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, body)
    }

    /// Platform location of the config file, if a home directory exists.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ipja").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// The configured scene, defaulting on unknown names.
    pub fn scene(&self) -> SceneKind {
        SceneKind::from_name(&self.scene).unwrap_or_default()
    }

    /// The configured speed, defaulting on unknown names.
    pub fn speed(&self) -> AnimationSpeed {
        AnimationSpeed::from_name(&self.speed).unwrap_or_default()
    }

    /// Frame rate clamped to a sane range.
    pub fn fps(&self) -> u16 {
        self.fps.clamp(1, 120)
    }

    /// Particle count clamped so neither an empty cloud nor a frame-rate
    /// collapse is configurable.
    pub fn particle_count(&self) -> usize {
        self.particle_count.clamp(100, 100_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = Config::parse("");
        assert_eq!(config.scene(), SceneKind::Convergence);
        assert_eq!(config.speed(), AnimationSpeed::Medium);
        assert_eq!(config.fps(), 30);
        assert_eq!(config.particle_count(), PARTICLE_COUNT);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = Config::parse("scene = \"orbit\"\nfps = 60\n");
        assert_eq!(config.scene(), SceneKind::Orbit);
        assert_eq!(config.fps(), 60);
        assert_eq!(config.speed(), AnimationSpeed::Medium);
    }

    #[test]
    fn malformed_document_falls_back() {
        let config = Config::parse("scene = [this is not toml");
        assert_eq!(config.scene(), SceneKind::Convergence);
    }

    #[test]
    fn unknown_names_fall_back() {
        let config = Config::parse("scene = \"plasma\"\nspeed = \"ludicrous\"\n");
        assert_eq!(config.scene(), SceneKind::Convergence);
        assert_eq!(config.speed(), AnimationSpeed::Medium);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::parse("fps = 10000\nparticle_count = 3\n");
        assert_eq!(config.fps(), 120);
        assert_eq!(config.particle_count(), 100);
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let mut config = Config::default();
        config.scene = SceneKind::Fluid.as_name().to_string();
        config.fps = 45;
        let body = toml::to_string_pretty(&config).unwrap();
        let back = Config::parse(&body);
        assert_eq!(back.scene(), SceneKind::Fluid);
        assert_eq!(back.fps(), 45);
    }
}
