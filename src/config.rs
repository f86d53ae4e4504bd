use std::fs;
use std::path::{Path, PathBuf};

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::error::{DesignError, DesignResult};
use crate::geometry::Bound;

pub const CONFIG_FILE_NAME: &str = "design_craft.json";

/// The config file sits next to the executable
pub fn config_path_from_exe_path(exe_path: &Path) -> DesignResult<PathBuf> {
    let dir = exe_path.parent().ok_or_else(|| {
        DesignError::Config(format!("executable path has no parent: {}", exe_path.display()))
    })?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

pub fn resolve_config_path() -> DesignResult<PathBuf> {
    let exe_path = std::env::current_exe()?;
    config_path_from_exe_path(&exe_path)
}

/// User-tunable editor settings, stored as JSON.
///
/// Unknown fields are ignored and missing ones take their defaults, so old
/// config files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pixels kept free around fitted content
    pub view_margin: f64,
    /// Point-pick distance, in drawing units
    pub pick_tolerance: f64,
    /// Scale change per wheel notch
    pub wheel_zoom_factor: f64,
    /// Upper limit for the zoom-to-fit scale
    pub max_zoom_scale: f64,
    /// Area shown when the editor starts or the document is empty
    pub initial_extents: Bound,
    /// Points used to approximate an ellipse
    pub ellipse_segments: usize,
    pub document_extension: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            view_margin: 20.0,
            pick_tolerance: 5.0,
            wheel_zoom_factor: 1.05,
            max_zoom_scale: 1.0e4,
            initial_extents: Bound::from_corners(Point::new(-10.0, -10.0), Point::new(1000.0, 1000.0)),
            ellipse_segments: 64,
            document_extension: "bin".to_owned(),
        }
    }
}

impl EditorConfig {
    /// Reads the config at `path`, falling back to defaults when it is missing
    pub fn load(path: &Path) -> DesignResult<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Start-up config. A valid file at `path` wins over `fallback`. With no
    /// file, `fallback` is written there so it can be edited.
    pub fn load_or_create(path: &Path, fallback: Self) -> Self {
        if path.exists() {
            return Self::load(path).unwrap_or_else(|err| {
                log::warn!("Ignoring config at {}: {err}", path.display());
                fallback
            });
        }
        if let Err(err) = fallback.save(path) {
            log::warn!("Could not write config to {}: {err}", path.display());
        }
        fallback
    }

    pub fn save(&self, path: &Path) -> DesignResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("Wrote config to {}", path.display());
        Ok(())
    }

    /// Rejects values the view and the tools cannot work with
    pub fn validate(&self) -> DesignResult<()> {
        let invalid = |what: &str| Err(DesignError::Config(what.to_owned()));
        let zoom = self.wheel_zoom_factor;
        if !(zoom.is_finite() && zoom > 0.0) || zoom == 1.0 {
            return invalid("wheel_zoom_factor must be positive and not 1");
        }
        if self.ellipse_segments < 3 {
            return invalid("ellipse_segments must be at least 3");
        }
        if !(self.max_zoom_scale.is_finite() && self.max_zoom_scale > 0.0) {
            return invalid("max_zoom_scale must be positive");
        }
        if !(self.view_margin.is_finite() && self.view_margin >= 0.0) {
            return invalid("view_margin must not be negative");
        }
        if !(self.pick_tolerance.is_finite() && self.pick_tolerance > 0.0) {
            return invalid("pick_tolerance must be positive");
        }
        if self.initial_extents.is_empty() {
            return invalid("initial_extents must not be empty");
        }
        Ok(())
    }
}
