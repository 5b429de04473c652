/*
 * bezier-menu
 *
 * Copyright 2022 - Manos Pitsidianakis
 *
 * This file is part of bezier-menu.
 *
 * bezier-menu is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * bezier-menu is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with bezier-menu. If not, see <http://www.gnu.org/licenses/>.
 */

//! Per-instance menu configuration.
//!
//! Values are immutable once a [`MenuController`](super::MenuController) has been built from
//! them. They can come from code, from a TOML document or from `menu.toml` in the user's XDG
//! configuration directory:
//!
//! ```toml
//! width = 280.0
//! spring-damping = 0.53
//! anim-duration = 1.0
//! inner-control-point-ratio = 0.7
//! outer-control-point-distance = 75.0
//! show-control-points = false
//! fill-color = "#FFFFFF"
//! ```

use crate::error::{Error, Result};
use crate::utils::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "menu.toml";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct MenuConfiguration {
    /// Menu pane width in pixels.
    pub width: f64,
    /// Damping ratio of the settle spring, in `(0, 1]`. `1.0` is critically damped.
    pub spring_damping: f64,
    /// Settle animation duration in seconds.
    pub anim_duration: f64,
    /// Pulls the upper and lower curve segments towards the anchor edge, in `[0, 1]`.
    pub inner_control_point_ratio: f64,
    /// Vertical spread of the control points around the bulge centre, in pixels.
    pub outer_control_point_distance: f64,
    pub show_control_points: bool,
    pub fill_color: Color,
}

impl Default for MenuConfiguration {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            spring_damping: 0.53,
            anim_duration: 1.0,
            inner_control_point_ratio: 0.70,
            outer_control_point_distance: 75.0,
            show_control_points: true,
            fill_color: Color::WHITE,
        }
    }
}

impl MenuConfiguration {
    pub const DEFAULT_WIDTH: f64 = 280.0;

    /// Default configuration for a menu pane of `width` pixels.
    pub fn new(width: f64) -> Result<Self> {
        Self {
            width,
            ..Self::default()
        }
        .validate()
    }

    pub fn validate(self) -> Result<Self> {
        fn finite(field: &'static str, value: f64) -> Result<()> {
            if value.is_finite() {
                Ok(())
            } else {
                Err(Error::invalid(field, format!("must be finite, got {value}")))
            }
        }

        finite("width", self.width)?;
        finite("spring-damping", self.spring_damping)?;
        finite("anim-duration", self.anim_duration)?;
        finite("inner-control-point-ratio", self.inner_control_point_ratio)?;
        finite(
            "outer-control-point-distance",
            self.outer_control_point_distance,
        )?;
        if self.width <= 0.0 {
            return Err(Error::invalid(
                "width",
                format!("must be positive, got {}", self.width),
            ));
        }
        if !(self.spring_damping > 0.0 && self.spring_damping <= 1.0) {
            return Err(Error::invalid(
                "spring-damping",
                format!("must be in (0, 1], got {}", self.spring_damping),
            ));
        }
        if self.anim_duration <= 0.0 {
            return Err(Error::invalid(
                "anim-duration",
                format!("must be positive, got {}", self.anim_duration),
            ));
        }
        if !(0.0..=1.0).contains(&self.inner_control_point_ratio) {
            return Err(Error::invalid(
                "inner-control-point-ratio",
                format!("must be in [0, 1], got {}", self.inner_control_point_ratio),
            ));
        }
        if self.outer_control_point_distance < 0.0 {
            return Err(Error::invalid(
                "outer-control-point-distance",
                format!(
                    "must not be negative, got {}",
                    self.outer_control_point_distance
                ),
            ));
        }
        Ok(self)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.anim_duration)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let doc = s.parse::<toml_edit::Document>()?;
        let config: Self = toml_edit::de::from_document(doc)?;
        config.validate()
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml_edit::ser::to_string_pretty(self)
            .map_err(|err| Error::invalid("configuration", err.to_string()))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        log::info!("loaded menu configuration from {}", path.display());
        Ok(config)
    }

    /// Loads `menu.toml` from the XDG configuration directory, or returns the defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let dirs = xdg::BaseDirectories::with_prefix(crate::APPLICATION_NAME)?;
        match dirs.find_config_file(CONFIG_FILE_NAME) {
            Some(path) => Self::load_from_path(&path),
            None => {
                log::debug!("no {CONFIG_FILE_NAME} found, using default menu configuration");
                Self::default().validate()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MenuConfiguration::new(280.0).unwrap();
        assert_eq!(config.width, 280.0);
        assert_eq!(config.spring_damping, 0.53);
        assert_eq!(config.anim_duration, 1.0);
        assert_eq!(config.inner_control_point_ratio, 0.70);
        assert_eq!(config.outer_control_point_distance, 75.0);
        assert!(config.show_control_points);
        assert_eq!(config.duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_rejects_invalid_values() {
        for (config, field) in [
            (
                MenuConfiguration {
                    width: 0.0,
                    ..Default::default()
                },
                "width",
            ),
            (
                MenuConfiguration {
                    width: f64::NAN,
                    ..Default::default()
                },
                "width",
            ),
            (
                MenuConfiguration {
                    spring_damping: 0.0,
                    ..Default::default()
                },
                "spring-damping",
            ),
            (
                MenuConfiguration {
                    spring_damping: 1.2,
                    ..Default::default()
                },
                "spring-damping",
            ),
            (
                MenuConfiguration {
                    anim_duration: -1.0,
                    ..Default::default()
                },
                "anim-duration",
            ),
            (
                MenuConfiguration {
                    inner_control_point_ratio: 1.5,
                    ..Default::default()
                },
                "inner-control-point-ratio",
            ),
            (
                MenuConfiguration {
                    outer_control_point_distance: -3.0,
                    ..Default::default()
                },
                "outer-control-point-distance",
            ),
        ] {
            match config.validate() {
                Err(Error::InvalidConfiguration { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected {field} to be rejected, got {other:?}"),
            }
        }
        assert!(MenuConfiguration::new(-280.0).is_err());
        assert!(MenuConfiguration {
            spring_damping: 1.0,
            ..Default::default()
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_parse_toml() {
        const TOML: &str = r##"width = 320.0
spring-damping = 0.8
show-control-points = false
fill-color = "#E6E6E4"
"##;
        let config = MenuConfiguration::from_toml_str(TOML).unwrap();
        assert_eq!(config.width, 320.0);
        assert_eq!(config.spring_damping, 0.8);
        assert!(!config.show_control_points);
        assert_eq!(config.fill_color, Color::try_from_hex("#E6E6E4").unwrap());
        // Missing keys keep their defaults.
        assert_eq!(config.anim_duration, 1.0);
        assert_eq!(config.outer_control_point_distance, 75.0);

        assert!(matches!(
            MenuConfiguration::from_toml_str("width = -1.0"),
            Err(Error::InvalidConfiguration { field: "width", .. })
        ));
        assert!(matches!(
            MenuConfiguration::from_toml_str("width = "),
            Err(Error::Toml(_))
        ));
        assert!(matches!(
            MenuConfiguration::from_toml_str("fill-color = \"white\""),
            Err(Error::Deserialize(_))
        ));
        assert!(matches!(
            MenuConfiguration::from_toml_str("colour = \"#FFF\""),
            Err(Error::Deserialize(_))
        ));
    }

    #[test]
    fn test_toml_roundtrip_preserves_values() {
        let config = MenuConfiguration {
            width: 300.0,
            show_control_points: false,
            ..Default::default()
        };
        let s = config.to_toml_string().unwrap();
        assert_eq!(MenuConfiguration::from_toml_str(&s).unwrap(), config);
    }
}
