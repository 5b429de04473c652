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

use gtk::{gdk, glib};
use serde::{Deserialize, Serialize};

#[derive(Clone, Deserialize, Serialize, Debug, Copy, glib::Boxed)]
#[boxed_type(name = "Color", nullable)]
#[repr(transparent)]
pub struct Color(#[serde(with = "hex_serde")] gdk::RGBA);

impl Color {
    pub const BLACK: Self = Self(gdk::RGBA::BLACK);
    pub const RED: Self = Self(gdk::RGBA::RED);
    pub const WHITE: Self = Self(gdk::RGBA::WHITE);

    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self::new_alpha(red, green, blue, 1.0)
    }

    pub fn new_alpha(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self(gdk::RGBA::new(red, green, blue, alpha))
    }

    pub fn try_from_hex(s: &str) -> Option<Self> {
        hex_color_to_rgb(s).map(|(r, g, b)| Color::new(r, g, b))
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self::new_alpha(self.0.red(), self.0.green(), self.0.blue(), alpha)
    }

    pub fn to_hex(&self) -> String {
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            byte(self.0.red()),
            byte(self.0.green()),
            byte(self.0.blue())
        )
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.0.red() == other.0.red()
            && self.0.green() == other.0.green()
            && self.0.blue() == other.0.blue()
            && self.0.alpha() == other.0.alpha()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<gdk::RGBA> for Color {
    fn from(val: gdk::RGBA) -> Color {
        Color(val)
    }
}

impl From<Color> for gdk::RGBA {
    fn from(val: Color) -> gdk::RGBA {
        val.0
    }
}

pub fn hex_color_to_rgb(s: &str) -> Option<(f64, f64, f64)> {
    if !s.starts_with('#') || !s[1..].bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match s.len() {
        7 => Some((
            u8::from_str_radix(&s[1..3], 16).ok()? as f64 / 255.0,
            u8::from_str_radix(&s[3..5], 16).ok()? as f64 / 255.0,
            u8::from_str_radix(&s[5..7], 16).ok()? as f64 / 255.0,
        )),
        4 => Some((
            (17 * u8::from_str_radix(&s[1..2], 16).ok()?) as f64 / 255.0,
            (17 * u8::from_str_radix(&s[2..3], 16).ok()?) as f64 / 255.0,
            (17 * u8::from_str_radix(&s[3..4], 16).ok()?) as f64 / 255.0,
        )),
        _ => None,
    }
}

pub trait ColorExt {
    fn set_source_color(&self, color: Color);
    fn set_source_color_alpha(&self, color: Color);
}

impl ColorExt for gtk::cairo::Context {
    fn set_source_color(&self, color: Color) {
        self.set_source_rgb(color.0.red(), color.0.green(), color.0.blue());
    }

    fn set_source_color_alpha(&self, color: Color) {
        self.set_source_rgba(
            color.0.red(),
            color.0.green(),
            color.0.blue(),
            color.0.alpha(),
        );
    }
}

mod hex_serde {
    use gtk::gdk;
    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn deserialize<'de, D>(de: D) -> Result<gdk::RGBA, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(de)?;
        let (r, g, b) = super::hex_color_to_rgb(&s)
            .ok_or_else(|| D::Error::custom(format!("`{s}` is not a #RRGGBB or #RGB color")))?;
        Ok(gdk::RGBA::new(r, g, b, 1.0))
    }

    pub(super) fn serialize<S>(val: &gdk::RGBA, se: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::Color(*val).to_hex().serialize(se)
    }
}

#[test]
fn test_hex_colors() {
    assert_eq!(hex_color_to_rgb("#FFFFFF"), Some((1.0, 1.0, 1.0)));
    assert_eq!(hex_color_to_rgb("#000"), Some((0.0, 0.0, 0.0)));
    assert_eq!(hex_color_to_rgb("#f00"), Some((1.0, 0.0, 0.0)));
    assert_eq!(hex_color_to_rgb("FFFFFF"), None);
    assert_eq!(hex_color_to_rgb("#FFFFF"), None);
    assert_eq!(hex_color_to_rgb("#GGGGGG"), None);
    assert_eq!(Color::try_from_hex("#E6E6E4").unwrap().to_hex(), "#E6E6E4");
    assert_eq!(Color::BLACK.with_alpha(0.5), Color::new_alpha(0.0, 0.0, 0.0, 0.5));
}
