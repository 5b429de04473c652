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

use crate::error::Result;
use crate::menu::MenuConfiguration;
use crate::utils::Color;
use glib::{ParamFlags, ParamSpec, ParamSpecBoolean, ParamSpecBoxed, ParamSpecDouble};
use gtk::glib;
use gtk::prelude::*;
use gtk::subclass::prelude::*;
use std::cell::Cell;

glib::wrapper! {
    pub struct Settings(ObjectSubclass<imp::Settings>);
}

mod imp {
    use super::*;

    #[derive(Debug, Default)]
    pub struct Settings {
        pub config: Cell<MenuConfiguration>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Settings {
        const NAME: &'static str = "BezierMenuSettings";
        type Type = super::Settings;
        type ParentType = glib::Object;
        type Interfaces = ();
    }

    impl ObjectImpl for Settings {
        fn properties() -> &'static [ParamSpec] {
            static PROPERTIES: once_cell::sync::Lazy<Vec<ParamSpec>> =
                once_cell::sync::Lazy::new(|| {
                    let defaults = MenuConfiguration::default();
                    vec![
                        ParamSpecDouble::new(
                            super::Settings::WIDTH,
                            super::Settings::WIDTH,
                            super::Settings::WIDTH,
                            1.0,
                            std::f64::MAX,
                            defaults.width,
                            ParamFlags::READWRITE,
                        ),
                        ParamSpecDouble::new(
                            super::Settings::SPRING_DAMPING,
                            super::Settings::SPRING_DAMPING,
                            super::Settings::SPRING_DAMPING,
                            0.01,
                            1.0,
                            defaults.spring_damping,
                            ParamFlags::READWRITE,
                        ),
                        ParamSpecDouble::new(
                            super::Settings::ANIM_DURATION,
                            super::Settings::ANIM_DURATION,
                            super::Settings::ANIM_DURATION,
                            0.01,
                            60.0,
                            defaults.anim_duration,
                            ParamFlags::READWRITE,
                        ),
                        ParamSpecDouble::new(
                            super::Settings::INNER_CONTROL_POINT_RATIO,
                            super::Settings::INNER_CONTROL_POINT_RATIO,
                            super::Settings::INNER_CONTROL_POINT_RATIO,
                            0.0,
                            1.0,
                            defaults.inner_control_point_ratio,
                            ParamFlags::READWRITE,
                        ),
                        ParamSpecDouble::new(
                            super::Settings::OUTER_CONTROL_POINT_DISTANCE,
                            super::Settings::OUTER_CONTROL_POINT_DISTANCE,
                            super::Settings::OUTER_CONTROL_POINT_DISTANCE,
                            0.0,
                            std::f64::MAX,
                            defaults.outer_control_point_distance,
                            ParamFlags::READWRITE,
                        ),
                        ParamSpecBoolean::new(
                            super::Settings::SHOW_CONTROL_POINTS,
                            super::Settings::SHOW_CONTROL_POINTS,
                            super::Settings::SHOW_CONTROL_POINTS,
                            defaults.show_control_points,
                            ParamFlags::READWRITE,
                        ),
                        ParamSpecBoxed::new(
                            super::Settings::FILL_COLOR,
                            super::Settings::FILL_COLOR,
                            super::Settings::FILL_COLOR,
                            Color::static_type(),
                            ParamFlags::READWRITE,
                        ),
                    ]
                });
            PROPERTIES.as_ref()
        }

        fn property(&self, _obj: &Self::Type, _id: usize, pspec: &ParamSpec) -> glib::Value {
            let config = self.config.get();
            match pspec.name() {
                super::Settings::WIDTH => config.width.to_value(),
                super::Settings::SPRING_DAMPING => config.spring_damping.to_value(),
                super::Settings::ANIM_DURATION => config.anim_duration.to_value(),
                super::Settings::INNER_CONTROL_POINT_RATIO => config.inner_control_point_ratio.to_value(),
                super::Settings::OUTER_CONTROL_POINT_DISTANCE => {
                    config.outer_control_point_distance.to_value()
                }
                super::Settings::SHOW_CONTROL_POINTS => config.show_control_points.to_value(),
                super::Settings::FILL_COLOR => config.fill_color.to_value(),
                _ => unimplemented!("{}", pspec.name()),
            }
        }

        fn set_property(
            &self,
            _obj: &Self::Type,
            _id: usize,
            value: &glib::Value,
            pspec: &ParamSpec,
        ) {
            let mut config = self.config.get();
            match pspec.name() {
                super::Settings::WIDTH => config.width = value.get().unwrap(),
                super::Settings::SPRING_DAMPING => config.spring_damping = value.get().unwrap(),
                super::Settings::ANIM_DURATION => config.anim_duration = value.get().unwrap(),
                super::Settings::INNER_CONTROL_POINT_RATIO => {
                    config.inner_control_point_ratio = value.get().unwrap();
                }
                super::Settings::OUTER_CONTROL_POINT_DISTANCE => {
                    config.outer_control_point_distance = value.get().unwrap();
                }
                super::Settings::SHOW_CONTROL_POINTS => config.show_control_points = value.get().unwrap(),
                super::Settings::FILL_COLOR => config.fill_color = value.get().unwrap(),
                _ => unimplemented!("{}", pspec.name()),
            }
            self.config.set(config);
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    pub const WIDTH: &str = "width";
    pub const SPRING_DAMPING: &str = "spring-damping";
    pub const ANIM_DURATION: &str = "anim-duration";
    pub const INNER_CONTROL_POINT_RATIO: &str = "inner-control-point-ratio";
    pub const OUTER_CONTROL_POINT_DISTANCE: &str = "outer-control-point-distance";
    pub const SHOW_CONTROL_POINTS: &str = "show-control-points";
    pub const FILL_COLOR: &str = "fill-color";

    pub fn new() -> Self {
        Self::from_configuration(MenuConfiguration::default())
    }

    pub fn from_configuration(config: MenuConfiguration) -> Self {
        let ret: Self = glib::Object::new::<Self>(&[]).unwrap();
        ret.imp().config.set(config);
        ret
    }

    /// Validated snapshot of the current values.
    pub fn configuration(&self) -> Result<MenuConfiguration> {
        self.imp().config.get().validate()
    }
}
