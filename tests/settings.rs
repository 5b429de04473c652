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

mod utils;
use utils::*;

#[test]
fn test_settings_properties() {
    use bezier_menu::prelude::*;

    glib_test_wrapper(|| {
        let settings = Settings::new();
        assert_eq!(settings.property::<f64>(Settings::WIDTH), 280.0);
        assert!(settings.property::<bool>(Settings::SHOW_CONTROL_POINTS));
        assert_eq!(settings.property::<Color>(Settings::FILL_COLOR), Color::WHITE);

        settings.set_property(Settings::WIDTH, 320.0_f64);
        settings.set_property(Settings::SPRING_DAMPING, 1.0_f64);
        settings.set_property(Settings::FILL_COLOR, Color::new(0.0, 0.0, 1.0));
        let config = settings.configuration().unwrap();
        assert_eq!(config.width, 320.0);
        assert_eq!(config.spring_damping, 1.0);
        assert_eq!(config.fill_color.to_hex(), "#0000FF");
        assert_eq!(config.anim_duration, MenuConfiguration::default().anim_duration);
    });
}

#[test]
fn test_settings_notify() {
    use bezier_menu::prelude::*;

    glib_test_wrapper(|| {
        let settings = Settings::new();
        let count = Rc::new(Cell::new(0));
        settings.connect_notify_local(
            Some(Settings::SHOW_CONTROL_POINTS),
            glib::clone!(@strong count => move |_, _| {
                count.set(count.get() + 1);
            }),
        );
        settings.set_property(Settings::SHOW_CONTROL_POINTS, false);
        assert_eq!(count.get(), 1);
        assert!(!settings.configuration().unwrap().show_control_points);
    });
}

#[test]
fn test_settings_reject_invalid_configuration() {
    use bezier_menu::prelude::*;

    glib_test_wrapper(|| {
        let config = MenuConfiguration {
            spring_damping: 0.0,
            ..MenuConfiguration::default()
        };
        let settings = Settings::from_configuration(config);
        match settings.configuration() {
            Err(Error::InvalidConfiguration { field, .. }) => assert_eq!(field, "spring-damping"),
            other => panic!("expected an invalid configuration error, got {other:?}"),
        }
    });
}

#[test]
fn test_configuration_file() {
    use bezier_menu::prelude::*;

    let config = MenuConfiguration::from_toml_str(
        r##"
width = 300.0
anim-duration = 0.4
fill-color = "#FF8000"
"##,
    )
    .unwrap();
    assert_eq!(config.width, 300.0);
    assert_eq!(config.anim_duration, 0.4);
    assert_eq!(config.fill_color.to_hex(), "#FF8000");
    assert_eq!(config.spring_damping, MenuConfiguration::default().spring_damping);

    assert!(MenuConfiguration::from_toml_str("width = -1.0").is_err());
    assert!(MenuConfiguration::from_toml_str("colour = 1").is_err());
}
