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

#![deny(clippy::dbg_macro)]

use bezier_menu::prelude::*;
use gtk::glib::{OptionArg, OptionFlags};

static GLIB_LOGGER: glib::GlibLogger = glib::GlibLogger::new(
    glib::GlibLoggerFormat::Plain,
    glib::GlibLoggerDomain::CrateTarget,
);

fn main() {
    // Routed through g_log, so G_MESSAGES_DEBUG controls what is printed.
    if log::set_logger(&GLIB_LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }
    gtk::init().expect("Failed to initialize gtk");

    let app = Application::new();
    app.add_main_option(
        "config",
        glib::Char('c' as i8),
        OptionFlags::IN_MAIN,
        OptionArg::Filename,
        "menu configuration file to load instead of the default one",
        Some("FILE"),
    );
    app.add_main_option(
        "version",
        glib::Char('v' as i8),
        OptionFlags::IN_MAIN,
        OptionArg::None,
        "show version",
        None,
    );

    app.connect_handle_local_options(|app, dict| {
        if dict
            .lookup_value("version", Some(glib::VariantTy::BOOLEAN))
            .is_some()
        {
            println!("{}", bezier_menu::VERSION_INFO);
            // Exit with success code.
            return 0;
        }
        let config = match dict
            .lookup_value("config", None)
            .and_then(|var| var.get::<Vec<u8>>())
        {
            Some(mut path) => {
                while path.ends_with(b"\0") {
                    path.pop();
                }
                match String::from_utf8(path) {
                    Ok(path) => MenuConfiguration::load_from_path(Path::new(&path)),
                    Err(err) => {
                        eprintln!("configuration path is not valid UTF-8: {err}");
                        return 1;
                    }
                }
            }
            None => MenuConfiguration::load(),
        };
        match config {
            Ok(config) => {
                app.set_configuration(config);
                -1
            }
            Err(err) => {
                eprintln!("{err}");
                1
            }
        }
    });

    app.run();
}
