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

//! # Error type shared by configuration loading and widget construction.

use std::borrow::Cow;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid menu configuration: `{field}` {reason}")]
    InvalidConfiguration {
        field: &'static str,
        reason: Cow<'static, str>,
    },
    #[error("could not parse configuration file: {0}")]
    Toml(#[from] toml_edit::TomlError),
    #[error("could not read configuration values: {0}")]
    Deserialize(#[from] toml_edit::de::Error),
    #[error("could not locate configuration directory: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid(field: &'static str, reason: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    pub fn suggest_bug_report(err: &str) -> String {
        format!(
            "Application error: {err}\n\nIf you wish to report this bug to <{}>, please include the output of `{} --version`.",
            crate::ISSUE_TRACKER,
            crate::APPLICATION_NAME,
        )
    }
}
