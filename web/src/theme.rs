use crate::utils::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    /// Colors used when painting the maze canvas.
    pub(crate) const fn palette(self) -> Palette {
        use Theme::*;
        match self {
            Light => Palette {
                wall: "#333333",
                path: "#ffffff",
                exit: "#00ff00",
                player: "#ff6347",
            },
            Dark => Palette {
                wall: "#d0d0d0",
                path: "#1e1e1e",
                exit: "#2e8b57",
                player: "#ff6347",
            },
        }
    }

    fn update_html(theme: Option<Self>) {
        use gloo::utils::document;
        let Some(html) = document().document_element() else {
            log::error!("document has no root element");
            return;
        };
        if let Some(theme) = theme {
            let scheme = theme.scheme();
            log::debug!("theme-scheme: {}", scheme);
            if let Err(err) = html.set_attribute(Self::ATTR_NAME, scheme) {
                log::error!("failed to set theme: {:?}", err);
            }
        } else {
            log::debug!("no theme preference");
            if let Err(err) = html.remove_attribute(Self::ATTR_NAME) {
                log::error!("failed to set theme: {:?}", err);
            }
        }
    }

    /// Theme the canvas paints with: the stored choice, or the browser's color scheme when none is set.
    pub(crate) const fn resolve(stored: Option<Self>, prefers_dark: bool) -> Self {
        match (stored, prefers_dark) {
            (Some(theme), _) => theme,
            (None, true) => Theme::Dark,
            (None, false) => Theme::Light,
        }
    }

    pub(crate) fn effective(stored: Option<Self>) -> Self {
        Self::resolve(stored, stored.is_none() && Self::prefers_dark())
    }

    fn prefers_dark() -> bool {
        match gloo::utils::window().match_media("(prefers-color-scheme: dark)") {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(err) => {
                log::warn!("color scheme query failed: {:?}", err);
                false
            }
        }
    }

    pub(crate) fn current() -> Option<Self> {
        Self::local_load()
    }

    pub(crate) fn init() {
        Self::update_html(Self::current());
    }

    pub(crate) fn apply(theme: Option<Self>) {
        match theme {
            Some(theme) => theme.local_save(),
            None => Self::local_clear(),
        }
        Self::update_html(theme);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "mazerun:theme";
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Palette {
    pub wall: &'static str,
    pub path: &'static str,
    pub exit: &'static str,
    pub player: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_palette_keeps_classic_colors() {
        let palette = Theme::Light.palette();
        assert_eq!(palette.wall, "#333333");
        assert_eq!(palette.exit, "#00ff00");
        assert_eq!(palette.player, "#ff6347");
    }

    #[test]
    fn auto_theme_follows_color_scheme() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(Theme::resolve(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn theme_is_stored_as_plain_variant_name() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"Dark\"");
        assert_eq!(Theme::Dark.scheme(), "dark");
    }
}
