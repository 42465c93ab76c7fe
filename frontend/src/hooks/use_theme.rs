use yew::prelude::*;

use crate::services::navigation::apply_body_theme;
use crate::services::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Body class and stored value
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything that is not "dark" is the light theme
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

pub struct UseThemeResult {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme(storage_key: &str) -> UseThemeResult {
    let theme = {
        let storage_key = storage_key.to_string();
        use_state(move || {
            storage::get_item(&storage_key)
                .map(|v| Theme::parse(&v))
                .unwrap_or_default()
        })
    };

    use_effect_with(*theme, |theme| {
        apply_body_theme(theme.as_str(), theme.toggled().as_str());
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        let storage_key = storage_key.to_string();
        Callback::from(move |_: ()| {
            let next = theme.toggled();
            storage::set_item(&storage_key, next.as_str());
            theme.set(next);
        })
    };

    UseThemeResult {
        theme: *theme,
        toggle,
    }
}
