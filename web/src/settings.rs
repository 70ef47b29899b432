use std::num::IntErrorKind;

use mazerun_core::{Coord, GameConfig};
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::theme::Theme;
use crate::utils::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub size: Coord,
    pub duration_secs: u32,
}

impl Settings {
    pub(crate) const MIN_SIZE: Coord = 2;
    pub(crate) const MAX_SIZE: Coord = 60;

    /// Reads a typed board size, capping it at `MAX_SIZE`. The lower bound is applied by `game_config`.
    pub(crate) fn parse_size(value: &str) -> Option<Coord> {
        match value.trim().parse::<u32>() {
            Ok(size) => Coord::try_from(size.min(Self::MAX_SIZE.into())).ok(),
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => Some(Self::MAX_SIZE),
            Err(_) => None,
        }
    }

    /// Game rules for these settings, clamped to what the board can display.
    pub(crate) fn game_config(&self) -> GameConfig {
        GameConfig::new(
            self.size.clamp(Self::MIN_SIZE, Self::MAX_SIZE),
            self.duration_secs,
            GameConfig::DEFAULT_SCORE_INCREMENT,
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            size: config.size,
            duration_secs: config.duration_secs,
        }
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "mazerun:settings";
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub settings: Settings,
    pub on_apply: Callback<Settings>,
    pub on_theme: Callback<Option<Theme>>,
    pub on_cancel: Callback<()>,
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let draft = use_state_eq(|| props.settings);

    {
        let draft = draft.clone();
        use_effect_with((props.open, props.settings), move |&(_, settings)| {
            draft.set(settings);
        });
    }

    let on_size = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            if let Some(size) = Settings::parse_size(&value) {
                if size.to_string() != value.trim() {
                    input.set_value(&size.to_string());
                }
                draft.set(Settings { size, ..*draft });
            }
        })
    };

    let on_duration = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(duration_secs) = input.value().parse() {
                draft.set(Settings {
                    duration_secs,
                    ..*draft
                });
            }
        })
    };

    let on_apply = {
        let draft = draft.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| on_apply.emit(*draft))
    };
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());
    let theme_button = |label: &'static str, theme: Option<Theme>| {
        let onclick = props.on_theme.reform(move |_: MouseEvent| theme);
        html! { <li><button {onclick}>{label}</button></li> }
    };

    html! {
        <Modal>
            <dialog id="settings" open={props.open}>
                <article>
                    <h2>{"Settings"}</h2>
                    <label>
                        {"Maze size"}
                        <input
                            type="number"
                            min={Settings::MIN_SIZE.to_string()}
                            max={Settings::MAX_SIZE.to_string()}
                            value={draft.size.to_string()}
                            oninput={on_size}
                        />
                    </label>
                    <label>
                        {"Time limit (s)"}
                        <input
                            type="number"
                            min="1"
                            value={draft.duration_secs.to_string()}
                            oninput={on_duration}
                        />
                    </label>
                    <ul>
                        {theme_button("Auto", None)}
                        {theme_button("Light", Some(Theme::Light))}
                        {theme_button("Dark", Some(Theme::Dark))}
                    </ul>
                    <footer>
                        <button type="reset" onclick={on_cancel}>{"Cancel"}</button>
                        <button onclick={on_apply}>{"Apply"}</button>
                    </footer>
                </article>
            </dialog>
        </Modal>
    }
}
