use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub children: Html,
}

/// Helper component to attatch the contents into the document.body instead of in the place where it's used.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    let modal_host = gloo::utils::body();
    create_portal(props.children.clone(), modal_host.into())
}

/// Values persisted as JSON in the browser's local storage under a fixed key.
pub(crate) trait StorageKey: Serialize + DeserializeOwned {
    const KEY: &'static str;

    fn local_load() -> Option<Self> {
        match LocalStorage::get(Self::KEY) {
            Ok(value) => Some(value),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                log::error!("could not load {}: {:?}", Self::KEY, err);
                None
            }
        }
    }

    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(Self::KEY, self) {
            log::error!("could not save {}: {:?}", Self::KEY, err);
        }
    }

    fn local_clear() {
        LocalStorage::delete(Self::KEY);
    }
}

pub(crate) trait LocalOrDefault {
    fn local_or_default() -> Self;
}

impl<T: StorageKey + Default> LocalOrDefault for T {
    fn local_or_default() -> Self {
        T::local_load().unwrap_or_default()
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Score counter text, never clamped.
pub(crate) fn format_score(score: u32) -> String {
    format!("{:03}", score)
}

/// Countdown text in whole seconds.
pub(crate) fn format_time_left(secs: u32) -> String {
    format!("{}s", secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_pad_but_never_saturate() {
        assert_eq!(format_score(0), "000");
        assert_eq!(format_score(70), "070");
        assert_eq!(format_score(1140), "1140");
        assert_eq!(format_score(u32::MAX), "4294967295");
        assert_eq!(format_time_left(180), "180s");
        assert_eq!(format_time_left(3600), "3600s");
        assert_eq!(format_time_left(0), "0s");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::settings::Settings;
    use crate::theme::Theme;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn random_seeds_differ() {
        let seeds: Vec<u64> = (0..4).map(|_| js_random_seed()).collect();
        assert!(seeds.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[wasm_bindgen_test]
    fn settings_survive_local_storage() {
        let settings = Settings {
            size: 21,
            duration_secs: 90,
        };
        settings.local_save();
        assert_eq!(Settings::local_or_default(), settings);

        Settings::local_clear();
        assert_eq!(Settings::local_load(), None);
        assert_eq!(Settings::local_or_default(), Settings::default());
    }

    #[wasm_bindgen_test]
    fn stored_theme_overrides_color_scheme() {
        Theme::apply(Some(Theme::Dark));
        assert_eq!(Theme::effective(Theme::current()), Theme::Dark);

        Theme::apply(None);
        assert_eq!(Theme::current(), None);
    }
}
