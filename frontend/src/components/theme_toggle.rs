use log::info;
use shared::ThemePreference;
use yew::prelude::*;

use crate::config::Config;
use crate::storage::{apply_theme, LocalThemeStore};

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    // Loading writes the default back when nothing usable is stored.
    let preference = use_mut_ref(|| {
        ThemePreference::load_with_key(LocalThemeStore, Config::theme_storage_key())
    });
    let theme = use_state(|| preference.borrow().current());

    {
        use_effect_with(*theme, move |theme| {
            apply_theme(*theme);
            || ()
        });
    }

    let onclick = {
        let preference = preference.clone();
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = preference.borrow_mut().toggle();
            info!("Theme switched to {}", next.as_str());
            theme.set(next);
        })
    };

    html! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            type="button"
            aria-label="Cambiar tema"
            title="Cambiar tema"
            {onclick}
        >
            {theme.toggle_icon()}
        </button>
    }
}
