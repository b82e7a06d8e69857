use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <header class="site-header">
            <Link<Route> to={Route::Home} classes={classes!("logo")}>
                <span class="logo-mark">{"◓"}</span>
                <span class="logo-text">{"LePokedex"}</span>
            </Link<Route>>
            <ThemeToggle />
        </header>
    }
}
