use yew::prelude::*;

/// Frontend version, shown in the footer.
pub fn version_label() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{"© 2025 LePokedex. Hecho con 💛 para entrenadores."}</p>
            <p class="footer-version">{version_label()}</p>
        </footer>
    }
}
