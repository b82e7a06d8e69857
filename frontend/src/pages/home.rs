use log::debug;
use yew::prelude::*;

use crate::components::countdown::CountdownPanel;
use crate::components::notify_form::NotifyFormSection;
use crate::config::Config;

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🔍",
        title: "Búsqueda instantánea",
        text: "Encuentra cualquier Pokémon por nombre, número o tipo.",
    },
    Feature {
        icon: "📊",
        title: "Estadísticas completas",
        text: "Stats base, evoluciones y movimientos en una sola ficha.",
    },
    Feature {
        icon: "📱",
        title: "Pensada para móvil",
        text: "Rápida, ligera y lista para llevar a cualquier aventura.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    // Resolved once per mount; re-renders reuse the same values.
    let target = *use_state(|| {
        let target = Config::target_instant();
        debug!("Countdown target={}", target.as_millis());
        target
    });
    let endpoint = (*use_state(|| AttrValue::from(Config::notify_endpoint()))).clone();

    html! {
        <>
            <section class="hero">
                <h2>{"Tu Pokédex, reinventada"}</h2>
                <p class="subtitle">
                    {"LePokedex llega pronto. Toda la información de tus Pokémon favoritos, en tu bolsillo."}
                </p>
                <div id="hero-actions" class="hero-actions">
                    <a class="button primary" href="#notify">{"Quiero enterarme"}</a>
                    <a class="button ghost" href="#features">{"Ver funciones"}</a>
                </div>
            </section>

            <CountdownPanel target={target} />

            <div id="notify">
                <NotifyFormSection endpoint={endpoint} />
            </div>

            <section id="features" class="features">
                { for FEATURES.iter().map(|feature| html! {
                    <article class="feature" key={feature.title}>
                        <span class="feature-icon">{feature.icon}</span>
                        <h4>{feature.title}</h4>
                        <p>{feature.text}</p>
                    </article>
                }) }
            </section>

            <section class="phone-preview">
                <div class="phone-frame">
                    <div class="phone-screen">
                        <span class="phone-entry">{"#025 Pikachu · Eléctrico"}</span>
                        <span class="phone-entry">{"#001 Bulbasaur · Planta/Veneno"}</span>
                        <span class="phone-entry">{"#004 Charmander · Fuego"}</span>
                    </div>
                </div>
            </section>
        </>
    }
}
