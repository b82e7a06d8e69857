use shared::{FormPayload, NotifyCopy, NotifyFace, NotifyForm, NotifyTransport};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;

use crate::api::GlooTransport;

#[derive(Properties, PartialEq)]
pub struct NotifyFormProps {
    pub endpoint: AttrValue,
    #[prop_or_default]
    pub copy: NotifyCopy,
}

#[function_component(NotifyFormSection)]
pub fn notify_form_section(props: &NotifyFormProps) -> Html {
    let controller = {
        let endpoint = props.endpoint.to_string();
        let copy = props.copy.clone();
        use_mut_ref(move || NotifyForm::new(endpoint).with_copy(copy))
    };
    let face = use_state(|| NotifyFace::new(&props.copy));
    let email = use_state(String::new);

    // A successful submission clears the inputs.
    {
        let email = email.clone();
        use_effect_with(face.clear_generation, move |_| {
            email.set(String::new());
            || ()
        });
    }

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let controller = controller.clone();
        let face = face.clone();
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*face).clone();
            if !controller.borrow_mut().begin(&mut next) {
                return;
            }
            face.set(next.clone());

            let payload = FormPayload::new().with_field("email", (*email).clone());
            let endpoint = controller.borrow().endpoint().to_string();
            let controller = controller.clone();
            let face = face.clone();
            spawn_local(async move {
                let response = GlooTransport.post_form(&endpoint, &payload).await;
                let mut settled = next;
                controller.borrow_mut().finish(response, &mut settled);
                face.set(settled);
            });
        })
    };

    html! {
        <section class="notify">
            if face.form_visible {
                <p class="notify-description">
                    {"Déjanos tu correo y te avisaremos el día del lanzamiento."}
                </p>
                <form id="notify-form" class="notify-form" {onsubmit}>
                    <input
                        type="email"
                        name="email"
                        required={true}
                        placeholder="tu@correo.com"
                        value={(*email).clone()}
                        {oninput}
                    />
                    <button
                        id="notify-submit"
                        type="submit"
                        disabled={!face.submit_enabled}
                    >
                        {face.submit_label.clone()}
                    </button>
                </form>
            }
            if let Some((text, tone)) = face.message.as_ref() {
                <p id="notify-message" class={classes!("form-message", tone.css_class())}>{text.clone()}</p>
            }
        </section>
    }
}
