use gloo::events::EventListener;
use js_sys::{Array, Function, Reflect, JSON};
use log::{debug, warn};
use shared::{entrance_timeline, EntranceTimeline};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// GSAP is loaded from a <script> tag; we reach the global `gsap` object
// through js_sys::Reflect instead of a typed binding.

fn gsap_global() -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let gsap = Reflect::get(&window, &JsValue::from_str("gsap"))?;
    if gsap.is_undefined() || gsap.is_null() {
        return Err(JsValue::from_str("gsap is not loaded"));
    }
    Ok(gsap)
}

fn method(target: &JsValue, name: &str) -> Result<Function, JsValue> {
    Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str(&format!("gsap: '{}' is not a function", name)))
}

fn selectors(targets: &[&str]) -> JsValue {
    match targets {
        [single] => JsValue::from_str(single),
        many => many
            .iter()
            .map(|selector| JsValue::from_str(selector))
            .collect::<Array>()
            .into(),
    }
}

fn json_object(json: serde_json::Result<String>) -> Result<JsValue, JsValue> {
    let json = json.map_err(|e| JsValue::from_str(&e.to_string()))?;
    JSON::parse(&json)
}

/// Hides every animated element, then builds and starts the timeline.
pub fn play(timeline: &EntranceTimeline) -> Result<(), JsValue> {
    let gsap = gsap_global()?;

    method(&gsap, "set")?.call2(
        &gsap,
        &selectors(&timeline.hidden),
        &json_object(timeline.initial_json())?,
    )?;

    let mut tl = method(&gsap, "timeline")?.call1(&gsap, &json_object(timeline.options_json())?)?;
    for step in &timeline.steps {
        let to = method(&tl, "to")?;
        let targets = selectors(&step.targets);
        let vars = json_object(serde_json::to_string(&step.vars))?;
        tl = match step.position.to_gsap() {
            Some(position) => to.call3(&tl, &targets, &vars, &JsValue::from_str(&position))?,
            None => to.call2(&tl, &targets, &vars)?,
        };
    }

    debug!("Entrance timeline started with {} steps", timeline.steps.len());
    Ok(())
}

fn play_entrance() {
    if let Err(e) = play(&entrance_timeline()) {
        warn!("Skipping entrance animation: {:?}", e);
    }
}

/// Plays the entrance now if the window already fired `load`, otherwise on
/// `load`. Keep the returned listener alive until then.
pub fn play_entrance_on_load() -> Option<EventListener> {
    let window = web_sys::window()?;
    let loaded = window
        .document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false);

    if loaded {
        play_entrance();
        None
    } else {
        Some(EventListener::once(&window, "load", |_| play_entrance()))
    }
}
