use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, info};
use shared::{Countdown, CountdownFace, Slot, TargetInstant, TickOutcome, TICK_INTERVAL_MS};
use yew::prelude::*;

/// Owned one-second timer driving a [`Countdown`]. Dropping it cancels the
/// interval.
pub struct CountdownTimer {
    interval: Option<Interval>,
    countdown: Rc<RefCell<Countdown>>,
}

impl CountdownTimer {
    /// Ticks once right away, then every second. `on_tick` receives the
    /// face after every non-inert tick.
    pub fn start(target: TargetInstant, on_tick: Callback<(CountdownFace, TickOutcome)>) -> Self {
        let countdown = Rc::new(RefCell::new(Countdown::new(target)));
        let face = Rc::new(RefCell::new(CountdownFace::default()));

        let tick = {
            let countdown = countdown.clone();
            move || {
                let now = js_sys::Date::now() as i64;
                let outcome = countdown.borrow_mut().tick(now, &mut *face.borrow_mut());
                if outcome != TickOutcome::Inert {
                    let snapshot = face.borrow().clone();
                    on_tick.emit((snapshot, outcome));
                }
            }
        };

        tick();
        let interval = if countdown.borrow().is_finished() {
            None
        } else {
            Some(Interval::new(TICK_INTERVAL_MS, tick))
        };

        Self {
            interval,
            countdown,
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Arrived or stopped; further ticks do nothing.
    pub fn is_finished(&self) -> bool {
        self.countdown.borrow().is_finished()
    }

    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.cancel();
            debug!("Countdown timer cancelled");
        }
        self.countdown.borrow_mut().stop();
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownPanelProps {
    pub target: TargetInstant,
    #[prop_or(AttrValue::from("Presentación Manuel Lora"))]
    pub title: AttrValue,
}

#[function_component(CountdownPanel)]
pub fn countdown_panel(props: &CountdownPanelProps) -> Html {
    let face = use_state(CountdownFace::default);
    let arrived = use_state(|| false);

    // The timer lives as long as the effect; arrival changes the deps, which
    // drops it.
    {
        let face = face.clone();
        let arrived = arrived.clone();
        use_effect_with((props.target, *arrived), move |(target, done)| {
            let timer = if *done {
                None
            } else {
                let on_tick = Callback::from(move |(next, outcome): (CountdownFace, TickOutcome)| {
                    face.set(next);
                    if outcome == TickOutcome::Arrived {
                        info!("Countdown arrived");
                        arrived.set(true);
                    }
                });
                Some(CountdownTimer::start(*target, on_tick))
            };
            move || drop(timer)
        });
    }

    html! {
        <section class="presentation-counter">
            <h3 class="counter-title">{props.title.clone()}</h3>
            <div id="countdown" class="countdown">
                if let Some(message) = face.arrived_message() {
                    <h3 class="countdown-arrived">{message.to_string()}</h3>
                } else {
                    { for Slot::ALL.iter().map(|slot| html! {
                        <div class="time-box" key={slot.element_id()}>
                            <span id={slot.element_id()} class="time-value">
                                {face.digit_or_placeholder(*slot).to_string()}
                            </span>
                            <span class="time-label">{slot.label()}</span>
                        </div>
                    }) }
                }
            </div>
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use shared::countdown::{DAY_MS, SECOND_MS};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn recording() -> (Rc<RefCell<Vec<TickOutcome>>>, Callback<(CountdownFace, TickOutcome)>) {
        let outcomes = Rc::new(RefCell::new(Vec::new()));
        let callback = {
            let outcomes = outcomes.clone();
            Callback::from(move |(_, outcome): (CountdownFace, TickOutcome)| {
                outcomes.borrow_mut().push(outcome);
            })
        };
        (outcomes, callback)
    }

    fn in_future(ms: i64) -> TargetInstant {
        TargetInstant::from_millis(js_sys::Date::now() as i64 + ms)
    }

    #[wasm_bindgen_test]
    fn test_past_target_never_starts_interval() {
        let (outcomes, on_tick) = recording();

        let timer = CountdownTimer::start(in_future(-SECOND_MS), on_tick);

        assert!(!timer.is_running());
        assert!(timer.is_finished());
        assert_eq!(*outcomes.borrow(), vec![TickOutcome::Arrived]);
    }

    #[wasm_bindgen_test]
    async fn test_stop_cancels_interval() {
        let (outcomes, on_tick) = recording();

        let mut timer = CountdownTimer::start(in_future(DAY_MS), on_tick);
        assert!(timer.is_running());
        assert!(!timer.is_finished());
        assert!(matches!(outcomes.borrow()[..], [TickOutcome::Running(_)]));

        timer.stop();
        assert!(!timer.is_running());
        assert!(timer.is_finished());

        TimeoutFuture::new(TICK_INTERVAL_MS + 500).await;
        assert_eq!(outcomes.borrow().len(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_drop_cancels_interval() {
        let (outcomes, on_tick) = recording();

        let timer = CountdownTimer::start(in_future(DAY_MS), on_tick);
        assert!(timer.is_running());
        drop(timer);

        TimeoutFuture::new(TICK_INTERVAL_MS + 500).await;
        assert!(matches!(outcomes.borrow()[..], [TickOutcome::Running(_)]));
    }

    #[wasm_bindgen_test]
    async fn test_running_timer_keeps_ticking() {
        let (outcomes, on_tick) = recording();

        let timer = CountdownTimer::start(in_future(DAY_MS), on_tick);
        TimeoutFuture::new(TICK_INTERVAL_MS + 500).await;

        assert!(timer.is_running());
        assert!(outcomes.borrow().len() >= 2);
        assert!(outcomes
            .borrow()
            .iter()
            .all(|outcome| matches!(outcome, TickOutcome::Running(_))));
    }
}
