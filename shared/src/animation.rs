//! Entrance animation configuration handed to GSAP.
//!
//! This module only describes the sequence. Playing it is GSAP's job.

use serde::Serialize;

pub const DEFAULT_EASE: &str = "back.out(1.7)";

/// Vertical offset (px) animated elements start from.
pub const ENTRANCE_OFFSET_Y: f64 = 20.0;

/// Tween properties, serialised to the plain object GSAP expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TweenVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub y: f64,
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<&'static str>,
}

impl TweenVars {
    /// Starting pose: invisible and pushed down.
    pub fn hidden() -> Self {
        Self {
            duration: None,
            y: ENTRANCE_OFFSET_Y,
            opacity: 0.0,
            stagger: None,
            ease: None,
        }
    }

    /// Rise into place over `duration` seconds.
    pub fn reveal(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            y: 0.0,
            opacity: 1.0,
            stagger: None,
            ease: None,
        }
    }

    pub fn with_stagger(mut self, stagger: f64) -> Self {
        self.stagger = Some(stagger);
        self
    }

    pub fn with_ease(mut self, ease: &'static str) -> Self {
        self.ease = Some(ease);
        self
    }
}

/// Where a step sits on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Right after the previous step.
    AfterPrevious,
    /// Relative to the end of the previous step, in seconds.
    Offset(f64),
    /// Named label; steps sharing a label start together.
    Label(&'static str),
}

impl Position {
    /// GSAP position parameter, or `None` when it should be omitted.
    pub fn to_gsap(self) -> Option<String> {
        match self {
            Position::AfterPrevious => None,
            Position::Offset(seconds) if seconds < 0.0 => Some(format!("-={}", -seconds)),
            Position::Offset(seconds) => Some(format!("+={}", seconds)),
            Position::Label(label) => Some(label.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineStep {
    pub targets: Vec<&'static str>,
    pub vars: TweenVars,
    pub position: Position,
}

impl TimelineStep {
    fn new(targets: &[&'static str], vars: TweenVars, position: Position) -> Self {
        Self {
            targets: targets.to_vec(),
            vars,
            position,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct TimelineDefaults {
    ease: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct TimelineOptions {
    defaults: TimelineDefaults,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntranceTimeline {
    /// Everything put into the hidden pose before the timeline starts.
    pub hidden: Vec<&'static str>,
    pub initial: TweenVars,
    pub default_ease: &'static str,
    pub steps: Vec<TimelineStep>,
}

impl EntranceTimeline {
    /// `{"defaults":{"ease":...}}` for `gsap.timeline`.
    pub fn options_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&TimelineOptions {
            defaults: TimelineDefaults {
                ease: self.default_ease,
            },
        })
    }

    pub fn initial_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.initial)
    }
}

/// Landing page entrance: header first, then hero copy cascading in,
/// features and phone preview together, footer last.
pub fn entrance_timeline() -> EntranceTimeline {
    EntranceTimeline {
        hidden: vec![
            ".logo",
            ".hero h2",
            ".hero .subtitle",
            "#hero-actions",
            ".presentation-counter",
            ".features",
            ".phone-preview",
            "footer",
            ".theme-toggle",
        ],
        initial: TweenVars::hidden(),
        default_ease: DEFAULT_EASE,
        steps: vec![
            TimelineStep::new(
                &[".logo", ".theme-toggle"],
                TweenVars::reveal(0.8).with_stagger(0.1),
                Position::AfterPrevious,
            ),
            TimelineStep::new(&[".hero h2"], TweenVars::reveal(0.8), Position::Offset(-0.6)),
            TimelineStep::new(
                &[".hero .subtitle"],
                TweenVars::reveal(0.8),
                Position::Offset(-0.6),
            ),
            TimelineStep::new(&["#hero-actions"], TweenVars::reveal(0.8), Position::Offset(-0.5)),
            TimelineStep::new(
                &[".presentation-counter"],
                TweenVars::reveal(0.8),
                Position::Offset(-0.4),
            ),
            TimelineStep::new(&[".features"], TweenVars::reveal(0.8), Position::Label("split")),
            TimelineStep::new(
                &[".phone-preview"],
                TweenVars::reveal(0.8).with_ease("circ.out"),
                Position::Label("split"),
            ),
            TimelineStep::new(&["footer"], TweenVars::reveal(1.0), Position::Offset(-0.5)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_every_animated_target_starts_hidden() {
        let timeline = entrance_timeline();
        for step in &timeline.steps {
            for target in &step.targets {
                assert!(
                    timeline.hidden.contains(target),
                    "{} is animated but never hidden",
                    target
                );
            }
        }
    }

    #[test]
    fn test_positions_render_as_gsap_strings() {
        assert_eq!(Position::AfterPrevious.to_gsap(), None);
        assert_eq!(Position::Offset(-0.6).to_gsap().as_deref(), Some("-=0.6"));
        assert_eq!(Position::Offset(0.25).to_gsap().as_deref(), Some("+=0.25"));
        assert_eq!(Position::Label("split").to_gsap().as_deref(), Some("split"));
    }

    #[test]
    fn test_initial_and_options_json() {
        let timeline = entrance_timeline();

        let initial: serde_json::Value =
            serde_json::from_str(&timeline.initial_json().unwrap()).unwrap();
        assert_eq!(initial, json!({ "y": 20.0, "opacity": 0.0 }));

        let options: serde_json::Value =
            serde_json::from_str(&timeline.options_json().unwrap()).unwrap();
        assert_eq!(options, json!({ "defaults": { "ease": "back.out(1.7)" } }));
    }

    #[test]
    fn test_phone_preview_overrides_ease() {
        let timeline = entrance_timeline();
        let preview = timeline
            .steps
            .iter()
            .find(|step| step.targets == vec![".phone-preview"])
            .unwrap();

        let vars = serde_json::to_value(&preview.vars).unwrap();
        assert_eq!(
            vars,
            json!({ "duration": 0.8, "y": 0.0, "opacity": 1.0, "ease": "circ.out" })
        );
        assert_eq!(preview.position, Position::Label("split"));
    }

    #[test]
    fn test_header_staggers_and_footer_is_slower() {
        let timeline = entrance_timeline();
        let first = timeline.steps.first().unwrap();
        let last = timeline.steps.last().unwrap();

        assert_eq!(first.vars.stagger, Some(0.1));
        assert_eq!(last.targets, vec!["footer"]);
        assert_eq!(last.vars.duration, Some(1.0));
    }
}
