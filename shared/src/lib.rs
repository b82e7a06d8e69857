pub mod animation;
pub mod countdown;
pub mod error;
pub mod notify;
pub mod theme;

// Re-export commonly used items
pub use error::{Result, SharedError};

pub use animation::{entrance_timeline, EntranceTimeline, Position, TimelineStep, TweenVars};
pub use countdown::{
    pad2, Countdown, CountdownFace, CountdownView, Remaining, Slot, TargetInstant, TickOutcome,
    TICK_INTERVAL_MS,
};
pub use notify::{
    classify_status, FormPayload, MessageTone, NotifyCopy, NotifyFace, NotifyForm,
    NotifyTransport, NotifyView, SubmissionState,
};
pub use theme::{MemoryThemeStore, Theme, ThemePreference, ThemeStore, THEME_STORAGE_KEY};
