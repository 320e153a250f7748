use log::Level;

pub const THEME_KEY: &str = "theme";
pub const FITNESS_KEY: &str = "fitnessData";
pub const SLEEP_LOG_KEY: &str = "sleepLog";
pub const SOBRIETY_KEY: &str = "sobrietyDate";
pub const ROUTINE_KEY: &str = "bedtimeRoutine";

/// Testimonial auto-advance period.
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;
pub const MEDITATION_TICK_MS: u32 = 1_000;
/// Length of a meditation session, in seconds.
pub const MEDITATION_SECONDS: u32 = 300;
/// Delay before the simulated login redirect and the signup tab switch.
pub const FORM_FOLLOWUP_DELAY_MS: u32 = 2_000;

/// Share of a card that must be visible before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Cards start fading in 50 px before they reach the bottom of the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Viewports at or below this width get the collapsed navigation.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
