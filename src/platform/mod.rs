//! Platform abstraction layer
//!
//! Handles browser/native differences for logging and wall-clock dates.
//! Storage differences live in [`crate::persistence`].

/// Install the platform logger
///
/// Safe to call more than once; repeat calls are ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env().try_init();
}

/// Install the platform logger and panic hook
///
/// Safe to call more than once; repeat calls are ignored.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Today's date as a short `M/D/YY` string, for leaderboard records
#[cfg(not(target_arch = "wasm32"))]
pub fn today_string() -> String {
    use chrono::Datelike;
    let now = chrono::Local::now();
    format!("{}/{}/{}", now.month(), now.day(), now.year() % 100)
}

/// Today's date as a short `M/D/YY` string, for leaderboard records
#[cfg(target_arch = "wasm32")]
pub fn today_string() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{}/{}/{}",
        date.get_month() + 1,
        date.get_date(),
        date.get_full_year() % 100
    )
}
