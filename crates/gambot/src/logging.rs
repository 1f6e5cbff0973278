use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enables verbose output for the rest of the process; the flag can
/// come from the CLI or from `GAMBOT_VERBOSE`.
pub fn init(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn env_flag() -> bool {
    env::var("GAMBOT_VERBOSE")
        .map(|value| {
            matches!(
                value.trim().to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
        .unwrap_or(false)
}

pub fn stage(stage: &str, message: impl AsRef<str>) {
    eprintln!("[gambot::{}] {}", stage, message.as_ref());
}

pub fn verbose(message: impl AsRef<str>) {
    if VERBOSE.load(Ordering::Relaxed) {
        eprintln!("[gambot::verbose] {}", message.as_ref());
    }
}
