use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

static REPORTED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

/// Emits `message` at warn level the first time it is seen in this process.
///
/// Returns `true` when the message was actually logged.
pub fn warn_once(message: &str) -> bool {
    let reported = REPORTED.get_or_init(|| Mutex::new(HashSet::new()));

    let fresh = match reported.lock() {
        Ok(mut seen) => seen.insert(message.to_owned()),
        // A poisoned set only loses deduplication.
        Err(poisoned) => poisoned.into_inner().insert(message.to_owned()),
    };

    if fresh {
        log::warn!("{message}");
    }
    fresh
}
