//! Parser warnings with coloured terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times
//! when a document repeats the same mistake. Used by the HTML parser; the
//! CLI silences it when it prints diagnostics itself.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are echoed to stderr at all.
static ENABLED: AtomicBool = AtomicBool::new(true);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock leaves the set usable, so recover it.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about a recoverable problem (prints once per unique message).
///
/// Returns `true` if the warning was printed, `false` if it was a duplicate
/// or warnings are disabled.
///
/// Every distinct message is remembered for the life of the process. A
/// long-running caller that parses many unrelated documents should call
/// [`clear_warnings`] between them, or the set keeps growing.
///
/// # Example
/// ```
/// use wombat_common::warning::{clear_warnings, warn_once};
///
/// clear_warnings();
/// let printed = warn_once("HTML Parser", "Missing closing tag for <p>");
/// assert!(printed);
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    if !warnings_enabled() {
        return false;
    }

    let key = format!("[{component}] {message}");
    let should_print = warned().get_or_insert_with(HashSet::new).insert(key);

    if should_print {
        eprintln!("{}", format!("[Wombat {component}] ⚠ {message}").yellow());
    }
    should_print
}

/// Clear all recorded warnings (call before parsing an unrelated document)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}

/// Turn stderr echoing of warnings on or off for the whole process.
///
/// Diagnostics collected by the parser are unaffected; this only controls
/// the terminal output.
pub fn set_warnings_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether [`warn_once`] currently prints anything.
#[must_use]
pub fn warnings_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}
