//! Local preferences: pinned cases, recent searches and the theme.
//!
//! - `store`: the key-value [`PreferenceStore`] trait and its keys
//! - `pinned`, `recent`, `theme`: typed values and their stored encodings
//! - `preferences`: the [`Preferences`] accessor used by use cases

mod pinned;
mod preferences;
mod recent;
mod store;
mod theme;

pub use pinned::{PinToggle, PinnedCases};
pub use preferences::Preferences;
pub use recent::RecentSearches;
pub use store::{
    CHANGE_CHANNEL_CAPACITY, PINNED_CASES_KEY, PreferenceChange, PreferenceStore,
    RECENT_SEARCHES_KEY, THEME_KEY,
};
pub use theme::Theme;

/// Decodes a stored JSON string array. Anything unreadable is logged and
/// treated as empty.
fn decode_list(key: &str, raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!("Ignoring corrupt {} value: {}", key, err);
            Vec::new()
        }
    }
}
