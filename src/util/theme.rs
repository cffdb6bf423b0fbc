//! Light/dark theme switching for the top bar's theme button.
//!
//! Applies the `.dark-mode` class to the `<html>` element. The initial value
//! follows the system color-scheme preference; the choice is not persisted.
//! Requires a browser environment; SSR and tests get inert fallbacks.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark-mode";

/// Whether the system prefers a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").unwrap_or_default())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            log::warn!("theme: no document element to style");
            return;
        };
        let class_list = el.class_list();
        let result = if enabled { class_list.add_1(DARK_CLASS) } else { class_list.remove_1(DARK_CLASS) };
        if let Err(err) = result {
            log::warn!("theme: failed to update html class: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("theme: dark={enabled} (no document)");
    }
}

/// Flip the theme and apply it, returning the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    next
}
