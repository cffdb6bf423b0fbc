//! Right-aligned top bar with the exit action and two icon toggles.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bar owns no state. What "Exit Admin", the theme toggle, and the
//! security toggle actually do is decided by the page that mounts it,
//! through optional callbacks; unbound buttons render but do nothing.

use leptos::prelude::*;

use crate::components::icon::{Glyph, glyph};

const BUTTON_ICON_SIZE_PX: u32 = 22;

/// Top navigation bar.
#[component]
pub fn TopNavBar(
    #[prop(optional, into)] on_exit: Option<Callback<()>>,
    #[prop(optional, into)] on_toggle_theme: Option<Callback<()>>,
    #[prop(optional, into)] on_toggle_security: Option<Callback<()>>,
    /// Current theme, used only to pick the sun or moon glyph.
    #[prop(optional, into)]
    dark: Option<Signal<bool>>,
) -> impl IntoView {
    let fire = move |cb: Option<Callback<()>>| {
        if let Some(cb) = cb {
            cb.run(());
        }
    };
    let is_dark = move || dark.is_some_and(|d| d.get());

    view! {
        <header class="top-nav">
            <span class="top-nav__spacer"></span>
            // Row-reversed: first in markup renders rightmost.
            <div class="top-nav__controls">
                <button class="btn top-nav__exit" on:click=move |_| fire(on_exit)>
                    {glyph(Glyph::Exit, BUTTON_ICON_SIZE_PX)}
                    <span>"Exit Admin"</span>
                </button>
                <button
                    class="btn top-nav__icon-btn"
                    title="Toggle theme"
                    aria-label="Toggle theme"
                    on:click=move |_| fire(on_toggle_theme)
                >
                    {move || {
                        if is_dark() {
                            glyph(Glyph::Sun, BUTTON_ICON_SIZE_PX).into_any()
                        } else {
                            glyph(Glyph::Moon, BUTTON_ICON_SIZE_PX).into_any()
                        }
                    }}
                </button>
                <button
                    class="btn top-nav__icon-btn"
                    title="Security"
                    aria-label="Toggle security panel"
                    on:click=move |_| fire(on_toggle_security)
                >
                    {glyph(Glyph::Shield, BUTTON_ICON_SIZE_PX)}
                </button>
            </div>
        </header>
    }
}
