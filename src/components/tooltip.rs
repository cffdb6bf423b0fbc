//! Hover-reveal label wrapped around arbitrary content.

use leptos::prelude::*;

use crate::config::TOOLTIP_OFFSET_PX;

/// Wraps `children` and, on hover, fades in `label` to their right with a
/// left-pointing arrow.
///
/// Reveal is CSS-driven (`.tooltip:hover .tooltip__bubble`). When `show` is
/// false the bubble is not rendered at all.
#[component]
pub fn Tooltip(
    children: Children,
    #[prop(into)] label: Signal<String>,
    /// Gap in pixels between the wrapped content and the bubble.
    #[prop(optional)]
    offset: Option<i32>,
    /// Suppresses the tooltip entirely while false. Defaults to true.
    #[prop(optional, into)]
    show: Option<Signal<bool>>,
) -> impl IntoView {
    let offset = offset.unwrap_or(TOOLTIP_OFFSET_PX);
    let show = move || show.is_none_or(|s| s.get());
    let bubble_style = format!("left: calc(100% + {offset}px);");

    view! {
        <div class="tooltip">
            {children()}
            <Show when=show>
                <div class="tooltip__bubble" role="tooltip" style=bubble_style.clone()>
                    <span class="tooltip__arrow"></span>
                    {move || label.get()}
                </div>
            </Show>
        </div>
    }
}
