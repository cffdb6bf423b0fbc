//! Root component mounting the admin chrome around page content.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::sidebar::SidebarPanel;
use crate::components::top_nav_bar::TopNavBar;
use crate::util::theme;

/// Admin shell: sidebar on the left, top bar above the content area.
///
/// Binds the top bar's theme toggle to `util::theme`. Exit and security
/// actions belong to the embedding application and are only logged here.
#[component]
pub fn App(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    provide_meta_context();

    let dark = RwSignal::new(theme::system_prefers_dark());
    Effect::new(move || theme::apply(dark.get()));

    let on_toggle_theme = move |()| dark.set(theme::toggle(dark.get_untracked()));
    let on_exit = move |()| log::info!("admin shell: exit requested");
    let on_toggle_security = move |()| log::info!("admin shell: security panel toggled");

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-shell.css"/>
        <Title text="Admin"/>

        <div class="admin-shell">
            <SidebarPanel/>
            <div class="admin-shell__body">
                <TopNavBar
                    on_exit=on_exit
                    on_toggle_theme=on_toggle_theme
                    on_toggle_security=on_toggle_security
                    dark=dark
                />
                <main class="admin-shell__content">{children.map(|c| c())}</main>
            </div>
        </div>
    }
}
