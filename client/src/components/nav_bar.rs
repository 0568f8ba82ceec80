//! Top navigation with section links and the dark-mode toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Sections in display order: `(href, label)`.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Review queue"),
    ("/channels", "Channels"),
    ("/newsletter/configs", "Newsletters"),
    ("/newsletter/content", "Content"),
    ("/admin/users", "Users"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    };

    view! {
        <header class="nav-bar" class:nav-bar--open=move || ui.get().nav_open>
            <a class="nav-bar__brand" href="/">"ACI Dashboard"</a>
            <button
                class="nav-bar__menu"
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(UiState::toggle_nav)
            >
                "☰"
            </button>
            <nav class="nav-bar__links">
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a class="nav-bar__link" href=href on:click=move |_| ui.update(UiState::close_nav)>
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <button class="btn nav-bar__theme" on:click=on_toggle_theme>
                {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
            </button>
        </header>
    }
}
