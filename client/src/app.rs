//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::toast_stack::ToastStack;
use crate::pages::{
    article::ArticlePage, channels::ChannelsPage, newsletter_configs::NewsletterConfigsPage,
    newsletter_content::NewsletterContentPage, oauth_callback::OAuthCallbackPage, review::ReviewPage,
    users::UsersPage,
};
use crate::state::{approval::PendingActions, query_cache::QueryCache, toast::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the query cache, toasts, in-flight approvals and UI chrome as
/// contexts, then routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cache = RwSignal::new(QueryCache::default());
    let toasts = RwSignal::new(ToastState::default());
    let pending = RwSignal::new(PendingActions::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(cache);
    provide_context(toasts);
    provide_context(pending);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/aci-dashboard.css"/>
        <Title text="ACI Dashboard"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ReviewPage/>
                    <Route path=(StaticSegment("articles"), ParamSegment("id")) view=ArticlePage/>
                    <Route path=StaticSegment("channels") view=ChannelsPage/>
                    <Route path=(StaticSegment("channels"), StaticSegment("callback")) view=OAuthCallbackPage/>
                    <Route path=(StaticSegment("newsletter"), StaticSegment("configs")) view=NewsletterConfigsPage/>
                    <Route path=(StaticSegment("newsletter"), StaticSegment("content")) view=NewsletterContentPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("users")) view=UsersPage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
