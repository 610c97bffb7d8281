//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::chat_panel::ChatPanel;
use crate::components::toaster::Toaster;
use crate::config::PAGE_TITLE;
use crate::state::toast::ToastState;

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
/// Provides the toast context and routes `/` to the chat page. Chat state is
/// not provided here; each `ChatPanel` owns its own.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/moonchat.css"/>
        <Title text=PAGE_TITLE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}

/// Single page hosting the heading and the chat panel.
#[component]
fn ChatPage() -> impl IntoView {
    view! {
        <main class="chat-page">
            <h1 class="chat-page__heading">{PAGE_TITLE}</h1>
            <ChatPanel/>
        </main>
    }
}
