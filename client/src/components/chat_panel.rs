//! Chat panel: message history, draft input, and the send cycle.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::config::{INPUT_PLACEHOLDER, api_base};
use crate::net::types::SendError;
use crate::state::chat::{ChatState, Message};
use crate::state::toast::ToastState;

const SEND_FAILED_TITLE: &str = "Error";
const SEND_FAILED_DESCRIPTION: &str = "Failed to send message";

/// Chat panel showing message history and an input for asking questions.
///
/// Owns its `ChatState`; remounting the panel starts an empty session.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Draft edits touch `chat` on every keystroke; memos keep the list and
    // the scroll effect quiet until history actually changes.
    let history = Memo::new(move |_| chat.with(|c| c.history().to_vec()));
    let history_len = Memo::new(move |_| history.with(Vec::len));

    Effect::new(move || {
        let _len = history_len.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(payload) = chat.try_update(ChatState::begin_send).flatten() else {
            return;
        };

        leptos::task::spawn_local(async move {
            let result = crate::net::api::send_chat_message(api_base(), &payload).await;
            let outcome = chat.try_update(|c| c.finish_send(result));
            if let Some(Err(e)) = outcome {
                report_send_failure(toasts, &e);
            }
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    let pending = move || chat.with(ChatState::is_pending);
    let can_send = move || chat.with(ChatState::can_send);

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = history.get();
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }

                    messages
                        .into_iter()
                        .map(|message| view! { <MessageBubble message=message/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
                {move || {
                    pending()
                        .then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder=INPUT_PLACEHOLDER
                    prop:value=move || chat.with(|c| c.draft().to_owned())
                    on:input=move |ev| chat.update(|c| c.update_draft(event_target_value(&ev)))
                    on:keydown=on_keydown
                    disabled=pending
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    class:chat-panel__send--loading=pending
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    {move || if pending() { "Sending..." } else { "Send" }}
                </button>
            </div>
        </div>
    }
}

/// Plain Enter sends. Shift+Enter and keys pressed while an IME is composing
/// do not.
fn is_submit_key(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

/// Log the failure detail and show the generic send-failed toast.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn report_send_failure(toasts: RwSignal<ToastState>, err: &SendError) {
    #[cfg(feature = "hydrate")]
    log::warn!("chat send failed: {err}");
    notify(toasts, SEND_FAILED_TITLE, SEND_FAILED_DESCRIPTION);
}

/// One history entry. Bot answers with sources list them as external links.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let is_user = message.is_user();
    let has_sources = message.has_sources();
    let sources = message.sources().to_vec();

    view! {
        <div
            class="chat-panel__message"
            class:chat-panel__message--user=is_user
            class:chat-panel__message--bot={!is_user}
        >
            <p class="chat-panel__text">{message.text().to_owned()}</p>
            {has_sources
                .then(|| {
                    view! {
                        <div class="chat-panel__sources">
                            <span class="chat-panel__sources-label">"Sources:"</span>
                            {sources
                                .into_iter()
                                .map(|url| {
                                    let href = url.clone();
                                    view! {
                                        <a
                                            class="chat-panel__source"
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            {url}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })}
        </div>
    }
}
