//! Toast overlay and the helper that raises auto-dismissing toasts.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Push a toast and schedule its removal after [`TOAST_DURATION`].
///
/// The user may close it earlier; a late timer then finds nothing to remove.
///
/// [`TOAST_DURATION`]: crate::state::toast::TOAST_DURATION
pub fn notify(toasts: RwSignal<ToastState>, title: &str, description: &str) {
    if let Some(id) = toasts.try_update(|t| t.push(title, description)) {
        schedule_dismiss(toasts, id);
    }
}

/// Timers only run in the browser; SSR never raises toasts.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::state::toast::TOAST_DURATION).await;
        toasts.update(|t| {
            t.dismiss(id);
        });
    });
}

/// Fixed-position stack of active toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="assertive">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class="toast" role="alert">
                                <div class="toast__body">
                                    <div class="toast__title">{toast.title}</div>
                                    <div class="toast__description">{toast.description}</div>
                                </div>
                                <button
                                    class="toast__close"
                                    title="Dismiss"
                                    on:click=move |_| {
                                        toasts.update(|t| {
                                            t.dismiss(id);
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
