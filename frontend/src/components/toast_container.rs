use leptos::*;

use crate::notify::use_notifier;

/// Renders the toasts of the enclosing notifier, newest last.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let notifier = use_notifier();
    let toasts = notifier.toasts();

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() role="alert">
                            <span class="toast-icon">{toast.kind.icon()}</span>
                            <div class="toast-body">
                                <h4>{toast.title}</h4>
                                <p>{toast.message}</p>
                            </div>
                            <button class="toast-close" on:click=move |_| notifier.dismiss(id)>
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
