//! Search input with debounced callback and submit-to-search-page.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::use_navigate;

use crate::config::SEARCH_DEBOUNCE_MS;

/// URL of the search page for `query`, or `None` for a blank query.
pub fn search_url(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    let encoded: String = js_sys::encode_uri_component(trimmed).into();
    Some(format!("/search?q={}", encoded))
}

#[component]
pub fn SearchBar(
    #[prop(optional, into)] on_search: Option<Callback<String>>,
    #[prop(default = "Search documents, invoices, reports...")] placeholder: &'static str,
    #[prop(optional, into)] initial: Option<String>,
) -> impl IntoView {
    let (query, set_query) = create_signal(initial.unwrap_or_default());
    let (focused, set_focused) = create_signal(false);
    let pending = store_value(None::<Timeout>);
    let navigate = use_navigate();

    // Replacing the stored timeout drops (cancels) the previous one.
    let schedule_search = move |value: String| {
        if let Some(callback) = on_search {
            let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || callback.call(value));
            pending.set_value(Some(timeout));
        }
    };

    on_cleanup(move || {
        pending.try_update_value(|t| *t = None);
    });

    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        set_query.set(value.clone());
        schedule_search(value);
    };

    let on_clear = move |_| {
        set_query.set(String::new());
        pending.set_value(None);
        if let Some(callback) = on_search {
            callback.call(String::new());
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(url) = search_url(&query.get_untracked()) {
            log::info!("🔎 Searching: {}", url);
            navigate(&url, Default::default());
        }
    };

    view! {
        <form class="search-bar" class:focused=move || focused.get() on:submit=on_submit>
            <span class="search-icon" aria-hidden="true">"🔍"</span>
            <input
                type="text"
                aria-label="Search"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=on_input
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| set_focused.set(false)
            />
            <Show when=move || !query.get().is_empty()>
                <button type="button" class="search-clear" aria-label="Clear search" on:click=on_clear>
                    "✕"
                </button>
            </Show>
        </form>
    }
}
