//! Document drop zone with drag & drop support.
//!
//! Handles file selection only; the upload itself is driven by the page.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

/// Extensions the scan endpoint accepts.
pub const ACCEPTED_EXTENSIONS: [&str; 6] = ["pdf", "doc", "docx", "jpg", "jpeg", "png"];

const INPUT_ID: &str = "documentInput";

/// Whether `filename` has one of the [`ACCEPTED_EXTENSIONS`].
pub fn is_accepted(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[component]
pub fn DropZone(#[prop(into)] on_select: Callback<File>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let (dragging, set_dragging) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let accept = move |file: File| {
        if disabled.get_untracked() {
            log::warn!("⚠️ Ignoring {} while another document is in flight", file.name());
            return;
        }
        if !is_accepted(&file.name()) {
            set_error.set(Some(format!("Unsupported file type: {}", file.name())));
            return;
        }
        set_error.set(None);
        log::info!("📄 Selected {}", file.name());
        on_select.call(file);
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            accept(file);
        }
        // allow picking the same file again
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            accept(file);
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            set_dragging.set(true);
        }
    };

    let trigger_file_input = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(input) = gloo_utils::document().get_element_by_id(INPUT_ID) {
            if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                html_input.click();
            }
        }
    };

    view! {
        <div
            class="drop-zone"
            class:dragging=move || dragging.get()
            class:disabled=move || disabled.get()
            on:click=trigger_file_input
            on:dragover=on_drag_over
            on:dragleave=move |_| set_dragging.set(false)
            on:drop=on_drop
        >
            <div class="drop-zone-icon">"📤"</div>
            <div class="drop-zone-text">
                {move || if disabled.get() {
                    "⏳ Processing document..."
                } else if dragging.get() {
                    "Release to upload"
                } else {
                    "Drag & drop a document here"
                }}
            </div>

            <Show when=move || !disabled.get()>
                <div class="drop-zone-hint">"or click to browse"</div>
                <div class="drop-zone-hint">"PDF, DOC, DOCX, JPG, PNG up to 10 MB"</div>
            </Show>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <input
                type="file"
                id=INPUT_ID
                accept=".pdf,.doc,.docx,.jpg,.jpeg,.png"
                style="display:none"
                on:click=|ev| ev.stop_propagation()
                on:change=on_file_change
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extensions() {
        assert!(is_accepted("invoice.pdf"));
        assert!(is_accepted("SCAN.JPEG"));
        assert!(is_accepted("contract.final.docx"));
        assert!(!is_accepted("sheet.xlsx"));
        assert!(!is_accepted("README"));
    }
}
