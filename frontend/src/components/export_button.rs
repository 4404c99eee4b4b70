//! Download button for data already on screen.

use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::export::{export_filename, render_stats, ExportFormat};
use crate::notify::{use_notifier, ToastRequest};
use crate::types::DashboardStats;

/// Hand `content` to the browser as a file download.
fn download(content: &str, filename: &str, mime: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = gloo_utils::document().create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    Url::revoke_object_url(&url)
}

#[component]
pub fn ExportButton(
    #[prop(into)] stats: Signal<DashboardStats>,
    #[prop(into)] filename: String,
) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let notifier = use_notifier();
    let filename = store_value(filename);

    let export = move |format: ExportFormat| {
        set_open.set(false);
        let name = filename.with_value(|base| export_filename(base, format));
        let outcome = render_stats(&stats.get_untracked(), format)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                download(&content, &name, format.mime_type()).map_err(|e| format!("{:?}", e))
            });
        match outcome {
            Ok(()) => log::info!("💾 Exported {}", name),
            Err(e) => {
                log::error!("❌ Export failed: {}", e);
                notifier.notify(ToastRequest::error("Export Failed", "Could not export the data."));
            }
        }
    };

    let item = move |format: ExportFormat| {
        view! {
            <button class="menu-item" on:click=move |_| export(format)>{format.label()}</button>
        }
    };

    view! {
        <div class="header-menu export-button">
            <button class="btn btn-ghost" on:click=move |_| set_open.update(|o| *o = !*o)>
                "⤓ Export"
            </button>
            <Show when=move || open.get()>
                <div class="dropdown export-menu">
                    <div class="dropdown-body">
                        {item(ExportFormat::Csv)}
                        {item(ExportFormat::Json)}
                    </div>
                </div>
            </Show>
        </div>
    }
}
