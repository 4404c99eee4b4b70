use leptos::*;

use crate::filters::{FilterGroup, FilterSelection};

/// Dropdown of filter groups writing into a shared [`FilterSelection`].
#[component]
pub fn FilterPanel(groups: Vec<FilterGroup>, selection: RwSignal<FilterSelection>) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let active = move || selection.with(FilterSelection::active_count);
    let groups = store_value(groups);

    let group_views = move || {
        groups.with_value(|groups| {
            groups
                .iter()
                .cloned()
                .map(|group| {
                    let mode = group.mode;
                    let group_id = group.id.clone();
                    let options = group
                        .options
                        .into_iter()
                        .map(|option| {
                            let group_id = group_id.clone();
                            let value = option.value.clone();
                            let is_selected = {
                                let group_id = group_id.clone();
                                let value = value.clone();
                                move || selection.with(|s| s.is_selected(&group_id, &value))
                            };
                            view! {
                                <button
                                    class="filter-option"
                                    class:selected=is_selected.clone()
                                    on:click=move |_| selection.update(|s| s.toggle(&group_id, &value, mode))
                                >
                                    <span>{option.label}</span>
                                    <Show when=is_selected.clone()>
                                        <span class="filter-check">"✓"</span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view();

                    view! {
                        <div class="filter-group">
                            <h4>{group.label}</h4>
                            <div class="filter-options">{options}</div>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="filter-panel">
            <button class="filter-toggle" aria-label="Toggle filters" on:click=move |_| set_open.update(|o| *o = !*o)>
                <span>"⚙ Filters"</span>
                <Show when=move || { active() > 0 }>
                    <span class="filter-count">{active}</span>
                </Show>
            </button>

            <Show when=move || open.get()>
                <div class="filter-backdrop" aria-hidden="true" on:click=move |_| set_open.set(false)></div>
                <div class="filter-dropdown">
                    <div class="filter-dropdown-header">
                        <h3>"Filter Options"</h3>
                        <button aria-label="Close filters" on:click=move |_| set_open.set(false)>"✕"</button>
                    </div>
                    {group_views}
                    <Show when=move || { active() > 0 }>
                        <button class="filter-clear" on:click=move |_| selection.update(FilterSelection::clear)>
                            "Clear All Filters"
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
