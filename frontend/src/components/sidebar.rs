use leptos::*;
use leptos_router::use_location;

use crate::config::{APP_NAME, RESULTS_PATH};

struct NavItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MAIN_NAV: [NavItem; 3] = [
    NavItem { href: "/", label: "Dashboard", icon: "▦" },
    NavItem { href: "/upload", label: "Upload Documents", icon: "⇪" },
    NavItem { href: RESULTS_PATH, label: "Analysis Results", icon: "🔎" },
];

/// Open state of the sidebar drawer on narrow screens.
#[derive(Clone, Copy)]
pub struct MobileMenu {
    open: RwSignal<bool>,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.update(|o| *o = !*o);
    }

    pub fn close(&self) {
        if self.open.get_untracked() {
            self.open.set(false);
        }
    }
}

/// Install the menu state at the app root.
pub fn provide_mobile_menu() -> MobileMenu {
    let menu = MobileMenu { open: create_rw_signal(false) };
    provide_context(menu);
    menu
}

/// The menu installed by [`provide_mobile_menu`], or a detached closed one.
pub fn use_mobile_menu() -> MobileMenu {
    use_context::<MobileMenu>().unwrap_or_else(|| MobileMenu { open: create_rw_signal(false) })
}

/// `/` only matches itself; other entries also match their sub-paths.
pub fn is_active(href: &str, pathname: &str) -> bool {
    pathname == href || (href != "/" && pathname.starts_with(href))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let menu = use_mobile_menu();

    // a route change closes the drawer
    create_effect(move |_| {
        location.pathname.with(|_| ());
        menu.close();
    });

    let links = MAIN_NAV
        .iter()
        .map(|item| {
            let href = item.href;
            let active = move || location.pathname.with(|p| is_active(href, p));
            view! {
                <a href=href class="nav-link" class:active=active on:click=move |_| menu.close()>
                    <span class="nav-icon">{item.icon}</span>
                    <span>{item.label}</span>
                    <Show when=active>
                        <span class="nav-chevron">"›"</span>
                    </Show>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="sidebar-backdrop" class:open=move || menu.is_open() on:click=move |_| menu.close()></div>
        <aside class="sidebar" class:open=move || menu.is_open()>
            <div class="sidebar-brand">
                <div class="brand-mark">"🛡️"</div>
                <div>
                    <h1>{APP_NAME}</h1>
                    <p class="muted">"Finance Department"</p>
                </div>
            </div>

            <nav class="sidebar-nav">
                <p class="nav-section">"Main Menu"</p>
                {links}
            </nav>

            <div class="sidebar-footer">
                <p class="muted">"An Initiative of"</p>
                <p class="strong">"Government of Andhra Pradesh"</p>
                <p class="muted">"Finance Department"</p>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_route_matching() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/upload"));
        assert!(is_active("/upload", "/upload"));
        assert!(is_active(RESULTS_PATH, "/analysis-results"));
        assert!(!is_active("/upload", "/"));
    }

    #[test]
    fn test_mobile_menu_toggle_and_close() {
        let runtime = create_runtime();

        let menu = provide_mobile_menu();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());

        runtime.dispose();
    }
}
