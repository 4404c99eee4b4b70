use leptos::*;

use crate::components::{use_mobile_menu, SearchBar};
use crate::notify::ToastKind;

struct HeaderNotification {
    title: &'static str,
    message: &'static str,
    time: &'static str,
    kind: ToastKind,
    unread: bool,
}

const NOTIFICATIONS: [HeaderNotification; 3] = [
    HeaderNotification {
        title: "Critical Alert",
        message: "High fraud score detected in Invoice #5521",
        time: "2 min ago",
        kind: ToastKind::Error,
        unread: true,
    },
    HeaderNotification {
        title: "Scan Complete",
        message: "23 documents processed successfully",
        time: "15 min ago",
        kind: ToastKind::Success,
        unread: true,
    },
    HeaderNotification {
        title: "Weekly Report",
        message: "Your weekly fraud detection report is ready",
        time: "1 hour ago",
        kind: ToastKind::Info,
        unread: false,
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Dropdown {
    Closed,
    Notifications,
    Profile,
}

fn notification_rows() -> View {
    NOTIFICATIONS
        .iter()
        .map(|n| {
            let dot = match n.kind {
                ToastKind::Error => "dot dot-danger",
                ToastKind::Success => "dot dot-success",
                _ => "dot dot-primary",
            };
            view! {
                <div class="notification-row" class:unread=n.unread>
                    <span class=dot></span>
                    <div>
                        <p class="strong">{n.title}</p>
                        <p class="caption">{n.message}</p>
                        <p class="caption muted">{n.time}</p>
                    </div>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn Header() -> impl IntoView {
    let (dropdown, set_dropdown) = create_signal(Dropdown::Closed);
    let menu = use_mobile_menu();
    let unread = NOTIFICATIONS.iter().filter(|n| n.unread).count();

    let toggle = move |which: Dropdown| {
        set_dropdown.update(|d| *d = if *d == which { Dropdown::Closed } else { which });
    };

    view! {
        <header class="top-header">
            <button
                class="icon-button menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu.toggle()
            >
                {move || if menu.is_open() { "✕" } else { "☰" }}
            </button>
            <div class="header-search">
                <SearchBar/>
            </div>

            <div class="header-right">
                <div class="system-status">
                    <span class="dot dot-success"></span>
                    <span>"System Online"</span>
                </div>

                <div class="header-menu">
                    <button class="icon-button" aria-label="Notifications" on:click=move |_| toggle(Dropdown::Notifications)>
                        "🔔"
                        <Show when=move || { unread > 0 }>
                            <span class="unread-count">{unread}</span>
                        </Show>
                    </button>
                    <Show when=move || dropdown.get() == Dropdown::Notifications>
                        <div class="dropdown notifications">
                            <div class="dropdown-header"><h3>"Notifications"</h3></div>
                            <div class="dropdown-body">{notification_rows()}</div>
                            <div class="dropdown-footer">
                                <button class="link-button">"View All Notifications"</button>
                            </div>
                        </div>
                    </Show>
                </div>

                <div class="header-menu">
                    <button class="profile-button" on:click=move |_| toggle(Dropdown::Profile)>
                        <span class="avatar">"👤"</span>
                        <span class="profile-text">
                            <span class="strong">"Admin User"</span>
                            <span class="caption">"Finance Dept."</span>
                        </span>
                        <span class="chevron">"▾"</span>
                    </button>
                    <Show when=move || dropdown.get() == Dropdown::Profile>
                        <div class="dropdown profile">
                            <div class="dropdown-header">
                                <p class="strong">"Admin User"</p>
                                <p class="caption">"admin@apfinance.gov.in"</p>
                            </div>
                            <div class="dropdown-body">
                                <button class="menu-item">"⚙ Settings"</button>
                                <button class="menu-item danger">"⎋ Sign Out"</button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
