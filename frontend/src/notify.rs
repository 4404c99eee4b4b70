//! Toast notifications.
//!
//! [`ToastQueue`] is the plain data structure; [`Notifier`] wraps it in a
//! reactive signal and is handed to components through context. Each UI
//! root creates its own notifier with [`provide_notifier`], so nothing here
//! is global.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::TOAST_DURATION_MS;

/// Flavor of a toast; drives the icon and the accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
    Error,
    Success,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast-info",
            ToastKind::Warning => "toast toast-warning",
            ToastKind::Error => "toast toast-error",
            ToastKind::Success => "toast toast-success",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "❌",
            ToastKind::Success => "✅",
        }
    }
}

/// What a caller asks to show.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastRequest {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    /// Lifetime override; `None` uses [`TOAST_DURATION_MS`].
    pub duration_ms: Option<u32>,
}

impl ToastRequest {
    pub fn new(kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            duration_ms: None,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, title, message)
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn duration(&self) -> u32 {
        self.duration_ms.unwrap_or(TOAST_DURATION_MS)
    }
}

/// A toast currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id. Ids are never reused.
    pub fn push(&mut self, request: ToastRequest) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind: request.kind,
            title: request.title,
            message: request.message,
        });
        id
    }

    /// Remove a toast; returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Handle used by components to raise notifications.
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::new()),
        }
    }

    /// Show a toast and schedule its removal.
    pub fn notify(&self, request: ToastRequest) -> u64 {
        let duration = request.duration();
        log::info!("🔔 {}: {}", request.title, request.message);

        let mut id = 0;
        self.queue.update(|q| id = q.push(request));

        let queue = self.queue;
        Timeout::new(duration, move || {
            // the signal may be gone if the root unmounted first
            let _ = queue.try_update(|q| q.dismiss(id));
        })
        .forget();

        id
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        let queue = self.queue;
        Signal::derive(move || queue.with(|q| q.toasts().to_vec()))
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a notifier for the current UI root and expose it via context.
pub fn provide_notifier() -> Notifier {
    let notifier = Notifier::new();
    provide_context(notifier);
    notifier
}

/// Fetch the notifier of the enclosing UI root.
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let mut queue = ToastQueue::new();
        let a = queue.push(ToastRequest::error("A", "first"));
        let b = queue.push(ToastRequest::success("B", "second"));
        assert!(b > a);
        assert!(queue.dismiss(a));
        let c = queue.push(ToastRequest::warning("C", "third"));
        assert!(c > b);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut queue = ToastQueue::new();
        let id = queue.push(ToastRequest::error("Upload Failed", "try again"));
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_default_duration() {
        let request = ToastRequest::error("Upload Failed", "try again");
        assert_eq!(request.duration(), TOAST_DURATION_MS);
        assert_eq!(request.with_duration(1_000).duration(), 1_000);
    }
}
