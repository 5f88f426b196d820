//! Transient toast notifications.
//!
//! One [`Notifier`] is provided at the application root. Every call to
//! [`Notifier::notify`] produces an independent toast that disappears after the
//! configured duration or when its close button is clicked.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn modifier(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification--success",
            NotificationKind::Error => "notification--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    /// Exit animation running; removed once it ends.
    pub leaving: bool,
}

/// Plain list of visible notifications. No dedup and no limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationStack {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationStack {
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            leaving: false,
        });
        id
    }

    /// Start the exit animation. Returns false when the entry is gone or already leaving,
    /// so the timer and the close button never both schedule a removal.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.leaving => {
                n.leaving = true;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct Notifier {
    stack: RwSignal<NotificationStack>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(NotificationStack::default()),
        }
    }

    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        match kind {
            NotificationKind::Success => log::info!("{}", message),
            NotificationKind::Error => log::warn!("{}", message),
        }
        let mut id = 0;
        self.stack.update(|s| id = s.push(message, kind));

        let this = *self;
        let duration = config::get().notifications.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            this.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Error);
    }

    pub fn dismiss(&self, id: u64) {
        let mut started = false;
        self.stack.update(|s| started = s.begin_dismiss(id));
        if !started {
            return;
        }
        let stack = self.stack;
        let exit = config::get().notifications.exit_animation_ms;
        spawn_local(async move {
            TimeoutFuture::new(exit).await;
            stack.update(|s| s.remove(id));
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not provided in context")
}

/// Fixed bottom-right stack of toasts.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="notification-stack">
            <For
                each=move || notifier.stack.get().items().to_vec()
                key=|n| (n.id, n.leaving)
                children=move |n| {
                    let id = n.id;
                    let class = format!(
                        "notification {} {}",
                        n.kind.modifier(),
                        if n.leaving { "notification--leaving" } else { "notification--entering" }
                    );
                    let glyph = match n.kind {
                        NotificationKind::Success => "check-circle",
                        NotificationKind::Error => "alert-circle",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="notification__content">
                                {icon(glyph)}
                                <span>{n.message.clone()}</span>
                            </div>
                            <span class="notification__close" on:click=move |_| notifier.dismiss(id)>
                                "×"
                            </span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_push_is_independent() {
        let mut stack = NotificationStack::default();
        let a = stack.push("Guest created successfully", NotificationKind::Success);
        let b = stack.push("Guest created successfully", NotificationKind::Success);
        assert_ne!(a, b);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_dismiss_is_two_phase() {
        let mut stack = NotificationStack::default();
        let a = stack.push("saved", NotificationKind::Success);
        let b = stack.push("failed", NotificationKind::Error);

        assert!(stack.begin_dismiss(a));
        assert!(!stack.begin_dismiss(a), "second dismissal is a no-op");
        assert!(stack.items()[0].leaving);
        assert!(!stack.items()[1].leaving);

        stack.remove(a);
        assert_eq!(stack.items().len(), 1);
        assert_eq!(stack.items()[0].id, b);
        assert!(!stack.begin_dismiss(a));
    }
}
