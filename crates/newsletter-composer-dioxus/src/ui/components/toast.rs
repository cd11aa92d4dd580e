use dioxus::prelude::*;
use newsletter_composer_engine::notify::{Notification, Notifier};

/// Notifier that queues toasts into a signal the UI renders from
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: Signal<Vec<Notification>>,
}

impl ToastNotifier {
    pub fn new(toasts: Signal<Vec<Notification>>) -> Self {
        Self { toasts }
    }

    fn push(&self, notification: Notification) {
        let mut toasts = self.toasts;
        push_toast(&mut toasts.write(), notification);
    }
}

/// Most toasts kept on screen at once
pub const MAX_TOASTS: usize = 3;

/// Queue `notification` unless it repeats the newest toast, dropping the
/// oldest entries beyond [`MAX_TOASTS`]
pub fn push_toast(toasts: &mut Vec<Notification>, notification: Notification) {
    if toasts.last() == Some(&notification) {
        return;
    }
    toasts.push(notification);
    if toasts.len() > MAX_TOASTS {
        let excess = toasts.len() - MAX_TOASTS;
        toasts.drain(..excess);
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        log::info!("{message}");
        self.push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
        self.push(Notification::Error(message.to_string()));
    }
}

/// Stack of toasts; clicking one dismisses it
#[component]
pub fn ToastList(notifications: Vec<Notification>, on_dismiss: Callback<usize>) -> Element {
    rsx! {
        div {
            class: "toast-list",
            for (index, notification) in notifications.into_iter().enumerate() {
                Toast {
                    key: "{index}",
                    notification,
                    on_click: move |_: ()| on_dismiss.call(index),
                }
            }
        }
    }
}

#[component]
fn Toast(notification: Notification, on_click: Callback<()>) -> Element {
    let class = if notification.is_error() {
        "toast toast-error"
    } else {
        "toast toast-success"
    };
    let message = notification.message();

    rsx! {
        div {
            class: "{class}",
            role: "status",
            onclick: move |_| on_click.call(()),
            "{message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pretty_assertions::assert_eq;

    #[component]
    fn Harness(notifications: Vec<Notification>) -> Element {
        rsx! {
            ToastList { notifications, on_dismiss: move |_: usize| {} }
        }
    }

    #[test]
    fn test_toasts_render_with_severity() {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                notifications: vec![
                    Notification::Success("Newsletter template saved successfully".to_string()),
                    Notification::Error("Failed to save template: disk full".to_string()),
                ],
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("toast toast-success"));
        assert!(html.contains("Newsletter template saved successfully"));
        assert!(html.contains("toast toast-error"));
        assert!(html.contains("Failed to save template: disk full"));
    }

    #[test]
    fn test_no_toasts_renders_empty_stack() {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                notifications: Vec::new(),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(!html.contains("toast-success"));
    }

    #[test]
    fn test_repeated_error_is_shown_once() {
        let mut toasts = Vec::new();
        let rejected = Notification::Error("Width must be between 300 and 800 pixels".to_string());

        push_toast(&mut toasts, rejected.clone());
        push_toast(&mut toasts, rejected.clone());

        assert_eq!(toasts, vec![rejected]);
    }

    #[test]
    fn test_toast_list_is_capped_to_newest() {
        let mut toasts = Vec::new();
        for n in 0..10 {
            push_toast(&mut toasts, Notification::Error(format!("Shape size got {n}")));
        }

        assert_eq!(toasts.len(), MAX_TOASTS);
        assert_eq!(toasts[0].message(), "Shape size got 7");
        assert_eq!(toasts[MAX_TOASTS - 1].message(), "Shape size got 9");
    }
}
