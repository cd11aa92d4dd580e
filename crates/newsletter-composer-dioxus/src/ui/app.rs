use dioxus::prelude::*;
use newsletter_composer_engine::editing::{Cmd, Composer};
use newsletter_composer_engine::models::OwnerId;
use newsletter_composer_engine::notify::{Notification, Notifier};
use newsletter_composer_engine::store::JsonStore;
use std::path::PathBuf;
use std::sync::Arc;

use super::components::{ComposerView, ErrorScreen, ToastNotifier};

const COMPOSER_CSS: &str = include_str!("../assets/composer.css");

#[component]
pub fn App(store_path: PathBuf, owner: String, template_name: Option<String>) -> Element {
    let store = use_hook(|| {
        JsonStore::create(&store_path)
            .map(Arc::new)
            .map_err(|e| e.to_string())
    });

    match store {
        Ok(store) => rsx! {
            style { {COMPOSER_CSS} }
            Workspace { store, owner, template_name }
        },
        Err(message) => {
            log::error!("Cannot open template store: {message}");
            rsx! {
                ErrorScreen {
                    title: "Cannot open template store",
                    message,
                    details: Some(store_path.display().to_string()),
                }
            }
        }
    }
}

/// Owns the editing session: the composer, its toasts and the store calls
#[component]
fn Workspace(store: Arc<JsonStore>, owner: String, template_name: Option<String>) -> Element {
    let toasts = use_signal(Vec::<Notification>::new);
    let notifier = ToastNotifier::new(toasts);

    let mut composer = use_signal(|| {
        let composer = Composer::new(OwnerId::new(owner.clone()));
        match &template_name {
            Some(name) => composer.with_template_name(name.clone()),
            None => composer,
        }
    });

    // Load once on mount; failures degrade to an empty document inside `load`
    let load_store = store.clone();
    use_future(move || {
        let store = load_store.clone();
        async move {
            if composer.write().load(store.as_ref()).is_err() {
                log::warn!("Starting from an empty newsletter");
            }
        }
    });

    let on_command = move |cmd: Cmd| {
        let result = composer.write().apply(cmd);
        if let Err(e) = result {
            log::warn!("Edit rejected: {e}");
            notifier.error(&e.to_string());
        }
    };

    let on_save = move |_: ()| {
        let pending = composer.write().begin_save();
        let store = store.clone();
        spawn(async move {
            let result = pending.execute(store.as_ref());
            // Outcome is reported through the notifier
            let _ = composer.write().finish_save(pending, result, &notifier);
        });
    };

    let on_dismiss = move |index: usize| {
        let mut toasts = toasts;
        let mut list = toasts.write();
        if index < list.len() {
            list.remove(index);
        }
    };

    let snapshot = composer.read().snapshot();

    rsx! {
        ComposerView {
            snapshot,
            notifications: toasts(),
            on_command,
            on_save,
            on_dismiss,
        }
    }
}
