use dioxus::prelude::*;

/// Full-window message for failures that leave nothing to edit
#[component]
pub fn ErrorScreen(title: String, message: String, details: Option<String>) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { class: "error-title", "{title}" }
            p { "{message}" }
            if let Some(ref path) = details {
                pre { class: "error-details", "{path}" }
            }
            p {
                class: "error-hint",
                "Pass a store directory as the first argument or set store_path in the config file."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_error_screen_renders_details_and_hint() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Cannot open template store".to_string(),
                message: "Permission denied".to_string(),
                details: Some("/srv/newsletters".to_string()),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Cannot open template store"));
        assert!(html.contains("Permission denied"));
        assert!(html.contains("/srv/newsletters"));
        assert!(html.contains("store_path"));
    }

    #[test]
    fn test_error_screen_without_details() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Startup error".to_string(),
                message: "No store".to_string(),
                details: None,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(!html.contains("error-details"));
    }
}
