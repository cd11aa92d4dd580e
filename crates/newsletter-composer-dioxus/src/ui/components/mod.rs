pub mod block_selector;
pub mod block_settings;
pub mod block_view;
pub mod composer_view;
pub mod custom_html_settings;
pub mod document_settings;
pub mod error_screen;
pub mod full_article_settings;
pub mod layout_tab;
pub mod toast;

pub use block_selector::BlockSelector;
pub use block_settings::BlockSettings;
pub use block_view::BlockView;
pub use composer_view::ComposerView;
pub use custom_html_settings::CustomHtmlSettings;
pub use document_settings::DocumentSettingsPanel;
pub use error_screen::ErrorScreen;
pub use full_article_settings::FullArticleSettings;
pub use layout_tab::LayoutTab;
pub use toast::{ToastList, ToastNotifier};
