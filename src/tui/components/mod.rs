//! TUI components using tui-realm.

pub mod article_view;
pub mod help;
pub mod option_group;
pub mod settings_panel;

pub use article_view::ArticleView;
pub use help::{MAIN_FOOTER_ACTIONS, format_footer, render_help};
pub use settings_panel::SettingsPanelView;
