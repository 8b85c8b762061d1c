//! Reader model: the applied settings and UI flags.

use tracing::info;
use tuirealm::Update;

use super::app::Msg;
use crate::article::{Article, ArticleStyle};
use crate::options::{OptionCatalog, SettingsRecord};

/// Application state consumed by the article view.
pub struct Model {
    pub catalog: OptionCatalog,
    pub article: Article,

    // Settings published by the panel
    pub applied: SettingsRecord,
    pub style: ArticleStyle,

    // UI state
    pub panel_open: bool,
    pub show_help: bool,
    pub quit: bool,
    pub message: Option<String>,
}

impl Model {
    pub fn new(catalog: OptionCatalog, article: Article) -> Self {
        let applied = catalog.defaults.clone();
        let style = ArticleStyle::resolve(&applied, &catalog);
        Self {
            catalog,
            article,
            applied,
            style,
            panel_open: false,
            show_help: false,
            quit: false,
            message: None,
        }
    }

    /// Adopt a record published by the settings panel.
    pub fn apply(&mut self, record: SettingsRecord) {
        let changed = self.applied.diff(&record);
        info!(?changed, "settings applied");

        self.style = ArticleStyle::resolve(&record, &self.catalog);
        self.message = Some(format!(
            "Applied: {}, {}, {} on {}, {}",
            record.font_family.label,
            record.font_size.value,
            record.font_color.label,
            record.background_color.label,
            record.content_width.label,
        ));
        self.applied = record;
    }
}

impl Update<Msg> for Model {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;

        match msg {
            Msg::Quit => {
                self.quit = true;
                None
            }
            Msg::ShowHelp => {
                self.show_help = true;
                None
            }
            Msg::HideHelp => {
                self.show_help = false;
                None
            }
            Msg::PanelOpened => {
                self.panel_open = true;
                self.message = None;
                None
            }
            Msg::PanelClosed => {
                self.panel_open = false;
                None
            }
            Msg::SettingsApplied(record) => {
                self.apply(record);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SettingsKey;

    #[test]
    fn applied_record_updates_style() {
        let catalog = OptionCatalog::builtin();
        let mut model = Model::new(catalog.clone(), Article::sample());
        let record = catalog
            .defaults
            .with_field(SettingsKey::FontSize, catalog.font_sizes[2].clone());

        assert_eq!(model.update(Some(Msg::SettingsApplied(record.clone()))), None);
        assert_eq!(model.applied, record);
        assert_eq!(model.style.paragraph_gap, 2);
        assert!(model.message.as_deref().is_some_and(|m| m.contains("38px")));
    }

    #[test]
    fn quit_sets_flag() {
        let mut model = Model::new(OptionCatalog::builtin(), Article::sample());
        model.update(Some(Msg::Quit));
        assert!(model.quit);
    }
}
