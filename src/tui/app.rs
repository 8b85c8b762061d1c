//! Reader screen: article view with the settings panel on top.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    Terminal,
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::Paragraph,
};
use tuirealm::{Application, EventListenerCfg, PollStrategy, Update};

use super::components::{
    ArticleView, MAIN_FOOTER_ACTIONS, SettingsPanelView, format_footer, render_help,
};
use super::model::Model;
use crate::options::SettingsRecord;

// ============================================================================
// Component identifiers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Article,
    SettingsPanel,
}

// ============================================================================
// Messages
// ============================================================================

/// All possible messages that can be sent by reader components.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Application control
    Quit,
    ShowHelp,
    HideHelp,

    // Settings panel
    PanelOpened,
    PanelClosed,
    SettingsApplied(SettingsRecord),
}

/// Custom user events (currently unused, but required by tui-realm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

// ============================================================================
// ReaderApp
// ============================================================================

pub struct ReaderApp {
    app: Application<Id, Msg, UserEvent>,
    model: Model,
}

impl ReaderApp {
    pub fn new(model: Model) -> Result<Self> {
        let mut app = Self::create_application();
        Self::mount_components(&mut app, &model)?;
        Ok(Self { app, model })
    }

    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    fn mount_components(app: &mut Application<Id, Msg, UserEvent>, model: &Model) -> Result<()> {
        app.mount(Id::Article, Box::new(Self::article_view(model)), vec![])?;

        let panel = SettingsPanelView::new(model.catalog.clone());
        app.mount(Id::SettingsPanel, Box::new(panel), vec![])?;

        // The panel is the only interactive component and keeps focus.
        app.active(&Id::SettingsPanel)?;
        Ok(())
    }

    fn article_view(model: &Model) -> ArticleView {
        ArticleView::new(model.article.clone(), model.applied.clone(), model.style)
    }

    /// Remount the article view with the current applied settings.
    fn sync_article(&mut self) {
        let _ = self.app.umount(&Id::Article);
        if let Err(e) = self.app.mount(
            Id::Article,
            Box::new(Self::article_view(&self.model)),
            vec![],
        ) {
            tracing::error!("Failed to remount article view: {}", e);
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.model.quit {
            self.draw(terminal)?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app = &mut self.app;
        let model = &self.model;

        terminal.draw(|frame| {
            let [title_area, body_area, status_area] = Layout::vertical([
                Constraint::Length(1), // Title
                Constraint::Min(5),    // Article + panel overlay
                Constraint::Length(1), // Status
            ])
            .areas(frame.area());

            let title = format!(" folio - {} ", model.article.title);
            frame.render_widget(
                Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD)),
                title_area,
            );

            app.view(&Id::Article, frame, body_area);
            app.view(&Id::SettingsPanel, frame, body_area);

            let mouse_hint = if model.panel_open {
                ("close", "click outside")
            } else {
                ("open", "click ▶")
            };
            let status = model
                .message
                .clone()
                .unwrap_or_else(|| format_footer(MAIN_FOOTER_ACTIONS, &[mouse_hint]));
            frame.render_widget(
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM)),
                status_area,
            );

            if model.show_help {
                render_help(frame);
            }
        })?;

        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        // Help modal intercepts all input while visible
        if self.model.show_help {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                        self.model.update(Some(Msg::HideHelp));
                    }
                    _ => {}
                }
            }
            return Ok(());
        }

        let Ok(messages) = self.app.tick(PollStrategy::Once) else {
            // Timeout is fine, just continue
            return Ok(());
        };

        for msg in messages {
            let applied = matches!(msg, Msg::SettingsApplied(_));

            let mut current = Some(msg);
            while let Some(m) = current {
                current = self.model.update(Some(m));
            }

            if applied {
                self.sync_article();
            }
        }

        Ok(())
    }
}
