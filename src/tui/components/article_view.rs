//! Article view Component rendering the applied settings.

use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tuirealm::{
    Component, Event, MockComponent, State,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use crate::article::{Article, ArticleStyle};
use crate::options::SettingsRecord;
use crate::tui::app::{Msg, UserEvent};

/// Read-only article display.
pub struct ArticleView {
    props: Props,
    article: Article,
    record: SettingsRecord,
    style: ArticleStyle,
}

impl ArticleView {
    pub fn new(article: Article, record: SettingsRecord, style: ArticleStyle) -> Self {
        Self {
            props: Props::default(),
            article,
            record,
            style,
        }
    }

    fn text_style(&self) -> Style {
        let mut style = Style::default().add_modifier(self.style.modifier);
        if let Some(fg) = self.style.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.style.bg {
            style = style.bg(bg);
        }
        style
    }

    fn lines(&self) -> Vec<Line<'_>> {
        let text_style = self.text_style();
        let mut lines = vec![
            Line::from(Span::styled(
                format!(
                    "{} · {}",
                    self.record.font_family.label, self.record.font_size.value
                ),
                text_style.add_modifier(Modifier::DIM),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.article.title.to_uppercase(),
                text_style.add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (idx, paragraph) in self.article.paragraphs.iter().enumerate() {
            if idx > 0 {
                lines.extend(std::iter::repeat_n(Line::from(""), self.style.paragraph_gap));
            }
            lines.push(Line::from(Span::styled(paragraph.as_str(), text_style)));
        }
        lines
    }
}

impl MockComponent for ArticleView {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .style(self.text_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let column_width = self.style.column_width(inner.width);
        let [column] = Layout::horizontal([Constraint::Length(column_width)])
            .flex(Flex::Center)
            .areas(inner);

        let paragraph = Paragraph::new(self.lines())
            .style(self.text_style())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, column);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, UserEvent> for ArticleView {
    fn on(&mut self, _ev: Event<UserEvent>) -> Option<Msg> {
        // Read-only component
        None
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, style::Color};

    use super::*;
    use crate::options::{OptionCatalog, SettingsKey};

    #[test]
    fn renders_header_and_colors() {
        let catalog = OptionCatalog::builtin();
        let record = catalog.defaults.with_field(
            SettingsKey::BackgroundColor,
            catalog.background_colors[0].clone(),
        );
        let style = ArticleStyle::resolve(&record, &catalog);
        let mut view = ArticleView::new(Article::parse("Title\n\nBody"), record, style);

        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                view.view(frame, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let header: String = (0..60).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(header.contains("Open Sans · 18px"));
        assert_eq!(buffer[(30, 5)].bg, Color::Rgb(0, 0, 0));
    }
}
