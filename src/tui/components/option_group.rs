//! Select-style and radio-style option group rendering.
//!
//! Groups are drawn inside the settings panel rather than mounted on their
//! own; they report clickable regions so the panel can route mouse presses.

use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::options::{ArticleOption, step_option};

/// Height of a group: title row plus value row.
pub const GROUP_HEIGHT: u16 = 2;

/// How a group presents its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// Shows the selected label between arrows and cycles through options.
    Select,
    /// Shows every option with a marker.
    Radio,
}

/// Clickable regions of a rendered group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupHits {
    /// Row that steps backwards (select only).
    pub prev: Option<Rect>,
    /// Row that steps forwards (select only).
    pub next: Option<Rect>,
    /// Per-option regions (radio only), by index into the option set.
    pub options: Vec<(usize, Rect)>,
}

/// One titled option group bound to an option set.
pub struct OptionGroup<'a> {
    pub kind: GroupKind,
    pub title: &'a str,
    pub options: &'a [ArticleOption],
    pub selected: &'a ArticleOption,
    pub focused: bool,
}

impl<'a> OptionGroup<'a> {
    /// Member `delta` steps away from the selection.
    pub fn step(&self, delta: isize) -> Option<&'a ArticleOption> {
        step_option(self.options, self.selected, delta)
    }

    /// Member chosen by a press at `point`, if the press hit the group.
    pub fn click(&self, hits: &GroupHits, point: Position) -> Option<&'a ArticleOption> {
        if hits.prev.is_some_and(|r| r.contains(point)) {
            return self.step(-1);
        }
        if hits.next.is_some_and(|r| r.contains(point)) {
            return self.step(1);
        }
        hits.options
            .iter()
            .find(|(_, r)| r.contains(point))
            .and_then(|(idx, _)| self.options.get(*idx))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) -> GroupHits {
        let [title_area, value_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let title_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new(self.title.to_uppercase()).style(title_style),
            title_area,
        );

        match self.kind {
            GroupKind::Select => self.render_select(frame, value_area),
            GroupKind::Radio => self.render_radio(frame, value_area),
        }
    }

    fn value_style(&self) -> Style {
        if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        }
    }

    fn render_select(&self, frame: &mut Frame, area: Rect) -> GroupHits {
        let arrow_style = if self.focused {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        };

        let line = Line::from(vec![
            Span::styled("◂ ", arrow_style),
            Span::styled(self.selected.label.as_str(), self.value_style()),
            Span::styled(" ▸", arrow_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        let prev_width = 2.min(area.width);
        GroupHits {
            prev: Some(Rect::new(area.x, area.y, prev_width, area.height)),
            next: Some(Rect::new(
                area.x + prev_width,
                area.y,
                area.width - prev_width,
                area.height,
            )),
            options: Vec::new(),
        }
    }

    fn render_radio(&self, frame: &mut Frame, area: Rect) -> GroupHits {
        let mut spans = Vec::new();
        let mut regions = Vec::new();
        let mut x = area.x;
        let right = area.right();

        for (idx, option) in self.options.iter().enumerate() {
            let checked = option == self.selected;
            let marker = if checked { "(•) " } else { "( ) " };
            let style = if checked {
                self.value_style().add_modifier(Modifier::BOLD)
            } else {
                self.value_style()
            };

            let marker_span = Span::styled(marker, style);
            let label_span = Span::styled(option.label.as_str(), style);
            let width = (marker_span.width() + label_span.width()) as u16;

            if x < right {
                regions.push((idx, Rect::new(x, area.y, width.min(right - x), area.height)));
            }
            x = x.saturating_add(width + 2);

            spans.push(marker_span);
            spans.push(label_span);
            spans.push(Span::raw("  "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        GroupHits {
            prev: None,
            next: None,
            options: regions,
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::options::{OptionCatalog, SettingsKey};

    fn draw(group: &OptionGroup<'_>) -> (GroupHits, String) {
        let mut terminal = Terminal::new(TestBackend::new(30, 2)).unwrap();
        let mut hits = GroupHits::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                hits = group.render(frame, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let row: String = (0..30).map(|x| buffer[(x, 1)].symbol()).collect();
        (hits, row)
    }

    #[test]
    fn radio_click_selects_option() {
        let catalog = OptionCatalog::builtin();
        let sizes = catalog.options(SettingsKey::FontSize);
        let group = OptionGroup {
            kind: GroupKind::Radio,
            title: "Font size",
            options: sizes,
            selected: &sizes[0],
            focused: false,
        };

        let (hits, row) = draw(&group);
        assert!(row.starts_with("(•) 18  ( ) 25  ( ) 38"));
        assert_eq!(hits.options.len(), 3);

        let third = hits.options[2].1;
        let picked = group.click(&hits, Position::new(third.x + 1, third.y));
        assert_eq!(picked, Some(&sizes[2]));
        assert_eq!(group.click(&hits, Position::new(0, 0)), None);
    }

    #[test]
    fn select_click_cycles() {
        let catalog = OptionCatalog::builtin();
        let widths = catalog.options(SettingsKey::ContentWidth);
        let group = OptionGroup {
            kind: GroupKind::Select,
            title: "Content width",
            options: widths,
            selected: &widths[0],
            focused: true,
        };

        let (hits, row) = draw(&group);
        assert!(row.starts_with("◂ Wide ▸"));
        assert_eq!(group.click(&hits, Position::new(0, 1)), Some(&widths[1]));
        assert_eq!(group.click(&hits, Position::new(5, 1)), Some(&widths[1]));
        assert_eq!(group.step(-1), Some(&widths[1]));
    }
}
