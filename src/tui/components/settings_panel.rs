//! Settings panel component: toggle arrow, option groups and buttons.

use crossterm_actions::{InputEvent, NavigationEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    event::{MouseButton, MouseEvent, MouseEventKind},
    props::{AttrValue, Attribute, Props},
};

use super::option_group::{GROUP_HEIGHT, GroupHits, GroupKind, OptionGroup};
use crate::options::{OptionCatalog, SettingsKey, SettingsRecord};
use crate::panel::{ApplyHandler, SettingsPanel};
use crate::tui::app::{Msg, UserEvent};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

/// Width of the open panel including borders.
pub const PANEL_WIDTH: u16 = 44;

const TOGGLE_WIDTH: u16 = 3;

/// Holds the last record published by the panel until the component
/// forwards it as a message.
#[derive(Debug, Default)]
pub struct PendingApply(Option<SettingsRecord>);

impl PendingApply {
    pub fn take(&mut self) -> Option<SettingsRecord> {
        self.0.take()
    }
}

impl ApplyHandler for PendingApply {
    fn on_apply(&mut self, record: &SettingsRecord) {
        self.0 = Some(record.clone());
    }
}

/// Focusable rows: the five groups, then the button row.
const BUTTON_ROW: usize = SettingsKey::ALL.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ButtonFocus {
    Reset,
    #[default]
    Apply,
}

impl ButtonFocus {
    fn other(self) -> Self {
        match self {
            Self::Reset => Self::Apply,
            Self::Apply => Self::Reset,
        }
    }
}

/// Regions recorded by the last render.
#[derive(Debug, Default)]
struct Hits {
    toggle: Option<Rect>,
    groups: Vec<(SettingsKey, GroupHits)>,
    reset: Option<Rect>,
    apply: Option<Rect>,
}

/// Collapsible settings form mounted over the article.
pub struct SettingsPanelView {
    props: Props,
    panel: SettingsPanel<PendingApply>,
    catalog: OptionCatalog,
    row: usize,
    button: ButtonFocus,
    hits: Hits,
}

impl SettingsPanelView {
    pub fn new(catalog: OptionCatalog) -> Self {
        Self {
            props: Props::default(),
            panel: SettingsPanel::new(catalog.defaults.clone(), PendingApply::default()),
            catalog,
            row: 0,
            button: ButtonFocus::default(),
            hits: Hits::default(),
        }
    }

    fn group_kind(key: SettingsKey) -> GroupKind {
        match key {
            SettingsKey::FontSize => GroupKind::Radio,
            _ => GroupKind::Select,
        }
    }

    fn group(&self, key: SettingsKey, focused: bool) -> OptionGroup<'_> {
        OptionGroup {
            kind: Self::group_kind(key),
            title: key.title(),
            options: self.catalog.options(key),
            selected: self.panel.draft().get(key),
            focused,
        }
    }

    fn toggle(&mut self) -> Msg {
        self.panel.toggle_open();
        if self.panel.is_open() {
            Msg::PanelOpened
        } else {
            Msg::PanelClosed
        }
    }

    fn change_focused(&mut self, delta: isize) -> Option<Msg> {
        let key = *SettingsKey::ALL.get(self.row)?;
        let option = self.group(key, true).step(delta)?.clone();
        self.panel.set_field(key, option);
        None
    }

    fn submit(&mut self) -> Option<Msg> {
        self.panel.submit();
        self.panel.handler_mut().take().map(Msg::SettingsApplied)
    }

    fn reset(&mut self) -> Option<Msg> {
        self.panel.reset();
        self.panel.handler_mut().take().map(Msg::SettingsApplied)
    }

    fn on_click(&mut self, point: Position) -> Option<Msg> {
        if self.panel.handle_outside_interaction(point) {
            return Some(Msg::PanelClosed);
        }

        if self.hits.toggle.is_some_and(|r| r.contains(point)) {
            return Some(self.toggle());
        }

        if !self.panel.is_open() {
            return None;
        }

        if self.hits.reset.is_some_and(|r| r.contains(point)) {
            self.row = BUTTON_ROW;
            self.button = ButtonFocus::Reset;
            return self.reset();
        }
        if self.hits.apply.is_some_and(|r| r.contains(point)) {
            self.row = BUTTON_ROW;
            self.button = ButtonFocus::Apply;
            return self.submit();
        }

        let (row, key, option) =
            self.hits
                .groups
                .iter()
                .enumerate()
                .find_map(|(row, (key, hits))| {
                    self.group(*key, false)
                        .click(hits, point)
                        .map(|option| (row, *key, option.clone()))
                })?;
        self.row = row;
        self.panel.set_field(key, option);
        None
    }

    fn render_toggle(&self, frame: &mut Frame, area: Rect) {
        let arrow = if self.panel.is_open() { "◀" } else { "▶" };
        let style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new(format!(" {arrow} ")).style(style),
            area,
        );
    }

    fn render_form(&mut self, frame: &mut Frame, aside: Rect) {
        frame.render_widget(Clear, aside);
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let block = Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(aside);
        frame.render_widget(block, aside);

        let rows = Layout::vertical([
            Constraint::Length(1),            // 0: heading
            Constraint::Length(1),            // 1: spacer
            Constraint::Length(GROUP_HEIGHT), // 2: font family
            Constraint::Length(1),            // 3: spacer
            Constraint::Length(GROUP_HEIGHT), // 4: font size
            Constraint::Length(1),            // 5: spacer
            Constraint::Length(GROUP_HEIGHT), // 6: font color
            Constraint::Length(1),            // 7: separator
            Constraint::Length(GROUP_HEIGHT), // 8: background color
            Constraint::Length(1),            // 9: spacer
            Constraint::Length(GROUP_HEIGHT), // 10: content width
            Constraint::Min(1),               // 11: filler
            Constraint::Length(1),            // 12: buttons
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new("SET PARAMETERS").style(Style::default().add_modifier(Modifier::BOLD)),
            rows[0],
        );

        let separator = "─".repeat(usize::from(rows[7].width));
        frame.render_widget(
            Paragraph::new(separator).style(Style::default().fg(Color::DarkGray)),
            rows[7],
        );

        const GROUP_ROWS: [usize; 5] = [2, 4, 6, 8, 10];
        let mut groups = Vec::with_capacity(GROUP_ROWS.len());
        for (idx, (key, row)) in SettingsKey::ALL.into_iter().zip(GROUP_ROWS).enumerate() {
            let group = self.group(key, focused && self.row == idx);
            let hits = group.render(frame, rows[row]);
            groups.push((key, hits));
        }
        self.hits.groups = groups;

        let [reset_area, _, apply_area] = Layout::horizontal([
            Constraint::Length(9),
            Constraint::Fill(1),
            Constraint::Length(9),
        ])
        .areas(rows[12]);

        let button_style = |button: ButtonFocus| {
            let base = match button {
                ButtonFocus::Reset => Style::default().fg(Color::White).bg(Color::DarkGray),
                ButtonFocus::Apply => Style::default().fg(Color::Black).bg(Color::Cyan),
            };
            if focused && self.row == BUTTON_ROW && self.button == button {
                base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                base
            }
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(" Reset ", button_style(ButtonFocus::Reset)))),
            reset_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(" Apply ", button_style(ButtonFocus::Apply)))),
            apply_area,
        );
        self.hits.reset = Some(reset_area);
        self.hits.apply = Some(apply_area);
    }
}

impl MockComponent for SettingsPanelView {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            self.panel.set_root(&[]);
            return;
        }

        if self.panel.is_open() {
            let aside_width = PANEL_WIDTH.min(area.width.saturating_sub(TOGGLE_WIDTH)).max(1);
            let aside = Rect::new(area.x, area.y, aside_width, area.height);
            let toggle = Rect::new(
                aside.right(),
                area.y,
                TOGGLE_WIDTH.min(area.right() - aside.right()),
                1,
            );

            self.render_form(frame, aside);
            self.render_toggle(frame, toggle);
            self.hits.toggle = Some(toggle);
            self.panel.set_root(&[aside, toggle]);
        } else {
            let toggle = Rect::new(area.x, area.y, TOGGLE_WIDTH.min(area.width), 1);
            self.render_toggle(frame, toggle);
            self.hits = Hits {
                toggle: Some(toggle),
                ..Hits::default()
            };
            self.panel.set_root(&[toggle]);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Bool(self.panel.is_open()))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Up) => {
                self.row = (self.row + BUTTON_ROW) % (BUTTON_ROW + 1);
                CmdResult::None
            }
            Cmd::Move(CmdDirection::Down) => {
                self.row = (self.row + 1) % (BUTTON_ROW + 1);
                CmdResult::None
            }
            Cmd::Move(CmdDirection::Left | CmdDirection::Right) if self.row == BUTTON_ROW => {
                self.button = self.button.other();
                CmdResult::None
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for SettingsPanelView {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        if !focused {
            return None;
        }

        let key_event = match ev {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => return self.on_click(Position::new(column, row)),
            Event::Keyboard(key_event) => key_event,
            _ => return None,
        };

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        if action == AppAction::TogglePanel {
            return Some(self.toggle());
        }

        // Form controls only react while the form is showing.
        if !self.panel.is_open() {
            return None;
        }

        match action {
            AppAction::Apply => self.submit(),
            AppAction::Reset => self.reset(),
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) if self.row == BUTTON_ROW => {
                match self.button {
                    ButtonFocus::Reset => self.reset(),
                    ButtonFocus::Apply => self.submit(),
                }
            }
            AppAction::Tui(TuiEvent::Input(InputEvent::Cancel)) => {
                self.panel.close();
                Some(Msg::PanelClosed)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                self.perform(Cmd::Move(CmdDirection::Up));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                self.perform(Cmd::Move(CmdDirection::Down));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)) => {
                if self.row == BUTTON_ROW {
                    self.perform(Cmd::Move(CmdDirection::Left));
                    None
                } else {
                    self.change_focused(-1)
                }
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => {
                if self.row == BUTTON_ROW {
                    self.perform(Cmd::Move(CmdDirection::Right));
                    None
                } else {
                    self.change_focused(1)
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};
    use tuirealm::event::{Key, KeyEvent, KeyModifiers};

    use super::*;

    fn focused_view() -> SettingsPanelView {
        let mut view = SettingsPanelView::new(OptionCatalog::builtin());
        view.attr(Attribute::Focus, AttrValue::Flag(true));
        view
    }

    fn render(view: &mut SettingsPanelView, terminal: &mut Terminal<TestBackend>) {
        terminal
            .draw(|frame| {
                let area = frame.area();
                view.view(frame, area);
            })
            .unwrap();
    }

    fn key(code: Key) -> Event<UserEvent> {
        Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(x: u16, y: u16) -> Event<UserEvent> {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            modifiers: KeyModifiers::NONE,
            column: x,
            row: y,
        })
    }

    #[test]
    fn toggle_click_opens_and_outside_click_closes() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut view = focused_view();
        render(&mut view, &mut terminal);

        assert_eq!(view.on(click(1, 0)), Some(Msg::PanelOpened));
        render(&mut view, &mut terminal);
        assert!(view.panel.is_open());

        // Inside the form keeps it open.
        assert_eq!(view.on(click(5, 2)), None);
        assert!(view.panel.is_open());

        assert_eq!(view.on(click(70, 20)), Some(Msg::PanelClosed));
        assert!(!view.panel.is_open());

        // Already closed: another outside click does nothing.
        render(&mut view, &mut terminal);
        assert_eq!(view.on(click(70, 20)), None);
    }

    #[test]
    fn apply_button_publishes_draft() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut view = focused_view();
        assert_eq!(view.toggle(), Msg::PanelOpened);
        render(&mut view, &mut terminal);

        let (_, size_hits) = view.hits.groups[1].clone();
        let (_, third) = size_hits.options[2];
        assert_eq!(view.on(click(third.x, third.y)), None);

        let apply = view.hits.apply.unwrap();
        let msg = view.on(click(apply.x + 1, apply.y));
        let Some(Msg::SettingsApplied(record)) = msg else {
            panic!("expected SettingsApplied, got {msg:?}");
        };
        assert_eq!(record.font_size.value, "38px");
        assert_eq!(record.font_family, view.catalog.defaults.font_family);
    }

    #[test]
    fn reset_button_restores_defaults() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut view = focused_view();
        assert_eq!(view.toggle(), Msg::PanelOpened);
        view.change_focused(1);
        assert_ne!(view.panel.draft(), &view.catalog.defaults);
        render(&mut view, &mut terminal);

        let reset = view.hits.reset.unwrap();
        let msg = view.on(click(reset.x + 1, reset.y));
        assert_eq!(msg, Some(Msg::SettingsApplied(view.catalog.defaults.clone())));
        assert_eq!(view.panel.draft(), &view.catalog.defaults);
    }

    #[test]
    fn unfocused_ignores_events() {
        let mut view = SettingsPanelView::new(OptionCatalog::builtin());
        assert_eq!(view.on(click(1, 0)), None);
    }

    #[test]
    fn click_below_toggle_arrow_closes() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut view = focused_view();
        assert_eq!(view.toggle(), Msg::PanelOpened);
        render(&mut view, &mut terminal);

        let toggle = view.hits.toggle.unwrap();
        assert_eq!(view.on(click(toggle.x + 1, toggle.y)), Some(Msg::PanelClosed));
        render(&mut view, &mut terminal);

        assert_eq!(view.on(click(1, 0)), Some(Msg::PanelOpened));
        render(&mut view, &mut terminal);
        let toggle = view.hits.toggle.unwrap();
        assert_eq!(view.on(click(toggle.x + 1, 15)), Some(Msg::PanelClosed));
        assert!(!view.panel.is_open());
    }

    #[test]
    fn closed_panel_only_handles_toggle_and_global_keys() {
        let mut view = focused_view();
        assert_eq!(view.on(key(Key::Char('a'))), None);
        assert_eq!(view.on(key(Key::Char('x'))), None);
        assert_eq!(view.on(key(Key::Right)), None);
        assert_eq!(view.on(key(Key::Esc)), None);
        assert_eq!(view.panel.draft(), &view.catalog.defaults);

        assert_eq!(view.on(key(Key::Char('q'))), Some(Msg::Quit));
        assert_eq!(view.on(key(Key::Char('?'))), Some(Msg::ShowHelp));
        assert_eq!(view.on(key(Key::Char('o'))), Some(Msg::PanelOpened));
        assert!(view.panel.is_open());
    }

    #[test]
    fn keys_edit_apply_reset_and_close() {
        let mut view = focused_view();
        let defaults = view.catalog.defaults.clone();
        let ubuntu = view.catalog.font_families[1].clone();

        assert_eq!(view.on(key(Key::Char('o'))), Some(Msg::PanelOpened));
        assert_eq!(view.on(key(Key::Right)), None);
        assert_eq!(view.panel.draft().font_family, ubuntu);

        let expected = defaults.with_field(SettingsKey::FontFamily, ubuntu);
        assert_eq!(
            view.on(key(Key::Char('a'))),
            Some(Msg::SettingsApplied(expected))
        );
        assert_eq!(
            view.on(key(Key::Char('x'))),
            Some(Msg::SettingsApplied(defaults.clone()))
        );
        assert_eq!(view.panel.draft(), &defaults);

        assert_eq!(view.on(key(Key::Esc)), Some(Msg::PanelClosed));
        assert!(!view.panel.is_open());
        assert_eq!(view.on(key(Key::Char('o'))), Some(Msg::PanelOpened));
        assert_eq!(view.on(key(Key::Char('o'))), Some(Msg::PanelClosed));
    }

    #[test]
    fn row_focus_wraps_and_enter_presses_focused_button() {
        let mut view = focused_view();
        let defaults = view.catalog.defaults.clone();
        let ubuntu = view.catalog.font_families[1].clone();
        view.on(key(Key::Char('o')));

        assert_eq!(view.on(key(Key::Right)), None);
        assert_eq!(view.on(key(Key::Up)), None);
        assert_eq!(view.row, BUTTON_ROW);

        // Left/Right on the button row switch buttons without editing.
        assert_eq!(view.on(key(Key::Left)), None);
        assert_eq!(view.button, ButtonFocus::Reset);
        assert_eq!(view.panel.draft().font_family, ubuntu);
        assert_eq!(
            view.on(key(Key::Enter)),
            Some(Msg::SettingsApplied(defaults.clone()))
        );

        assert_eq!(view.on(key(Key::Right)), None);
        assert_eq!(view.button, ButtonFocus::Apply);
        assert_eq!(view.on(key(Key::Down)), None);
        assert_eq!(view.row, 0);
        assert_eq!(view.on(key(Key::Right)), None);
        assert_eq!(view.on(key(Key::Down)), None);
        assert_eq!(view.row, 1);

        // Enter away from the button row does nothing.
        assert_eq!(view.on(key(Key::Enter)), None);

        assert_eq!(view.on(key(Key::Up)), None);
        assert_eq!(view.on(key(Key::Up)), None);
        assert_eq!(view.row, BUTTON_ROW);
        let expected = defaults.with_field(SettingsKey::FontFamily, ubuntu);
        assert_eq!(
            view.on(key(Key::Enter)),
            Some(Msg::SettingsApplied(expected))
        );
    }
}
