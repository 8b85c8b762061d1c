//! Settings panel state machine.
//!
//! The panel owns an open/closed flag and a draft [`SettingsRecord`]. The
//! draft only reaches the consumer through [`ApplyHandler::on_apply`], which
//! is called exactly once per [`SettingsPanel::submit`] or
//! [`SettingsPanel::reset`].

use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

use crate::options::{ArticleOption, SettingsKey, SettingsRecord};
use crate::outside_click::OutsideClick;

/// Receives records published by the panel.
pub trait ApplyHandler {
    fn on_apply(&mut self, record: &SettingsRecord);
}

impl<F> ApplyHandler for F
where
    F: FnMut(&SettingsRecord),
{
    fn on_apply(&mut self, record: &SettingsRecord) {
        self(record);
    }
}

/// Whether the panel form is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

impl OpenState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    fn flipped(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Collapsible settings form over a draft record.
pub struct SettingsPanel<H> {
    state: OpenState,
    draft: SettingsRecord,
    defaults: SettingsRecord,
    outside: OutsideClick,
    handler: H,
}

impl<H: ApplyHandler> SettingsPanel<H> {
    /// Closed panel whose draft starts at `defaults`.
    pub fn new(defaults: SettingsRecord, handler: H) -> Self {
        Self {
            state: OpenState::Closed,
            draft: defaults.clone(),
            defaults,
            outside: OutsideClick::new(),
            handler,
        }
    }

    pub fn state(&self) -> OpenState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn draft(&self) -> &SettingsRecord {
        &self.draft
    }

    pub fn outside(&self) -> &OutsideClick {
        &self.outside
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Record the regions the panel occupies on screen; empty when it is
    /// not rendered.
    pub fn set_root(&mut self, root: &[Rect]) {
        self.outside.set_root(root);
    }

    pub fn toggle_open(&mut self) {
        self.set_state(self.state.flipped());
    }

    pub fn close(&mut self) {
        self.set_state(OpenState::Closed);
    }

    fn set_state(&mut self, state: OpenState) {
        if state.is_open() {
            self.outside.arm();
        } else {
            self.outside.disarm();
        }
        if state != self.state {
            debug!(from = ?self.state, to = ?state, "settings panel state change");
        }
        self.state = state;
    }

    /// Replace one field of the draft.
    ///
    /// Membership of `option` in the key's option set is the caller's
    /// responsibility.
    pub fn set_field(&mut self, key: SettingsKey, option: ArticleOption) {
        debug!(%key, value = %option.value, "draft field changed");
        self.draft = self.draft.with_field(key, option);
    }

    /// Publish the current draft.
    pub fn submit(&mut self) {
        info!(font = %self.draft.font_family.value, size = %self.draft.font_size.value, "applying settings");
        self.handler.on_apply(&self.draft);
    }

    /// Restore the default record and publish it.
    pub fn reset(&mut self) {
        info!("resetting settings to defaults");
        self.draft = self.defaults.clone();
        self.handler.on_apply(&self.draft);
    }

    /// Close the panel if `point` lies outside its root region while open.
    ///
    /// Returns whether the panel closed.
    pub fn handle_outside_interaction(&mut self, point: Position) -> bool {
        if !self.is_open() || !self.outside.is_outside(point) {
            return false;
        }
        debug!(x = point.x, y = point.y, "outside interaction");
        self.close();
        true
    }
}
