//! Article presentation options: enumerated choices, the settings record and
//! the built-in option catalog.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Width in pixels of the widest content column. Narrower widths scale the
/// article column proportionally.
pub const MAX_CONTENT_WIDTH_PX: u16 = 1394;

/// One enumerated, labeled choice within a settings category.
///
/// Two options are equal when their `value`s are equal; label and class are
/// presentation only.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl ArticleOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            class_name: None,
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Numeric part of a pixel value such as `"18px"`.
    pub fn pixels(&self) -> Option<u16> {
        self.value.trim().trim_end_matches("px").trim().parse().ok()
    }
}

impl PartialEq for ArticleOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Hash for ArticleOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for ArticleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// The five settings categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingsKey {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl SettingsKey {
    /// All keys in form order.
    pub const ALL: [SettingsKey; 5] = [
        SettingsKey::FontFamily,
        SettingsKey::FontSize,
        SettingsKey::FontColor,
        SettingsKey::BackgroundColor,
        SettingsKey::ContentWidth,
    ];

    /// Serialized name of the key.
    pub fn name(self) -> &'static str {
        match self {
            Self::FontFamily => "fontFamily",
            Self::FontSize => "fontSize",
            Self::FontColor => "fontColor",
            Self::BackgroundColor => "backgroundColor",
            Self::ContentWidth => "contentWidth",
        }
    }

    /// Title shown above the option group.
    pub fn title(self) -> &'static str {
        match self {
            Self::FontFamily => "Font",
            Self::FontSize => "Font size",
            Self::FontColor => "Font color",
            Self::BackgroundColor => "Background",
            Self::ContentWidth => "Content width",
        }
    }
}

impl fmt::Display for SettingsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete visual configuration: one option per key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    pub font_family: ArticleOption,
    pub font_size: ArticleOption,
    pub font_color: ArticleOption,
    pub background_color: ArticleOption,
    pub content_width: ArticleOption,
}

impl SettingsRecord {
    pub fn get(&self, key: SettingsKey) -> &ArticleOption {
        match key {
            SettingsKey::FontFamily => &self.font_family,
            SettingsKey::FontSize => &self.font_size,
            SettingsKey::FontColor => &self.font_color,
            SettingsKey::BackgroundColor => &self.background_color,
            SettingsKey::ContentWidth => &self.content_width,
        }
    }

    fn get_mut(&mut self, key: SettingsKey) -> &mut ArticleOption {
        match key {
            SettingsKey::FontFamily => &mut self.font_family,
            SettingsKey::FontSize => &mut self.font_size,
            SettingsKey::FontColor => &mut self.font_color,
            SettingsKey::BackgroundColor => &mut self.background_color,
            SettingsKey::ContentWidth => &mut self.content_width,
        }
    }

    /// Copy of this record with exactly one field replaced.
    pub fn with_field(&self, key: SettingsKey, option: ArticleOption) -> Self {
        let mut next = self.clone();
        *next.get_mut(key) = option;
        next
    }

    /// Keys whose values differ between two records.
    pub fn diff(&self, other: &Self) -> Vec<SettingsKey> {
        SettingsKey::ALL
            .into_iter()
            .filter(|&key| self.get(key) != other.get(key))
            .collect()
    }
}

/// Position of `option` within `options`, compared by value.
pub fn position_of(options: &[ArticleOption], option: &ArticleOption) -> Option<usize> {
    options.iter().position(|o| o == option)
}

/// Member of `options` that is `delta` steps away from `current`, wrapping at
/// both ends.
///
/// When `current` is not a member the walk starts from the first option.
/// Returns `None` only for an empty set.
pub fn step_option<'a>(
    options: &'a [ArticleOption],
    current: &ArticleOption,
    delta: isize,
) -> Option<&'a ArticleOption> {
    if options.is_empty() {
        return None;
    }
    let Some(idx) = position_of(options, current) else {
        return options.first();
    };
    let len = options.len() as isize;
    let next = (idx as isize + delta).rem_euclid(len) as usize;
    options.get(next)
}

/// The five enumerated option sets plus the default record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCatalog {
    pub font_families: Vec<ArticleOption>,
    pub font_sizes: Vec<ArticleOption>,
    pub font_colors: Vec<ArticleOption>,
    pub background_colors: Vec<ArticleOption>,
    pub content_widths: Vec<ArticleOption>,
    pub defaults: SettingsRecord,
}

impl OptionCatalog {
    /// Built-in fonts, sizes, colors and widths.
    pub fn builtin() -> Self {
        let font_families = vec![
            ArticleOption::new("Open Sans", "Open Sans").with_class("open-sans"),
            ArticleOption::new("Ubuntu", "Ubuntu").with_class("ubuntu"),
            ArticleOption::new("Cormorant Garamond", "Cormorant Garamond")
                .with_class("cormorant-garamond"),
            ArticleOption::new("Days One", "Days One").with_class("days-one"),
            ArticleOption::new("Merriweather", "Merriweather").with_class("merriweather"),
        ];

        let font_sizes = vec![
            ArticleOption::new("18px", "18").with_class("font-size-18"),
            ArticleOption::new("25px", "25").with_class("font-size-25"),
            ArticleOption::new("38px", "38").with_class("font-size-38"),
        ];

        let font_colors = palette("font");
        let background_colors = palette("bg");

        let content_widths = vec![
            ArticleOption::new("1394px", "Wide").with_class("width-wide"),
            ArticleOption::new("948px", "Narrow").with_class("width-narrow"),
        ];

        let defaults = SettingsRecord {
            font_family: font_families[0].clone(),
            font_size: font_sizes[0].clone(),
            font_color: font_colors[0].clone(),
            background_color: background_colors[1].clone(),
            content_width: content_widths[0].clone(),
        };

        Self {
            font_families,
            font_sizes,
            font_colors,
            background_colors,
            content_widths,
            defaults,
        }
    }

    /// Option set for a key.
    pub fn options(&self, key: SettingsKey) -> &[ArticleOption] {
        match key {
            SettingsKey::FontFamily => &self.font_families,
            SettingsKey::FontSize => &self.font_sizes,
            SettingsKey::FontColor => &self.font_colors,
            SettingsKey::BackgroundColor => &self.background_colors,
            SettingsKey::ContentWidth => &self.content_widths,
        }
    }

    /// Look up a member of a key's option set by value.
    pub fn find(&self, key: SettingsKey, value: &str) -> Option<&ArticleOption> {
        self.options(key).iter().find(|o| o.value == value)
    }

    /// Whether every field of `record` belongs to its key's option set.
    pub fn contains(&self, record: &SettingsRecord) -> bool {
        SettingsKey::ALL
            .into_iter()
            .all(|key| position_of(self.options(key), record.get(key)).is_some())
    }

    /// Replace the default record.
    pub fn with_defaults(mut self, defaults: SettingsRecord) -> Self {
        self.defaults = defaults;
        self
    }
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The shared color set, with classes prefixed for the font or background
/// role.
fn palette(prefix: &str) -> Vec<ArticleOption> {
    const COLORS: &[(&str, &str, &str)] = &[
        ("#000000", "Black", "black"),
        ("#FFFFFF", "White", "white"),
        ("#C4C4C4", "Gray", "gray"),
        ("#FEAFE8", "Pink", "pink"),
        ("#FD24AF", "Bright pink", "bright-pink"),
        ("#FFC802", "Yellow", "yellow"),
        ("#80D994", "Green", "green"),
        ("#6FC1FD", "Light blue", "light-blue"),
        ("#5F00FF", "Purple", "purple"),
    ];

    COLORS
        .iter()
        .map(|(value, label, class)| {
            ArticleOption::new(*value, *label).with_class(format!("{prefix}-{class}"))
        })
        .collect()
}
