//! Article content and the presentation derived from applied settings.

use std::path::Path;

use ratatui::style::{Color, Modifier};
use tracing::warn;

use crate::options::{MAX_CONTENT_WIDTH_PX, OptionCatalog, SettingsRecord, position_of};

/// Narrowest text column the article view will use.
pub const MIN_COLUMN_WIDTH: u16 = 20;

const SAMPLE: &str = "\
Human, the whole human

Nobody can say exactly when the first article was written, but everyone agrees \
that a good one is easy to read. Typography carries most of that weight: the \
shape of the letters, how large they are, and how far the eye travels before \
it has to jump back to the start of the next line.

A narrow column is calm. The eye finds the next line without effort and the \
reader keeps their place. A wide column feels generous on a large screen but \
makes every return trip a little longer.

Color matters too. Dark text on a light background is the familiar default, \
yet plenty of readers prefer the reverse late in the evening. Bright accents \
are fun for a headline and tiring for a whole page.

Use the settings panel to try a few combinations, then apply the one that \
reads best.";

/// A titled sequence of paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl Article {
    /// Built-in sample article.
    pub fn sample() -> Self {
        Self::parse(SAMPLE)
    }

    /// Parse plain text: the first non-empty line is the title, blank lines
    /// separate paragraphs, and line breaks inside a paragraph are joined.
    pub fn parse(text: &str) -> Self {
        let mut blocks: Vec<String> = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in text.lines().map(str::trim) {
            if line.is_empty() {
                if !current.is_empty() {
                    blocks.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            blocks.push(current.join(" "));
        }

        let mut blocks = blocks.into_iter();
        let title = blocks.next().unwrap_or_default();
        Self {
            title,
            paragraphs: blocks.collect(),
        }
    }

    pub fn load(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }
}

/// How the article view renders a settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    /// Content width as a share of [`MAX_CONTENT_WIDTH_PX`], in per mille.
    pub width_per_mille: u16,
    /// Blank lines between paragraphs.
    pub paragraph_gap: usize,
    pub modifier: Modifier,
}

impl ArticleStyle {
    pub fn resolve(record: &SettingsRecord, catalog: &OptionCatalog) -> Self {
        let width_px = record
            .content_width
            .pixels()
            .unwrap_or(MAX_CONTENT_WIDTH_PX)
            .min(MAX_CONTENT_WIDTH_PX);
        let width_per_mille = (u32::from(width_px) * 1000 / u32::from(MAX_CONTENT_WIDTH_PX)) as u16;

        Self {
            fg: parse_color(&record.font_color.value),
            bg: parse_color(&record.background_color.value),
            width_per_mille,
            paragraph_gap: position_of(&catalog.font_sizes, &record.font_size).unwrap_or(0),
            modifier: font_modifier(record.font_family.class_name.as_deref()),
        }
    }

    /// Width of the text column inside an area `available` cells wide.
    pub fn column_width(&self, available: u16) -> u16 {
        let scaled = (u32::from(available) * u32::from(self.width_per_mille) / 1000) as u16;
        scaled.max(MIN_COLUMN_WIDTH).min(available)
    }
}

/// Parse a CSS color into a terminal RGB color.
pub fn parse_color(value: &str) -> Option<Color> {
    match value.parse::<csscolorparser::Color>() {
        Ok(color) => {
            let [r, g, b, _] = color.to_rgba8();
            Some(Color::Rgb(r, g, b))
        }
        Err(e) => {
            warn!(value, error = %e, "unparseable color, using terminal default");
            None
        }
    }
}

fn font_modifier(class_name: Option<&str>) -> Modifier {
    match class_name {
        Some("cormorant-garamond") => Modifier::ITALIC,
        Some("days-one" | "merriweather") => Modifier::BOLD,
        _ => Modifier::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_title_and_paragraphs() {
        let article = Article::parse("Title\n\nfirst\nline\n\n\n\nsecond");
        assert_eq!(article.title, "Title");
        assert_eq!(article.paragraphs, vec!["first line", "second"]);
    }

    #[test]
    fn whitespace_only_line_separates_paragraphs() {
        let article = Article::parse("Title\n \t\nfirst\n  \nsecond\r\n\r\nthird");
        assert_eq!(article.title, "Title");
        assert_eq!(article.paragraphs, vec!["first", "second", "third"]);
    }

    #[test]
    fn narrow_width_scales_column() {
        let catalog = OptionCatalog::builtin();
        let narrow = catalog.defaults.with_field(
            crate::options::SettingsKey::ContentWidth,
            catalog.content_widths[1].clone(),
        );
        let style = ArticleStyle::resolve(&narrow, &catalog);
        assert_eq!(style.width_per_mille, 680);
        assert_eq!(style.column_width(100), 68);
        assert_eq!(style.column_width(10), 10);
    }

    #[test]
    fn default_style_is_black_on_white() {
        let catalog = OptionCatalog::builtin();
        let style = ArticleStyle::resolve(&catalog.defaults, &catalog);
        assert_eq!(style.fg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(style.bg, Some(Color::Rgb(255, 255, 255)));
        assert_eq!(style.paragraph_gap, 0);
        assert_eq!(style.modifier, Modifier::empty());
    }

    #[test]
    fn font_class_maps_to_modifier() {
        assert_eq!(font_modifier(Some("cormorant-garamond")), Modifier::ITALIC);
        assert_eq!(font_modifier(Some("days-one")), Modifier::BOLD);
        assert_eq!(font_modifier(None), Modifier::empty());
    }
}
