//! Terminal surface.
//!
//! Formats a [`ViewModel`] as lipgloss-styled text: the results caption, a
//! fixed-width product table and a single pagination line. Column widths are
//! derived from the available terminal width.
//!
//! ## Example
//!
//! ```rust
//! use catalog_view::catalog::Model;
//! use catalog_view::product::Product;
//! use catalog_view::render::terminal::{render, TerminalStyles};
//! use catalog_view::render::ViewModel;
//!
//! let catalog = Model::new(vec![Product::new(1, "Mug", 8.0)], 10);
//! let view = ViewModel::from_state(&catalog);
//! let frame = render(&view, 100, &TerminalStyles::default());
//! assert!(frame.contains("Mug"));
//! ```

use super::view_model::{PageControl, ViewModel, COLUMN_COUNT, COLUMN_TITLES, NO_RESULTS};
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthChar;

/// Ellipsis appended to cells cut at the column width.
pub const ELLIPSIS: &str = "…";

/// Width used before the first window-size message arrives.
pub const DEFAULT_WIDTH: usize = 120;

const SEPARATOR: &str = " │ ";
const ID_WIDTH: usize = 4;
const PRICE_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 14;
const MIN_FLEX_WIDTH: usize = 8;

/// Styles for each part of the frame.
#[derive(Debug, Clone)]
pub struct TerminalStyles {
    pub caption: Style,
    pub header: Style,
    pub separator: Style,
    pub no_results: Style,
    pub page: Style,
    pub active_page: Style,
    pub disabled: Style,
    pub info: Style,
}

impl Default for TerminalStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let very_subdued = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };

        Self {
            caption: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            header: Style::new()
                .bold(true)
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                }),
            separator: Style::new().foreground(very_subdued.clone()),
            no_results: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            page: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            active_page: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true),
            disabled: Style::new().foreground(very_subdued),
            info: Style::new().foreground(subdued),
        }
    }
}

/// Column widths for a table drawn in `total_width` cells.
///
/// ID, price and category are fixed; image, title and description share
/// what remains, each getting at least a small minimum.
pub fn column_widths(total_width: usize) -> [usize; COLUMN_COUNT] {
    let fixed =
        ID_WIDTH + PRICE_WIDTH + CATEGORY_WIDTH + display_width(SEPARATOR) * (COLUMN_COUNT - 1);
    let flex = total_width.saturating_sub(fixed);

    let image = (flex / 4).max(MIN_FLEX_WIDTH);
    let title = (flex * 3 / 10).max(MIN_FLEX_WIDTH);
    let description = flex.saturating_sub(image + title).max(MIN_FLEX_WIDTH);

    [ID_WIDTH, image, title, PRICE_WIDTH, description, CATEGORY_WIDTH]
}

fn display_width(text: &str) -> usize {
    text.chars().filter_map(UnicodeWidthChar::width).sum()
}

/// Pads or cuts `text` to exactly `width` display cells.
///
/// Escape sequences embedded in the text are removed first so remote data
/// cannot restyle the terminal. Text wider than `width` is cut and ends with
/// [`ELLIPSIS`].
pub fn fit(text: &str, width: usize) -> String {
    let plain = strip_ansi_escapes::strip_str(text).replace(['\n', '\r', '\t'], " ");
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    if display_width(&plain) <= width {
        out.push_str(&plain);
        used = display_width(&plain);
    } else {
        for c in plain.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width - 1 {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push_str(ELLIPSIS);
        used += 1;
    }

    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// The results caption line.
pub fn caption(view: &ViewModel, styles: &TerminalStyles) -> String {
    styles.caption.clone().render(&view.caption)
}

/// Header, rule and one line per row, or the no-results line.
pub fn table(view: &ViewModel, width: usize, styles: &TerminalStyles) -> String {
    let widths = column_widths(width);
    let separator = styles.separator.clone().render(SEPARATOR);

    let header: Vec<String> = COLUMN_TITLES
        .iter()
        .zip(widths)
        .map(|(title, w)| styles.header.clone().render(&fit(title, w)))
        .collect();
    let rule: Vec<String> = widths.iter().map(|&w| "─".repeat(w)).collect();

    let mut lines = vec![
        header.join(&separator),
        styles.separator.clone().render(&rule.join("─┼─")),
    ];

    if view.no_results {
        let total: usize =
            widths.iter().sum::<usize>() + display_width(SEPARATOR) * (COLUMN_COUNT - 1);
        lines.push(styles.no_results.clone().render(&fit(NO_RESULTS, total)));
    } else {
        for row in &view.rows {
            let cells: Vec<String> = row
                .cells()
                .iter()
                .zip(widths)
                .map(|(cell, w)| fit(cell, w))
                .collect();
            lines.push(cells.join(&separator));
        }
    }

    lines.join("\n")
}

/// The pagination line, empty when there is at most one page.
pub fn pagination(view: &ViewModel, styles: &TerminalStyles) -> String {
    let Some(strip) = &view.pagination else {
        return String::new();
    };

    let parts: Vec<String> = strip
        .controls
        .iter()
        .map(|control| match *control {
            PageControl::Previous { disabled, .. } => button(styles, "← Prev", disabled),
            PageControl::Page { number, active: true } => {
                styles.active_page.clone().render(&format!(" {number} "))
            }
            PageControl::Page { number, .. } => styles.page.clone().render(&format!(" {number} ")),
            PageControl::Ellipsis => styles.info.clone().render(ELLIPSIS),
            PageControl::Next { disabled, .. } => button(styles, "Next →", disabled),
        })
        .collect();

    format!(
        "{}  {}",
        parts.join(" "),
        styles.info.clone().render(&strip.info())
    )
}

fn button(styles: &TerminalStyles, label: &str, disabled: bool) -> String {
    if disabled {
        styles.disabled.clone().render(label)
    } else {
        styles.page.clone().render(label)
    }
}

/// Caption, table and pagination as one frame.
pub fn render(view: &ViewModel, width: usize, styles: &TerminalStyles) -> String {
    let mut sections = vec![caption(view, styles), table(view, width, styles)];
    let strip = pagination(view, styles);
    if !strip.is_empty() {
        sections.push(strip);
    }
    sections.join("\n\n")
}
