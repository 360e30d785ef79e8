//! HTML surface.
//!
//! Formats a [`ViewModel`] into the markup fragments that fill the catalog
//! page's targets: the table body (`#productTableBody`), the results caption
//! (`#resultsCount`) and the pagination strip (`#pagination`). [`document`]
//! wraps them in a standalone page together with the search box, the page
//! size selector and the sort buttons.
//!
//! All product text is escaped before it is written into markup.

use super::view_model::{PageControl, ViewModel, COLUMN_COUNT, COLUMN_TITLES, NO_RESULTS};
use crate::handlers::SortControl;
use crate::product::PLACEHOLDER_IMAGE;

/// Inputs echoed back into the page controls.
#[derive(Debug, Clone, PartialEq)]
pub struct PageControls<'a> {
    /// Current search box contents.
    pub search: &'a str,
    /// Selected page size.
    pub page_size: usize,
    /// Page sizes offered by the selector.
    pub page_size_choices: &'a [usize],
    /// Sort button currently marked active.
    pub active_sort: Option<SortControl>,
}

/// Escapes `&`, `<`, `>`, `"` and `'` for use in text and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Rows for `#productTableBody`.
pub fn table_body(view: &ViewModel) -> String {
    if view.no_results {
        return format!(
            "<tr><td colspan=\"{COLUMN_COUNT}\" class=\"no-results\">{}</td></tr>",
            escape(NO_RESULTS)
        );
    }

    view.rows
        .iter()
        .map(|row| {
            let title = escape(&row.title);
            format!(
                "<tr>\
                 <td>{id}</td>\
                 <td><img src=\"{image}\" alt=\"{title}\" class=\"product-image\" \
                 onerror=\"this.src='{placeholder}'\"></td>\
                 <td>{title}</td>\
                 <td>{price}</td>\
                 <td>{description}</td>\
                 <td>{category}</td>\
                 </tr>",
                id = row.id,
                image = escape(&row.image),
                placeholder = PLACEHOLDER_IMAGE,
                price = escape(&row.price),
                description = escape(&row.description),
                category = escape(&row.category),
            )
        })
        .collect()
}

/// Text for `#resultsCount`.
pub fn results_count(view: &ViewModel) -> String {
    escape(&view.caption)
}

/// Contents of `#pagination`, empty when there is at most one page.
pub fn pagination(view: &ViewModel) -> String {
    let Some(strip) = &view.pagination else {
        return String::new();
    };

    let mut html: String = strip
        .controls
        .iter()
        .map(|control| match *control {
            PageControl::Previous { target, disabled } => format!(
                "<button data-page=\"{target}\"{}>&larr; Previous</button>",
                disabled_attr(disabled)
            ),
            PageControl::Page { number, active } => {
                let class = if active { "active" } else { "" };
                format!("<button data-page=\"{number}\" class=\"{class}\">{number}</button>")
            }
            PageControl::Ellipsis => "<span class=\"page-info\">...</span>".to_string(),
            PageControl::Next { target, disabled } => format!(
                "<button data-page=\"{target}\"{}>Next &rarr;</button>",
                disabled_attr(disabled)
            ),
        })
        .collect();
    html.push_str(&format!("<span class=\"page-info\">{}</span>", strip.info()));
    html
}

fn disabled_attr(disabled: bool) -> &'static str {
    if disabled {
        " disabled"
    } else {
        ""
    }
}

/// Sort buttons, the active one carrying the `active` class.
pub fn sort_controls(active: Option<SortControl>) -> String {
    SortControl::ALL
        .into_iter()
        .map(|control| {
            let state = if Some(control) == active { " active" } else { "" };
            format!(
                "<button class=\"sort-btn {id}{state}\" data-sort=\"{id}\">{label}</button>",
                id = control.id(),
                label = control.label(),
            )
        })
        .collect()
}

/// Page size selector with the current size selected.
pub fn page_size_selector(page_size: usize, choices: &[usize]) -> String {
    let mut html = String::from("<select id=\"pageSize\">");
    for &choice in choices {
        let selected = if choice == page_size { " selected" } else { "" };
        html.push_str(&format!("<option value=\"{choice}\"{selected}>{choice}</option>"));
    }
    html.push_str("</select>");
    html
}

/// Complete standalone catalog page.
pub fn document(view: &ViewModel, controls: &PageControls<'_>) -> String {
    let header: String = COLUMN_TITLES
        .iter()
        .map(|title| format!("<th>{title}</th>"))
        .collect();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>Product Catalog</title></head>\n\
         <body>\n\
         <div class=\"controls\">\
         <input type=\"text\" id=\"searchInput\" placeholder=\"Search by title...\" value=\"{search}\">\
         {selector}\
         <div class=\"sort-buttons\">{sort}</div>\
         </div>\n\
         <p id=\"resultsCount\">{count}</p>\n\
         <div class=\"table-container\"><table>\
         <thead><tr>{header}</tr></thead>\
         <tbody id=\"productTableBody\">{body}</tbody>\
         </table></div>\n\
         <div id=\"pagination\">{pagination}</div>\n\
         </body>\n\
         </html>\n",
        search = escape(controls.search),
        selector = page_size_selector(controls.page_size, controls.page_size_choices),
        sort = sort_controls(controls.active_sort),
        count = results_count(view),
        body = table_body(view),
        pagination = pagination(view),
    )
}
