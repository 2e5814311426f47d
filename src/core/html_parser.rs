//! Scoped element queries shared by the page extractors.
//!
//! Every extractor parses its page once and walks down from the root with
//! these helpers; sub-fragments are queried in place instead of being
//! re-serialised and parsed again.

use log::warn;
use scraper::{ElementRef, Html, Selector};

use crate::error::FieldError;

pub fn selector(css: &str) -> Result<Selector, FieldError> {
    Selector::parse(css).map_err(|err| FieldError::InvalidSelector(format!("{css}: {err}")))
}

/// Trimmed text content of an element and all of its descendants.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// First element under `scope` matching `css`.
pub fn first<'a>(scope: ElementRef<'a>, css: &str) -> Result<ElementRef<'a>, FieldError> {
    let sel = selector(css)?;
    scope
        .select(&sel)
        .next()
        .ok_or_else(|| FieldError::Missing(css.to_string()))
}

/// All elements under `scope` matching `css`, in document order.
pub fn all<'a>(scope: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>, FieldError> {
    let sel = selector(css)?;
    Ok(scope.select(&sel).collect())
}

pub fn first_text(scope: ElementRef<'_>, css: &str) -> Result<String, FieldError> {
    first(scope, css).map(element_text)
}

/// Text of the element with the given `id`.
pub fn text_by_id(document: &Html, id: &str) -> Result<String, FieldError> {
    first_text(document.root_element(), &format!("#{id}"))
}

/// `value` attribute of the `<input name=...>` element.
pub fn input_value(document: &Html, name: &str) -> Result<String, FieldError> {
    let css = format!(r#"input[name="{name}"]"#);
    let input = first(document.root_element(), &css)?;
    input
        .value()
        .attr("value")
        .map(str::to_string)
        .ok_or(FieldError::Missing(format!("{css}@value")))
}

/// The `<td>` cells of a table row, in column order.
pub fn cells<'a>(row: ElementRef<'a>) -> Result<Vec<ElementRef<'a>>, FieldError> {
    all(row, "td")
}

pub fn cell_texts(row: ElementRef<'_>) -> Result<Vec<String>, FieldError> {
    Ok(cells(row)?.into_iter().map(element_text).collect())
}

/// Positional cell access that reports how short the row was.
pub fn cell_at(texts: &[String], index: usize) -> Result<String, FieldError> {
    texts.get(index).cloned().ok_or(FieldError::MissingCell {
        index,
        len: texts.len(),
    })
}

/// Warns when a table row does not have the width its column schema expects.
/// Returns `true` when the width matches.
pub fn check_row_width(table: &str, width: usize, expected: usize) -> bool {
    if width != expected {
        warn!("{table} row has {width} cells, expected {expected} (markup drift?)");
        return false;
    }
    true
}

/// Best-effort field: missing elements become an empty string.
pub fn or_empty(result: Result<String, FieldError>, field: &str) -> String {
    match result {
        Ok(text) => text,
        Err(err) => {
            log::debug!("field `{}` unavailable: {}", field, err);
            String::new()
        }
    }
}
