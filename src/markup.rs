//! Reviewed markup handling for result lines.
//!
//! The backend highlights matched terms with `<b>` and turns spaces into
//! `&nbsp;`, so its lines are HTML fragments rather than plain text. A line
//! is parsed once here and reduced to plain text segments, optionally bold.
//! Nothing else from the fragment survives: other tags collapse to their
//! text, and script/style bodies are dropped.

use scraper::{ElementRef, Html};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
}

const DROPPED_TAGS: [&str; 2] = ["script", "style"];
const BOLD_TAGS: [&str; 2] = ["b", "strong"];

/// Splits one backend line into text segments.
pub fn parse_line(line: &str) -> Vec<Inline> {
    let fragment = Html::parse_fragment(line);
    let mut segments = Vec::new();
    collect_segments(fragment.root_element(), false, &mut segments);
    segments
}

fn collect_segments(element: ElementRef<'_>, bold: bool, out: &mut Vec<Inline>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            push_segment(out, text, bold);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            let name = child_element.value().name();
            if DROPPED_TAGS.contains(&name) {
                continue;
            }
            let bold = bold || BOLD_TAGS.contains(&name);
            collect_segments(child_element, bold, out);
        }
    }
}

fn push_segment(out: &mut Vec<Inline>, text: &str, bold: bool) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(Inline::Bold(prev)) if bold => prev.push_str(text),
        Some(Inline::Text(prev)) if !bold => prev.push_str(text),
        _ if bold => out.push(Inline::Bold(text.to_string())),
        _ => out.push(Inline::Text(text.to_string())),
    }
}
