use crate::parsers::PageContent;
use crate::utils::collapse_whitespace;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Elements that never carry page copy
const NON_CONTENT_TAGS: &str = "script, style, noscript, svg, nav, footer, form, button";

/// Paragraphs must be strictly longer than this many characters
pub const MIN_PARAGRAPH_CHARS: usize = 40;

/// Paragraphs must be strictly shorter than this many characters
pub const MAX_PARAGRAPH_CHARS: usize = 600;

/// Maximum number of paragraphs kept per page
pub const MAX_PARAGRAPHS: usize = 8;

static NON_CONTENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(NON_CONTENT_TAGS).unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());
static HEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

/// Extracts title, description, first heading and body paragraphs from HTML
pub fn extract(html: &str) -> PageContent {
    let mut doc = Html::parse_document(html);
    let removed = strip_non_content(&mut doc);
    ::log::trace!("Removed {} non-content elements", removed);

    // detached nodes stay in the tree's storage, so lookups start from the root
    let root = doc.root_element();
    let title = first_text(root, &TITLE);
    let meta_description = root
        .select(&META_DESCRIPTION)
        .next()
        .and_then(|e| e.value().attr("content"))
        .map(collapse_whitespace)
        .unwrap_or_default();
    let first_heading = first_text(root, &HEADING);
    let paragraphs = paragraphs(root);

    ::log::debug!(
        "HTML extractor found title={:?} heading={:?} and {} paragraphs",
        title,
        first_heading,
        paragraphs.len()
    );

    PageContent {
        title,
        meta_description,
        first_heading,
        paragraphs,
    }
}

/// Detaches every non-content element from the tree, returning how many were removed
fn strip_non_content(doc: &mut Html) -> usize {
    let ids = doc
        .select(&NON_CONTENT)
        .map(|e| e.id())
        .collect::<Vec<_>>();

    for id in &ids {
        if let Some(mut node) = doc.tree.get_mut(*id) {
            node.detach();
        }
    }

    ids.len()
}

/// Whitespace-normalized text of the first element matching the selector
fn first_text(root: ElementRef<'_>, selector: &Selector) -> String {
    root.select(selector)
        .next()
        .map(|e| collapse_whitespace(&e.text().collect::<String>()))
        .unwrap_or_default()
}

/// Paragraph texts within the length bounds, capped at the first few
fn paragraphs(root: ElementRef<'_>) -> Vec<String> {
    root.select(&PARAGRAPH)
        .map(|e| collapse_whitespace(&e.text().collect::<String>()))
        .filter(|text| is_qualifying_paragraph(text))
        .take(MAX_PARAGRAPHS)
        .collect()
}

/// Checks the exclusive length bounds on an already normalized paragraph
pub fn is_qualifying_paragraph(text: &str) -> bool {
    let len = text.chars().count();
    len > MIN_PARAGRAPH_CHARS && len < MAX_PARAGRAPH_CHARS
}
