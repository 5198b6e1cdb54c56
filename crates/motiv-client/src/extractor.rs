use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, driver};
use motiv_core::error::AppError;
use motiv_core::models::{ExtractedContent, FetchedPage, NO_TITLE_FALLBACK};
use motiv_core::traits::ContentExtractor;
use scraper::{Html, HtmlTreeSink, Selector};

/// Elements dropped from `<body>` before its text is collected.
const STRIPPED_ELEMENTS: &str = "script, style, img, input";

/// Title and visible-text extractor backed by scraper (html5ever).
///
/// Stateless: each call parses its own document, so repeated extraction of
/// the same HTML always gives the same result.
#[derive(Debug, Clone, Default)]
pub struct ScraperExtractor;

impl ScraperExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_html(&self, html: &str) -> Result<ExtractedContent, AppError> {
        let mut document = parse_document(html);

        let title = extract_title(&document)?;
        let body_text = extract_body_text(&mut document)?;

        Ok(ExtractedContent { title, body_text })
    }
}

impl ContentExtractor for ScraperExtractor {
    fn extract(&self, page: &FetchedPage) -> Result<ExtractedContent, AppError> {
        tracing::debug!(url = %page.url, "Parsing {} bytes of HTML", page.raw_html.len());
        self.extract_html(&page.raw_html)
    }
}

/// Parse with scripting disabled so `<noscript>` content becomes real
/// elements (tracking pixels, fallback inputs) instead of one raw text node.
fn parse_document(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    driver::parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(html)
}

fn selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::ParseError(format!("invalid selector '{css}': {e}")))
}

fn extract_title(document: &Html) -> Result<String, AppError> {
    let title = document
        .select(&selector("title")?)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| NO_TITLE_FALLBACK.to_string());
    Ok(title)
}

fn extract_body_text(document: &mut Html) -> Result<String, AppError> {
    let body_selector = selector("body")?;
    let body = document
        .select(&body_selector)
        .next()
        .ok_or_else(|| AppError::ParseError("document has no body element".into()))?;

    // Detach before reading text so stripped content cannot leak through.
    let stripped: Vec<_> = body.select(&selector(STRIPPED_ELEMENTS)?).map(|el| el.id()).collect();
    let body_id = body.id();
    for id in stripped {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }

    let body = document
        .tree
        .get(body_id)
        .and_then(scraper::ElementRef::wrap)
        .ok_or_else(|| AppError::ParseError("body element disappeared while cleaning".into()))?;

    let text = body
        .text()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(text)
}
