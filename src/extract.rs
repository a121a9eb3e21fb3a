use anyhow::{Result, anyhow};
use scraper::{ElementRef, Html, Selector};

use crate::models::{NOT_AVAILABLE, ProductRecord};

const CONTAINER: &str = ".s-main-slot.s-result-list.s-search-results.sg-row";
const ITEM: &str = "div[data-component-type='s-search-result']";
const TITLE: &str = "a h2 span";
const RATING: &str = "i span.a-icon-alt";
const REVIEWS: &str = "a[aria-label] span.a-size-base.s-underline-text";
const IMAGE: &str = "img.s-image";

/// Compiled selectors for a search-results page.
#[derive(Debug, Clone)]
pub struct ProductSelectors {
    container: Selector,
    item: Selector,
    title: Selector,
    rating: Selector,
    reviews: Selector,
    image: Selector,
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("bad selector {css:?}: {e}"))
}

impl ProductSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            container: compile(CONTAINER)?,
            item: compile(ITEM)?,
            title: compile(TITLE)?,
            rating: compile(RATING)?,
            reviews: compile(REVIEWS)?,
            image: compile(IMAGE)?,
        })
    }

    /// Products in document order, or `None` when the results container is missing.
    pub fn extract(&self, html: &str) -> Option<Vec<ProductRecord>> {
        let doc = Html::parse_document(html);
        let container = doc.select(&self.container).next()?;
        Some(
            container
                .select(&self.item)
                .map(|item| self.parse_item(&item))
                .collect(),
        )
    }

    fn parse_item(&self, item: &ElementRef) -> ProductRecord {
        let title = first_text(item, &self.title).map(|t| t.trim().to_string());

        // "4.5 out of 5 stars" -> "4.5"
        let rating = first_text(item, &self.rating)
            .and_then(|t| t.split_whitespace().next().map(str::to_string));

        let reviews = first_text(item, &self.reviews).map(|t| t.trim().to_string());

        let image = item
            .select(&self.image)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(|s| s.trim().to_string());

        ProductRecord {
            title: or_sentinel(title),
            rating: or_sentinel(rating),
            reviews: or_sentinel(reviews),
            image: or_sentinel(image),
        }
    }
}

fn first_text(scope: &ElementRef, sel: &Selector) -> Option<String> {
    scope
        .select(sel)
        .next()
        .map(|e| e.text().collect::<String>())
}

fn or_sentinel(v: Option<String>) -> String {
    v.filter(|s| !s.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
