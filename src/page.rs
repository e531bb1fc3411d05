use crate::error::ReadError;
use reqwest::Url;
use scraper::{Html, Selector};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Every element carrying this id, in document order.
    Id(String),
    Css(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub href: String,
}

/// Read-only view of a rendered page.
pub trait PageTextReader {
    /// Visible text of each element matched by `locator`, trimmed at both ends.
    /// An empty vector means nothing matched.
    fn texts(&self, locator: &Locator) -> Vec<Result<String, ReadError>>;

    /// First hyperlink under `scope` whose visible text equals `text`.
    fn link(&self, scope: &Locator, text: &str) -> Result<Option<Link>, ReadError>;
}

impl Locator {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    fn selector(&self) -> Result<Selector, ReadError> {
        let css = match self {
            Self::Id(id) => format!("[id=\"{}\"]", id),
            Self::Css(css) => css.clone(),
        };
        parse_selector(&css)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{}", id),
            Self::Css(css) => f.write_str(css),
        }
    }
}

#[derive(Debug)]
pub struct HtmlPage {
    url: Url,
    document: Html,
}

impl HtmlPage {
    pub fn parse(url: Url, html: &str) -> Self {
        Self {
            url,
            document: Html::parse_document(html),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl PageTextReader for HtmlPage {
    fn texts(&self, locator: &Locator) -> Vec<Result<String, ReadError>> {
        let selector = match locator.selector() {
            Ok(selector) => selector,
            Err(e) => return vec![Err(e)],
        };

        self.document
            .select(&selector)
            .map(|node| Ok(node.text().collect::<String>().trim().to_string()))
            .collect()
    }

    fn link(&self, scope: &Locator, text: &str) -> Result<Option<Link>, ReadError> {
        let scope = scope.selector()?;
        let anchor = &parse_selector("a")?;

        let found = self
            .document
            .select(&scope)
            .flat_map(|root| root.select(anchor))
            .find(|a| a.text().collect::<String>().trim() == text);
        let Some(a) = found else {
            return Ok(None);
        };

        let href = a
            .value()
            .attr("href")
            .ok_or_else(|| ReadError::MissingAttribute {
                text: text.to_string(),
                attribute: "href",
            })?;
        let href = self.url.join(href).map_err(|e| ReadError::InvalidHref {
            text: text.to_string(),
            href: href.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Some(Link {
            text: text.to_string(),
            href: href.to_string(),
        }))
    }
}

fn parse_selector(css: &str) -> Result<Selector, ReadError> {
    Selector::parse(css).map_err(|e| ReadError::InvalidSelector {
        selector: css.to_string(),
        reason: format!("{:?}", e),
    })
}
