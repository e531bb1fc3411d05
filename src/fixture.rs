//! In-memory pages and sessions for tests.

use crate::{
    error::{GsfaError, ReadError},
    page::{Link, Locator, PageTextReader},
    session::{Driver, Navigator},
};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

#[derive(Debug, Clone, Default)]
pub struct FixturePage {
    texts: HashMap<String, Vec<Result<String, ReadError>>>,
    links: HashMap<String, Result<Link, ReadError>>,
    probes: Arc<Mutex<Vec<String>>>,
    next_slot: usize,
}

impl FixturePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, id: &str, fragments: &[&str]) -> Self {
        let fragments = fragments.iter().map(|f| Ok(f.to_string())).collect();
        self.texts.insert(Locator::id(id).to_string(), fragments);
        self
    }

    pub fn with_fragments(mut self, id: &str, fragments: Vec<Result<String, ReadError>>) -> Self {
        self.texts.insert(Locator::id(id).to_string(), fragments);
        self
    }

    /// Adds an input/output pair at slots 0/1, then 2/3, and so on.
    pub fn with_sample(mut self, input: &str, output: &str) -> Self {
        let slot = self.next_slot;
        self.next_slot += 2;
        self.with_text(&format!("pre-sample{}", slot), &[input])
            .with_text(&format!("pre-sample{}", slot + 1), &[output])
    }

    pub fn with_link(mut self, text: &str, href: &str) -> Self {
        let link = Link {
            text: text.to_string(),
            href: href.to_string(),
        };
        self.links.insert(text.to_string(), Ok(link));
        self
    }

    pub fn with_broken_link(mut self, text: &str, err: ReadError) -> Self {
        self.links.insert(text.to_string(), Err(err));
        self
    }

    /// Locators asked for via `texts`, in call order.
    pub fn probes(&self) -> Vec<String> {
        self.probes.lock().unwrap().clone()
    }
}

impl PageTextReader for FixturePage {
    fn texts(&self, locator: &Locator) -> Vec<Result<String, ReadError>> {
        let key = locator.to_string();
        self.probes.lock().unwrap().push(key.clone());
        self.texts.get(&key).cloned().unwrap_or_default()
    }

    fn link(&self, _scope: &Locator, text: &str) -> Result<Option<Link>, ReadError> {
        self.links.get(text).cloned().transpose()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FixtureDriver {
    pages: HashMap<String, FixturePage>,
    starts: Arc<AtomicUsize>,
    navigations: Arc<AtomicUsize>,
}

pub struct FixtureSession {
    pages: HashMap<String, FixturePage>,
    navigations: Arc<AtomicUsize>,
}

impl FixtureDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, page: FixturePage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }

    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn navigations(&self) -> usize {
        self.navigations.load(Ordering::SeqCst)
    }

    pub fn session(&self) -> FixtureSession {
        FixtureSession {
            pages: self.pages.clone(),
            navigations: self.navigations.clone(),
        }
    }
}

impl Driver for FixtureDriver {
    type Session = FixtureSession;

    fn start(&self) -> Result<FixtureSession, GsfaError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        Ok(self.session())
    }
}

#[async_trait]
impl Navigator for FixtureSession {
    type Page = FixturePage;

    async fn navigate(&mut self, url: &str) -> Result<FixturePage, GsfaError> {
        self.navigations.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| GsfaError::Navigation {
                url: url.to_string(),
                reason: "404 Not Found".to_string(),
            })
    }
}
