use crate::{
    error::ReadError,
    page::{Locator, PageTextReader},
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub const TASK_TABLE: &str = "#main-container > div.row > div:nth-child(2) > div > table > tbody";

/// Problem label -> problem page URL, in label order.
pub type QuestionMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryStop {
    /// Every letter A-Z resolved.
    Exhausted,
    /// No link for this letter; the problem set ends before it.
    Absent(char),
    /// A link for this letter exists but could not be read.
    ReadFailed(char, ReadError),
}

#[derive(Debug, Clone)]
pub struct Discovery {
    pub questions: QuestionMap,
    pub stop: DiscoveryStop,
}

pub struct QuestionDiscoverer<'a, P: ?Sized> {
    page: &'a P,
    table: Locator,
}

impl<'a, P: PageTextReader + ?Sized> QuestionDiscoverer<'a, P> {
    pub fn new(page: &'a P) -> Self {
        Self {
            page,
            table: Locator::css(TASK_TABLE),
        }
    }

    /// Probes A..=Z and keeps the contiguous prefix of letters that resolve.
    pub fn discover(&self) -> Discovery {
        let mut questions = QuestionMap::new();

        for letter in 'A'..='Z' {
            let label = letter.to_string();
            match self.page.link(&self.table, &label) {
                Ok(Some(link)) => {
                    debug!(question = %label, href = %link.href, "found problem");
                    questions.insert(label, link.href);
                }
                Ok(None) => {
                    debug!(found = questions.len(), "no link for {}", letter);
                    return Discovery {
                        questions,
                        stop: DiscoveryStop::Absent(letter),
                    };
                }
                Err(e) => {
                    warn!(question = %label, error = %e, "failed to read problem link");
                    return Discovery {
                        questions,
                        stop: DiscoveryStop::ReadFailed(letter, e),
                    };
                }
            }
        }

        Discovery {
            questions,
            stop: DiscoveryStop::Exhausted,
        }
    }
}
