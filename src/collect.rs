use crate::{
    discover::QuestionMap,
    scan::{SampleBlockScanner, SampleCase},
    session::Navigator,
};
use std::{collections::BTreeMap, time::Duration};
use tokio::time::sleep;
use tracing::{info, warn};

/// Samples per problem label. Every discovered label has an entry, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleSet {
    problems: BTreeMap<String, Vec<SampleCase>>,
    unreachable: Vec<(String, String)>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question: impl Into<String>, cases: Vec<SampleCase>) {
        self.problems.insert(question.into(), cases);
    }

    pub fn problems(&self) -> impl Iterator<Item = (&str, &[SampleCase])> {
        self.problems
            .iter()
            .map(|(question, cases)| (question.as_str(), cases.as_slice()))
    }

    pub fn get(&self, question: &str) -> Option<&[SampleCase]> {
        self.problems.get(question).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn case_count(&self) -> usize {
        self.problems.values().map(Vec::len).sum()
    }

    /// Keeps the label with no cases and remembers why its page was not loaded.
    pub fn mark_unreachable(&mut self, question: &str, reason: impl Into<String>) {
        self.problems.insert(question.to_string(), Vec::new());
        self.unreachable.push((question.to_string(), reason.into()));
    }

    pub fn is_unreachable(&self, question: &str) -> bool {
        self.unreachable.iter().any(|(q, _)| q == question)
    }

    /// Problems whose page could not be loaded, with the reason.
    pub fn unreachable(&self) -> &[(String, String)] {
        &self.unreachable
    }
}

pub struct SampleCollector<'a, N> {
    session: &'a mut N,
    settle: Duration,
}

impl<'a, N: Navigator> SampleCollector<'a, N> {
    pub fn new(session: &'a mut N, settle: Duration) -> Self {
        Self { session, settle }
    }

    pub async fn collect(&mut self, questions: &QuestionMap) -> SampleSet {
        let mut samples = SampleSet::new();

        for (question, url) in questions {
            let page = match self.session.navigate(url).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(%question, error = %e, "skipping problem");
                    samples.mark_unreachable(question, e.to_string());
                    continue;
                }
            };
            if !self.settle.is_zero() {
                sleep(self.settle).await;
            }

            let cases: Vec<_> = SampleBlockScanner::new(&page, question).collect();
            info!(%question, cases = cases.len(), "collected samples");
            samples.insert(question.as_str(), cases);
        }

        samples
    }
}
