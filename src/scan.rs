use crate::{
    error::ReadError,
    page::{Locator, PageTextReader},
};
use tracing::{debug, warn};

/// Placed between fragments of one sample block: a literal backslash-n, not a newline.
pub const FRAGMENT_SEPARATOR: &str = r"\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCase {
    question: String,
    number: usize,
    input: String,
    output: String,
}

impl SampleCase {
    pub fn new(
        question: impl Into<String>,
        number: usize,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            number,
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// 1-based position within the question.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

/// Walks `pre-sample<2k>` / `pre-sample<2k+1>` pairs until both sides come back empty.
pub struct SampleBlockScanner<'a, P: ?Sized> {
    page: &'a P,
    question: &'a str,
    input_slot: usize,
    output_slot: usize,
    next_number: usize,
    finished: bool,
}

impl<'a, P: PageTextReader + ?Sized> SampleBlockScanner<'a, P> {
    pub fn new(page: &'a P, question: &'a str) -> Self {
        Self {
            page,
            question,
            input_slot: 0,
            output_slot: 1,
            next_number: 1,
            finished: false,
        }
    }

    fn read_slot(&self, slot: usize) -> String {
        let locator = slot_locator(slot);
        reconstruct_text(&locator, self.page.texts(&locator))
    }
}

impl<'a, P: PageTextReader + ?Sized> Iterator for SampleBlockScanner<'a, P> {
    type Item = SampleCase;

    fn next(&mut self) -> Option<SampleCase> {
        if self.finished {
            return None;
        }

        let input = self.read_slot(self.input_slot);
        let output = self.read_slot(self.output_slot);
        if is_end_of_samples(&input, &output) {
            debug!(
                question = self.question,
                found = self.next_number - 1,
                "no sample block at slots {}/{}",
                self.input_slot,
                self.output_slot
            );
            self.finished = true;
            return None;
        }

        let case = SampleCase::new(self.question, self.next_number, input, output);
        self.input_slot += 2;
        self.output_slot += 2;
        self.next_number += 1;
        Some(case)
    }
}

pub fn slot_locator(slot: usize) -> Locator {
    Locator::id(format!("pre-sample{}", slot))
}

/// A missing container and a blank one look the same here; both end the scan.
pub fn is_end_of_samples(input: &str, output: &str) -> bool {
    input.is_empty() && output.is_empty()
}

/// Joins fragment texts in order, keeping whatever was read before the first failure.
pub fn reconstruct_text(
    locator: &Locator,
    fragments: impl IntoIterator<Item = Result<String, ReadError>>,
) -> String {
    let mut parts = Vec::new();
    for fragment in fragments {
        match fragment {
            Ok(text) => parts.push(text),
            Err(e) => {
                warn!(%locator, read = parts.len(), error = %e, "text retrieval stopped early");
                break;
            }
        }
    }
    parts.join(FRAGMENT_SEPARATOR)
}
