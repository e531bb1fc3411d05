use crate::{collect::SampleSet, scan::SampleCase};
use std::{
    fs,
    path::{Path, PathBuf},
};
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Side {
    #[strum(serialize = "in")]
    Input,
    #[strum(serialize = "out")]
    Output,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct PersistReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<WriteFailure>,
}

impl PersistReport {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, path: PathBuf, result: std::io::Result<()>) {
        match result {
            Ok(()) => {
                debug!(path = %path.display(), "wrote sample file");
                self.written.push(path);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to write sample file");
                self.failures.push(WriteFailure {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Writes `<dir>/<question>/<question>_<n>_{in,out}.txt`.
pub struct SampleFilePersister {
    dir: PathBuf,
}

impl SampleFilePersister {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn persist(&self, samples: &SampleSet) -> PersistReport {
        let mut report = PersistReport::default();

        for (question, cases) in samples.problems() {
            if samples.is_unreachable(question) {
                debug!(%question, "problem page was not loaded, nothing to write");
                continue;
            }
            let question_dir = self.dir.join(question);
            if let Err(e) = fs::create_dir_all(&question_dir) {
                report.record(question_dir, Err(e));
                continue;
            }

            for case in cases {
                for side in Side::iter() {
                    let path = question_dir.join(file_name(case, side));
                    let result = fs::write(&path, text_of(case, side));
                    report.record(path, result);
                }
            }
        }

        report
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

pub fn file_name(case: &SampleCase, side: Side) -> String {
    format!("{}_{}_{}.txt", case.question(), case.number(), side)
}

fn text_of(case: &SampleCase, side: Side) -> &str {
    match side {
        Side::Input => case.input(),
        Side::Output => case.output(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(root: &Path) -> String {
        let mut lines = Vec::new();
        walk(root, root, &mut lines);
        lines.join("\n")
    }

    fn walk(root: &Path, dir: &Path, lines: &mut Vec<String>) {
        let mut entries: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        entries.sort();
        for path in entries {
            let rel = path.strip_prefix(root).unwrap().display().to_string();
            if path.is_dir() {
                lines.push(format!("{}/", rel));
                walk(root, &path, lines);
            } else {
                lines.push(format!("{}: {}", rel, fs::read_to_string(&path).unwrap()));
            }
        }
    }

    fn sample_set() -> SampleSet {
        let mut samples = SampleSet::new();
        samples.insert(
            "A",
            vec![
                SampleCase::new("A", 1, "1\\n2", "3"),
                SampleCase::new("A", 2, "4", "5"),
            ],
        );
        samples.insert("B", vec![]);
        samples
    }

    #[test]
    fn file_name_should_include_question_number_and_side() {
        let case = SampleCase::new("B", 2, "", "");
        assert_eq!(file_name(&case, Side::Input), "B_2_in.txt");
        assert_eq!(file_name(&case, Side::Output), "B_2_out.txt");
    }

    #[test]
    fn persist_should_write_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let home = tmp.path().join("gsfa").join("abc100");

        let report = SampleFilePersister::new(&home).persist(&sample_set());

        assert!(report.all_succeeded());
        assert_eq!(report.written.len(), 4);
        insta::assert_snapshot!(listing(&home), @r###"
        A/
        A/A_1_in.txt: 1\n2
        A/A_1_out.txt: 3
        A/A_2_in.txt: 4
        A/A_2_out.txt: 5
        B/
        "###);
    }

    #[test]
    fn persist_should_keep_cases_apart() {
        let tmp = tempfile::tempdir().unwrap();
        let mut samples = SampleSet::new();
        samples.insert(
            "A",
            vec![
                SampleCase::new("A", 1, "a1", "a1o"),
                SampleCase::new("A", 2, "a2", "a2o"),
            ],
        );
        samples.insert(
            "B",
            vec![
                SampleCase::new("B", 1, "b1", "b1o"),
                SampleCase::new("B", 2, "b2", "b2o"),
            ],
        );

        let report = SampleFilePersister::new(tmp.path()).persist(&samples);

        assert!(report.all_succeeded());
        let read = |p: &str| fs::read_to_string(tmp.path().join(p)).unwrap();
        assert_eq!(read("B/B_2_in.txt"), "b2");
        assert_eq!(read("B/B_1_in.txt"), "b1");
        assert_eq!(read("A/A_2_in.txt"), "a2");
        assert_eq!(read("A/A_2_out.txt"), "a2o");
    }

    #[test]
    fn persist_should_continue_after_write_failure() {
        let tmp = tempfile::tempdir().unwrap();
        // a directory where the file should go makes that single write fail
        fs::create_dir_all(tmp.path().join("A").join("A_1_in.txt")).unwrap();

        let report = SampleFilePersister::new(tmp.path()).persist(&sample_set());

        assert!(!report.all_succeeded());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, tmp.path().join("A").join("A_1_in.txt"));
        assert_eq!(report.written.len(), 3);
        assert_eq!(
            fs::read_to_string(tmp.path().join("A").join("A_1_out.txt")).unwrap(),
            "3"
        );
        assert_eq!(
            fs::read_to_string(tmp.path().join("A").join("A_2_in.txt")).unwrap(),
            "4"
        );
        assert!(tmp.path().join("B").is_dir());
    }

    #[test]
    fn persist_should_skip_unreachable_questions() {
        let tmp = tempfile::tempdir().unwrap();
        let mut samples = sample_set();
        samples.mark_unreachable("C", "failed to navigate to urlC: 404 Not Found");

        let report = SampleFilePersister::new(tmp.path()).persist(&samples);

        assert!(report.all_succeeded());
        assert!(tmp.path().join("B").is_dir());
        assert!(!tmp.path().join("C").exists());
    }

    #[test]
    fn persist_should_report_unwritable_question_dir() {
        let tmp = tempfile::tempdir().unwrap();
        // a file named like the question directory blocks it
        fs::write(tmp.path().join("A"), "").unwrap();

        let report = SampleFilePersister::new(tmp.path()).persist(&sample_set());

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, tmp.path().join("A"));
        assert!(tmp.path().join("B").is_dir());
    }
}
