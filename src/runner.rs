use crate::{
    collect::SampleCollector,
    config::GsfaConfig,
    discover::QuestionDiscoverer,
    error::GsfaError,
    persist::{SampleFilePersister, WriteFailure},
    session::{Driver, Navigator},
};
use std::{fmt, path::PathBuf};
use tracing::{error, info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    AlreadyDownloaded { home: PathBuf },
    NoProblems { tasks_url: String },
    NoSamples,
    Saved { home: PathBuf, files: usize },
    /// Some files failed to write or some problem pages could not be loaded.
    SavedWithErrors {
        home: PathBuf,
        failures: Vec<WriteFailure>,
        unreachable: Vec<(String, String)>,
    },
}

pub struct Runner<D> {
    config: GsfaConfig,
    driver: D,
}

impl<D: Driver> Runner<D> {
    pub fn new(config: GsfaConfig, driver: D) -> Self {
        Self { config, driver }
    }

    /// Errors are fatal: the session could not start or the task list could not be loaded.
    #[instrument(skip(self))]
    pub async fn run(&self, contest: &str) -> Result<RunStatus, GsfaError> {
        let home = self.config.contest_home(contest);
        if home.is_dir() {
            info!(home = %home.display(), "contest directory exists, skipping");
            return Ok(RunStatus::AlreadyDownloaded { home });
        }

        let mut session = self.driver.start()?;

        let tasks_url = self.config.tasks_url(contest);
        let task_list = session.navigate(&tasks_url).await.map_err(|e| {
            error!(error = %e, "task list unavailable; the contest name may be incorrect");
            e
        })?;
        let discovery = QuestionDiscoverer::new(&task_list).discover();
        drop(task_list);
        info!(problems = discovery.questions.len(), stop = ?discovery.stop, "discovered problems");
        if discovery.questions.is_empty() {
            return Ok(RunStatus::NoProblems { tasks_url });
        }

        let samples = SampleCollector::new(&mut session, self.config.settle())
            .collect(&discovery.questions)
            .await;
        drop(session);
        if samples.case_count() == 0 {
            warn!(problems = samples.len(), "no sample cases found");
            return Ok(RunStatus::NoSamples);
        }

        let report = SampleFilePersister::new(&home).persist(&samples);
        if report.all_succeeded() && samples.unreachable().is_empty() {
            Ok(RunStatus::Saved {
                home,
                files: report.written.len(),
            })
        } else {
            Ok(RunStatus::SavedWithErrors {
                home,
                failures: report.failures,
                unreachable: samples.unreachable().to_vec(),
            })
        }
    }
}

impl RunStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::AlreadyDownloaded { .. } | Self::Saved { .. })
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyDownloaded { home } => {
                writeln!(f, "Contest folder \"{}\" already exists.", home.display())?;
                write!(f, "The sample case has already been downloaded.")
            }
            Self::NoProblems { tasks_url } => {
                writeln!(f, "Failed to get problem URL.")?;
                write!(f, "URL: {}", tasks_url)
            }
            Self::NoSamples => write!(f, "Failed to get I/O example."),
            Self::Saved { home, files } => {
                writeln!(f, "Getting I/O examples succeeded!!")?;
                write!(f, "{} files saved in \"{}\"", files, home.display())
            }
            Self::SavedWithErrors {
                home,
                failures,
                unreachable,
            } => {
                write!(f, "There was a problem saving the sample case.")?;
                for (question, reason) in unreachable {
                    write!(f, "\nProblem {} not downloaded: {}", question, reason)?;
                }
                for failure in failures {
                    write!(
                        f,
                        "\nFile create error. [file : {}] {}",
                        failure.path.display(),
                        failure.reason
                    )?;
                }
                write!(f, "\nPartial output is left in \"{}\"", home.display())
            }
        }
    }
}
