pub mod collect;
pub mod config;
pub mod discover;
pub mod error;
pub mod page;
pub mod persist;
pub mod runner;
pub mod scan;
pub mod session;
pub mod telemetry;

#[cfg(test)]
mod fixture;

pub use collect::{SampleCollector, SampleSet};
pub use config::{GsfaConfig, GsfaConfigBuilder};
pub use discover::{Discovery, DiscoveryStop, QuestionDiscoverer, QuestionMap};
pub use error::{GsfaError, ReadError};
pub use page::{HtmlPage, Link, Locator, PageTextReader};
pub use persist::{PersistReport, SampleFilePersister, WriteFailure};
pub use runner::{RunStatus, Runner};
pub use scan::{SampleBlockScanner, SampleCase};
pub use session::{Driver, HttpDriver, HttpSession, Navigator};
