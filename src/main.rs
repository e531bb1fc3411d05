use anyhow::Result;
use clap::{CommandFactory, Parser};
use gsfa::{config::FileConfig, telemetry, GsfaConfigBuilder, HttpDriver, Runner};
use std::{path::PathBuf, process::ExitCode, time::Duration};

/// Get input/output samples from AtCoder.
///
/// The samples of every problem are stored in "<root>/<CONTEST>/<label>/"
/// as "<label>_<n>_in.txt" and "<label>_<n>_out.txt". A contest whose
/// directory already exists is not downloaded again.
#[derive(Debug, Parser)]
#[command(name = "gsfa", version, about, long_about)]
struct Cli {
    /// Contest name as in "atcoder.jp/contests/<CONTEST>"
    contest: Option<String>,

    /// Site host [default: atcoder.jp]
    #[arg(long)]
    host: Option<String>,

    /// Output root directory [default: gsfa]
    #[arg(long)]
    root: Option<PathBuf>,

    /// Wait after loading each problem page, in milliseconds [default: 1000]
    #[arg(long)]
    settle_ms: Option<u64>,

    /// User-Agent header sent with every request [default: gsfa/<version>]
    #[arg(long)]
    user_agent: Option<String>,

    /// TOML file with host, root, settle_ms and user_agent keys (or GSFA_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    let Some(contest) = cli.contest.as_deref() else {
        Cli::command().print_long_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let mut builder = GsfaConfigBuilder::default();
    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os("GSFA_CONFIG").map(PathBuf::from));
    if let Some(path) = config_path {
        FileConfig::load(&path)?.apply(&mut builder);
    }
    if let Some(host) = cli.host {
        builder.host(host);
    }
    if let Some(root) = cli.root {
        builder.root(root);
    }
    if let Some(ms) = cli.settle_ms {
        builder.settle(Duration::from_millis(ms));
    }
    if let Some(ua) = cli.user_agent {
        builder.user_agent(ua);
    }
    let config = builder.build()?;

    let runner = Runner::new(config.clone(), HttpDriver::new(&config));
    let status = runner.run(contest).await?;
    println!("{}", status);

    Ok(if status.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
