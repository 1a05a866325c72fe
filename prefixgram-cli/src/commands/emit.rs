//! Emit command implementation

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::input::FileReader;
use crate::output;
use crate::progress::ProgressReporter;
use clap::Parser;
use prefixgram_core::{CoreError, EmitStats, Emitter, Order};
use std::path::PathBuf;
use std::time::Instant;

/// Emit prefix n-gram count records ("<key> 1") for a tokenized corpus.
///
/// Each input line is split on single spaces; every character-prefix of
/// every word is emitted alone, after the previous word, and after the two
/// previous words. Pipe the output through a sort-and-sum stage to obtain
/// frequency tables.
#[derive(Debug, Parser)]
#[command(name = "prefixgram", version)]
pub struct EmitArgs {
    /// Tokenized corpus, one utterance per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "PREFIXGRAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress logging and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl EmitArgs {
    /// Execute the emit command
    pub fn execute(&self) -> CliResult<()> {
        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        // Initialize logging based on verbosity
        self.init_logging(&config);

        log::info!("Starting prefix n-gram emission");
        log::debug!("Arguments: {:?}", self);
        log::debug!("Configuration: {:?}", config);

        // Input first: an unavailable corpus must not create or touch the output
        let reader = FileReader::open(&self.input)?;
        let total_bytes = FileReader::opened_size(&reader, &self.input)?;

        let sink = output::open_sink(self.output.as_deref(), &config.output)?;
        let progress = ProgressReporter::new(!self.quiet && config.progress.enabled, total_bytes);

        let start = Instant::now();
        let mut emitter = Emitter::new(sink);
        let result = emitter
            .emit_reader(progress.track(reader))
            .and_then(|()| emitter.finish().map(|(_, stats)| stats));

        let stats = match result {
            Ok(stats) => stats,
            Err(e) if e.is_broken_pipe() => {
                progress.abandon();
                log::debug!("Output closed by reader, stopping");
                return Ok(());
            }
            Err(e) => {
                progress.abandon();
                return Err(with_input_context(e, &self.input));
            }
        };

        progress.finish(&stats);
        log_summary(&stats, start.elapsed().as_secs_f64());

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self, config: &CliConfig) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => config.logging.level.as_str(),
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A second init (e.g. from tests in one process) keeps the first logger
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

fn with_input_context(err: CoreError, input: &std::path::Path) -> anyhow::Error {
    match err {
        CoreError::Read { .. } => {
            anyhow::Error::new(err).context(format!("Failed to read {}", input.display()))
        }
        other => other.into(),
    }
}

fn log_summary(stats: &EmitStats, elapsed_secs: f64) {
    log::info!(
        "Processed {} lines ({} words) in {:.3}s",
        stats.lines,
        stats.words,
        elapsed_secs
    );
    for order in Order::ALL {
        log::info!("  {}: {} records", order.name(), stats.count(order));
    }
    if stats.lossy_lines > 0 {
        log::warn!(
            "{} lines contained invalid UTF-8 and were decoded lossily",
            stats.lossy_lines
        );
    }
}
