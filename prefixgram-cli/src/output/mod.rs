//! Record sink selection

use crate::config::OutputConfig;
use crate::error::{CliError, CliResult};
use std::fs::File;
use std::io::{self, BufWriter, LineWriter, Write};
use std::path::Path;

/// Open the record sink: the given file, or stdout when `path` is `None`
///
/// With `flush_each_record` the sink is line-buffered, otherwise it is a
/// `BufWriter` of `buffer_kb` kilobytes.
pub fn open_sink(path: Option<&Path>, config: &OutputConfig) -> CliResult<Box<dyn Write>> {
    let inner: Box<dyn Write> = match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                log::debug!("create {} failed: {e}", path.display());
                CliError::OutputUnavailable(path.display().to_string())
            })?;
            Box::new(file)
        }
        None => Box::new(io::stdout().lock()),
    };

    if config.flush_each_record {
        Ok(Box::new(LineWriter::new(inner)))
    } else {
        Ok(Box::new(BufWriter::with_capacity(config.buffer_bytes(), inner)))
    }
}
