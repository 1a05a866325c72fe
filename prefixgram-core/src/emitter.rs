//! Streaming emitter: reader in, record lines out
//!
//! One line is held in memory at a time; the line buffer and the record
//! scratch buffer are reused across lines.

use crate::error::{CoreError, Result};
use crate::line::{split_words, strip_terminator, PrefixNgrams};
use crate::types::Order;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Counters collected over one emission pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitStats {
    /// Lines read, including empty ones
    pub lines: u64,
    /// Non-empty words seen
    pub words: u64,
    /// Unigram records written
    pub unigrams: u64,
    /// Bigram records written
    pub bigrams: u64,
    /// Trigram records written
    pub trigrams: u64,
    /// Lines that were not valid UTF-8 and were decoded lossily
    pub lossy_lines: u64,
}

impl EmitStats {
    /// Records written for one order
    pub fn count(&self, order: Order) -> u64 {
        match order {
            Order::Unigram => self.unigrams,
            Order::Bigram => self.bigrams,
            Order::Trigram => self.trigrams,
        }
    }

    /// Records written over all orders
    pub fn records(&self) -> u64 {
        self.unigrams + self.bigrams + self.trigrams
    }

    fn bump(&mut self, order: Order) {
        match order {
            Order::Unigram => self.unigrams += 1,
            Order::Bigram => self.bigrams += 1,
            Order::Trigram => self.trigrams += 1,
        }
    }
}

/// Writes prefix n-gram records for each line it is given
///
/// Any `Write` works as the sink. Buffering is the caller's choice: wrap a
/// `BufWriter` for throughput or a `LineWriter` to flush after each record.
#[derive(Debug)]
pub struct Emitter<W: Write> {
    writer: W,
    stats: EmitStats,
    scratch: Vec<u8>,
}

impl<W: Write> Emitter<W> {
    /// Create an emitter writing into `writer`
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            stats: EmitStats::default(),
            scratch: Vec::with_capacity(128),
        }
    }

    /// Emit the records of one line and return how many were written
    ///
    /// A single trailing `"\n"` or `"\r\n"` is stripped first.
    pub fn emit_line(&mut self, line: &str) -> Result<usize> {
        let words = split_words(strip_terminator(line));
        self.stats.lines += 1;
        self.stats.words += words.iter().filter(|w| !w.is_empty()).count() as u64;

        let mut written = 0;
        for record in PrefixNgrams::new(&words) {
            record
                .write_line(&mut self.writer, &mut self.scratch)
                .map_err(CoreError::Write)?;
            self.stats.bump(record.order());
            written += 1;
        }
        Ok(written)
    }

    /// Stream every line of `reader` through [`Emitter::emit_line`]
    pub fn emit_reader<R: BufRead>(&mut self, mut reader: R) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| CoreError::Read {
                    line: self.stats.lines + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(text) => Cow::Borrowed(text),
                Err(e) => {
                    log::warn!(
                        "line {}: invalid UTF-8 at byte {}, decoding lossily",
                        self.stats.lines + 1,
                        e.valid_up_to()
                    );
                    self.stats.lossy_lines += 1;
                    String::from_utf8_lossy(&buf)
                }
            };
            self.emit_line(&line)?;
        }
        Ok(())
    }

    /// Counters so far
    pub fn stats(&self) -> &EmitStats {
        &self.stats
    }

    /// Flush the sink and hand it back with the final counters
    pub fn finish(mut self) -> Result<(W, EmitStats)> {
        self.writer.flush().map_err(CoreError::Write)?;
        Ok((self.writer, self.stats))
    }
}

/// Open an input corpus for line-by-line reading
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CoreError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Emit the records of a whole file into `writer`
///
/// The file is opened once and closed when this returns, on success or
/// error. Nothing is written if the file cannot be opened.
pub fn emit_file<P: AsRef<Path>, W: Write>(path: P, writer: W) -> Result<EmitStats> {
    let reader = open_input(&path)?;
    log::debug!("emitting records for {}", path.as_ref().display());

    let mut emitter = Emitter::new(writer);
    emitter.emit_reader(reader)?;
    let (_, stats) = emitter.finish()?;
    Ok(stats)
}
