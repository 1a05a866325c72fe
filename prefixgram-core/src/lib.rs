//! Prefix n-gram count emitter
//!
//! Turns a tokenized corpus (one utterance per line, words separated by a
//! single space) into a flat stream of `"<key> 1"` records: every
//! character-prefix of every word, alone and with one or two preceding words
//! as context. The stream is meant to be sorted and summed downstream; this
//! crate never aggregates.
//!
//! ```
//! use prefixgram_core::line_records;
//!
//! assert_eq!(
//!     line_records("I am"),
//!     vec!["I 1", "a 1", "I a 1", "am 1", "I am 1"]
//! );
//! ```

#![warn(missing_docs)]

pub mod emitter;
pub mod error;
pub mod line;
pub mod types;

// Re-export key types
pub use emitter::{emit_file, open_input, EmitStats, Emitter};
pub use error::{CoreError, Result};
pub use line::{line_records, split_words, strip_terminator, PrefixNgrams};
pub use types::{Order, Record};
