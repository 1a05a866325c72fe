//! Record types shared by the line walker and the emitter

use std::fmt;
use std::io::{self, Write};

/// Count emitted for every record; summing is left to the reducer
pub const RECORD_COUNT: u32 = 1;

/// N-gram order of a record, by number of whole words of history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Order {
    /// Prefix alone
    Unigram,
    /// Previous word, then prefix
    Bigram,
    /// Two previous words, then prefix
    Trigram,
}

impl Order {
    /// All orders in emission order
    pub const ALL: [Order; 3] = [Order::Unigram, Order::Bigram, Order::Trigram];

    /// Number of preceding words in the key
    pub fn history_len(self) -> usize {
        match self {
            Order::Unigram => 0,
            Order::Bigram => 1,
            Order::Trigram => 2,
        }
    }

    /// The order emitted right after this one for the same prefix
    pub fn next(self) -> Option<Order> {
        match self {
            Order::Unigram => Some(Order::Bigram),
            Order::Bigram => Some(Order::Trigram),
            Order::Trigram => None,
        }
    }

    /// Short lowercase name, used in log summaries
    pub fn name(self) -> &'static str {
        match self {
            Order::Unigram => "unigram",
            Order::Bigram => "bigram",
            Order::Trigram => "trigram",
        }
    }
}

/// One count record, borrowing from the line it was built from
///
/// Renders as `"<history...> <prefix> 1"`. History words are written
/// verbatim, so an empty history word yields a doubled space in the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    order: Order,
    history: &'a [&'a str],
    prefix: &'a str,
}

impl<'a> Record<'a> {
    pub(crate) fn new(order: Order, history: &'a [&'a str], prefix: &'a str) -> Self {
        debug_assert_eq!(order.history_len(), history.len());
        Self {
            order,
            history,
            prefix,
        }
    }

    /// N-gram order of this record
    pub fn order(&self) -> Order {
        self.order
    }

    /// Preceding words, oldest first
    pub fn history(&self) -> &'a [&'a str] {
        self.history
    }

    /// Character-prefix of the current word
    pub fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// The aggregation key: history words and prefix joined by single spaces
    pub fn key(&self) -> String {
        let mut key = String::with_capacity(
            self.prefix.len() + self.history.iter().map(|w| w.len() + 1).sum::<usize>(),
        );
        for word in self.history {
            key.push_str(word);
            key.push(' ');
        }
        key.push_str(self.prefix);
        key
    }

    /// Write the record followed by a newline as a single write call
    pub fn write_line<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        scratch: &mut Vec<u8>,
    ) -> io::Result<()> {
        scratch.clear();
        for word in self.history {
            scratch.extend_from_slice(word.as_bytes());
            scratch.push(b' ');
        }
        scratch.extend_from_slice(self.prefix.as_bytes());
        scratch.extend_from_slice(b" 1\n");
        writer.write_all(scratch)
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.history {
            write!(f, "{word} ")?;
        }
        write!(f, "{} {}", self.prefix, RECORD_COUNT)
    }
}
