//! Per-line word splitting and prefix n-gram enumeration

use crate::types::{Order, Record};

/// Remove exactly one trailing line terminator (`"\n"` or `"\r\n"`)
///
/// Other trailing whitespace is kept; it changes how the line splits.
pub fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Split a line on the literal space character
///
/// Consecutive spaces produce empty words and a leading or trailing space
/// produces an empty word at that end. An empty line is one empty word.
pub fn split_words(line: &str) -> Vec<&str> {
    line.split(' ').collect()
}

/// Lazy walk over every record of one line, in emission order
///
/// For word `i` and each prefix length `j` (in characters, ascending), the
/// unigram comes first, then the bigram when `i >= 1`, then the trigram when
/// `i >= 2`. All prefixes of a word are exhausted before the next word.
#[derive(Debug, Clone)]
pub struct PrefixNgrams<'a> {
    words: &'a [&'a str],
    index: usize,
    /// Byte length of the current prefix of `words[index]`
    prefix_len: usize,
    pending: Option<Order>,
}

impl<'a> PrefixNgrams<'a> {
    /// Start at the first prefix of the first word
    pub fn new(words: &'a [&'a str]) -> Self {
        Self {
            words,
            index: 0,
            prefix_len: 0,
            pending: None,
        }
    }

    /// Highest order available at the current word position
    fn max_order(&self) -> Order {
        match self.index {
            0 => Order::Unigram,
            1 => Order::Bigram,
            _ => Order::Trigram,
        }
    }
}

impl<'a> Iterator for PrefixNgrams<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let words = self.words;
            let word: &'a str = words.get(self.index)?;

            if let Some(order) = self.pending {
                let max = self.max_order();
                self.pending = order.next().filter(|next| *next <= max);
                let history = &words[self.index - order.history_len()..self.index];
                return Some(Record::new(order, history, &word[..self.prefix_len]));
            }

            match word[self.prefix_len..].chars().next() {
                Some(c) => {
                    self.prefix_len += c.len_utf8();
                    self.pending = Some(Order::Unigram);
                }
                None => {
                    self.index += 1;
                    self.prefix_len = 0;
                }
            }
        }
    }
}

impl std::iter::FusedIterator for PrefixNgrams<'_> {}

/// Formatted records for one raw line, terminator included or not
pub fn line_records(line: &str) -> Vec<String> {
    let words = split_words(strip_terminator(line));
    PrefixNgrams::new(&words).map(|r| r.to_string()).collect()
}
