//! Straightening the curly quotes in a piece of text.

use crate::unicode::{curly_to_straight, Quote};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Replace every curly quote in `text` with its straight equivalent.
///
/// Quotes are matched by code point, one at a time, with no attempt at pairing. If there is
/// nothing to replace the original text is returned borrowed.
///
/// # Examples
///
/// ```rust
/// # use quotefix::text::straighten_quotes;
/// assert_eq!(
///     "She said, 'hello' and \"goodbye\".",
///     straighten_quotes("She said, \u{2018}hello\u{2019} and \u{201c}goodbye\u{201d}."),
/// );
/// ```
pub fn straighten_quotes(text: &str) -> Cow<str> {
    lazy_static! {
        static ref RE: Regex = {
            let class = Quote::ALL.iter().map(|q| q.as_char()).collect::<String>();
            Regex::new(&format!("[{}]", class)).unwrap()
        };
    }
    RE.replace_all(text, |caps: &Captures| {
        caps[0]
            .chars()
            .map(|c| curly_to_straight(c).unwrap_or(c))
            .collect::<String>()
    })
}

/// How many of each curly quote a text contains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuoteCounts {
    pub left_single: usize,
    pub right_single: usize,
    pub left_double: usize,
    pub right_double: usize,
}

impl QuoteCounts {
    pub fn get(&self, quote: Quote) -> usize {
        match quote {
            Quote::LeftSingle => self.left_single,
            Quote::RightSingle => self.right_single,
            Quote::LeftDouble => self.left_double,
            Quote::RightDouble => self.right_double,
        }
    }

    fn add(&mut self, quote: Quote) {
        match quote {
            Quote::LeftSingle => self.left_single += 1,
            Quote::RightSingle => self.right_single += 1,
            Quote::LeftDouble => self.left_double += 1,
            Quote::RightDouble => self.right_double += 1,
        }
    }

    /// Total number of quotes that get replaced.
    pub fn total(&self) -> usize {
        Quote::ALL.iter().map(|&q| self.get(q)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Count the curly quotes in `text`.
///
/// # Examples
///
/// ```rust
/// # use quotefix::text::count_quotes;
/// let counts = count_quotes("\u{201c}it\u{2019}s\u{201d}");
/// assert_eq!(3, counts.total());
/// assert_eq!(1, counts.right_single);
/// ```
pub fn count_quotes(text: &str) -> QuoteCounts {
    let mut counts = QuoteCounts::default();
    for quote in text.chars().filter_map(Quote::from_char) {
        counts.add(quote);
    }
    counts
}
