//! The curly quotes that get straightened, and what each one becomes.

/// A directional quotation mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quote {
    /// U+2018, `‘`.
    LeftSingle,

    /// U+2019, `’`.
    RightSingle,

    /// U+201C, `“`.
    LeftDouble,

    /// U+201D, `”`.
    RightDouble,
}

impl Quote {
    /// Every curly quote, in the order they are replaced.
    pub const ALL: [Quote; 4] = [
        Quote::LeftSingle,
        Quote::RightSingle,
        Quote::LeftDouble,
        Quote::RightDouble,
    ];

    /// Recognize a curly quote by its exact code point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quotefix::unicode::Quote;
    /// assert_eq!(Some(Quote::RightSingle), Quote::from_char('\u{2019}'));
    /// assert_eq!(None, Quote::from_char('\''));
    /// ```
    pub fn from_char(c: char) -> Option<Quote> {
        match c {
            '\u{2018}' => Some(Quote::LeftSingle),
            '\u{2019}' => Some(Quote::RightSingle),
            '\u{201c}' => Some(Quote::LeftDouble),
            '\u{201d}' => Some(Quote::RightDouble),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Quote::LeftSingle => '\u{2018}',
            Quote::RightSingle => '\u{2019}',
            Quote::LeftDouble => '\u{201c}',
            Quote::RightDouble => '\u{201d}',
        }
    }

    /// The straight quote that replaces this one.
    pub fn straight(self) -> char {
        match self {
            Quote::LeftSingle | Quote::RightSingle => '\'',
            Quote::LeftDouble | Quote::RightDouble => '"',
        }
    }
}

/// Map a curly quote to its straight equivalent, or `None` if `c` isn't a curly quote.
pub fn curly_to_straight(c: char) -> Option<char> {
    Quote::from_char(c).map(Quote::straight)
}
