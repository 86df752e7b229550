//! Character cursor with line/column bookkeeping.
//!
//! `line` and `column` always describe the position *before* the next unread
//! character. Consuming `\n` increments the line and resets the column to 0;
//! consuming anything else increments the column by one (columns count
//! characters, not bytes).
//!
//! Lookahead returns `'\0'` past the end of input. An interior NUL in the
//! source is distinguished from EOF via [`Cursor::is_eof`].

#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            source,
            pos: 0,
            line: 1,
            column: 0,
        }
    }

    #[inline]
    pub(crate) fn source(&self) -> &'a str {
        self.source
    }

    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub(crate) fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// The next unread character, or `'\0'` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }

    /// The character after [`current`](Self::current), or `'\0'`.
    #[inline]
    pub(crate) fn peek(&self) -> char {
        self.rest().chars().nth(1).unwrap_or('\0')
    }

    /// Consume one character and return it (`'\0'` at EOF, without moving).
    pub(crate) fn bump(&mut self) -> char {
        let Some(c) = self.rest().chars().next() else {
            return '\0';
        };
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        c
    }

    /// Consume the current character if it equals `expected`.
    #[inline]
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if !self.is_eof() && self.current() == expected {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds; returns the consumed text.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.pos;
        while !self.is_eof() && pred(self.current()) {
            self.bump();
        }
        &self.source[start..self.pos]
    }

    /// Count how many times `c` repeats starting at the cursor, without
    /// consuming anything.
    pub(crate) fn run_length(&self, c: char) -> usize {
        self.rest().chars().take_while(|&x| x == c).count()
    }
}

#[cfg(test)]
mod tests;
