//! Append-only output buffer for extracted text.

/// Ordered builder for the text of one document.
///
/// Extractors receive the buffer by exclusive reference, append fragments in
/// document order and the facade materializes it once with [`finish`].
///
/// [`finish`]: TextBuffer::finish
#[derive(Debug, Default)]
pub struct TextBuffer {
    text: String,
    fragments: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw text (a fragment or a delimiter).
    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    #[inline]
    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    /// Append one text fragment followed by a newline.
    pub fn push_line(&mut self, fragment: &str) {
        self.text.push_str(fragment);
        self.text.push('\n');
        self.fragments += 1;
    }

    /// Append the non-empty values of `values` joined by tabs, then a newline.
    ///
    /// Nothing is written when every value is empty. Returns whether a line
    /// was written.
    pub fn push_row<I, S>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut written = 0;
        for value in values {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            if written > 0 {
                self.text.push('\t');
            }
            self.text.push_str(value);
            written += 1;
        }
        if written > 0 {
            self.text.push('\n');
            self.fragments += written;
        }
        written > 0
    }

    /// Record that a fragment was appended through [`push_str`](Self::push_str).
    pub(crate) fn count_fragment(&mut self) {
        self.fragments += 1;
    }

    /// Number of text fragments appended so far.
    pub fn fragments(&self) -> usize {
        self.fragments
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the buffer and return the text.
    pub fn finish(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_skips_empty_values() {
        let mut buf = TextBuffer::new();
        assert!(buf.push_row(["A", "", "B"]));
        assert!(!buf.push_row(["", ""]));
        assert!(!buf.push_row(Vec::<String>::new()));
        buf.push_line("next");
        assert_eq!(buf.fragments(), 3);
        assert_eq!(buf.finish(), "A\tB\nnext\n");
    }
}
