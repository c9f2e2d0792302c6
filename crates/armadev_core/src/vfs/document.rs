/// An open editor document: its full text plus a line index for translating
/// LSP line/character positions into byte offsets.
#[derive(Debug)]
pub struct Document {
    text: String,
    line_offsets: Vec<usize>,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Document {
    pub fn new(text: String) -> Document {
        let mut line_offsets = vec![0];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_offsets.push(i + 1);
            }
        }

        Document { text, line_offsets }
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }

    /// Byte offset of a line/character position. The character column is
    /// clamped to the line end, matching how editors treat positions past
    /// the last character.
    pub fn get_offset(&self, line: usize, character: usize) -> Option<usize> {
        let line_start = *self.line_offsets.get(line)?;

        let mut offset = line_start;
        let mut remaining = character;
        for c in self.text[line_start..].chars() {
            if remaining == 0 || c == '\n' || c == '\r' {
                break;
            }
            offset += c.len_utf8();
            remaining -= 1;
        }

        Some(offset)
    }

    /// The identifier word touching `offset`, together with its start
    /// offset. A cursor sitting directly after a word still counts as
    /// touching it.
    pub fn word_at(&self, offset: usize) -> Option<(usize, &str)> {
        if offset > self.text.len() || !self.text.is_char_boundary(offset) {
            return None;
        }

        let start = self.text[..offset]
            .char_indices()
            .rev()
            .take_while(|(_, c)| is_word_char(*c))
            .last()
            .map(|(i, _)| i)
            .unwrap_or(offset);

        let end = offset
            + self.text[offset..]
                .char_indices()
                .take_while(|(_, c)| is_word_char(*c))
                .last()
                .map(|(i, c)| i + c.len_utf8())
                .unwrap_or(0);

        if start == end {
            return None;
        }

        Some((start, &self.text[start..end]))
    }

    /// The identifier word preceding the one at `offset`, on the same line.
    /// `None` when the word at the cursor starts the line.
    pub fn word_before(&self, offset: usize) -> Option<&str> {
        let (start, _) = self.word_at(offset)?;
        if start == 0 {
            return None;
        }

        let mut preceding_end = None;
        for (i, c) in self.text[..start].char_indices().rev() {
            if c == '\n' || c == '\r' {
                break;
            }
            if is_word_char(c) {
                preceding_end = Some(i + c.len_utf8());
                break;
            }
        }

        self.word_at(preceding_end?).map(|(_, word)| word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_offset() {
        let doc = Document::new("first line\nsecond".to_string());
        assert_eq!(doc.get_offset(0, 0), Some(0));
        assert_eq!(doc.get_offset(0, 5), Some(5));
        assert_eq!(doc.get_offset(1, 0), Some(11));
        assert_eq!(doc.get_offset(1, 6), Some(17));
        // Past the line end clamps instead of failing.
        assert_eq!(doc.get_offset(0, 99), Some(10));
        assert_eq!(doc.get_offset(5, 0), None);
    }

    #[test]
    fn test_word_at_cursor_end() {
        let doc = Document::new("CSTRING(banana)".to_string());
        // Cursor right after `banana`.
        let (start, word) = doc.word_at(14).unwrap();
        assert_eq!(word, "banana");
        assert_eq!(start, 8);
    }

    #[test]
    fn test_word_at_cursor_inside() {
        let doc = Document::new("CSTRING(banana)".to_string());
        let (_, word) = doc.word_at(10).unwrap();
        assert_eq!(word, "banana");
    }

    #[test]
    fn test_word_at_non_word() {
        let doc = Document::new("a (b".to_string());
        assert_eq!(doc.word_at(2), None);
    }

    #[test]
    fn test_word_before() {
        let doc = Document::new("CSTRING(banana)".to_string());
        assert_eq!(doc.word_before(14), Some("CSTRING"));

        let doc = Document::new("display setText LSTRING(caption)".to_string());
        let offset = doc.get_offset(0, 31).unwrap();
        assert_eq!(doc.word_before(offset), Some("LSTRING"));
    }

    #[test]
    fn test_word_before_at_line_start() {
        let doc = Document::new("banana".to_string());
        assert_eq!(doc.word_before(6), None);

        let doc = Document::new("CSTRING(\nbanana".to_string());
        assert_eq!(doc.word_before(15), None);
    }
}
