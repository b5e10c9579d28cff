//! Line tokenizer with trailing comments

/// Tokens of one line and the comment that followed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedLine {
    pub tokens: Vec<String>,
    /// Text from the comment marker (inclusive) to the end of the line
    pub comment: String,
}

/// Splits lines into fields, cutting off trailing comments
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiter: String,
    comment_markers: Vec<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Whitespace-separated fields with `#` comments
    pub fn new() -> Self {
        Self {
            delimiter: String::new(),
            comment_markers: vec!["#".to_string()],
        }
    }

    /// Set the field delimiter; an empty delimiter splits on whitespace runs
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the comment markers
    pub fn with_comment_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comment_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Position of the earliest comment marker in `line`
    fn comment_start(&self, line: &str) -> Option<usize> {
        self.comment_markers
            .iter()
            .filter(|m| !m.is_empty())
            .filter_map(|m| line.find(m.as_str()))
            .min()
    }

    /// Split a line into tokens and trailing comment
    pub fn tokenize(&self, line: &str) -> TokenizedLine {
        let line = line.trim();
        if line.is_empty() {
            return TokenizedLine::default();
        }

        let (data, comment) = match self.comment_start(line) {
            Some(pos) => line.split_at(pos),
            None => (line, ""),
        };

        let data = data.trim();
        let tokens = if data.is_empty() {
            Vec::new()
        } else if self.delimiter.is_empty() {
            data.split_whitespace().map(str::to_string).collect()
        } else {
            data.split(self.delimiter.as_str())
                .map(|t| t.trim().to_string())
                .collect()
        };

        TokenizedLine {
            tokens,
            comment: comment.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_comment() {
        let result = Tokenizer::new().tokenize("1 2.5  abc");
        assert_eq!(result.tokens, vec!["1", "2.5", "abc"]);
        assert_eq!(result.comment, "");
    }

    #[test]
    fn test_whitespace_with_comment() {
        let result = Tokenizer::new().tokenize("a b c #comment");
        assert_eq!(result.tokens, vec!["a", "b", "c"]);
        assert!(result.comment.contains("comment"));
        assert_eq!(result.comment, "#comment");
    }

    #[test]
    fn test_custom_delimiter_trims_tokens() {
        let line = "KJAHS KH AKJHS jjhJH. JH HJ   JHH JH #tests ";
        let result = Tokenizer::new().with_delimiter(".").tokenize(line);
        assert_eq!(result.tokens, vec!["KJAHS KH AKJHS jjhJH", "JH HJ   JHH JH"]);
        assert_eq!(result.comment, "#tests");

        let result = Tokenizer::new().tokenize(line);
        assert_eq!(
            result.tokens,
            vec!["KJAHS", "KH", "AKJHS", "jjhJH.", "JH", "HJ", "JHH", "JH"]
        );
    }

    #[test]
    fn test_earliest_marker_wins() {
        let tokenizer = Tokenizer::new().with_comment_markers(["#", "!"]);
        let result = tokenizer.tokenize("x y ! note # more");
        assert_eq!(result.tokens, vec!["x", "y"]);
        assert_eq!(result.comment, "! note # more");

        let result = tokenizer.tokenize("x # note ! more");
        assert_eq!(result.tokens, vec!["x"]);
        assert_eq!(result.comment, "# note ! more");
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(Tokenizer::new().tokenize(""), TokenizedLine::default());
        assert_eq!(Tokenizer::new().tokenize("  \t "), TokenizedLine::default());
    }

    #[test]
    fn test_comment_only_line_has_no_tokens() {
        let result = Tokenizer::new().with_delimiter(",").tokenize("  # header");
        assert!(result.tokens.is_empty());
        assert_eq!(result.comment, "# header");
    }

    #[test]
    fn test_empty_marker_is_ignored() {
        let result = Tokenizer::new().with_comment_markers([""]).tokenize("a b");
        assert_eq!(result.tokens, vec!["a", "b"]);
    }
}
