//! Key/value parameter files

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indexmap::IndexMap;

use crate::config::DictOptions;
use crate::error::Result;

use super::source::lossy_lines;
use super::tokenize::Tokenizer;

/// Build a map of keys to values from a `key<delim>value` file
pub fn build_dict(path: &Path, options: &DictOptions) -> Result<IndexMap<String, String>> {
    let file = File::open(path)?;
    let dict = build_dict_from_reader(BufReader::new(file), options)?;
    log::info!("read {} entries from {}", dict.len(), path.display());
    Ok(dict)
}

/// Build a key/value map from any line source.
///
/// Without a start marker every line is read. With one, reading begins at
/// the line containing it and pauses after a line containing the end
/// marker, resuming at the next start line. Later keys overwrite earlier
/// ones.
pub fn build_dict_from_reader<R: BufRead>(
    reader: R,
    options: &DictOptions,
) -> Result<IndexMap<String, String>> {
    let tokenizer = Tokenizer::new()
        .with_delimiter(options.delimiter.as_str())
        .with_comment_markers(options.comment_markers.iter().cloned());

    let start = options.start_marker.as_deref().filter(|m| !m.is_empty());
    let end = options.end_marker.as_deref().filter(|m| !m.is_empty());

    let mut dict = IndexMap::new();
    let mut in_block = false;

    for (idx, line) in lossy_lines(reader).enumerate() {
        let line = line?;

        if let Some(start) = start {
            if in_block && end.is_some_and(|e| line.contains(e)) {
                log::debug!("line {}: end of block", idx + 1);
                in_block = false;
            }
            if !in_block && line.contains(start) {
                log::debug!("line {}: start of block", idx + 1);
                in_block = true;
            }
            if !in_block {
                continue;
            }
        }

        let mut tokens = tokenizer.tokenize(&line).tokens.into_iter();
        if let (Some(key), Some(value)) = (tokens.next(), tokens.next()) {
            if let Some(old) = dict.insert(key.clone(), value) {
                log::debug!("line {}: {} overrides previous value {:?}", idx + 1, key, old);
            }
        }
    }

    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn build(text: &str, options: &DictOptions) -> IndexMap<String, String> {
        build_dict_from_reader(Cursor::new(text.as_bytes()), options).unwrap()
    }

    #[test]
    fn test_last_write_wins() {
        let text = "key1 = val1\nkey2 = val2\n# comment\nkey1 = val3";
        let dict = build(text, &DictOptions::default());
        assert_eq!(dict.len(), 2);
        assert_eq!(dict["key1"], "val3");
        assert_eq!(dict["key2"], "val2");
    }

    #[test]
    fn test_trailing_comments_and_short_lines() {
        let text = "omega = 0.3 # matter\njunk line\n\nh=0.7\n";
        let dict = build(text, &DictOptions::default());
        assert_eq!(dict["omega"], "0.3");
        assert_eq!(dict["h"], "0.7");
        assert!(!dict.contains_key("junk line"));
    }

    #[test]
    fn test_blocks() {
        let text = "\
a = 1
# BEGIN
b = 2
c = 3
# END
d = 4
# BEGIN
e = 5
";
        let options = DictOptions::new().with_block("BEGIN", Some("END".to_string()));
        let dict = build(text, &options);
        let keys: Vec<&str> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "c", "e"]);
    }

    #[test]
    fn test_start_line_is_included() {
        let text = "x = 0\nstart = here\ny = 1\n";
        let options = DictOptions::new().with_block("start", None);
        let dict = build(text, &options);
        assert_eq!(dict.get("start").map(String::as_str), Some("here"));
        assert!(!dict.contains_key("x"));
        assert_eq!(dict["y"], "1");
    }

    #[test]
    fn test_end_marker_without_start_is_ignored() {
        let mut options = DictOptions::default();
        options.end_marker = Some("END".to_string());
        let dict = build("a = 1\n# END\nb = 2\n", &options);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_whitespace_delimiter() {
        let options = DictOptions::new().with_delimiter("");
        let dict = build("nsteps 500\nbox 256.0 extra\n", &options);
        assert_eq!(dict["nsteps"], "500");
        assert_eq!(dict["box"], "256.0");
    }

    #[test]
    fn test_latin1_comment_does_not_abort() {
        let data: &[u8] = b"# r\xe9glages\nomega = 0.3 # d\xe9faut\nh = 0.7\n";
        let dict = build_dict_from_reader(data, &DictOptions::default()).unwrap();
        assert_eq!(dict["omega"], "0.3");
        assert_eq!(dict["h"], "0.7");
    }
}
