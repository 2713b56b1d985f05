//! Word wrapping for cell text and captions.

use crate::width::{display_width, segments};

/// Word-wraps text into lines no wider than `limit` display columns.
///
/// Lines are filled greedily: a word joins the current line when the line,
/// a single space and the word fit within `limit`. Any run of visible
/// whitespace (including newlines) counts as one word boundary; whitespace
/// inside an escape sequence belongs to the sequence.
///
/// A word wider than `limit` is hard-broken into `limit`-wide chunks; the
/// last chunk stays open so following words can join it. Escape sequences are
/// never split and take no width. A `limit` of 0 is treated as 1.
///
/// Empty or all-whitespace input produces a single empty line.
///
/// # Example
///
/// ```rust
/// use gridwriter::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
/// assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
/// assert_eq!(wrap("", 5), vec![""]);
/// ```
pub fn wrap(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut lines = Vec::new();
    let mut current: Option<(String, usize)> = None;

    for word in words(text) {
        let word_width = display_width(word);

        if word_width > limit {
            lines.extend(current.take().map(|(line, _)| line));
            let mut chunks = hard_break(word, limit);
            current = chunks.pop();
            lines.extend(chunks.into_iter().map(|(chunk, _)| chunk));
            continue;
        }

        current = Some(match current.take() {
            None => (word.to_string(), word_width),
            Some((mut line, width)) if width + 1 + word_width <= limit => {
                line.push(' ');
                line.push_str(word);
                (line, width + 1 + word_width)
            }
            Some((line, _)) => {
                lines.push(line);
                (word.to_string(), word_width)
            }
        });
    }

    lines.extend(current.map(|(line, _)| line));
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Splits text into words at visible whitespace, keeping escape sequences whole.
fn words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = None;
    let mut offset = 0;

    for seg in segments(text) {
        let blank = !seg.escape && seg.text.chars().all(char::is_whitespace);
        match (blank, start) {
            (true, Some(from)) => {
                words.push(&text[from..offset]);
                start = None;
            }
            (false, None) => start = Some(offset),
            _ => {}
        }
        offset += seg.text.len();
    }

    words.extend(start.map(|from| &text[from..]));
    words
}

/// Splits a single word into chunks of at most `limit` columns.
///
/// Each chunk holds at least one visible character, so a double-width
/// character under a limit of 1 still makes progress.
fn hard_break(word: &str, limit: usize) -> Vec<(String, usize)> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut width = 0;

    for seg in segments(word) {
        if width > 0 && width + seg.width > limit {
            chunks.push((std::mem::take(&mut chunk), width));
            width = 0;
        }
        chunk.push_str(seg.text);
        width += seg.width;
    }
    chunks.push((chunk, width));
    chunks
}

/// Splits text on explicit line breaks only, without any reflow.
///
/// Used when automatic wrapping is disabled. A trailing `\r` on each line is
/// dropped so CRLF input renders cleanly.
///
/// ```rust
/// use gridwriter::split_lines;
///
/// assert_eq!(split_lines("a\r\nb c"), vec!["a", "b c"]);
/// assert_eq!(split_lines(""), vec![""]);
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
