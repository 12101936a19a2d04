//! Adaptive line wrapping for terminal output.
//!
//! Text is broken at whitespace. Words that are unusually long for the
//! input (longer than mean + one standard deviation of the word lengths)
//! may be hyphenated instead of leaving a large gap at the end of a line.
//! Explicit newlines are kept, and leading indentation is repeated on the
//! continuation lines of a wrapped line.

/// Line length used when the caller does not pick one.
pub const DEFAULT_LINE_LENGTH: isize = 60;

// Hyphenation only splits inside this fraction of a word.
const MIN_SPLIT_RATIO: f64 = 0.3;
const MAX_SPLIT_RATIO: f64 = 0.7;

pub struct TextWrapper;

impl TextWrapper {
    /// Wraps `text` to [`DEFAULT_LINE_LENGTH`] columns.
    pub fn wrap_default(text: &str) -> String {
        Self::wrap(text, DEFAULT_LINE_LENGTH)
    }

    /// Wraps `text` so that lines stay within `max_line_length` characters.
    ///
    /// A non-positive `max_line_length` disables wrapping. A token that
    /// cannot be hyphenated (it starts with a digit or symbol) is kept whole
    /// even when it is wider than the line.
    pub fn wrap(text: &str, max_line_length: isize) -> String {
        if max_line_length <= 0 {
            return text.to_string();
        }
        let max = max_line_length as usize;
        let max_word_length = long_word_threshold(text, max);

        let chars: Vec<char> = text.chars().collect();
        let mut lines: Vec<String> = Vec::new();
        let mut line: Vec<char> = Vec::new();
        let mut word: Vec<char> = Vec::new();
        let mut indentation: Vec<char> = Vec::new();
        let mut indentation_determined = false;

        for (i, &ch) in chars.iter().enumerate() {
            word.push(ch);
            let is_last = i + 1 == chars.len();

            if !ch.is_whitespace() && !is_last {
                indentation_determined = true;
                continue;
            }

            if !indentation_determined {
                indentation.push(ch);
            }

            if line.len() + word.len() < max {
                line.append(&mut word);
            } else if line.len() + word.len() > max && word.len() as f64 > max_word_length {
                if let Some(middle) = split_point(&word, line.len(), max) {
                    let remaining = word.split_off(middle);
                    line.append(&mut word);
                    if !remaining.is_empty() {
                        line.push('-');
                    }
                    lines.push(line.iter().collect());
                    line = chunk_rest(&mut lines, &remaining, &indentation, max);
                } else if is_oversize(&word, max) {
                    line = split_oversize(&mut lines, line, &word, &indentation, max);
                } else {
                    lines.push(trimmed(&line));
                    line = continuation(&indentation, &word);
                }
                word.clear();
            } else {
                lines.push(trimmed(&line));
                line = continuation(&indentation, &word);
                word.clear();
            }

            if ch == '\n' {
                lines.push(trimmed(&line));
                line.clear();
                indentation.clear();
                indentation_determined = false;
            } else if line.len() >= max || is_last {
                lines.push(trimmed(&line));
                line.clear();
            }
        }

        if !line.is_empty() {
            lines.push(line.iter().collect());
        }

        lines.join("\n")
    }
}

/// `min(max_line_length, mean + stddev)` over the lengths of the
/// space-separated tokens of `text`.
fn long_word_threshold(text: &str, max_line_length: usize) -> f64 {
    let lengths: Vec<f64> = text.split(' ').map(|w| w.chars().count() as f64).collect();
    let count = lengths.len() as f64;
    let mean = lengths.iter().sum::<f64>() / count;
    let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / count;

    (max_line_length as f64).min(mean + variance.sqrt())
}

/// Position where `word` can be hyphenated so that the first part plus a
/// hyphen completes a line already holding `line_len` characters.
fn split_point(word: &[char], line_len: usize, max: usize) -> Option<usize> {
    if !starts_with_cased(word) {
        return None;
    }
    let len = word.len() as f64;
    let min_split = 2f64.max((len * MIN_SPLIT_RATIO).floor());
    let max_split = (len - 3.0).min((len * MAX_SPLIT_RATIO).ceil());
    let middle = max as f64 - line_len as f64 - 1.0;

    (middle > min_split && middle < max_split).then_some(middle as usize)
}

/// A cased word whose content alone does not fit on any line.
fn is_oversize(word: &[char], max: usize) -> bool {
    starts_with_cased(word) && content_len(word) > max
}

/// Chunks an oversize word across as many hyphenated lines as needed and
/// returns the new current line holding the part that fits.
fn split_oversize(
    lines: &mut Vec<String>,
    mut line: Vec<char>,
    word: &[char],
    indentation: &[char],
    max: usize,
) -> Vec<char> {
    let mut rest = word;

    let room = max.saturating_sub(line.len() + 1);
    if room >= 2 {
        line.extend_from_slice(&rest[..room]);
        line.push('-');
        lines.push(line.iter().collect());
        rest = &rest[room..];
    } else {
        lines.push(trimmed(&line));
    }

    chunk_rest(lines, rest, indentation, max)
}

/// Emits full hyphenated lines of `rest` until what is left fits after the
/// indentation, and returns that tail as the new current line.
fn chunk_rest(lines: &mut Vec<String>, mut rest: &[char], indentation: &[char], max: usize) -> Vec<char> {
    let chunk = max.saturating_sub(indentation.len() + 1);
    if chunk < 2 {
        return continuation(indentation, rest);
    }
    while indentation.len() + content_len(rest) > max {
        let mut piece = continuation(indentation, &rest[..chunk]);
        piece.push('-');
        lines.push(piece.iter().collect());
        rest = &rest[chunk..];
    }

    continuation(indentation, rest)
}

// Used as a cheap "natural language word" check: digits, hex strings and
// symbols have no case.
fn starts_with_cased(word: &[char]) -> bool {
    word.first()
        .is_some_and(|c| !c.to_lowercase().eq(c.to_uppercase()))
}

fn content_len(word: &[char]) -> usize {
    word.iter().rev().skip_while(|c| c.is_whitespace()).count()
}

fn continuation(indentation: &[char], text: &[char]) -> Vec<char> {
    let mut line = Vec::with_capacity(indentation.len() + text.len());
    line.extend_from_slice(indentation);
    line.extend_from_slice(text);
    line
}

fn trimmed(line: &[char]) -> String {
    line.iter().collect::<String>().trim_end().to_string()
}
