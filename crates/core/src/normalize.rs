//! Text cleanup so line content can be compared across pages.
//!
//! Normalization is NFKC folding, a collapse of repeated ASCII letters
//! (an extraction artifact where glyphs are emitted twice), a collapse of
//! whitespace runs, and a trim. The repeated-letter collapse is a lossy
//! heuristic: it only fires on identical consecutive letters, so
//! "bookkeeper" survives (adjacent letters differ in case or value) while
//! a legitimate run like the "AA" in "AA battery" is damaged. Known
//! limitation, kept as-is.

use unicode_normalization::UnicodeNormalization;

/// Normalizes raw line text into its comparable form.
///
/// Idempotent: applying it twice yields the same string.
pub fn normalize(raw: &str) -> String {
    let folded: String = raw.nfkc().collect();
    collapse_whitespace(&collapse_repeated_letters(&folded))
        .trim()
        .to_string()
}

/// Collapses runs of 2+ identical ASCII letters into one occurrence.
///
/// Case-sensitive: "AA" collapses, "Aa" does not. Non-ASCII letters are
/// never touched.
fn collapse_repeated_letters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() && prev == Some(ch) {
            continue;
        }
        out.push(ch);
        prev = Some(ch);
    }
    out
}

/// Collapses runs of 2+ whitespace characters into a single space.
///
/// A lone whitespace character is preserved verbatim; only runs are
/// rewritten.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run: Option<(char, usize)> = None;
    for ch in text.chars() {
        if ch.is_whitespace() {
            run = Some(match run {
                Some((first, n)) => (first, n + 1),
                None => (ch, 1),
            });
        } else {
            flush_whitespace(&mut out, run.take());
            out.push(ch);
        }
    }
    flush_whitespace(&mut out, run);
    out
}

fn flush_whitespace(out: &mut String, run: Option<(char, usize)>) {
    match run {
        Some((_, n)) if n >= 2 => out.push(' '),
        Some((first, _)) => out.push(first),
        None => {}
    }
}
