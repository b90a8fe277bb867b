//! Case-insensitive, non-overlapping substring matching.
//!
//! Lowercasing can change the byte length of a character (`'İ'` folds to two
//! chars), so offsets found in the folded text are mapped back onto character
//! boundaries of the original text before they are reported.
//!
//! Folding is per character, and the final sigma `'ς'` folds to `'σ'` so a
//! query folds the same way whether or not its last letter ends a word.

/// Location of one match in the original text, as byte offsets `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    /// Byte offset of the first matched character
    pub start: usize,
    /// Byte offset one past the last matched character
    pub end: usize,
}

impl MatchSpan {
    /// Length of the match in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched slice of `text`, in its original casing.
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Push the case fold of `ch` onto `out`.
fn push_folded(out: &mut String, ch: char) {
    for lower in ch.to_lowercase() {
        out.push(if lower == 'ς' { 'σ' } else { lower });
    }
}

/// Case fold used for both queries and searched text.
pub(crate) fn fold_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        push_folded(&mut out, ch);
    }
    out
}

/// Lowercased text plus, for every original character, the offset of its
/// expansion in the lowercased string and its own offset in the original.
struct FoldedText {
    lower: String,
    bounds: Vec<(usize, usize)>,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        let mut lower = String::with_capacity(text.len());
        let mut bounds = Vec::with_capacity(text.len() + 1);
        for (idx, ch) in text.char_indices() {
            bounds.push((lower.len(), idx));
            push_folded(&mut lower, ch);
        }
        bounds.push((lower.len(), text.len()));
        Self { lower, bounds }
    }

    /// Original offset of the character whose expansion contains `pos`.
    fn floor(&self, pos: usize) -> usize {
        let i = self.bounds.partition_point(|&(l, _)| l <= pos);
        self.bounds[i.saturating_sub(1)].1
    }

    /// First character boundary at or after `pos`, as (lowered, original).
    fn ceil(&self, pos: usize) -> (usize, usize) {
        let i = self.bounds.partition_point(|&(l, _)| l < pos);
        self.bounds[i.min(self.bounds.len() - 1)]
    }
}

/// Find every case-insensitive occurrence of `query` in `text`.
///
/// Matches are reported left to right and never overlap: scanning resumes
/// right after the previous match. An empty query matches nothing.
///
/// # Example
///
/// ```
/// use numerix_site::highlight::find_matches;
///
/// let spans = find_matches("Welcome to Numerix. Numerix is great.", "numerix");
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[0].as_str("Welcome to Numerix. Numerix is great."), "Numerix");
/// ```
pub fn find_matches(text: &str, query: &str) -> Vec<MatchSpan> {
    find_folded(text, &fold_case(query))
}

/// Same as [`find_matches`] with a query already passed through [`fold_case`].
pub(crate) fn find_folded(text: &str, needle: &str) -> Vec<MatchSpan> {
    if needle.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let folded = FoldedText::new(text);
    let mut spans = Vec::new();
    let mut from = 0;

    while let Some(offset) = folded.lower[from..].find(needle) {
        let lower_start = from + offset;
        let start = folded.floor(lower_start);
        let (resume, end) = folded.ceil(lower_start + needle.len());
        spans.push(MatchSpan { start, end });
        from = resume;
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched<'a>(text: &'a str, query: &str) -> Vec<&'a str> {
        find_matches(text, query)
            .into_iter()
            .map(|s| s.as_str(text))
            .collect()
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(matched("Zurich and ZURICH", "zurich"), vec!["Zurich", "ZURICH"]);
        assert_eq!(find_matches("Zurich", "ZURICH"), find_matches("Zurich", "zurich"));
    }

    #[test]
    fn test_non_overlapping() {
        let spans = find_matches("aaa", "aa");
        assert_eq!(spans, vec![MatchSpan { start: 0, end: 2 }]);

        let spans = find_matches("aaaa", "aa");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].start, 2);
    }

    #[test]
    fn test_no_match() {
        assert!(find_matches("Beratung", "treuhand").is_empty());
        assert!(find_matches("kurz", "viel zu lange anfrage").is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(find_matches("text", "").is_empty());
        assert!(find_matches("", "text").is_empty());
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        assert_eq!(matched("Numerix GmbH", "x g"), vec!["x G"]);
        assert!(find_matches("NumerixGmbH", " gmbh").is_empty());
    }

    #[test]
    fn test_umlauts() {
        assert_eq!(matched("ZÜRICH, Zürich", "zürich"), vec!["ZÜRICH", "Zürich"]);
    }

    #[test]
    fn test_length_changing_fold_maps_to_char_boundaries() {
        // 'İ' lowercases to "i\u{307}", which is longer than the original.
        let text = "İstanbul oder Ithaka";
        let spans = find_matches(text, "i");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].as_str(text), "İ");
        assert_eq!(spans[1].as_str(text), "I");
        for span in &spans {
            assert!(text.is_char_boundary(span.start));
            assert!(text.is_char_boundary(span.end));
            assert!(!span.is_empty());
        }
    }

    #[test]
    fn test_final_sigma_folds_like_sigma() {
        assert_eq!(matched("ΟΔΟΣ", "ΟΔΟΣ"), vec!["ΟΔΟΣ"]);
        assert_eq!(matched("ΟΔΟΣ", "οδος"), vec!["ΟΔΟΣ"]);
        assert_eq!(matched("οδος", "ΟΔΟΣ"), vec!["οδος"]);
        assert_eq!(matched("ΟΔΟΣ", "σ"), vec!["Σ"]);
        assert_eq!(fold_case("Σοφός"), "σοφόσ");
    }

    #[test]
    fn test_span_len() {
        let span = MatchSpan { start: 3, end: 10 };
        assert_eq!(span.len(), 7);
        assert!(!span.is_empty());
    }
}
