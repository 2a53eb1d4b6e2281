//! Substring filtering with match positions for highlighting.
//!
//! Matching is plain substring containment, case-insensitive unless the
//! filter is made case-sensitive. An empty query matches everything.

use std::ops::Range;

use log::debug;

use crate::item::FilterItem;

/// One item that survived the last [`Filter::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the slice passed to `apply`.
    pub index: usize,
    /// Byte offsets of every occurrence of the query in the item's
    /// highlight text. Empty unless the item implements
    /// [`MatchPositions`](crate::MatchPositions).
    pub positions: Vec<usize>,
}

/// Query state plus the matches of the last apply.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    query: String,
    case_sensitive: bool,
    matches: Vec<FilterMatch>,
}

impl Filter {
    /// Create an inactive, case-insensitive filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set case sensitivity (builder form).
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the query (builder form).
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// A filter is active whenever its query is non-empty.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    /// Replace the query. Callers re-apply against their own source.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Back to the inactive, empty-query state.
    pub fn clear(&mut self) {
        self.query.clear();
        self.matches.clear();
    }

    // -------------------------------------------------------------------------
    // Applying
    // -------------------------------------------------------------------------

    /// Return the items whose filter value contains the query, in source order.
    ///
    /// An inactive filter returns every item. The source is never modified.
    pub fn apply<T: FilterItem>(&mut self, items: &[T]) -> Vec<T> {
        self.matches.clear();
        if !self.is_active() {
            return items.to_vec();
        }

        let mut filtered = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let value = item.filter_value();
            let ranges = find_ranges(&value, &self.query, self.case_sensitive);
            if ranges.is_empty() {
                continue;
            }
            let positions = item
                .as_match_positions()
                .map(|reporter| {
                    find_ranges(&reporter.highlight_text(), &self.query, self.case_sensitive)
                        .into_iter()
                        .map(|r| r.start)
                        .collect()
                })
                .unwrap_or_default();
            self.matches.push(FilterMatch { index, positions });
            filtered.push(item.clone());
        }

        debug!(
            "Filter {:?} matched {}/{} items",
            self.query,
            filtered.len(),
            items.len()
        );
        filtered
    }

    /// Matches recorded by the last apply, ordered by source index.
    pub fn matches(&self) -> &[FilterMatch] {
        &self.matches
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Check if the source item at `index` matched in the last apply.
    pub fn is_match(&self, index: usize) -> bool {
        self.find_match(index).is_some()
    }

    /// Match offsets recorded for the source item at `index`.
    pub fn match_positions(&self, index: usize) -> Option<&[usize]> {
        self.find_match(index).map(|m| m.positions.as_slice())
    }

    fn find_match(&self, index: usize) -> Option<&FilterMatch> {
        self.matches
            .binary_search_by_key(&index, |m| m.index)
            .ok()
            .map(|i| &self.matches[i])
    }

    // -------------------------------------------------------------------------
    // Text queries
    // -------------------------------------------------------------------------

    /// Check if `text` matches. Always true while the filter is inactive.
    pub fn has_match_in(&self, text: &str) -> bool {
        if !self.is_active() {
            return true;
        }
        if self.case_sensitive {
            text.contains(self.query.as_str())
        } else {
            fold_case(text).contains(&fold_case(&self.query))
        }
    }

    /// Byte ranges of every occurrence of the query in `text`.
    pub fn ranges_in(&self, text: &str) -> Vec<Range<usize>> {
        if !self.is_active() {
            return Vec::new();
        }
        find_ranges(text, &self.query, self.case_sensitive)
    }

    /// Wrap every occurrence of the query in `text` with `before` and `after`.
    ///
    /// # Example
    ///
    /// ```
    /// use listview::Filter;
    ///
    /// let filter = Filter::new().with_query("an");
    /// assert_eq!(filter.highlight("Banana", "[", "]"), "B[an][an]a");
    /// ```
    pub fn highlight(&self, text: &str, before: &str, after: &str) -> String {
        if !self.is_active() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for range in self.ranges_in(text) {
            if range.start < last {
                continue;
            }
            out.push_str(&text[last..range.start]);
            out.push_str(before);
            out.push_str(&text[range.clone()]);
            out.push_str(after);
            last = range.end;
        }
        out.push_str(&text[last..]);
        out
    }
}

/// Lower-case one char at a time, the same way `find_ranges` lowers the
/// haystack. `str::to_lowercase` maps a final 'Σ' to 'ς', which would never
/// match the per-char 'σ'.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Find non-overlapping occurrences of `needle` in `haystack`.
///
/// Ranges are byte ranges into `haystack` on char boundaries, also when
/// lower-casing changes the byte length of a character.
fn find_ranges(haystack: &str, needle: &str, case_sensitive: bool) -> Vec<Range<usize>> {
    if needle.is_empty() {
        return Vec::new();
    }
    if case_sensitive {
        return haystack
            .match_indices(needle)
            .map(|(start, m)| start..start + m.len())
            .collect();
    }

    let needle = fold_case(needle);
    let mut lowered = String::with_capacity(haystack.len());
    // Byte offset in `haystack` of the char each lowered byte came from.
    let mut origin = Vec::with_capacity(haystack.len());
    for (i, c) in haystack.char_indices() {
        lowered.extend(c.to_lowercase());
        origin.resize(lowered.len(), i);
    }

    lowered
        .match_indices(needle.as_str())
        .map(|(start, m)| {
            let last = origin[start + m.len() - 1];
            let last_len = haystack[last..].chars().next().map_or(0, char::len_utf8);
            origin[start]..last + last_len
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ranges_case_sensitive() {
        assert_eq!(find_ranges("abcabc", "bc", true), vec![1..3, 4..6]);
        assert!(find_ranges("ABC", "bc", true).is_empty());
    }

    #[test]
    fn test_find_ranges_case_insensitive() {
        assert_eq!(find_ranges("Red RED red", "red", false), vec![0..3, 4..7, 8..11]);
    }

    #[test]
    fn test_find_ranges_non_overlapping() {
        assert_eq!(find_ranges("aaaa", "aa", false), vec![0..2, 2..4]);
    }

    #[test]
    fn test_find_ranges_maps_back_to_original_bytes() {
        // 'Ä' and 'ä' are both two bytes; offsets must point into the original.
        let text = "xÄy";
        let ranges = find_ranges(text, "äy", false);
        assert_eq!(ranges, vec![1..4]);
        assert_eq!(&text[ranges[0].clone()], "Äy");
    }

    #[test]
    fn test_find_ranges_final_sigma() {
        assert_eq!(find_ranges("ΟΔΟΣ", "ΟΔΟΣ", false), vec![0.."ΟΔΟΣ".len()]);
        assert_eq!(find_ranges("ΔΡΟΜΟΣ", "μοΣ", false).len(), 1);
    }

    #[test]
    fn test_find_ranges_empty_needle() {
        assert!(find_ranges("anything", "", false).is_empty());
    }
}
