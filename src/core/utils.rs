use super::WordRecord;

/// Case-insensitive substring match. An empty query matches everything.
pub fn text_matches_search(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    text.to_lowercase().contains(&query.to_lowercase())
}

/// Records whose `word` contains `query`, in list order.
pub fn filter_words<'a>(items: &'a [WordRecord], query: &str) -> Vec<&'a WordRecord> {
    items.iter().filter(|w| text_matches_search(&w.word, query)).collect()
}
