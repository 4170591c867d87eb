//! Word-window chunking for long-document summarization.

/// Default chunk size fed to the summarization model.
pub const DEFAULT_CHUNK_WORDS: usize = 700;

/// Split text into windows of at most `max_words` whitespace-separated words.
///
/// Words are never split; whitespace runs inside a chunk are normalized to
/// single spaces. Empty input yields no chunks.
pub fn chunk_words(text: &str, max_words: usize) -> Vec<String> {
    assert!(max_words > 0, "chunk size must be positive");

    let words: Vec<&str> = text.split_whitespace().collect();
    words
        .chunks(max_words)
        .map(|chunk| chunk.join(" "))
        .collect()
}
