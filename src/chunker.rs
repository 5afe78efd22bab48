/// Nominal chunk size used for document ingestion.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Approximate characters per token; scales `chunk_size` into a byte budget.
const CHARS_PER_TOKEN: usize = 4;

/// Splits extracted text into chunks of roughly `chunk_size * 4` characters.
///
/// Lines are the unit of accumulation: blank lines are dropped, the rest are
/// trimmed and joined with single spaces until the budget is reached. A line
/// longer than the whole budget still becomes a chunk of its own, so the
/// bound is a heuristic rather than a guarantee.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<String> {
    let budget = chunk_size * CHARS_PER_TOKEN;
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let sentence = line.trim();
        if sentence.is_empty() {
            continue;
        }

        if current.len() + sentence.len() >= budget && !current.is_empty() {
            chunks.push(current.trim_end().to_string());
            current.clear();
        }
        current.push_str(sentence);
        current.push(' ');
    }

    if !current.is_empty() {
        chunks.push(current.trim_end().to_string());
    }

    chunks
}
