use unicode_segmentation::UnicodeSegmentation;

/// Rough token estimate used for the chunk budget: 1.3 tokens per
/// whitespace-separated word.
const TOKENS_PER_WORD: f64 = 1.3;

pub fn estimate_tokens(text: &str) -> usize {
    tokens_for_words(text.split_whitespace().count())
}

fn tokens_for_words(words: usize) -> usize {
    (words as f64 * TOKENS_PER_WORD) as usize
}

pub struct SegmenterConfig {
    pub chunk_tokens: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self { chunk_tokens: 100 }
    }
}

/// Splits an article body into chunks of at most `chunk_tokens`, with no
/// overlap. Boundaries align to sentence boundaries whenever the sentence
/// fits the budget; a single oversized sentence falls back to word
/// boundaries instead of being dropped.
pub struct Segmenter {
    config: SegmenterConfig,
}

impl Segmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut buffer = String::new();
        let mut buffer_words = 0usize;

        for sentence in text.split_sentence_bounds() {
            let sentence_words = sentence.split_whitespace().count();
            if sentence_words == 0 {
                buffer.push_str(sentence);
                continue;
            }

            if buffer_words > 0
                && tokens_for_words(buffer_words + sentence_words) > self.config.chunk_tokens
            {
                chunks.push(buffer.trim().to_string());
                buffer.clear();
                buffer_words = 0;
            }

            if tokens_for_words(sentence_words) > self.config.chunk_tokens {
                chunks.extend(self.split_words(sentence));
                continue;
            }

            buffer.push_str(sentence);
            buffer_words += sentence_words;
        }

        if buffer_words > 0 {
            chunks.push(buffer.trim().to_string());
        }

        chunks
    }

    fn split_words(&self, sentence: &str) -> Vec<String> {
        let max_words = ((self.config.chunk_tokens as f64 / TOKENS_PER_WORD) as usize).max(1);
        let words: Vec<&str> = sentence.split_whitespace().collect();
        words.chunks(max_words).map(|w| w.join(" ")).collect()
    }
}
