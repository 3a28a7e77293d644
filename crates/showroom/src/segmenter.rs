//! Heading text segmentation for per-word reveals.

/// Ordered word-level pieces of one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitText {
    pub words: Vec<String>,
}

impl SplitText {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Splits a heading into words. Returns `None` when segmentation is not
/// possible; callers skip the text animation for that heading.
pub trait TextSegmenter: Send + Sync {
    fn name(&self) -> &'static str;

    fn split(&self, text: &str) -> Option<SplitText>;
}

/// Splits on Unicode whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordSegmenter;

impl TextSegmenter for WordSegmenter {
    fn name(&self) -> &'static str {
        "words"
    }

    fn split(&self, text: &str) -> Option<SplitText> {
        let words: Vec<String> = text.split_whitespace().map(str::to_owned).collect();
        if words.is_empty() {
            return None;
        }
        Some(SplitText { words })
    }
}

/// Stand-in used when segmentation is unavailable: never splits.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSegmenter;

impl TextSegmenter for NoSegmenter {
    fn name(&self) -> &'static str {
        "none"
    }

    fn split(&self, _text: &str) -> Option<SplitText> {
        None
    }
}
