//! Lexicon-based sentiment scoring for article snippets.
//!
//! Polarity is VADER's compound score, a float in [-1, 1]. Labeling uses
//! fixed thresholds: strictly above [`POSITIVE_THRESHOLD`] is Positive,
//! strictly below [`NEGATIVE_THRESHOLD`] is Negative, everything else
//! (both boundaries included) is Neutral.

use serde::Serialize;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::news::Article;

/// Polarity strictly above this is labeled Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Polarity strictly below this is labeled Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Sentiment bucket for an article snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// The deterministic polarity-to-label mapping.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The dashboard's sentiment filter control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SentimentFilter {
    #[default]
    All,
    Positive,
    Negative,
}

impl SentimentFilter {
    /// Whether an article with `label` survives this filter. Neutral
    /// articles survive only under `All`.
    pub fn keeps(self, label: SentimentLabel) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Positive => label == SentimentLabel::Positive,
            SentimentFilter::Negative => label == SentimentLabel::Negative,
        }
    }

    /// Retain the surviving articles, preserving order.
    pub fn apply(self, articles: Vec<ScoredArticle>) -> Vec<ScoredArticle> {
        articles
            .into_iter()
            .filter(|a| self.keeps(a.label))
            .collect()
    }
}

/// An [`Article`] with its polarity score and label. Derived on every fetch,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredArticle {
    pub article: Article,
    pub polarity: f64,
    pub label: SentimentLabel,
}

/// Polarity scorer over a general-purpose sentiment lexicon.
pub struct Classifier {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Compound polarity of `text`, clamped to [-1, 1].
    pub fn polarity(&self, text: &str) -> f64 {
        let scores = self.analyzer.polarity_scores(text);
        scores.get("compound").copied().unwrap_or(0.0).clamp(-1.0, 1.0)
    }

    /// Score and label each article on its description.
    ///
    /// Articles with no description, or a whitespace-only one, carry no
    /// sentiment-bearing text and are excluded entirely rather than scored
    /// Neutral. Fetch order is preserved.
    pub fn annotate(&self, articles: Vec<Article>) -> Vec<ScoredArticle> {
        articles
            .into_iter()
            .filter_map(|article| {
                let desc = article.description.as_deref()?.trim();
                if desc.is_empty() {
                    return None;
                }
                let polarity = self.polarity(desc);
                Some(ScoredArticle {
                    polarity,
                    label: SentimentLabel::from_polarity(polarity),
                    article,
                })
            })
            .collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
