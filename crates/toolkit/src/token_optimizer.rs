//! Prompt compaction and token estimation.
//!
//! Provides a naive prompt shortener (whitespace collapse plus filler phrase
//! removal) and a character-based token estimate that weights CJK
//! ideographs more heavily than other characters.
//!
//! Neither operation uses a real tokenizer; both are heuristics.

use serde::{Deserialize, Serialize};

/// Estimated tokens per CJK ideograph.
const CJK_TOKENS_PER_CHAR: f64 = 1.5;

/// Estimated tokens per non-CJK character.
const OTHER_TOKENS_PER_CHAR: f64 = 0.3;

/// Filler phrases removed by [`TokenOptimizer::optimize_prompt`], in
/// removal order ("please help me", "can you", "I need").
pub const FILLER_PHRASES: [&str; 3] = ["请帮助我", "你能", "我需要"];

/// Usage counters for the token optimizer.
///
/// No operation increments these; they are reported as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    /// Total input tokens
    pub total_input_tokens: u64,
    /// Total output tokens
    pub total_output_tokens: u64,
    /// Total calls
    pub total_calls: u64,
}

/// Prompt compactor and token estimator.
///
/// # Examples
///
/// ```
/// use agent_toolkit::token_optimizer::TokenOptimizer;
///
/// let optimizer = TokenOptimizer::new();
/// assert_eq!(optimizer.optimize_prompt("  hello \n\t world  "), "hello world");
/// assert_eq!(optimizer.estimate_tokens("你好"), 3);
/// assert_eq!(optimizer.estimate_tokens("abcd"), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenOptimizer {
    usage_stats: UsageStats,
}

impl TokenOptimizer {
    /// Creates an optimizer with zeroed usage counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the usage counters.
    #[must_use]
    pub const fn usage_stats(&self) -> UsageStats {
        self.usage_stats
    }

    /// Shortens a prompt.
    ///
    /// Collapses every whitespace run to a single space (trimming both
    /// ends), then deletes each of [`FILLER_PHRASES`] wherever it occurs.
    /// Deletion is plain substring replacement, so a phrase embedded in a
    /// longer word is removed too.
    #[must_use]
    pub fn optimize_prompt(&self, prompt: &str) -> String {
        FILLER_PHRASES
            .iter()
            .fold(collapse_whitespace(prompt), |text, phrase| {
                text.replace(phrase, "")
            })
    }

    /// Estimates the token count of `text`.
    ///
    /// Each code point in U+4E00..=U+9FFF counts 1.5, every other code
    /// point counts 0.3, and the sum is truncated toward zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)] // the estimate is never negative
    #[allow(clippy::suboptimal_flops)] // fused multiply-add would change rounding
    pub fn estimate_tokens(&self, text: &str) -> usize {
        let total = text.chars().count();
        let cjk = text.chars().filter(|c| is_cjk_ideograph(*c)).count();
        let other = total - cjk;

        let estimated = cjk as f64 * CJK_TOKENS_PER_CHAR + other as f64 * OTHER_TOKENS_PER_CHAR;
        estimated as usize
    }
}

/// Collapses whitespace runs to single spaces and trims both ends.
///
/// Idempotent: collapsing an already collapsed string returns it unchanged.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

const fn is_cjk_ideograph(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Prompt Optimization Tests
    // ========================================================================

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a  b\t\tc\n"), "a b c");
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_collapse_whitespace_is_idempotent() {
        for text in ["", "a", "  a  b  ", "x\n\ny\tz", "已经 很 短"] {
            let once = collapse_whitespace(text);
            assert_eq!(collapse_whitespace(&once), once);
        }
    }

    #[test]
    fn test_optimize_removes_filler_phrases() {
        let optimizer = TokenOptimizer::new();
        let prompt = "请帮助我理解这个复杂的代码，你能给我一些详细的解释吗？";
        assert_eq!(
            optimizer.optimize_prompt(prompt),
            "理解这个复杂的代码，给我一些详细的解释吗？"
        );
    }

    #[test]
    fn test_optimize_removes_inside_longer_text() {
        let optimizer = TokenOptimizer::new();
        assert_eq!(optimizer.optimize_prompt("他说我需要的是你能力"), "他说的是力");
    }

    #[test]
    fn test_optimize_collapses_before_deleting() {
        let optimizer = TokenOptimizer::new();
        // The whitespace inside the phrase is collapsed but not removed, so
        // the phrase does not match.
        assert_eq!(optimizer.optimize_prompt("你  能 help"), "你 能 help");
        assert_eq!(optimizer.optimize_prompt("  你能  help  "), " help");
    }

    #[test]
    fn test_optimize_plain_english_unchanged() {
        let optimizer = TokenOptimizer::new();
        assert_eq!(
            optimizer.optimize_prompt("explain this code"),
            "explain this code"
        );
    }

    // ========================================================================
    // Token Estimation Tests
    // ========================================================================

    #[test]
    fn test_estimate_empty() {
        assert_eq!(TokenOptimizer::new().estimate_tokens(""), 0);
    }

    #[test]
    fn test_estimate_cjk() {
        assert_eq!(TokenOptimizer::new().estimate_tokens("你好"), 3);
        assert_eq!(TokenOptimizer::new().estimate_tokens("你"), 1);
    }

    #[test]
    fn test_estimate_other_chars_truncates() {
        let optimizer = TokenOptimizer::new();
        assert_eq!(optimizer.estimate_tokens("abcd"), 1);
        assert_eq!(optimizer.estimate_tokens("abc"), 0);
        assert_eq!(optimizer.estimate_tokens("abcdefghij"), 3);
    }

    #[test]
    fn test_estimate_mixed() {
        // 2 * 1.5 + 6 * 0.3 = 4.8
        assert_eq!(TokenOptimizer::new().estimate_tokens("你好 world"), 4);
    }

    #[test]
    fn test_estimate_counts_code_points_not_bytes() {
        // Full-width punctuation and emoji are outside the ideograph range
        assert_eq!(TokenOptimizer::new().estimate_tokens("？？？？"), 1);
        assert_eq!(TokenOptimizer::new().estimate_tokens("🚀🚀🚀🚀"), 1);
    }

    #[test]
    fn test_ideograph_range_bounds() {
        assert!(is_cjk_ideograph('\u{4e00}'));
        assert!(is_cjk_ideograph('\u{9fff}'));
        assert!(!is_cjk_ideograph('\u{4dff}'));
        assert!(!is_cjk_ideograph('\u{a000}'));
    }

    #[test]
    fn test_usage_stats_start_at_zero() {
        let optimizer = TokenOptimizer::new();
        let _ = optimizer.estimate_tokens("some text");
        assert_eq!(optimizer.usage_stats(), UsageStats::default());
    }
}
