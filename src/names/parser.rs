//! Classification of raw text into name records.
//!
//! Two surface forms are recognized:
//! - a Japanese name followed by its parenthesized reading, e.g.
//!   `天海 春香（あまみ はるか）`
//! - a bare katakana token, taken as a foreign name, e.g. `ロゼ`
//!
//! Anything else is not a name.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::kana::kata_to_hira;
use super::record::NameRecord;

/// Raw text matched neither name pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a name: {0:?}")]
pub struct NotAName(pub String);

const STRUCTURED_PATTERN: &str = concat!(
    r"(?P<last>[\p{sc=Hiragana}\p{scx=Katakana}\p{sc=Han}]+)",
    r"\s?",
    r"(?P<first>[\p{sc=Hiragana}\p{scx=Katakana}\p{sc=Han}]+)",
    r"（",
    r"(?P<kana_last>[\p{sc=Hiragana}\p{scx=Katakana}\w]+)",
    r"\s?",
    r"(?P<kana_first>[\p{sc=Hiragana}\p{scx=Katakana}\w]*)",
);

const FOREIGN_PATTERN: &str = r"^\p{scx=Katakana}+$";

const ALL_KANA_PATTERN: &str = r"^[\p{sc=Hiragana}\p{sc=Katakana}]+$";

static SHARED: LazyLock<NameParser> = LazyLock::new(NameParser::new);

/// Precompiled name patterns.
pub struct NameParser {
    structured: Regex,
    foreign: Regex,
    all_kana: Regex,
}

impl Default for NameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NameParser {
    pub fn new() -> Self {
        // Patterns are constants; a compile failure is a programming error.
        Self {
            structured: Regex::new(STRUCTURED_PATTERN).unwrap(),
            foreign: Regex::new(FOREIGN_PATTERN).unwrap(),
            all_kana: Regex::new(ALL_KANA_PATTERN).unwrap(),
        }
    }

    /// Process-wide parser, compiled on first use.
    pub fn shared() -> &'static NameParser {
        &SHARED
    }

    /// Classify `text` as a structured Japanese name or a foreign name.
    pub fn classify(&self, text: &str) -> Result<NameRecord, NotAName> {
        if let Some(caps) = self.structured.captures(text) {
            let group = |name: &str| caps.name(name).map(|m| m.as_str()).unwrap_or("");
            return Ok(NameRecord::from_fields(
                group("last"),
                group("first"),
                kata_to_hira(group("kana_last")),
                kata_to_hira(group("kana_first")),
                false,
            ));
        }

        if self.foreign.is_match(text) {
            return Ok(NameRecord::from_fields(
                text,
                "",
                kata_to_hira(text),
                "",
                true,
            ));
        }

        Err(NotAName(text.to_string()))
    }

    /// Cheap pre-test; true exactly when [`classify`](Self::classify) succeeds.
    pub fn is_name(&self, text: &str) -> bool {
        self.structured.is_match(text) || self.foreign.is_match(text)
    }

    /// True when `text` is non-empty and consists only of kana letters.
    pub fn is_all_kana(&self, text: &str) -> bool {
        self.all_kana.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> &'static NameParser {
        NameParser::shared()
    }

    #[test]
    fn test_structured_name() {
        let record = parser().classify("天海 春香（あまみ　はるか）").unwrap();
        assert_eq!(
            record,
            NameRecord::from_fields("天海", "春香", "あまみ", "はるか", false)
        );
        assert_eq!(
            format!("{}\t{}\t人名", record.kana(), record.orthography()),
            "あまみはるか\t天海春香\t人名"
        );
    }

    #[test]
    fn test_structured_katakana_reading_is_normalized() {
        let record = parser().classify("島村 卯月（シマムラ ウヅキ）").unwrap();
        assert_eq!(record.kana_last(), "しまむら");
        assert_eq!(record.kana_first(), "うづき");
        assert!(!record.is_foreign());
    }

    #[test]
    fn test_structured_trailing_text_ignored() {
        let record = parser()
            .classify("如月 千早（きさらぎ ちはや） CV: 今井麻美")
            .unwrap();
        assert_eq!(record.first(), "千早");
        assert_eq!(record.kana_first(), "ちはや");
    }

    #[test]
    fn test_structured_without_reading_separator() {
        let record = parser().classify("高槻 やよい（たかつきやよい）").unwrap();
        assert_eq!(record.kana_last(), "たかつきやよい");
        assert_eq!(record.kana_first(), "");
    }

    #[test]
    fn test_structured_without_name_separator_is_greedy() {
        let record = parser().classify("天海春香（あまみ はるか）").unwrap();
        assert_eq!(record.last(), "天海春");
        assert_eq!(record.first(), "香");
        assert_eq!(record.orthography(), "天海春香");
    }

    #[test]
    fn test_foreign_name() {
        let record = parser().classify("ロゼ").unwrap();
        assert_eq!(record, NameRecord::from_fields("ロゼ", "", "ろぜ", "", true));
    }

    #[test]
    fn test_foreign_name_with_prolonged_sound_mark() {
        let record = parser().classify("ルーシー").unwrap();
        assert!(record.is_foreign());
        assert_eq!(record.kana_last(), "るーしー");
    }

    #[test]
    fn test_not_a_name() {
        assert_eq!(
            parser().classify("あいうえお"),
            Err(NotAName("あいうえお".to_string()))
        );
        assert!(parser().classify("").is_err());
        assert!(parser().classify("登場人物").is_err());
        assert!(parser().classify("Project Fairy").is_err());
    }

    #[test]
    fn test_is_name_agrees_with_classify() {
        let samples = [
            "天海 春香（あまみ　はるか）",
            "天海春香（あまみ はるか）",
            "ロゼ",
            "ルーシー",
            "あいうえお",
            "",
            "概要",
            "765プロダクション",
            "春香（",
            "春（はる",
            "ジュリア（じゅりあ）",
            "CV: 星井 美希（ほしい みき）",
            "ｶﾀｶﾅ",
        ];
        for text in samples {
            assert_eq!(
                parser().is_name(text),
                parser().classify(text).is_ok(),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn test_reconstructed_surface_form_round_trips() {
        for text in [
            "天海 春香（あまみ　はるか）",
            "双海 亜美（ふたみ あみ）",
            "島村 卯月（シマムラ ウヅキ）",
        ] {
            let record = parser().classify(text).unwrap();
            let surface = format!(
                "{} {}（{} {}",
                record.last(),
                record.first(),
                record.kana_last(),
                record.kana_first()
            );
            assert_eq!(parser().classify(&surface).unwrap(), record);
        }
    }

    #[test]
    fn test_is_all_kana() {
        assert!(parser().is_all_kana("はるか"));
        assert!(parser().is_all_kana("ジュリア"));
        assert!(!parser().is_all_kana("春香"));
        assert!(!parser().is_all_kana(""));
    }
}
