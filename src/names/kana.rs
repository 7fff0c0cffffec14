//! Katakana to hiragana normalization.

/// Distance between a katakana codepoint and its hiragana counterpart.
const KATA_HIRA_OFFSET: u32 = 0x60;

/// Whether `ch` is a katakana letter inside the main Katakana block
/// (U+30A1..=U+30FA and the iteration marks U+30FD..=U+30FF).
///
/// The prolonged sound mark and the middle dot are shared punctuation, not
/// katakana letters, and half-width forms live in a different block.
pub fn is_katakana_letter(ch: char) -> bool {
    matches!(ch, '\u{30A1}'..='\u{30FA}' | '\u{30FD}'..='\u{30FF}')
}

/// Shift every katakana letter down to its hiragana counterpart.
/// All other characters are copied unchanged.
pub fn kata_to_hira(text: &str) -> String {
    text.chars()
        .map(|ch| {
            if is_katakana_letter(ch) {
                char::from_u32(ch as u32 - KATA_HIRA_OFFSET).unwrap_or(ch)
            } else {
                ch
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kata_to_hira_basic() {
        assert_eq!(kata_to_hira("アマミ"), "あまみ");
        assert_eq!(kata_to_hira("ロゼ"), "ろぜ");
        assert_eq!(kata_to_hira("ヴァ"), "ゔぁ");
        assert_eq!(kata_to_hira("ヽヾ"), "ゝゞ");
    }

    #[test]
    fn test_kata_to_hira_passes_through_other_scripts() {
        assert_eq!(kata_to_hira("天海 haruka 123"), "天海 haruka 123");
        assert_eq!(kata_to_hira("ルー・ガルー"), "るー・がるー");
        // half-width forms are outside the block
        assert_eq!(kata_to_hira("ｱｲｳ"), "ｱｲｳ");
    }

    #[test]
    fn test_kata_to_hira_idempotent() {
        for text in ["あまみはるか", "アマミ ハルカ", "ジュリア", "ヷヸ", "ｶﾀｶﾅ", "天海春香"] {
            let once = kata_to_hira(text);
            assert_eq!(kata_to_hira(&once), once, "{}", text);
        }
        assert_eq!(kata_to_hira("あまみはるか"), "あまみはるか");
    }

    #[test]
    fn test_no_katakana_letters_remain() {
        let out = kata_to_hira("ァアィイゥウヴヵヶヷヸヹヺヽヾヿ");
        assert!(!out.chars().any(is_katakana_letter), "{}", out);
    }
}
