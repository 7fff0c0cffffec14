//! Folding a corrected name list into dictionary lines.

use std::collections::HashSet;

use crate::names::NameRecord;

/// Part-of-speech label for full names.
pub const LABEL_FULL: &str = "人名";
/// Part-of-speech label for surnames.
pub const LABEL_LAST: &str = "姓";
/// Part-of-speech label for given names.
pub const LABEL_FIRST: &str = "名";

/// The three output blocks of one dictionary, already deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryLists {
    pub full: Vec<String>,
    pub last: Vec<String>,
    pub first: Vec<String>,
}

impl DictionaryLists {
    /// Build the three blocks from `names`, in list order.
    pub fn from_names(names: &[NameRecord]) -> Self {
        let mut full = Vec::with_capacity(names.len());
        let mut last = Vec::new();
        let mut first = Vec::new();

        for record in names {
            full.push(entry_line(&record.kana(), &record.orthography(), LABEL_FULL));

            if record.is_foreign() {
                continue;
            }
            if !record.has_only_kana_last() {
                last.push(entry_line(record.kana_last(), record.last(), LABEL_LAST));
            }
            if !record.has_only_kana_first() {
                first.push(entry_line(record.kana_first(), record.first(), LABEL_FIRST));
            }
        }

        Self {
            full: dedup_preserving_order(full),
            last: dedup_preserving_order(last),
            first: dedup_preserving_order(first),
        }
    }

    /// All lines, full names first, then surnames, then given names.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.full
            .iter()
            .chain(&self.last)
            .chain(&self.first)
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.full.len() + self.last.len() + self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `reading<TAB>orthography<TAB>label`
pub fn entry_line(reading: &str, orthography: &str, label: &str) -> String {
    format!("{}\t{}\t{}", reading, orthography, label)
}

/// Keep the first occurrence of every line, in original order.
pub fn dedup_preserving_order(mut lines: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(lines.len());
    lines.retain(|line| seen.insert(line.clone()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(text: &str) -> NameRecord {
        NameRecord::from_text(text).unwrap()
    }

    #[test]
    fn test_structured_name_lines() {
        let lists = DictionaryLists::from_names(&[rec("天海 春香（あまみ　はるか）")]);
        assert_eq!(lists.full, vec!["あまみはるか\t天海春香\t人名"]);
        assert_eq!(lists.last, vec!["あまみ\t天海\t姓"]);
        assert_eq!(lists.first, vec!["はるか\t春香\t名"]);
    }

    #[test]
    fn test_foreign_name_only_in_full_list() {
        let lists = DictionaryLists::from_names(&[rec("ロゼ")]);
        assert_eq!(lists.full, vec!["ろぜ\tロゼ\t人名"]);
        assert!(lists.last.is_empty());
        assert!(lists.first.is_empty());
    }

    #[test]
    fn test_kana_only_segments_are_skipped() {
        let lists = DictionaryLists::from_names(&[
            rec("高槻 やよい（たかつき やよい）"),
            rec("ジュリア ハル（じゅりあ はる）"),
        ]);
        assert_eq!(lists.full.len(), 2);
        assert_eq!(lists.last, vec!["たかつき\t高槻\t姓"]);
        assert!(lists.first.is_empty());
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let lists = DictionaryLists::from_names(&[
            rec("双海 亜美（ふたみ あみ）"),
            rec("天海 春香（あまみ はるか）"),
            rec("双海 真美（ふたみ まみ）"),
            rec("双海 亜美（ふたみ あみ）"),
        ]);
        assert_eq!(
            lists.full,
            vec![
                "ふたみあみ\t双海亜美\t人名",
                "あまみはるか\t天海春香\t人名",
                "ふたみまみ\t双海真美\t人名",
            ]
        );
        assert_eq!(lists.last, vec!["ふたみ\t双海\t姓", "あまみ\t天海\t姓"]);
        assert_eq!(lists.first.len(), 3);
        assert_eq!(lists.len(), 8);
    }

    #[test]
    fn test_not_a_name_never_reaches_output() {
        let names: Vec<NameRecord> = ["あいうえお", "天海 春香（あまみ はるか）"]
            .iter()
            .filter_map(|t| NameRecord::from_text(t).ok())
            .collect();
        let lists = DictionaryLists::from_names(&names);
        assert!(lists.lines().all(|l| !l.contains("あいうえお")));
        assert_eq!(lists.full.len(), 1);
    }

    #[test]
    fn test_dedup_preserving_order() {
        let lines = ["b", "a", "b", "c", "a"].map(String::from).to_vec();
        assert_eq!(dedup_preserving_order(lines), vec!["b", "a", "c"]);
        assert!(dedup_preserving_order(Vec::new()).is_empty());
    }

    #[test]
    fn test_lines_order() {
        let lists = DictionaryLists {
            full: vec!["f".into()],
            last: vec!["l".into()],
            first: vec!["g".into()],
        };
        assert_eq!(lists.lines().collect::<Vec<_>>(), vec!["f", "l", "g"]);
    }
}
