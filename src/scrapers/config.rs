//! Dictionary source definitions.

use serde::{Deserialize, Serialize};

/// Where the names for one dictionary come from.
///
/// Candidates are the texts of every `tag` element that follows the
/// section holding `begin_id` and precedes the section holding `end_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionarySource {
    /// Dictionary id; names the output file and the cache entry.
    pub name: String,
    /// Page to scrape.
    pub url: String,
    /// Element id marking the start of the name section.
    pub begin_id: String,
    /// Element id marking the end of the name section.
    pub end_id: String,
    /// Tag holding one candidate name per element.
    #[serde(default = "default_tag")]
    pub tag: String,
}

fn default_tag() -> String {
    "dt".to_string()
}

impl DictionarySource {
    pub fn new(name: &str, url: &str, begin_id: &str, end_id: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            begin_id: begin_id.to_string(),
            end_id: end_id.to_string(),
            tag: default_tag(),
        }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }
}

/// Built-in sources used when the config lists none.
pub fn default_sources() -> Vec<DictionarySource> {
    vec![
        DictionarySource::new(
            "765pro",
            "https://ja.wikipedia.org/wiki/THE_IDOLM@STERの登場人物",
            "765（ナムコ）プロダクション所属アイドル",
            "765プロダクション社員",
        )
        .with_tag("h3"),
        DictionarySource::new(
            "cinderella",
            "https://ja.wikipedia.org/wiki/アイドルマスター_シンデレラガールズ",
            "登場キャラクター",
            "他プロダクション",
        ),
        DictionarySource::new(
            "millionlive",
            "https://ja.wikipedia.org/wiki/アイドルマスター_ミリオンライブ!の登場人物",
            "765THEATER_ALLSTARS",
            "765PRO_ALLSTARS",
        ),
        DictionarySource::new(
            "sidem",
            "https://ja.wikipedia.org/wiki/アイドルマスター_SideM",
            "登場キャラクター",
            "その他の登場人物",
        ),
        DictionarySource::new(
            "shinycolors",
            "https://ja.wikipedia.org/wiki/アイドルマスター_シャイニーカラーズ",
            "登場人物",
            "CD",
        ),
    ]
}
