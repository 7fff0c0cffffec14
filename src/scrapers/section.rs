//! Extracting candidate texts from one section of an HTML page.

use scraper::{ElementRef, Html, Selector};

use super::ScrapeError;

/// Collect the text of every `tag` element between two anchors.
///
/// The anchors are the elements with ids `begin_id` and `end_id`; the
/// section is every sibling that follows the begin anchor's parent, up to
/// (not including) the end anchor's parent. Texts are trimmed and returned
/// in document order.
pub fn extract_section(
    html: &str,
    begin_id: &str,
    end_id: &str,
    tag: &str,
) -> Result<Vec<String>, ScrapeError> {
    let tag_selector =
        Selector::parse(tag).map_err(|e| ScrapeError::Selector(format!("{}: {}", tag, e)))?;

    let document = Html::parse_document(html);
    let begin = anchor_parent(&document, begin_id)?;
    let end = anchor_parent(&document, end_id)?;

    let mut texts = Vec::new();
    for sibling in begin.next_siblings() {
        if sibling.id() == end.id() {
            break;
        }
        for element in sibling.descendants().filter_map(ElementRef::wrap) {
            if tag_selector.matches(&element) {
                let text: String = element.text().collect();
                texts.push(text.trim().to_string());
            }
        }
    }

    Ok(texts)
}

/// Parent element of the element whose id is `id`.
fn anchor_parent<'a>(document: &'a Html, id: &str) -> Result<ElementRef<'a>, ScrapeError> {
    let with_id = Selector::parse("[id]").map_err(|e| ScrapeError::Selector(e.to_string()))?;
    document
        .select(&with_id)
        .find(|element| element.value().id() == Some(id))
        .and_then(|element| element.parent().and_then(ElementRef::wrap))
        .ok_or_else(|| ScrapeError::AnchorNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <div class="mw-heading"><h2 id="概要">概要</h2></div>
        <p>天海 春香（あまみ はるか）は除外される</p>
        <div class="mw-heading"><h2 id="登場キャラクター">登場キャラクター</h2></div>
        <dl>
          <dt>天海 春香（あまみ　はるか）</dt>
          <dd>声 - 中村繪里子</dd>
          <dt>ロゼ</dt>
        </dl>
        <dt>如月 千早（きさらぎ ちはや）</dt>
        <p>アイドル</p>
        <div class="mw-heading"><h2 id="他プロダクション">他プロダクション</h2></div>
        <dl><dt>玲音（れおん）</dt></dl>
        </body></html>
    "#;

    #[test]
    fn test_extracts_tags_between_anchors() {
        let texts = extract_section(PAGE, "登場キャラクター", "他プロダクション", "dt").unwrap();
        assert_eq!(
            texts,
            vec!["天海 春香（あまみ　はるか）", "ロゼ", "如月 千早（きさらぎ ちはや）"]
        );
    }

    #[test]
    fn test_other_tag_selector() {
        let texts = extract_section(PAGE, "登場キャラクター", "他プロダクション", "p").unwrap();
        assert_eq!(texts, vec!["アイドル"]);
    }

    #[test]
    fn test_missing_anchor() {
        let err = extract_section(PAGE, "存在しない", "他プロダクション", "dt").unwrap_err();
        assert!(matches!(err, ScrapeError::AnchorNotFound(ref id) if id == "存在しない"));
    }

    #[test]
    fn test_end_before_begin_takes_rest_of_page() {
        let texts = extract_section(PAGE, "登場キャラクター", "概要", "dt").unwrap();
        assert_eq!(texts.len(), 4);
        assert_eq!(texts[3], "玲音（れおん）");
    }

    #[test]
    fn test_invalid_selector() {
        let err = extract_section(PAGE, "概要", "他プロダクション", "[[").unwrap_err();
        assert!(matches!(err, ScrapeError::Selector(_)));
    }
}
