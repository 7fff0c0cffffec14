//! Parse command.

use console::style;

use crate::names::NameParser;

/// Print how each text classifies.
pub fn cmd_parse(texts: &[String]) -> anyhow::Result<()> {
    let parser = NameParser::shared();

    for text in texts {
        match parser.classify(text) {
            Ok(record) => {
                let kind = if record.is_foreign() { "foreign" } else { "name" };
                println!("{} {} [{}]", style("✓").green(), record, style(kind).dim());
                println!("    surname: {} / {}", record.last(), record.kana_last());
                if !record.is_foreign() {
                    println!("    given:   {} / {}", record.first(), record.kana_first());
                }
            }
            Err(e) => println!("{} {}", style("✗").red(), e),
        }
    }

    Ok(())
}
