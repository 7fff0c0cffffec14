//! Build command.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cache::NameCache;
use crate::config::Settings;
use crate::corrections::{CorrectionEngine, CorrectionSpec};
use crate::dictionary::{DictionaryBuilder, DictionaryWriter, WriteReport};
use crate::scrapers::{DictionarySource, HttpClient, WikiScraper};

/// Build the named dictionaries, or every configured one.
pub async fn cmd_build(settings: &Settings, names: &[String], refresh: bool) -> anyhow::Result<()> {
    let selected = select_dictionaries(settings, names)?;

    let spec = CorrectionSpec::load(settings.replace_file.as_deref(), settings.add_file.as_deref())?;
    let corrections = CorrectionEngine::new(&spec)?;

    let client = HttpClient::new(
        &settings.user_agent,
        settings.request_timeout(),
        settings.request_delay(),
    )?;
    let builder = DictionaryBuilder::new(
        WikiScraper::new(client),
        NameCache::new(&settings.cache_dir),
        corrections,
        DictionaryWriter::new(&settings.output_dir),
    )
    .with_refresh(refresh);

    let mut failed = 0usize;
    for dict in selected {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Building {}...", dict.name));
        pb.enable_steady_tick(Duration::from_millis(100));

        let result = builder.build(dict).await;
        pb.finish_and_clear();

        match result {
            Ok(report) => print_report(&report),
            Err(e) => {
                failed += 1;
                println!("{} {}: {}", style("✗").red(), dict.name, e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} dictionary build(s) failed", failed);
    }
    Ok(())
}

fn select_dictionaries<'a>(
    settings: &'a Settings,
    names: &[String],
) -> anyhow::Result<Vec<&'a DictionarySource>> {
    if names.is_empty() {
        return Ok(settings.dictionaries.iter().collect());
    }

    names
        .iter()
        .map(|name| {
            settings
                .dictionary(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown dictionary '{}'", name))
        })
        .collect()
}

fn print_report(report: &WriteReport) {
    println!("{} {} ->", style("✓").green(), report.path.display());
    println!("  人名: {}", report.full);
    println!("  姓　: {}", report.last);
    println!("  名　: {}", report.first);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_select_all_when_no_names() {
        let settings = Settings::with_data_dir(PathBuf::from("/data"));
        assert_eq!(select_dictionaries(&settings, &[]).unwrap().len(), 5);
    }

    #[test]
    fn test_select_named_in_given_order() {
        let settings = Settings::with_data_dir(PathBuf::from("/data"));
        let names = vec!["sidem".to_string(), "765pro".to_string()];
        let selected = select_dictionaries(&settings, &names).unwrap();
        assert_eq!(selected[0].name, "sidem");
        assert_eq!(selected[1].name, "765pro");
    }

    #[test]
    fn test_select_unknown_name_fails() {
        let settings = Settings::with_data_dir(PathBuf::from("/data"));
        assert!(select_dictionaries(&settings, &["nope".to_string()]).is_err());
    }
}
