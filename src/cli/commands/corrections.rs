//! Correction file validation.

use console::style;

use crate::config::Settings;
use crate::corrections::{CorrectionEngine, CorrectionSpec};

/// Load both correction files and classify every entry.
pub fn cmd_check_corrections(settings: &Settings) -> anyhow::Result<()> {
    for (label, path) in [
        ("replace", &settings.replace_file),
        ("add", &settings.add_file),
    ] {
        match path {
            Some(path) => println!("  {:<8} {}", label, path.display()),
            None => println!("  {:<8} {}", label, style("(not configured)").dim()),
        }
    }

    let spec = CorrectionSpec::load(settings.replace_file.as_deref(), settings.add_file.as_deref())?;
    let engine = CorrectionEngine::new(&spec)?;

    println!(
        "{} {} replace rule(s), {} add rule(s)",
        style("✓").green(),
        engine.replace_rules(),
        engine.add_rules()
    );
    Ok(())
}
