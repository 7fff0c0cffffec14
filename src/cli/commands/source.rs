//! Dictionary source listing.

use console::style;

use crate::config::Settings;

/// List configured dictionary sources.
pub fn cmd_list(settings: &Settings) -> anyhow::Result<()> {
    println!("\n{}", style("Dictionaries").bold());
    println!("{}", "-".repeat(60));
    println!("{:<14} {:<5} Source", "Name", "Tag");
    println!("{}", "-".repeat(60));

    for dict in &settings.dictionaries {
        println!("{:<14} {:<5} {}", dict.name, dict.tag, dict.url);
        println!(
            "{:<20} {} {} {}",
            "",
            style(&dict.begin_id).dim(),
            style("..").dim(),
            style(&dict.end_id).dim()
        );
    }

    println!("\nOutput: {}", settings.output_dir.display());
    println!("Cache:  {}", settings.cache_dir.display());
    Ok(())
}
