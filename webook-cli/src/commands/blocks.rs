//! List the block registry.

use anyhow::Result;
use webook_core::list_groups;

pub fn list_blocks(json: bool) -> Result<()> {
    let groups = list_groups();
    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    for (category, entries) in &groups {
        println!("{}", category.as_str());
        for info in entries {
            println!(
                "  {} {:<16} {:<20} {}",
                info.icon,
                info.variant,
                info.label,
                info.shortcut.unwrap_or("")
            );
        }
    }
    Ok(())
}
