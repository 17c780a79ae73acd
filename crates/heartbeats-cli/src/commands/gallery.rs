use anyhow::Result;

use heartbeats_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    let items = &config.gallery.items;

    println!("Gallery ({} items):\n", items.len());

    for (index, item) in items.iter().enumerate() {
        let note = if index + 1 == items.len() {
            "  (expands to fill the screen)"
        } else {
            ""
        };
        println!("  {:>2}. {:<6} {}{}", index + 1, item.label(), item.source(), note);
    }

    Ok(())
}
