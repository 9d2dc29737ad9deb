use anyhow::Result;

use crate::catalog::Catalog;
use crate::store::LocalStore;

pub fn cmd_list(query: &str, json: bool) -> Result<()> {
    let catalog = Catalog::builtin();
    let records = catalog.filter(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No wallpapers match '{}'", query);
        return Ok(());
    }

    let width = records.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    for record in records {
        println!("{:<width$}  {}", record.name, record.tag_line(), width = width);
    }
    Ok(())
}

pub fn cmd_info(name: &str, store: &LocalStore) -> Result<()> {
    let catalog = Catalog::builtin();
    let Some(record) = catalog.find(name) else {
        println!("No wallpaper named '{}'", name.trim());
        println!("See available names with: wallbrowse list");
        return Ok(());
    };

    println!("Wallpaper Name: {}", record.name);
    println!("Tags: {}", record.tag_line());
    println!("URL: {}", record.url);
    match store.download_path(record) {
        Ok(path) if path.exists() => println!("Downloaded: yes ({})", path.display()),
        Ok(_) => println!("Downloaded: no"),
        Err(e) => println!("Downloaded: unknown ({})", e),
    }
    Ok(())
}
