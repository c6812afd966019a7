use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) MIGRATIONS
    //
    let versions = applied_versions(&pool.conn)?;
    println!(
        "{}• Migrations applied:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        versions.len(),
        RESET
    );

    //
    // 3) SLOTS
    //
    let mut stmt =
        pool.conn
            .prepare("SELECT key, value, updated_at FROM kv_slots ORDER BY key ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    println!("{}• Slots:{}", CYAN, RESET);
    let mut any = false;
    for r in rows {
        let (key, value, updated_at) = r?;
        any = true;

        let entries = serde_json::from_str::<serde_json::Value>(&value)
            .ok()
            .and_then(|v| v.as_array().map(|a| a.len().to_string()))
            .unwrap_or_else(|| format!("{GREY}unreadable{RESET}"));

        println!(
            "    {}{}{}: {} entries (updated {})",
            YELLOW, key, RESET, entries, updated_at
        );
    }

    if !any {
        println!("    {GREY}--{RESET}");
    }

    println!();
    Ok(())
}
