use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::open_repository;
use crate::errors::AppResult;
use crate::models::WorkSessionEntry;
use crate::ui::messages::info;
use crate::utils::date::format_iso;
use crate::utils::formatting::{format_currency, format_distance, format_hours};
use crate::utils::period::{contains, parse_period};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let bounds = match period {
            Some(p) => parse_period(p)?,
            None => None,
        };

        let repo = open_repository(cfg)?;
        let rows: Vec<WorkSessionEntry> = repo
            .history()
            .into_iter()
            .filter(|e| contains(&bounds, &e.date))
            .collect();

        if rows.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        print!("{}", render_history(&rows, cfg));
    }

    Ok(())
}

/// History table, one row per entry in the given order.
pub fn render_history(entries: &[WorkSessionEntry], cfg: &Config) -> String {
    let sym = &cfg.currency_symbol;
    let unit = &cfg.distance_unit;

    let mut table = Table::new(vec![
        Column::left("ID", 8),
        Column::left("DATE", 10),
        Column::right("EARNINGS", 13),
        Column::right("EXPENSES", 13),
        Column::right("NET", 13),
        Column::right("DISTANCE", 11),
        Column::right(&format!("PER {}", unit.to_uppercase()), 11),
        Column::right("HOURS", 6),
        Column::right("RIDES", 5),
    ]);

    for e in entries {
        table.add_row(vec![
            e.id.short().to_string(),
            format_iso(&e.date),
            format_currency(e.earnings, sym),
            format_currency(e.expenses, sym),
            format_currency(e.net_profit(), sym),
            format_distance(e.distance, unit),
            format_currency(e.earnings_per_distance, sym),
            format_hours(e.hours_worked),
            e.total_rides().to_string(),
        ]);
    }

    table.render()
}
