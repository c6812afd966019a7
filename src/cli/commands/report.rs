use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::summarize_by_period;
use crate::core::open_repository;
use crate::errors::AppResult;
use crate::models::WorkSessionEntry;
use crate::ui::messages::info;
use crate::utils::formatting::{format_currency, format_distance, format_hours};
use crate::utils::period::{contains, parse_period};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { by, period } = cmd {
        let bounds = match period {
            Some(p) => parse_period(p)?,
            None => None,
        };

        let repo = open_repository(cfg)?;
        let selected: Vec<WorkSessionEntry> = repo
            .list()
            .iter()
            .filter(|e| contains(&bounds, &e.date))
            .cloned()
            .collect();

        let summaries = summarize_by_period(&selected, *by);
        if summaries.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        let sym = &cfg.currency_symbol;
        let unit = &cfg.distance_unit;

        let mut table = Table::new(vec![
            Column::left("PERIOD", 10),
            Column::right("DAYS", 4),
            Column::right("EARNINGS", 14),
            Column::right("EXPENSES", 14),
            Column::right("NET", 14),
            Column::right("DISTANCE", 12),
            Column::right(&format!("PER {}", unit.to_uppercase()), 11),
            Column::right("HOURS", 7),
            Column::right("RIDES", 6),
        ]);

        for s in &summaries {
            let st = &s.stats;
            table.add_row(vec![
                s.key.clone(),
                st.days_worked.to_string(),
                format_currency(st.total_earnings, sym),
                format_currency(st.total_expenses, sym),
                format_currency(st.net_profit, sym),
                format_distance(st.total_distance, unit),
                format_currency(st.avg_earnings_per_distance, sym),
                format_hours(st.total_hours),
                st.total_rides.to_string(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
