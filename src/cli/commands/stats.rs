use crate::cli::commands::parse_cli_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{
    DailyStats, PeriodStats, WeeklyStats, daily_stats, monthly_stats, weekly_stats,
};
use crate::core::open_repository;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_profit;
use crate::utils::date;
use crate::utils::formatting::{
    format_currency, format_distance, format_hours, format_percentage, format_rides,
    format_smart_date, format_value_per_km,
};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        month,
        week,
        day,
        at,
    } = cmd
    {
        let now = match at {
            Some(s) => parse_cli_date(s)?,
            None => date::today(),
        };
        let day = day.as_deref().map(parse_cli_date).transpose()?;

        // No selector → monthly view
        let show_month = *month || (!*week && day.is_none());

        let repo = open_repository(cfg)?;
        let entries = repo.list();

        if show_month {
            print_monthly(&monthly_stats(entries, now), now, cfg);
        }
        if *week {
            print_weekly(&weekly_stats(entries, now));
        }
        if let Some(d) = day {
            match daily_stats(entries, d) {
                Some(stats) => print_daily(&stats, d, now, cfg),
                None => info(format!("No entry logged for {d}.")),
            }
        }
    }

    Ok(())
}

fn print_monthly(s: &PeriodStats, now: NaiveDate, cfg: &Config) {
    let sym = &cfg.currency_symbol;
    let unit = &cfg.distance_unit;

    header(format!("Month {}", now.format("%B %Y")));
    println!("Days worked        : {}", s.days_worked);
    println!("Earnings           : {}", format_currency(s.total_earnings, sym));
    println!("Expenses           : {}", format_currency(s.total_expenses, sym));
    println!(
        "Net profit         : {}",
        colorize_profit(s.net_profit, &format_currency(s.net_profit, sym))
    );
    println!(
        "Profit margin      : {}",
        format_percentage(crate::core::calculator::ratio(s.net_profit, s.total_earnings))
    );
    println!("Distance           : {}", format_distance(s.total_distance, unit));
    println!("Hours              : {}", format_hours(s.total_hours));
    println!(
        "Rides              : {} (Uber {}, 99 {}, inDriver {})",
        format_rides(s.total_rides),
        s.rides_by_platform.uber,
        s.rides_by_platform.ninety_nine,
        s.rides_by_platform.in_driver
    );
    println!(
        "Earnings per {:<5} : {}",
        unit,
        format_value_per_km(s.avg_earnings_per_distance, sym, unit)
    );
    println!("Earnings per ride  : {}", format_currency(s.avg_earnings_per_ride, sym));
    println!("Earnings per hour  : {}", format_currency(s.earnings_per_hour, sym));
    println!(
        "Profit per {:<7} : {}",
        unit,
        format_value_per_km(s.profit_per_distance, sym, unit)
    );
}

fn print_weekly(s: &WeeklyStats) {
    header(format!("Week from {}", s.week_start));
    for (platform, count) in s.rides_by_platform.iter() {
        println!("{:<9}: {}", platform.label(), count);
    }
    println!("Total    : {}", format_rides(s.total_rides()));
}

fn print_daily(s: &DailyStats, day: NaiveDate, now: NaiveDate, cfg: &Config) {
    let sym = &cfg.currency_symbol;
    let unit = &cfg.distance_unit;

    header(format!("{} ({})", format_smart_date(&day, &now), day));
    println!("Earnings    : {}", format_currency(s.earnings, sym));
    println!("Expenses    : {}", format_currency(s.expenses, sym));
    println!(
        "Net profit  : {}",
        colorize_profit(s.net_profit, &format_currency(s.net_profit, sym))
    );
    println!("Distance    : {}", format_distance(s.distance, unit));
    println!(
        "Per {:<8}: {}",
        unit,
        format_value_per_km(s.earnings_per_distance, sym, unit)
    );
}
