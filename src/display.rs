use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::config::{GameConfig, GameMode};
use crate::model::{GameResult, MultiGameResults};

pub fn money(amount: f64) -> String {
    if amount > 0.0 {
        format!("+${:.2}", amount).green().to_string()
    } else if amount < 0.0 {
        format!("-${:.2}", -amount).red().to_string()
    } else {
        "$0.00".dimmed().to_string()
    }
}

pub fn payout_table(result: &GameResult) -> String {
    if result.payouts.is_empty() {
        return format!("  {}  {}", result.label.bold(), "push".dimmed());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("From"),
        Cell::new("To"),
        Cell::new("Amount").set_alignment(CellAlignment::Right),
        Cell::new("Bet"),
    ]);
    for payout in &result.payouts {
        table.add_row(vec![
            Cell::new(&payout.from),
            Cell::new(&payout.to),
            Cell::new(format!("${:.2}", payout.amount)).set_alignment(CellAlignment::Right),
            Cell::new(payout.game.dimmed().to_string()),
        ]);
    }
    format!("  {}\n{}", result.label.bold(), table)
}

pub fn ledger_table(results: &MultiGameResults) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Player")];
    for game in &results.games {
        header.push(Cell::new(&game.label).set_alignment(CellAlignment::Right));
    }
    header.push(Cell::new("Net".bold().to_string()).set_alignment(CellAlignment::Right));
    table.set_header(header);

    for name in &results.player_names {
        let mut row = vec![Cell::new(name.bold().to_string())];
        for game in &results.games {
            row.push(Cell::new(money(game.net_of(name))).set_alignment(CellAlignment::Right));
        }
        row.push(Cell::new(money(results.net_of(name))).set_alignment(CellAlignment::Right));
        table.add_row(row);
    }
    table.to_string()
}

pub fn games_table() -> String {
    let defaults = GameConfig::default();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Mode"),
        Cell::new("Game"),
        Cell::new("Default stake").set_alignment(CellAlignment::Right),
        Cell::new("Input"),
    ]);
    for mode in GameMode::ALL {
        let stake = match mode {
            GameMode::Taxman => format!("${:.2} tax", defaults.tax_amount()),
            GameMode::Skins => format!("${:.2}/skin", defaults.bet_per_skin()),
            GameMode::Dots => format!("${:.2}/dot", defaults.bet_per_dot()),
            GameMode::Sixes => format!("${:.2}/segment", defaults.bet_per_segment()),
            GameMode::Vegas | GameMode::Scotch | GameMode::Nines | GameMode::Quota => {
                format!("${:.2}/point", defaults.bet_per_point())
            }
            GameMode::Nassau => {
                let (front, back, total) = defaults.nassau_legs();
                format!("${:.0}/${:.0}/${:.0}", front, back, total)
            }
            GameMode::KeepScore => "-".to_string(),
            _ => format!("${:.2}", defaults.bet_amount(mode)),
        };
        let input = if mode.is_manually_tracked() {
            "hole annotations".yellow().to_string()
        } else {
            "scores".to_string()
        };
        table.add_row(vec![
            Cell::new(mode.as_str().bold().to_string()),
            Cell::new(mode.label()),
            Cell::new(stake).set_alignment(CellAlignment::Right),
            Cell::new(input),
        ]);
    }
    table.to_string()
}

pub fn print_section(title: &str, content: &str) {
    println!("\n{}", title.cyan().bold());
    println!("{}", content);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}

pub fn print_success(msg: &str) {
    println!("{}", msg.green().bold());
}
