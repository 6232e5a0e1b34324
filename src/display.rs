use colored::Colorize;
use lpscan_core::RankedItem;

/// Print the ranked list, best ISK-per-LP first.
pub fn print_ranking(items: &[RankedItem]) {
    println!("Best Value Items (ISK to LP Ratio):\n");

    if items.is_empty() {
        print_warning("No items with active sell orders found.");
        return;
    }

    for item in items {
        println!("{:<30} - Ratio: {:.2}", item.name, item.isk_per_lp);
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
