use colored::Colorize;
use rusty_parsley::known_rules;

pub fn execute() {
    println!("{}", "Recognized rules:".green().bold());
    for name in known_rules() {
        println!("  {}", name);
    }
    println!();
    println!(
        "{}",
        "Any other rule is passed through as data-parsley-<name>".dimmed()
    );
}
