use colored::Colorize;

/// Print the startup banner shown before the interactive prompts.
pub fn show_banner() {
    println!("{}", "╔══════════════════════════════════════════════╗".blue().bold());
    println!("{}", "║              Backend Forge                   ║".blue().bold());
    println!("{}", "╚══════════════════════════════════════════════╝".blue().bold());
    println!("{}", "Create a modern Express + MongoDB backend effortlessly.".dimmed());
    println!();
}

/// A yellow progress line announcing the next phase.
pub fn step(text: &str) {
    println!("{}", text.yellow());
}

/// A dimmed detail line.
pub fn info(text: &str) {
    println!("{}", text.dimmed());
}

/// Print the end-of-run summary with next steps.
pub fn show_success(name: &str) {
    println!();
    println!(
        "{} Project '{}' is ready!",
        "✓".green(),
        name.green()
    );
    println!();
    println!("Next steps:");
    println!("  cd {name}");
    println!("  npm run dev");
    println!();
    println!("  Then open: {}", "http://localhost:3000".cyan());
}
