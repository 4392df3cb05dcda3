use clap::Parser;
use colored::Colorize;
use serde::Serialize;

use dicetoss::dice3d::{run_headless, DiceCount, HeadlessOptions, HeadlessRoll};

/// Dice CLI - toss physics dice without a window and print the faces
#[derive(Parser, Debug)]
#[command(name = "dicetoss-cli")]
#[command(author, version, about = "Dice CLI - toss physics dice without a window")]
struct Cli {
    /// Number of dice to throw (1 or 2)
    #[arg(short, long, value_parser = DiceCount::parse, default_value = "1")]
    dice: DiceCount,

    /// Seed for a reproducible throw
    #[arg(short, long)]
    seed: Option<u64>,

    /// Simulated seconds to wait for the dice to settle (at most 3600)
    #[arg(long, default_value = "10")]
    max_seconds: f32,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonRoll<'a> {
    dice: &'a [u32],
    total: u32,
    settled: bool,
    simulated_seconds: f32,
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let options = HeadlessOptions {
        dice_count: cli.dice,
        seed: cli.seed,
        max_seconds: cli.max_seconds,
    };

    let roll = match run_headless(&options) {
        Ok(roll) => roll,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if cli.json {
        print_json(&roll, cli.seed);
    } else {
        print_roll(&roll);
    }
}

fn print_json(roll: &HeadlessRoll, seed: Option<u64>) {
    let json = JsonRoll {
        dice: &roll.values,
        total: roll.total(),
        settled: !roll.timed_out,
        simulated_seconds: roll.simulated_secs,
        seed,
    };
    match serde_json::to_string_pretty(&json) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn print_roll(roll: &HeadlessRoll) {
    println!("{}", "Dice Roll".cyan().bold());
    for (i, value) in roll.values.iter().enumerate() {
        println!("  Dice {}: {}", i + 1, value.to_string().yellow().bold());
    }
    if roll.values.len() > 1 {
        println!("  {} {}", "Total:".bold(), roll.total().to_string().green().bold());
    }
    if roll.timed_out {
        println!(
            "{}",
            format!(
                "  (dice were still moving after {:.1}s)",
                roll.simulated_secs
            )
            .dimmed()
        );
    } else {
        println!(
            "{}",
            format!("  settled after {:.1}s", roll.simulated_secs).dimmed()
        );
    }
}
