use clap::Parser;
use colored::*;
use qrsheet::commands::{CmdMessage, MessageLevel};
use qrsheet::config::{SheetConfig, CONFIG_FILENAME};
use qrsheet::error::Result;
use qrsheet::model::CodeRange;
use qrsheet::pipeline;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // An explicitly named config must exist; the implicit lookup of
    // qrsheet.json in the working directory falls back to defaults.
    let config = match &cli.config {
        Some(path) => SheetConfig::load_required(path)?,
        None => SheetConfig::load(CONFIG_FILENAME)?,
    };
    config.validate()?;

    // Resolve and validate the range before any output is touched, so
    // a bad invocation leaves the working directory as it was.
    let range = CodeRange::from_args(
        cli.start,
        cli.end,
        (config.default_start, config.default_end),
    )?;

    let cwd = std::env::current_dir()?;
    let summary = pipeline::run(range, &config, &cwd)?;
    print_messages(&summary.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
