// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jason Ish

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;

use relstamp::{BuildInfo, Version};

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "relstamp")]
#[command(about = "Report the release version stamped in at build time")]
#[command(version = Version::VERSION)]
#[command(styles = STYLES, color = clap::ColorChoice::Auto)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    #[arg(long, help = "Print build info as JSON")]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fail if the version was not stamped at build time
    Check {
        #[arg(long, help = "Also require the version to equal this value")]
        expect: Option<String>,
    },
}

fn main() {
    let args = Args::parse();

    match args.command {
        Some(Command::Check { expect }) => handle_check_command(expect.as_deref()),
        None if args.json => handle_json_output(),
        None => println!("{}", relstamp::version()),
    }
}

fn handle_json_output() {
    match BuildInfo::current().to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            std::process::exit(1);
        }
    }
}

fn handle_check_command(expect: Option<&str>) {
    let result = match expect {
        Some(expected) => relstamp::verify_expected(expected),
        None => relstamp::verify(),
    };

    match result {
        Ok(version) => println!("{} Version {} is stamped.", "✓".green(), version.bold()),
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            if e.is_unstamped() {
                eprintln!(
                    "  Rebuild without {} set to stamp the release version.",
                    relstamp::stamp::SKIP_STAMP_ENV
                );
            }
            std::process::exit(1);
        }
    }
}
