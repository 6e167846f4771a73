use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use zeroize::Zeroizing;

use kintsugi::cli::{Cli, Commands, StandardArg};
use kintsugi::commands::{self, DeconstructResult};
use kintsugi::domain::{GroupSpec, ShareCount, SlipConfig, SplitPlan, Threshold};

/// JSON shape for one BIP39 part.
#[derive(Serialize)]
struct PartOutput {
    standard: &'static str,
    mnemonic: String,
    digits: bool,
}

/// JSON shape for a grouped SLIP39 split.
#[derive(Serialize)]
struct SharesOutput {
    standard: &'static str,
    shares: Vec<Vec<String>>,
    group_threshold: u8,
    digits: bool,
}

/// JSON shape for a reconstruction.
#[derive(Serialize)]
struct ReconstructOutput {
    standard: &'static str,
    mnemonic: String,
    digits: bool,
}

/// Read a mnemonic securely from stdin (hidden input when TTY available)
fn read_mnemonic() -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter mnemonic (12 or 24 words):");
        rpassword::read_password().context("Failed to read mnemonic from stdin")
    } else {
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut mnemonic = String::new();
        handle
            .read_line(&mut mnemonic)
            .context("Failed to read mnemonic from stdin")?;
        Ok(mnemonic.trim().to_string())
    }
}

/// Read shares from stdin, one per line, empty line to finish (hidden input
/// when TTY available)
fn read_shares() -> Result<Vec<String>> {
    let mut shares = Vec::new();

    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter shares (one per line, empty line to finish):");

        loop {
            let share = rpassword::read_password().context("Failed to read share from stdin")?;
            if share.trim().is_empty() {
                break;
            }
            shares.push(share.trim().to_string());
        }
    } else {
        let stdin = io::stdin();
        let handle = stdin.lock();

        for line in handle.lines() {
            let line = line.context("Failed to read line from stdin")?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                break;
            }
            shares.push(trimmed.to_string());
        }
    }

    if shares.is_empty() {
        bail!("No shares provided");
    }

    Ok(shares)
}

fn read_first_line(path: &Path) -> Result<String> {
    let contents = Zeroizing::new(
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
    );
    contents
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .with_context(|| format!("{} is empty", path.display()))
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = Zeroizing::new(
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
    );
    let lines: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if lines.is_empty() {
        bail!("{} is empty", path.display());
    }
    Ok(lines)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Deconstruct {
            mnemonic,
            file,
            standard,
            parts,
            required,
            total,
            groups,
            group_threshold,
            digits,
        } => {
            let mnemonic = Zeroizing::new(match (mnemonic, file) {
                (Some(text), _) => text,
                (None, Some(path)) => read_first_line(&path)?,
                (None, None) => read_mnemonic()?,
            });

            match standard {
                StandardArg::Bip39 => {
                    // The original tool's convention: 24-word mnemonics are
                    // halved, anything shorter stays whole.
                    let word_count = mnemonic.split_whitespace().count();
                    let part_count = parts.unwrap_or(if word_count == 24 { 2 } else { 1 });

                    let plan = SplitPlan::Bip39 { part_count, digits };
                    let DeconstructResult::Bip39 { parts } =
                        commands::deconstruct(&mnemonic, &plan)?
                    else {
                        unreachable!("BIP39 plan yields BIP39 parts");
                    };

                    let output: Vec<PartOutput> = parts
                        .into_iter()
                        .map(|part| PartOutput {
                            standard: "BIP39",
                            mnemonic: part,
                            digits,
                        })
                        .collect();
                    println!("{}", serde_json::to_string(&output)?);
                }
                StandardArg::Slip39 => {
                    let layout = if groups.is_empty() {
                        vec![(required, total)]
                    } else {
                        groups
                    };
                    let specs = layout
                        .into_iter()
                        .map(|(threshold, count)| {
                            GroupSpec::new(Threshold::new(threshold)?, ShareCount::new(count)?)
                        })
                        .collect::<kintsugi::Result<Vec<_>>>()?;
                    let config = SlipConfig::new(Threshold::new(group_threshold)?, specs)?;

                    let plan = SplitPlan::Slip39 { config, digits };
                    let DeconstructResult::Slip39 { groups } =
                        commands::deconstruct(&mnemonic, &plan)?
                    else {
                        unreachable!("SLIP39 plan yields SLIP39 groups");
                    };

                    let output = SharesOutput {
                        standard: "SLIP39",
                        shares: groups.into_values().collect(),
                        group_threshold,
                        digits,
                    };
                    println!("{}", serde_json::to_string(&output)?);
                }
            }
        }
        Commands::Reconstruct {
            file,
            standard,
            digits,
        } => {
            let inputs = match file {
                Some(path) => read_lines(&path)?,
                None => read_shares()?,
            };

            let mnemonic = commands::reconstruct(&inputs, standard.into(), digits)?;
            let output = ReconstructOutput {
                standard: "BIP39",
                mnemonic,
                digits,
            };
            println!("{}", serde_json::to_string(&output)?);
        }
    }

    Ok(())
}
