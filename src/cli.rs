use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::Standard;

/// Mnemonic standard selector for the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StandardArg {
    Bip39,
    Slip39,
}

impl From<StandardArg> for Standard {
    fn from(arg: StandardArg) -> Self {
        match arg {
            StandardArg::Bip39 => Standard::Bip39,
            StandardArg::Slip39 => Standard::Slip39,
        }
    }
}

/// Parses a group layout given as "THRESHOLD,COUNT", e.g. "2,3".
fn parse_group(s: &str) -> Result<(u8, u8), String> {
    let (threshold, count) = s
        .split_once(',')
        .ok_or_else(|| format!("'{s}' is not a THRESHOLD,COUNT pair"))?;
    let threshold: u8 = threshold
        .trim()
        .parse()
        .map_err(|_| format!("'{threshold}' is not a valid threshold"))?;
    let count: u8 = count
        .trim()
        .parse()
        .map_err(|_| format!("'{count}' is not a valid share count"))?;
    Ok((threshold, count))
}

#[derive(Parser)]
#[command(name = "kintsugi")]
#[command(about = "Split BIP39 seed mnemonics into SLIP39-style grouped Shamir shares and back")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a mnemonic into shares or parts
    Deconstruct {
        /// Mnemonic to deconstruct (read from stdin when omitted)
        #[arg(long)]
        mnemonic: Option<String>,

        /// File whose first line holds the mnemonic
        #[arg(long, conflicts_with = "mnemonic")]
        file: Option<PathBuf>,

        /// Output standard
        #[arg(long, value_enum, default_value_t = StandardArg::Slip39)]
        standard: StandardArg,

        /// BIP39 part count (defaults to 2 for 24-word mnemonics, else 1)
        #[arg(long)]
        parts: Option<u8>,

        /// Shares required per group when no --group is given (e.g. 2 of 3)
        #[arg(long, default_value_t = 2)]
        required: u8,

        /// Total shares per group when no --group is given (e.g. 3 of 3)
        #[arg(long, default_value_t = 3)]
        total: u8,

        /// Group layout as "THRESHOLD,COUNT"; repeat for multiple groups
        #[arg(long = "group", value_parser = parse_group)]
        groups: Vec<(u8, u8)>,

        /// Groups required for reconstruction
        #[arg(long, default_value_t = 1)]
        group_threshold: u8,

        /// Emit digit sequences instead of words
        #[arg(long)]
        digits: bool,
    },
    /// Combine shares or parts to reconstruct the original mnemonic
    Reconstruct {
        /// File with one share or part per line (read from stdin when omitted)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Input standard
        #[arg(long, value_enum, default_value_t = StandardArg::Slip39)]
        standard: StandardArg,

        /// Inputs are digit sequences
        #[arg(long)]
        digits: bool,
    },
}
