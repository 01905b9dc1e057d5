//! Command-line surface: argument parsing and conversion into an
//! [`OrganizeConfig`].
use clap::{ArgAction, Parser, ValueEnum};
use dorg_core::{CollisionPolicy, Granularity, OrganizeConfig, TimestampSource};
use std::ffi::OsString;
use std::path::PathBuf;

/// Long options that are also accepted with a single dash, `-mode=day`.
const SINGLE_DASH_LONG: &[&str] = &["mode", "sorting", "sort", "on-conflict"];

#[derive(Debug, Parser)]
#[command(
    name = "dorg",
    version,
    about = "Move files into year/month/day folders by their creation or modification date"
)]
pub struct Cli {
    /// Directory to organize
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Also organize files in subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Folder granularity
    #[arg(long, value_enum, default_value_t = CliGranularity::Month, alias = "sorting")]
    pub mode: CliGranularity,

    /// Timestamp that decides the folder
    #[arg(long, value_enum, default_value_t = CliTimestamp::Created)]
    pub sort: CliTimestamp,

    /// What to do when the destination already has a file of the same name
    #[arg(long, value_enum, default_value_t = CliCollision::Skip)]
    pub on_conflict: CliCollision,

    /// Show what would be moved without touching anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long options.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn to_config(&self) -> OrganizeConfig {
        OrganizeConfig::new(&self.directory)
            .recursive(self.recursive)
            .granularity(self.mode.into())
            .timestamp(self.sort.into())
            .on_collision(self.on_conflict.into())
            .dry_run(self.dry_run)
    }

    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "dorg=error,dorg_core=error";
        }
        match self.verbose {
            0 => "dorg=info,dorg_core=info",
            1 => "dorg=debug,dorg_core=debug",
            _ => "dorg=trace,dorg_core=trace",
        }
    }
}

/// Rewrite `-mode=day` style arguments to `--mode=day`.
///
/// Everything after a bare `--` is passed through untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                passthrough = true;
                return arg;
            }
            match s.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') && is_single_dash_long(rest) => {
                    OsString::from(format!("--{rest}"))
                }
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(rest: &str) -> bool {
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_LONG.contains(&name)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliGranularity {
    Year,
    Month,
    Day,
}

impl From<CliGranularity> for Granularity {
    fn from(value: CliGranularity) -> Self {
        match value {
            CliGranularity::Year => Granularity::Year,
            CliGranularity::Month => Granularity::Month,
            CliGranularity::Day => Granularity::Day,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliTimestamp {
    Created,
    Modified,
}

impl From<CliTimestamp> for TimestampSource {
    fn from(value: CliTimestamp) -> Self {
        match value {
            CliTimestamp::Created => TimestampSource::Created,
            CliTimestamp::Modified => TimestampSource::Modified,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliCollision {
    Skip,
    Rename,
}

impl From<CliCollision> for CollisionPolicy {
    fn from(value: CliCollision) -> Self {
        match value {
            CliCollision::Skip => CollisionPolicy::Skip,
            CliCollision::Rename => CollisionPolicy::Rename,
        }
    }
}
