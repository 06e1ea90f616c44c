use std::ffi::OsString;

use anyhow::{bail, Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about, long_about = None, disable_help_flag = true, disable_version_flag = true)]
pub struct Options {
    /// Target uptime in percent, e.g. 99.95.
    /// Values outside of 0..100 are accepted and yield negative or over-long budgets.
    #[arg(value_parser = parse_uptime, allow_hyphen_values = true)]
    pub uptime: f64,
}

impl Options {
    /// Parse the process arguments.
    pub fn try_parse() -> Result<Self>
    {
        Self::parse_args(std::env::args_os())
    }

    /// Parse `args`, program name first.
    /// Exactly one argument must follow the program name; `--` counts as an argument.
    pub fn parse_args<I, T>(args: I) -> Result<Self>
        where
            I: IntoIterator<Item = T>,
            T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 2 {
            bail!("invalid number of arguments");
        }
        let options = <Self as Parser>::try_parse_from(args)?;
        Ok(options)
    }
}

fn parse_uptime(s: &str) -> Result<f64>
{
    let uptime: f64 = s.parse()
        .with_context(|| format!("unable to convert {} to float", s))?;
    if !uptime.is_finite() {
        bail!("unable to convert {} to a finite float", s);
    }
    Ok(uptime)
}
