use anyhow::{Context, Result};
use clap::{ArgMatches, Command};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Generate shell completions for the specified shell
pub fn execute(matches: &ArgMatches, cli: &mut Command) -> Result<()> {
    let shell = *matches
        .get_one::<Shell>("shell")
        .context("shell argument is required")?;

    write_completions(shell, cli, &mut io::stdout())
}

pub fn write_completions(shell: Shell, cli: &mut Command, out: &mut dyn Write) -> Result<()> {
    let name = cli.get_name().to_string();
    generate(shell, cli, name, out);
    Ok(())
}
