use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;

// Use modules from the library
use netutils::commands;
use netutils::core::config::Settings;
use netutils::ui;

fn build_cli() -> Command {
    Command::new("netutils")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A simple network utility CLI")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("strict")
                .long("strict")
                .global(true)
                .help("Exit with an error when a diagnostic is not available on this OS")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .global(true)
                .value_name("WHEN")
                .value_parser(["auto", "always", "never"])
                .default_value("auto")
                .help("When to use colored output"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .help("Increase log verbosity (-v, -vv, -vvv)")
                .action(ArgAction::Count),
        )
        .subcommand(
            Command::new("address")
                .visible_alias("ip")
                .about("Display IP addresses"),
        )
        .subcommand(Command::new("hostname").about("Display the host name"))
        .subcommand(
            Command::new("ping")
                .about("Ping a host to check whether it is reachable")
                .arg(
                    Arg::new("host")
                        .value_name("HOST")
                        .help("Host name or IP address to ping"),
                ),
        )
        .subcommand(Command::new("os").about("Display OS information"))
        .subcommand(Command::new("ram").about("Display RAM information"))
        .subcommand(Command::new("disk").about("Display hard disk information"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell)),
                ),
        )
}

fn run(matches: &ArgMatches, settings: &Settings) -> Result<()> {
    match matches.subcommand() {
        Some(("address", _)) => commands::address(),
        Some(("hostname", _)) => commands::hostname(),
        Some(("ping", sub_matches)) => commands::ping(sub_matches, settings),
        Some(("os", _)) => commands::os(settings),
        Some(("ram", _)) => commands::ram(settings),
        Some(("disk", _)) => commands::disk(settings),
        Some(("completions", sub_matches)) => {
            commands::completions::execute(sub_matches, &mut build_cli())
        }
        _ => {
            println!("Use 'netutils --help' for more information.");
            Ok(())
        }
    }
}

fn main() {
    let matches = build_cli().get_matches();
    let settings = Settings::from_matches(&matches);

    netutils::init_logging(settings.verbosity);
    settings.color.apply();
    log::debug!("Settings: {:?}", settings);

    if let Err(e) = run(&matches, &settings) {
        ui::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}
