use clap::ArgMatches;

/// Environment variable that turns on strict mode
pub const STRICT_ENV: &str = "NETUTILS_STRICT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Force `colored` on or off; `Auto` leaves its own tty/NO_COLOR detection
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

/// Runtime settings for one invocation. Nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Treat unsupported operations as fatal
    pub strict: bool,
    pub color: ColorMode,
    pub verbosity: u8,
}

impl Settings {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let env_strict = std::env::var(STRICT_ENV).ok();

        Self {
            strict: matches.get_flag("strict") || env_flag(env_strict.as_deref()),
            color: matches
                .get_one::<String>("color")
                .and_then(|value| ColorMode::parse(value))
                .unwrap_or_default(),
            verbosity: matches.get_count("verbose"),
        }
    }
}

fn env_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1") | Some("true") | Some("yes") | Some("on")
    )
}
