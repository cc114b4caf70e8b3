use core::convert::Infallible;

use clap::{CommandFactory as _, Parser as _};

use crate::category::{Category, UnknownCategory};
use crate::request::{DEFAULT_TIMEOUT_SECS, NotificationRequest};

const BIN_NAME: &str = "notify";
const HELP_TOKENS: [&str; 3] = ["--help", "-help", "-h"];

const EXAMPLES: &str = "\
Examples:
  notify \"Operation completed successfully\" --type success
  notify \"An error occurred\" --type error --timeout 10
  notify \"Build done\" --title \"My App\" --type success
  notify \"Download started\" --title \"Downloader\" --type info --autoclose false";

/// notify - A CLI notification utility
#[derive(clap::Parser, Debug)]
#[command(name = BIN_NAME, after_help = EXAMPLES, args_override_self = true)]
struct Cli {
    /// The notification message
    message: Option<String>,

    /// Custom title for the notification (default: based on type)
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,

    /// Type of notification: success, error, info, warning
    #[arg(long = "type", value_name = "TYPE", default_value = "info")]
    kind: String,

    /// Timeout in seconds
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        allow_negative_numbers = true
    )]
    timeout: i64,

    /// Auto close after timeout
    #[arg(
        long,
        value_name = "BOOLEAN",
        default_value = "true",
        action = clap::ArgAction::Set,
        value_parser = parse_autoclose,
    )]
    autoclose: bool,
}

fn parse_autoclose(value: &str) -> Result<bool, Infallible> {
    Ok(value.eq_ignore_ascii_case("true"))
}

#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    #[error("help requested")]
    HelpRequested,

    #[error("Message is required as a positional argument")]
    MissingMessage,

    #[error(transparent)]
    InvalidType(#[from] UnknownCategory),

    #[error(transparent)]
    Cli(#[from] clap::Error),
}

impl ArgsError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ArgsError::HelpRequested => 0,
            ArgsError::MissingMessage | ArgsError::InvalidType(_) => 1,
            ArgsError::Cli(e) => u8::try_from(e.exit_code()).unwrap_or(1),
        }
    }
}

pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Type,
    Title,
    Timeout,
    AutoClose,
}

impl Flag {
    const ALL: [Flag; 4] = [Flag::Type, Flag::Title, Flag::Timeout, Flag::AutoClose];

    fn name(self) -> &'static str {
        match self {
            Flag::Type => "type",
            Flag::Title => "title",
            Flag::Timeout => "timeout",
            Flag::AutoClose => "autoclose",
        }
    }

    /// `--name` or the legacy `-name`, with the value in the next token.
    fn bare(token: &str) -> Option<Flag> {
        let name = token
            .strip_prefix("--")
            .or_else(|| token.strip_prefix('-'))?;

        Flag::ALL.into_iter().find(|flag| flag.name() == name)
    }

    /// `--name=value`.
    fn inline(token: &str) -> Option<(Flag, &str)> {
        let rest = token.strip_prefix("--")?;

        Flag::ALL.into_iter().find_map(|flag| {
            rest.strip_prefix(flag.name())?
                .strip_prefix('=')
                .map(|value| (flag, value))
        })
    }
}

/// Rewrites the lenient legacy argument grammar into a strict argv for clap:
/// every option becomes `--name=value` and the message goes after `--`.
fn canonicalize<I>(tokens: I) -> Result<Vec<String>, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut tokens = tokens.into_iter();
    let mut argv = vec![BIN_NAME.to_owned()];
    let mut message = None;

    let mut push = |flag: Flag, value: &str| {
        if flag == Flag::Timeout {
            if let Err(e) = value.parse::<i64>() {
                log::debug!("Ignoring malformed timeout '{value}': {e}");
                return;
            }
        }

        argv.push(format!("--{}={value}", flag.name()));
    };

    while let Some(token) = tokens.next() {
        if HELP_TOKENS.contains(&token.as_str()) {
            return Err(ArgsError::HelpRequested);
        }

        if let Some((flag, value)) = Flag::inline(&token) {
            push(flag, value);
            continue;
        }

        if let Some(flag) = Flag::bare(&token) {
            match tokens.next() {
                Some(value) => push(flag, &value),
                None => log::debug!("Skipping '{token}' without a value"),
            }
            continue;
        }

        if token.starts_with('-') {
            log::debug!("Skipping unrecognized option '{token}'");
        } else if message.is_none() {
            message = Some(token);
        } else {
            log::debug!("Ignoring extra positional argument '{token}'");
        }
    }

    if let Some(message) = message {
        argv.push("--".to_owned());
        argv.push(message);
    }

    Ok(argv)
}

/// Parses the process arguments, program name excluded.
pub fn parse<I>(tokens: I) -> Result<NotificationRequest, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let cli = Cli::try_parse_from(canonicalize(tokens)?)?;

    let message = cli
        .message
        .filter(|message| !message.is_empty())
        .ok_or(ArgsError::MissingMessage)?;

    let category: Category = cli.kind.parse()?;

    let title = cli
        .title
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| category.palette().label.to_owned());

    Ok(NotificationRequest {
        category,
        title,
        message,
        timeout_secs: cli.timeout,
        auto_close: cli.autoclose,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Result<NotificationRequest, ArgsError> {
        parse(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let request = parse_args(&["hello"]).unwrap();

        assert_eq!(
            request,
            NotificationRequest {
                category: Category::Info,
                title: "Info".to_owned(),
                message: "hello".to_owned(),
                timeout_secs: 5,
                auto_close: true,
            }
        );
    }

    #[test]
    fn test_title_defaults_to_capitalized_type() {
        for (token, title) in [
            ("success", "Success"),
            ("error", "Error"),
            ("info", "Info"),
            ("warning", "Warning"),
        ] {
            let request = parse_args(&["msg", "--type", token]).unwrap();
            assert_eq!(request.category.as_str(), token);
            assert_eq!(request.title, title);
        }
    }

    #[test]
    fn test_explicit_title() {
        let request = parse_args(&["Build done", "--title", "My App", "--type", "success"]).unwrap();
        assert_eq!(request.title, "My App");
        assert_eq!(request.category, Category::Success);
    }

    #[test]
    fn test_empty_title_uses_default() {
        let request = parse_args(&["msg", "--title=", "--type=error"]).unwrap();
        assert_eq!(request.title, "Error");
    }

    #[test]
    fn test_invalid_type_is_rejected() {
        let err = parse_args(&["--type", "bogus", "hi"]).unwrap_err();

        assert!(matches!(err, ArgsError::InvalidType(_)));
        assert_eq!(err.exit_code(), 1);
        let text = err.to_string();
        assert!(text.contains("bogus"), "got: {text}");
        assert!(text.contains("success, error, info, warning"), "got: {text}");
    }

    #[test]
    fn test_type_is_case_sensitive() {
        let err = parse_args(&["hi", "--type", "Success"]).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidType(_)));
    }

    #[test]
    fn test_empty_type_is_rejected() {
        let err = parse_args(&["hi", "--type="]).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidType(_)));
    }

    #[test]
    fn test_missing_message() {
        let err = parse_args(&["--type", "success"]).unwrap_err();
        assert!(matches!(err, ArgsError::MissingMessage));
        assert_eq!(err.exit_code(), 1);

        assert!(matches!(parse_args(&[]), Err(ArgsError::MissingMessage)));
        assert!(matches!(parse_args(&[""]), Err(ArgsError::MissingMessage)));
    }

    #[test]
    fn test_missing_message_checked_before_type() {
        let err = parse_args(&["--type", "bogus"]).unwrap_err();
        assert!(matches!(err, ArgsError::MissingMessage));
    }

    #[test]
    fn test_help_short_circuits() {
        for token in ["--help", "-help", "-h"] {
            let err = parse_args(&["--type", "bogus", token, "msg"]).unwrap_err();
            assert!(matches!(err, ArgsError::HelpRequested));
            assert_eq!(err.exit_code(), 0);
        }
    }

    #[test]
    fn test_help_consumed_as_flag_value() {
        let request = parse_args(&["msg", "--title", "--help"]).unwrap();
        assert_eq!(request.title, "--help");
    }

    #[test]
    fn test_malformed_timeout_keeps_default() {
        let request = parse_args(&["msg", "--timeout", "abc"]).unwrap();
        assert_eq!(request.timeout_secs, 5);

        let request = parse_args(&["msg", "--timeout", "1.5"]).unwrap();
        assert_eq!(request.timeout_secs, 5);
    }

    #[test]
    fn test_signed_timeouts_are_accepted() {
        let request = parse_args(&["msg", "--timeout=-3"]).unwrap();
        assert_eq!(request.timeout_secs, -3);

        let request = parse_args(&["msg", "-timeout", "-7"]).unwrap();
        assert_eq!(request.timeout_secs, -7);

        let request = parse_args(&["msg", "--timeout", "+8"]).unwrap();
        assert_eq!(request.timeout_secs, 8);
    }

    #[test]
    fn test_malformed_timeout_keeps_previous_value() {
        let request = parse_args(&["msg", "--timeout", "10", "--timeout", "abc"]).unwrap();
        assert_eq!(request.timeout_secs, 10);
    }

    #[test]
    fn test_repeated_flags_last_wins() {
        let request = parse_args(&["msg", "--type", "error", "--type", "warning"]).unwrap();
        assert_eq!(request.category, Category::Warning);
    }

    #[test]
    fn test_autoclose_values() {
        for (value, expected) in [
            ("true", true),
            ("TRUE", true),
            ("True", true),
            ("false", false),
            ("False", false),
            ("no", false),
            ("1", false),
            ("", false),
        ] {
            let request = parse_args(&["msg", "--autoclose", value]).unwrap();
            assert_eq!(request.auto_close, expected, "--autoclose {value:?}");
        }
    }

    #[test]
    fn test_legacy_single_dash_flags() {
        let request = parse_args(&[
            "-type", "warning", "-title", "Disk", "-timeout", "7", "-autoclose", "false", "low",
        ])
        .unwrap();

        assert_eq!(request.category, Category::Warning);
        assert_eq!(request.title, "Disk");
        assert_eq!(request.timeout_secs, 7);
        assert!(!request.auto_close);
        assert_eq!(request.message, "low");
    }

    #[test]
    fn test_equals_form() {
        let request =
            parse_args(&["--type=error", "--title=Oops", "--timeout=12", "--autoclose=false", "x"])
                .unwrap();

        assert_eq!(request.category, Category::Error);
        assert_eq!(request.title, "Oops");
        assert_eq!(request.timeout_secs, 12);
        assert!(!request.auto_close);
    }

    #[test]
    fn test_flag_value_may_start_with_dash() {
        let request = parse_args(&["msg", "--title", "-x-"]).unwrap();
        assert_eq!(request.title, "-x-");
    }

    #[test]
    fn test_unknown_options_are_skipped() {
        let request = parse_args(&["--verbose", "msg", "-x", "--color=red", "--version"]).unwrap();
        assert_eq!(request.message, "msg");
        assert_eq!(request.category, Category::Info);
    }

    #[test]
    fn test_first_positional_wins() {
        let request = parse_args(&["first", "second", "--type", "error", "third"]).unwrap();
        assert_eq!(request.message, "first");
    }

    #[test]
    fn test_trailing_flag_without_value_is_skipped() {
        let request = parse_args(&["msg", "--type"]).unwrap();
        assert_eq!(request.category, Category::Info);
    }

    #[test]
    fn test_message_containing_dashes() {
        let request = parse_args(&["--title", "T", "a -- b"]).unwrap();
        assert_eq!(request.message, "a -- b");
    }

    #[test]
    fn test_help_text_mentions_options() {
        let help = help_text();
        for needle in ["--title", "--type", "--timeout", "--autoclose", "Examples:"] {
            assert!(help.contains(needle), "help is missing {needle}: {help}");
        }
    }
}
