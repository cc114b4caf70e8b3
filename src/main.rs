#![warn(clippy::pedantic)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::str_to_string)]
#![warn(clippy::unused_trait_names)]

mod args;
mod category;
mod config;
mod dispatch;
mod icon;
mod notifier;
mod request;

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::args::ArgsError;
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::notifier::DesktopNotifier;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            if record.level() == log::Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(buf, "[{}] {}", record.level(), record.args())
            }
        })
        .init();

    let tokens = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());

    let request = match args::parse(tokens) {
        Ok(request) => request,
        Err(e) => return usage_error(&e),
    };

    let config = Config::from_env();
    let notifier = DesktopNotifier::new();

    if let Err(e) = Dispatcher::new(&config, &notifier).dispatch(&request) {
        log::debug!("Dispatch failed: {e:?}");
        let _ = report_dispatch_error(&e, &mut io::stderr().lock());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn usage_error(e: &ArgsError) -> ExitCode {
    if let Err(err) = report_usage(e, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        log::debug!("Could not print usage: {err}");
    }

    ExitCode::from(e.exit_code())
}

/// Help goes to `out` when asked for, everything else to `err`.
fn report_usage(e: &ArgsError, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    match e {
        ArgsError::HelpRequested => write!(out, "{}", args::help_text()),
        ArgsError::MissingMessage => write!(err, "{e}\n\n{}", args::help_text()),
        ArgsError::InvalidType(_) => writeln!(err, "{e}"),
        ArgsError::Cli(inner) if inner.use_stderr() => write!(err, "{}", inner.render()),
        ArgsError::Cli(inner) => write!(out, "{}", inner.render()),
    }
}

fn report_dispatch_error(e: &anyhow::Error, err: &mut impl Write) -> io::Result<()> {
    writeln!(err, "Error displaying notification: {e:#}")
}
