// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `lp` shows a list prompt for the lines piped into it, and prints the value of the
//! chosen one.
//!
//! ```text
//! git branch --format='%(refname:short)' | lp -m "Switch to"
//! ```

use std::io::stdin;

use clap::{CommandFactory, Parser};
use crossterm::style::Stylize;
use r3bl_list_prompt::{choices_from_json,
                       choices_from_lines,
                       init_tracing,
                       is_stdin_piped,
                       is_stdout_piped,
                       select_from_list,
                       PromptConfig,
                       PromptError,
                       StdinIsPipedResult::{StdinIsNotPiped, StdinIsPiped},
                       StdoutIsPipedResult::{StdoutIsNotPiped, StdoutIsPiped},
                       TracingConfig,
                       DEVELOPMENT_MODE};

use crate::clap_config::CLIArg;

/// Exit code for a prompt that the user cancelled with Ctrl+C.
const EXIT_CODE_INTERRUPTED: i32 = 130;

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    let enable_logging = DEVELOPMENT_MODE || cli_arg.global_options.enable_logging;
    let _guard = if enable_logging {
        init_tracing(TracingConfig::new_file(
            cli_arg.global_options.log_file.clone(),
        ))?
    } else {
        None
    };

    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    let bin_name = CLIArg::command();
    let bin_name = bin_name.get_bin_name().unwrap_or("this command");

    match (is_stdin_piped(), is_stdout_piped()) {
        (StdinIsPiped, StdoutIsNotPiped) => show_prompt(cli_arg)?,
        (StdinIsPiped, StdoutIsPiped) => {
            show_error_do_not_pipe_stdout(bin_name);
        }
        (StdinIsNotPiped, StdoutIsPiped) => {
            show_error_need_to_pipe_stdin(bin_name);
            show_error_do_not_pipe_stdout(bin_name);
        }
        (StdinIsNotPiped, StdoutIsNotPiped) => {
            show_error_need_to_pipe_stdin(bin_name);
        }
    }

    tracing::debug!(message = "Stop logging...");

    Ok(())
}

fn show_prompt(cli_arg: CLIArg) -> miette::Result<()> {
    let maybe_choices = if cli_arg.json {
        choices_from_json(stdin().lock())?
    } else {
        Some(choices_from_lines(stdin().lock())?)
    };

    tracing::debug!(message = "choices", maybe_choices = ?maybe_choices);

    let config = PromptConfig {
        message: cli_arg.message,
        qmark: cli_arg.qmark,
        page_size: cli_arg.page_size,
        ..Default::default()
    };

    match select_from_list(config, maybe_choices) {
        Ok(value) => {
            tracing::debug!(message = "selected", value = %value);
            println!("{value}");
            Ok(())
        }
        Err(PromptError::Interrupted) => {
            tracing::debug!(message = "interrupted by user");
            std::process::exit(EXIT_CODE_INTERRUPTED);
        }
        Err(error) => Err(error.into()),
    }
}

fn show_error_need_to_pipe_stdin(bin_name: &str) {
    let msg = format!(
        "Please pipe the output of another command into {bin_name}. \
         \n✅ For example: `ls -1 | {bin_name} -m \"Pick a file\"`",
    )
    .green()
    .to_string();
    eprintln!("{msg}");
}

fn show_error_do_not_pipe_stdout(bin_name: &str) {
    let msg = format!(
        "Please do *not* pipe the output of {bin_name} to another command. \
         \n❎ For eg, don't do this: `ls -1 | {bin_name} | cat`",
    )
    .red()
    .to_string();
    eprintln!("{msg}");
}

mod clap_config {
    use clap::{Args, Parser};
    use r3bl_list_prompt::DEFAULT_QMARK;

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "lp")]
    #[command(
        about = "Pick one item from a list piped in via stdin, and print its value 👉"
    )]
    #[command(version)]
    #[command(next_line_help = true)]
    #[command(arg_required_else_help(false))]
    pub struct CLIArg {
        /// The question shown above the list
        #[arg(long, short = 'm', default_value = "Select an item")]
        pub message: String,

        /// The symbol in front of the question
        #[arg(long, default_value = DEFAULT_QMARK)]
        pub qmark: String,

        /// Rows per page. 0 shows every item on one page
        #[arg(value_name = "rows", long, short = 'p', default_value_t = 0)]
        pub page_size: usize,

        /// Read stdin as a JSON array of choices, instead of one label per line.
        /// For eg: `["a", {"separator": "---"}, {"name": "b", "disabled": "why"}]`
        #[arg(long, short = 'j')]
        pub json: bool,

        #[command(flatten)]
        pub global_options: GlobalOption,
    }

    #[derive(Debug, Args)]
    pub struct GlobalOption {
        #[arg(
            global = true,
            long,
            short = 'l',
            help = "Log app output to a file named `list_prompt_log.txt` for debugging."
        )]
        pub enable_logging: bool,

        #[arg(
            global = true,
            long,
            value_name = "path",
            help = "Write the log to this file instead. Only used with `--enable-logging`."
        )]
        pub log_file: Option<String>,
    }
}
