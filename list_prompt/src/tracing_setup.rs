// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Set up [`tracing_subscriber`] for apps that use the prompt.
//!
//! The prompt paints on `stdout`, so while it is on screen logs should go to a file (or
//! `stderr` when that is redirected). Pick where with [`WriterConfig`], then call
//! [`init_tracing`].
//!
//! ```no_run
//! use r3bl_list_prompt::{init_tracing, TracingConfig, TracingScope, WriterConfig};
//! use tracing_core::LevelFilter;
//!
//! let _guard = init_tracing(TracingConfig {
//!     scope: TracingScope::Global,
//!     writer_config: WriterConfig::File("/tmp/lp_log.txt".into()),
//!     level_filter: LevelFilter::DEBUG,
//! })?;
//! tracing::debug!(message = "logging to a file");
//! # Ok::<(), miette::Report>(())
//! ```

use std::path::PathBuf;

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt,
                         registry::LookupSpan,
                         util::SubscriberInitExt,
                         Layer};

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub scope: TracingScope,
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// Global for apps. Thread local for tests, so that each test can install its own
/// subscriber and drop it when done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingScope {
    Global,
    ThreadLocal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    /// Path of the log file. It is created if missing and appended to otherwise.
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl WriterConfig {
    #[must_use]
    pub fn display_preference(&self) -> Option<DisplayPreference> {
        match self {
            WriterConfig::Display(it) | WriterConfig::DisplayAndFile(it, _) => Some(*it),
            WriterConfig::None | WriterConfig::File(_) => None,
        }
    }

    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        match self {
            WriterConfig::File(it) | WriterConfig::DisplayAndFile(_, it) => Some(it),
            WriterConfig::None | WriterConfig::Display(_) => None,
        }
    }
}

impl TracingConfig {
    /// Log at `DEBUG` level to the given file, or the default log file.
    #[must_use]
    pub fn new_file(maybe_file_path: Option<String>) -> Self {
        Self {
            scope: TracingScope::Global,
            writer_config: WriterConfig::File(
                maybe_file_path
                    .unwrap_or_else(|| crate::DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }
}

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install a subscriber built from `tracing_config`.
///
/// - [`TracingScope::Global`] sets the global default, which can't be changed once set.
///   Returns `None`.
/// - [`TracingScope::ThreadLocal`] sets the default for this thread only and returns a
///   guard. Dropping the guard restores the previous subscriber.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn init_tracing(
    tracing_config: TracingConfig,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let scope = tracing_config.scope;
    let layers = try_create_layers(&tracing_config)?;
    Ok(match scope {
        TracingScope::Global => {
            tracing_subscriber::registry().with(layers).init();
            None
        }
        TracingScope::ThreadLocal => {
            Some(tracing_subscriber::registry().with(layers).set_default())
        }
    })
}

/// Returns the layers without installing them.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.level_filter;
    let mut acc: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Applies to every layer, including ones added later that don't filter by level.
    acc.push(Box::new(level_filter));

    if let Some(display_preference) = tracing_config.writer_config.display_preference() {
        acc.push(create_display_layer(level_filter, display_preference));
    }

    if let Some(file_path) = tracing_config.writer_config.file_path() {
        acc.push(try_create_file_layer(level_filter, file_path)?);
    }

    Ok(acc)
}

fn create_display_layer<S>(
    level_filter: LevelFilter,
    display_preference: DisplayPreference,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!().with_ansi(true);
    match display_preference {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    }
}

fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    file_path: &str,
) -> miette::Result<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let file_appender = try_create_file_appender(file_path)?;
    Ok(Box::new(
        create_fmt!()
            .with_ansi(false)
            .with_writer(file_appender)
            .with_filter(level_filter),
    ))
}

/// A file appender that never rolls over.
///
/// Note that if you wrap this up in a non blocking writer, as shown below, nothing gets
/// written, since the guard is dropped right away:
///
/// ```ignore
/// tracing_appender::non_blocking(try_create_file_appender("foo")?);
/// ```
///
/// # Errors
///
/// Returns an error if `file_path` has no file name or its folder can't be accessed.
pub fn try_create_file_appender(
    file_path: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(file_path);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access folder of {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("{} does not name a file.", path.display())
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}
