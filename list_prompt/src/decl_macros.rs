// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that saves you from writing `Ok(())` at the end of every painting function.
///
/// ```ignore
/// fn paint(&mut self) -> PromptResult<()> {
///     throws!({
///         queue!(self.write, MoveToColumn(0))?;
///         self.write.flush()?;
///     });
/// }
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Like [`format!`] but writes into a stack allocated [`crate::InlineString`].
#[macro_export]
macro_rules! inline_string {
    ($($format:tt)*) => {{
        let mut acc = $crate::InlineString::new();
        _ = ::std::fmt::Write::write_fmt(&mut acc, format_args!($($format)*));
        acc
    }};
}
