use std::fmt;
use std::io::{self, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line<W: Write, T: fmt::Display>(
    out: &mut W,
    color: &str,
    icon: &str,
    msg: T,
) -> io::Result<()> {
    writeln!(out, "{}{}{} {}{}", color, BOLD, icon, RESET, msg)
}

pub fn info<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    line(out, FG_BLUE, ICON_INFO, msg)
}

pub fn success<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    line(out, FG_GREEN, ICON_OK, msg)
}

pub fn warning<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    line(out, FG_YELLOW, ICON_WARN, msg)
}

/// Errors always go to stderr, regardless of where the session writes.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Formatted section header
pub fn header<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "\n{}{}{}{}\n", FG_BLUE, BOLD, msg, RESET)
}
