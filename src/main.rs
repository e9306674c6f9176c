//! pwd-assess: interactive password strength checker
//!
//! Reads a masked password, prints its assessment and loops until `quit` or
//! `exit` (or Esc / Ctrl-C).

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Stylize};
use crossterm::terminal;
use pwd_assess::report::{is_quit_command, LineKind, Report};
use pwd_assess::{init_rules, Assessor, StrengthTier};
use secrecy::SecretString;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PROMPT: &str = "Enter a password (or 'quit' to exit): ";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let count = init_rules().context("Failed to load password denylist")?;
    tracing::info!("assessing against {} common passwords", count);

    let assessor = Assessor::default();
    let interactive = io::stdin().is_terminal();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", "Password Strength Checker".bold())?;

    loop {
        let input = if interactive {
            read_masked(&mut stdout)?
        } else {
            read_plain(&mut stdout)?
        };
        let Some(input) = input else {
            break;
        };
        if is_quit_command(&input) {
            break;
        }

        let result = assessor.assess(&SecretString::new(input.into()));
        print_report(&mut stdout, &Report::new(&result))?;
    }

    writeln!(stdout, "Goodbye!")?;
    Ok(())
}

/// Reads one password with echo replaced by `*`. Returns `None` on Esc or
/// Ctrl-C.
fn read_masked(out: &mut impl Write) -> Result<Option<String>> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    terminal::enable_raw_mode().context("Failed to enable raw terminal mode")?;
    let input = read_keys(out);
    terminal::disable_raw_mode().context("Failed to restore terminal mode")?;
    writeln!(out)?;

    input
}

fn read_keys(out: &mut impl Write) -> Result<Option<String>> {
    let mut buffer = String::new();
    loop {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read().context("Failed to read terminal input")?
        else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }

        match code {
            KeyCode::Enter => return Ok(Some(buffer)),
            KeyCode::Esc => return Ok(None),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(None),
            KeyCode::Backspace => {
                if buffer.pop().is_some() {
                    write!(out, "\u{8} \u{8}")?;
                    out.flush()?;
                }
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                write!(out, "*")?;
                out.flush()?;
            }
            _ => {}
        }
    }
}

/// Line-based fallback for piped input. Returns `None` at end of input.
fn read_plain(out: &mut impl Write) -> Result<Option<String>> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    writeln!(out)?;
    if read == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn tier_color(tier: StrengthTier) -> Color {
    match tier {
        StrengthTier::VeryWeak => Color::Red,
        StrengthTier::Weak => Color::DarkYellow,
        StrengthTier::Moderate => Color::Yellow,
        StrengthTier::Strong => Color::Green,
        StrengthTier::VeryStrong => Color::Cyan,
    }
}

fn print_report(out: &mut impl Write, report: &Report<'_>) -> Result<()> {
    let color = tier_color(report.result().tier);
    for line in report.lines() {
        let text = line.text.as_str();
        match line.kind {
            LineKind::Meter => writeln!(out, "{}", text.with(color))?,
            LineKind::Tier => writeln!(out, "{}", text.with(color).bold())?,
            LineKind::Positive => writeln!(out, "{}", text.green())?,
            LineKind::Negative => writeln!(out, "{}", text.red())?,
            LineKind::Heading => writeln!(out, "{}", text.yellow().bold())?,
            LineKind::Recommendation => writeln!(out, "{}", text)?,
        }
    }
    writeln!(out)?;
    Ok(())
}
