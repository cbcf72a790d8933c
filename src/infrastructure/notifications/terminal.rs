use std::borrow::Cow;

use async_trait::async_trait;
use colored::Colorize;

use super::message;
use crate::domain::entities::delta::DiffReport;
use crate::domain::ports::notifier::{NotificationError, Notifier};

const SEPARATOR_WIDTH: usize = 60;

/// Prints updates to stdout; used when no webhook is configured.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn format_update(report: &DiffReport) -> String {
        let separator = "\u{2500}".repeat(SEPARATOR_WIDTH);
        let title = if report.forced {
            " CoronaBot (forced) ".on_blue().white().bold()
        } else {
            " CoronaBot ".on_blue().white().bold()
        };

        let mut lines = vec![separator.dimmed().to_string(), title.to_string()];
        for line in message::render_text(report).lines() {
            lines.push(sanitize(line).into_owned());
        }
        lines.push(separator.dimmed().to_string());
        lines.join("\n")
    }

    fn format_failure(message: &str) -> String {
        format!("{} {}", " ERROR ".on_red().white().bold(), sanitize(message))
    }
}

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn notify_update(&self, report: &DiffReport) -> Result<(), NotificationError> {
        println!("{}", Self::format_update(report));
        Ok(())
    }

    async fn notify_failure(&self, message: &str) -> Result<(), NotificationError> {
        eprintln!("{}", Self::format_failure(message));
        Ok(())
    }
}

/// Strip C0 control characters (including ESC) from text that came off the network.
fn sanitize(s: &str) -> Cow<'_, str> {
    if s.bytes()
        .any(|b| matches!(b, 0x00..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F | 0x7F))
    {
        Cow::Owned(
            s.chars()
                .filter(|&c| !matches!(c as u32, 0x00..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F | 0x7F))
                .collect(),
        )
    } else {
        Cow::Borrowed(s)
    }
}
