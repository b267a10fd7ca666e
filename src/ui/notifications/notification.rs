// SPDX-License-Identifier: MPL-2.0
//! A single toast: severity plus a localized message.

use crate::app::config::{NOTIFICATION_LONG_MS, NOTIFICATION_SHORT_MS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Handle to a toast owned by a [`Manager`](super::Manager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub(super) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A save went through.
    Success,
    /// Something was rejected or fell back to defaults.
    Warning,
    /// Something failed; stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "\u{2713}",
            Severity::Warning => "\u{26A0}",
            Severity::Error => "\u{2715}",
        }
    }

    /// How long a visible toast lives. `None` means until dismissed.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_millis(NOTIFICATION_SHORT_MS)),
            Severity::Warning => Some(Duration::from_millis(NOTIFICATION_LONG_MS)),
            Severity::Error => None,
        }
    }
}

/// Toast content. The message is an FTL key resolved at render time so a
/// language change also updates toasts already on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    severity: Severity,
    key: String,
    args: Vec<(String, String)>,
}

impl Notification {
    pub fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            severity,
            key: key.into(),
            args: Vec::new(),
        }
    }

    pub fn success(key: impl Into<String>) -> Self {
        Self::new(Severity::Success, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    /// Adds a FTL variable, e.g. `$reason` for save errors.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }

    /// Resolves the message in the current locale.
    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        if self.args.is_empty() {
            return i18n.tr(&self.key);
        }
        let args: Vec<(&str, &str)> = self
            .args
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        i18n.tr_with_args(&self.key, &args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_differ_per_severity() {
        let accents = [
            Severity::Success.accent(),
            Severity::Warning.accent(),
            Severity::Error.accent(),
        ];
        assert_ne!(accents[0], accents[1]);
        assert_ne!(accents[1], accents[2]);
        assert_ne!(accents[0], accents[2]);
    }

    #[test]
    fn warnings_outlive_successes_and_errors_stay() {
        let success = Severity::Success.lifetime().expect("timed");
        let warning = Severity::Warning.lifetime().expect("timed");
        assert!(warning > success);
        assert_eq!(Severity::Error.lifetime(), None);
    }

    #[test]
    fn text_interpolates_arguments() {
        let i18n = I18n::default();
        let toast = Notification::error("notification-device-save-error")
            .with_arg("reason", "disk full");

        assert_eq!(toast.args().len(), 1);
        assert!(toast.text(&i18n).contains("disk full"));
        assert_eq!(
            Notification::success("notification-device-saved").text(&i18n),
            i18n.tr("notification-device-saved")
        );
    }
}
