// SPDX-License-Identifier: MPL-2.0
//! Fluent translations embedded from `assets/i18n/`.
//!
//! The locale is picked from `--lang`, then `settings.toml`, then the
//! system locale, falling back to en-US. A key missing from every bundle
//! renders as `MISSING: key` so gaps show up on screen.

pub mod fluent;
