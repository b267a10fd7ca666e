// SPDX-License-Identifier: MPL-2.0
use powerswitch::app::{self, paths, Flags};

const HELP: &str = "\
Powerswitch - accessory switch control panel

USAGE:
  powerswitch [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --lang <LOCALE>         UI language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml

ENVIRONMENT:
  POWERSWITCH_CONFIG_DIR  Config directory when --config-dir is absent
  RUST_LOG                Log filter (default: powerswitch=info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("powerswitch=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: read_option(&mut args, "--lang"),
        config_dir: read_option(&mut args, "--config-dir"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Reads an optional `--key value` pair, logging malformed values.
fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str::<_, String>(key) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(key, %error, "invalid command-line value");
            None
        }
    }
}
