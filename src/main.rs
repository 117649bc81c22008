// SPDX-License-Identifier: MPL-2.0
use jac_community::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Gestor Comunitario JAC

USAGE:
  jac_community [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --config-dir <PATH>      Directory holding settings.toml
                           (overrides JAC_CONFIG_DIR)
  --log <FILTER>           Log filter, e.g. `debug` or `jac_community=trace`
                           (overrides RUST_LOG, defaults to `info`)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            eprintln!("invalid --config-dir: {err}");
            None
        });
    let log: Option<String> = args.opt_value_from_str("--log").unwrap_or_else(|err| {
        eprintln!("invalid --log: {err}");
        None
    });

    let filter = match log {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(config_dir.clone());
    app::run(Flags { config_dir })
}
