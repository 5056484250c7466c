//! Binary entrypoint for the `modlint` structure ruleset plugin.

use std::io::{self, BufReader, Write};

use modlint_config::Config;
use modlint_plugin::{run, telemetry};
use ortho_config::OrthoConfig;

fn main() {
    let config = match Config::load_from_iter(std::env::args_os()) {
        Ok(config) => config,
        Err(error) => {
            writeln!(io::stderr().lock(), "failed to load configuration: {error}").ok();
            std::process::exit(2);
        }
    };

    if let Err(error) = telemetry::initialise(&config) {
        writeln!(io::stderr().lock(), "{error}").ok();
        std::process::exit(2);
    }

    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    if let Err(error) = run(&mut reader, &mut writer) {
        tracing::error!(%error, "plugin response could not be delivered");
        writeln!(io::stderr().lock(), "{error}").ok();
        std::process::exit(1);
    }
}
