// nfcgate/src/bin/nfc-getcard.rs

use std::io;
use std::process::ExitCode;

use env_logger::Env;
use log::{error, info};

use nfcgate::cli::{GetCardArgs, Invocation, parse_args};
use nfcgate::session::{self, Detection};
use nfcgate::Context;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match parse_args::<GetCardArgs, _, _>(std::env::args_os()) {
        Invocation::Run(args) => args,
        Invocation::Exit(code) => return ExitCode::from(code),
    };
    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(1);
        }
    };

    let context = match Context::init_with(&config.drivers) {
        Ok(context) => context,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(1);
        }
    };
    info!("drivers: {}", context.driver_names().join(", "));

    let result = session::detect(&context, &config, &mut io::stdout().lock());
    match &result {
        Ok(Detection::PollFailed(e)) => error!("polling failed: {}", e),
        Ok(_) => {}
        Err(e) => error!("{}", e),
    }
    ExitCode::from(session::exit_code(&result))
}
