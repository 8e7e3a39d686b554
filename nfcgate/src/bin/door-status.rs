// nfcgate/src/bin/door-status.rs

use std::process::ExitCode;

use env_logger::Env;

use nfcgate::Notifier;
use nfcgate::cli::{AnnounceArgs, Invocation, parse_args};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match parse_args::<AnnounceArgs, _, _>(std::env::args_os()) {
        Invocation::Run(args) => args,
        Invocation::Exit(code) => return ExitCode::from(code),
    };

    // Delivery failures are not reported to the caller
    Notifier::new(&args.notifier_config()).announce(args.state);
    ExitCode::SUCCESS
}
