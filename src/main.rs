//! hover - snap and deb packaging for desktop applications.
//!
//! Every failure is printed as `hover: <message>` and exits with status 1.

use hover_packaging::cli::{self, Args, OutputManager, PREFIX};
use std::{io::Write, process};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse_args();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .format(|buf, record| writeln!(buf, "{} {}", PREFIX, record.args()))
        .init();

    let exit_code = match cli::run(&args).await {
        Ok(()) => 0,
        Err(e) => {
            if OutputManager::new().error(&e.to_string()).is_err() {
                eprintln!("{} {}", PREFIX, e);
            }
            1
        }
    };

    process::exit(exit_code);
}
