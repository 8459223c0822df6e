use std::io::{stderr, stdout, Write};
use std::process::ExitCode;

use clap::Parser;
use kubectl_fzf_cli::cli_args::Args;
use kubectl_fzf_cli::execute;
use kubectl_fzf_core::config::Environment;
use kubectl_fzf_core::execution::SystemRunner;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let runner = SystemRunner::new(args.kubectl.as_str(), args.fzf.as_str());
    let environment = Environment::from_process();

    match execute(&args, runner, &environment, &mut stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut message = e.to_string();
            if !message.ends_with('\n') {
                message.push('\n');
            }
            if stderr().write_all(message.as_bytes()).is_err() {
                println!("failed to write the message {message} on stderr");
            }
            ExitCode::FAILURE
        }
    }
}
