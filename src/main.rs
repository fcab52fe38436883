use std::io;

use clap::Parser;

use parsum::executor::ExecutorKind;
use parsum::output::PREVIEW_LIMIT;
use parsum::session;
use parsum::Settings;

/// Adds two integer arrays element by element on a pool of workers.
#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Opts {
    /// Seed for the random fill instead of the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Where the workers run.
    #[arg(long, value_enum, default_value_t = ExecutorKind::Threads)]
    executor: ExecutorKind,
    /// How many elements of each array to print.
    #[arg(long, default_value_t = PREVIEW_LIMIT)]
    preview: usize,
}

impl From<Opts> for Settings {
    fn from(opts: Opts) -> Self {
        let settings = Settings::default()
            .with_executor(opts.executor)
            .with_preview(opts.preview);
        match opts.seed {
            Some(seed) => settings.with_seed(seed),
            None => settings,
        }
    }
}

fn main() {
    env_logger::builder().format_timestamp(None).init();
    let settings = Settings::from(Opts::parse());

    let stdin = io::stdin();
    match session::run(&settings, stdin.lock(), io::stdout().lock()) {
        Ok(outcome) => log::debug!("summed {} elements", outcome.result.len()),
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(err.exit_code());
        }
    }
}
