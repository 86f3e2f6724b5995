use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use compdemo::Settings;

#[derive(Parser, Debug)]
#[command(name = "compdemo", version, about = "Walks through constants, arithmetic and geometry.")]
struct Args {
    /// Print the debug message after the demo (also COMPDEMO_DEBUG).
    #[arg(long)]
    debug: bool,

    /// Print stage timings to stderr (also COMPDEMO_TIMING).
    #[arg(long)]
    timing: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let settings = Settings::resolve(args.debug, args.timing);
    compdemo::timing::init(settings.timing);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = compdemo::demo::run(&mut out, &settings).and_then(|_| out.flush());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("failed to write output: {err}");
            ExitCode::FAILURE
        }
    }
}
