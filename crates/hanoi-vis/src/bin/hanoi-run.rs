//! Tower of Hanoi terminal runner
//!
//! Print a solver run, or play the visual demonstration as paced text.
//!
//! ```text
//! hanoi-run <correct|faulty|demo> <n>
//! ```

use std::env;
use std::process::ExitCode;

use hanoi_core::{
    completion_lines, error_line, replay_line, schedule, Clock, DiskCount, HanoiError, LogKind,
    LogLine, SystemClock, Transcript, Variant, NARRATION_DELAY,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: hanoi-run <correct|faulty|demo> <n>";

fn print_line(line: &LogLine) {
    match line.kind {
        LogKind::Blank => println!(),
        LogKind::Heading => {
            println!("{}", line.text);
            println!("{}", "=".repeat(line.text.len()));
        }
        _ => println!("{}", line.text),
    }
}

fn run(variant: Variant, n: DiskCount) {
    let transcript = Transcript::for_run(variant, n);
    let mut clock = SystemClock::start();
    transcript.preamble.iter().for_each(print_line);
    clock.sleep_until(NARRATION_DELAY);
    transcript.body.iter().for_each(print_line);
}

fn demo(n: DiskCount) {
    let moves = Variant::Correct.generate(n);
    Transcript::for_demo(n, &moves).lines().for_each(print_line);

    let mut clock = SystemClock::start();
    schedule(
        &moves,
        &mut clock,
        |mv, index| print_line(&replay_line(index, mv)),
        || completion_lines(moves.len()).iter().for_each(print_line),
    );
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hanoi_run=info,hanoi_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (mode, n) = match args.as_slice() {
        [mode, n] => (mode.as_str(), n.as_str()),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let n = match DiskCount::parse(n) {
        Ok(n) => n,
        Err(e) => return fail(&e),
    };
    tracing::debug!("Running {} with {} disks", mode, n);

    match mode {
        "demo" => demo(n),
        other => match other.parse::<Variant>() {
            Ok(variant) => run(variant, n),
            Err(e) => {
                eprintln!("{USAGE}");
                return fail(&e);
            }
        },
    }
    ExitCode::SUCCESS
}

fn fail(err: &HanoiError) -> ExitCode {
    eprintln!("{}", error_line(err).text);
    ExitCode::FAILURE
}
