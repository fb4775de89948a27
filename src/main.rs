mod cli;
mod driver;
mod error;
mod expression;
mod logger;

use std::io;
use std::process;

/// Exit quietly with the shell convention for a signal death (128 + signal)
/// when the user interrupts a pipeline mid-stream.
#[cfg(unix)]
fn install_interrupt_handler() -> io::Result<()> {
    use signal_hook::consts::signal::SIGINT;
    use signal_hook::iterator::Signals;
    use std::thread;

    let mut signals = Signals::new([SIGINT])?;

    thread::spawn(move || {
        if signals.forever().next().is_some() {
            process::exit(128 + SIGINT);
        }
    });

    Ok(())
}

fn main() {
    if logger::init_logging().is_err() {
        eprintln!("Warning: could not initialize logging");
    }

    #[cfg(unix)]
    if let Err(e) = install_interrupt_handler() {
        tracing::warn!("could not install interrupt handler: {}", e);
    }

    let args = cli::parse_args();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = driver::run(&args.expression, &mut stdin.lock(), &mut stdout.lock());

    match result {
        Ok(()) => {}
        // Downstream closed early (e.g. `pick : | head`); expected, stay quiet
        Err(ref err) if err.is_broken_pipe() => process::exit(1),
        Err(err) => {
            eprintln!("ERROR: {}", err);
            process::exit(1);
        }
    }
}
