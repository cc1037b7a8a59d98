//! Raw mode / alternate screen lifetime and termination signals.

use std::io;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::{
            cursor,
            event::{EnableBracketedPaste, EnableMouseCapture},
            execute,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            EnableMouseCapture,
            cursor::SetCursorStyle::SteadyBar
        )?;
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::{
            cursor,
            event::{DisableBracketedPaste, DisableMouseCapture},
            execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // Every step runs even if an earlier one failed; the first error wins.
        let raw = disable_raw_mode();
        let screen = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableBracketedPaste,
            DisableMouseCapture,
            cursor::SetCursorStyle::DefaultUserShape,
            cursor::Show
        );
        raw.and(screen)
    }
}

/// Restores the terminal at most once, from whichever thread gets there first.
#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }

    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    /// A failed setup is rolled back before the error is returned.
    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        let restorer = TerminalRestorer {
            restored: Arc::new(AtomicBool::new(false)),
            ops,
        };
        if let Err(err) = restorer.ops.setup() {
            let _ = restorer.restore();
            return Err(err);
        }
        Ok(Self { restorer })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Last termination signal received, polled by the event loop.
#[derive(Debug, Clone, Default)]
pub struct TerminationFlag(Arc<AtomicU8>);

impl TerminationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self, signal: TerminationSignal) {
        let code = match signal {
            TerminationSignal::SigInt => 1,
            TerminationSignal::SigTerm => 2,
        };
        self.0.store(code, Ordering::SeqCst);
    }

    pub fn get(&self) -> Option<TerminationSignal> {
        match self.0.load(Ordering::SeqCst) {
            1 => Some(TerminationSignal::SigInt),
            2 => Some(TerminationSignal::SigTerm),
            _ => None,
        }
    }
}

#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    flag: TerminationFlag,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        for sig in signals.forever() {
            let signal = match sig {
                SIGINT => TerminationSignal::SigInt,
                SIGTERM => TerminationSignal::SigTerm,
                _ => continue,
            };
            tracing::info!(?signal, "termination signal received");
            flag.raise(signal);

            // The event loop gets a grace period before the hard exit.
            std::thread::sleep(Duration::from_secs(2));
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
