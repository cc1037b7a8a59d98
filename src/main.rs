use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;
use termpad::app::{run, App};
use termpad::kernel::commands::file::open_path;
use termpad::kernel::services::settings;
use termpad::tui::{TerminalGuard, TerminationFlag};

mod logging;

fn main() -> io::Result<()> {
    let logging = logging::init();
    let startup_path = std::env::args_os().nth(1).map(PathBuf::from);

    let settings = settings::load_settings();
    let mut app = App::new(&settings);

    let guard = TerminalGuard::new()?;
    let termination = TerminationFlag::new();
    #[cfg(unix)]
    let _signals = termpad::tui::terminal_guard::install_termination_signals(
        guard.restorer(),
        termination.clone(),
    )?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let local = tokio::task::LocalSet::new();

    if let Some(path) = startup_path {
        let workspace = app.workspace().clone();
        local.spawn_local(async move { open_path(&workspace, path).await });
    }

    let result = local.block_on(&runtime, run(&mut terminal, &mut app, &termination));

    drop(terminal);
    drop(guard);
    if let Err(err) = &result {
        tracing::error!(error = %err, "terminal i/o failed");
    }
    if let Some(signal) = termination.get() {
        drop(logging);
        std::process::exit(signal.exit_code());
    }
    result
}
