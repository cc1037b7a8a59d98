use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockOps {
    calls: Mutex<Vec<&'static str>>,
    fail_setup: bool,
}

impl TerminalOps for MockOps {
    fn setup(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("setup");
        if self.fail_setup {
            return Err(io::Error::new(io::ErrorKind::Other, "no tty"));
        }
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("restore");
        Ok(())
    }
}

#[test]
fn guard_restores_on_drop() {
    let ops = Arc::new(MockOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn restorer_runs_once() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();
    assert!(!restorer.is_restored());

    restorer.restore().unwrap();
    restorer.restore().unwrap();
    assert!(restorer.is_restored());
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn failed_setup_is_rolled_back() {
    let ops = Arc::new(MockOps {
        fail_setup: true,
        ..MockOps::default()
    });

    let err = TerminalGuard::with_ops(ops.clone()).err().unwrap();
    assert_eq!(err.to_string(), "no tty");
    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn termination_flag_reports_last_signal() {
    let flag = TerminationFlag::new();
    assert_eq!(flag.get(), None);

    let shared = flag.clone();
    shared.raise(TerminationSignal::SigTerm);
    assert_eq!(flag.get(), Some(TerminationSignal::SigTerm));
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}
