//! Terminal alert

use application::ports::AlertPort;

/// Writes alerts to stderr, one line each
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalAlert;

impl AlertPort for TerminalAlert {
    #[allow(clippy::print_stderr)]
    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }
}
