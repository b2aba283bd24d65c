use crate::process::ExitStatus;

/// Loop state that outlives a single iteration.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub status: ExitStatus,
    pub running: bool,
    pub line_number: usize,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            status: ExitStatus::SUCCESS,
            running: true,
            line_number: 0,
        }
    }

    pub fn next_line(&mut self) -> usize {
        self.line_number += 1;
        self.line_number
    }

    pub fn terminate(&mut self, status: ExitStatus) {
        self.status = status;
        self.running = false;
    }
}
