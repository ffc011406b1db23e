// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::BufRead;
use std::io::Write;
use std::process::Command;

use flashcards_core::error::Fallible;
use flashcards_core::error::fail;

/// Something that can wipe the screen.
pub trait ClearScreen {
    fn clear(&mut self) -> Fallible<()>;
}

/// Runs a clear-screen command, failing if it exits unsuccessfully.
fn run_clear_command(program: &str, args: &[&str]) -> Fallible<()> {
    let status = Command::new(program).args(args).status()?;
    if !status.success() {
        return fail(format!("`{program}` exited with {status}"));
    }
    Ok(())
}

/// Unix-like hosts: `clear`.
pub struct PosixClear;

impl ClearScreen for PosixClear {
    fn clear(&mut self) -> Fallible<()> {
        run_clear_command("clear", &[])
    }
}

/// Everything else: `cls`, which is a shell builtin.
pub struct WindowsClear;

impl ClearScreen for WindowsClear {
    fn clear(&mut self) -> Fallible<()> {
        run_clear_command("cmd", &["/C", "cls"])
    }
}

/// The clear-screen implementation for the platform we are running on.
pub fn host_clear_screen() -> Box<dyn ClearScreen> {
    if cfg!(unix) {
        Box::new(PosixClear)
    } else {
        Box::new(WindowsClear)
    }
}

/// The terminal a session talks to: lines go out, acknowledgments come in.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    screen: Box<dyn ClearScreen>,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, screen: Box<dyn ClearScreen>) -> Self {
        Self {
            input,
            output,
            screen,
        }
    }

    /// Clear the screen. Failures are logged and ignored.
    pub fn clear(&mut self) {
        if let Err(e) = self.screen.clear() {
            log::warn!("Failed to clear the screen: {e}");
        }
    }

    /// Write each line followed by a newline, then flush.
    pub fn write_lines(&mut self, lines: &[String]) -> Fallible<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Block until the user enters a line. Its content is ignored.
    pub fn acknowledge(&mut self) -> Fallible<()> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return fail("standard input closed before the session ended");
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    /// Counts how many times the screen was cleared.
    pub struct CountingClear(pub Rc<Cell<usize>>);

    impl ClearScreen for CountingClear {
        fn clear(&mut self) -> Fallible<()> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    pub struct BrokenClear;

    impl ClearScreen for BrokenClear {
        fn clear(&mut self) -> Fallible<()> {
            fail("no terminal")
        }
    }
}
