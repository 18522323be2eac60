use std::io::{self, BufRead, IsTerminal, Write};

use crate::modules::auth::password::read_password;

/// Line-oriented console the menus talk to.
///
/// Generic over its input and output so scripted sessions can drive the menus.
pub struct Console<R, W> {
    input: R,
    output: W,
    hide_secrets: bool,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        let hide_secrets = io::stdin().is_terminal();
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
            hide_secrets,
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hide_secrets: false,
        }
    }

    /// Print one line of output
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }

    /// Read one line with the trailing newline removed.
    ///
    /// End of input is reported as [io::ErrorKind::UnexpectedEof].
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input closed",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Print a prompt and read the answer
    pub fn prompt(&mut self, message: &str) -> io::Result<String> {
        self.say(message)?;
        self.read_line()
    }

    /// Prompt for a password, hiding it when talking to a terminal
    pub fn prompt_secret(&mut self, message: &str) -> io::Result<String> {
        self.say(message)?;
        if self.hide_secrets {
            read_password()
        } else {
            self.read_line()
        }
    }

    /// Keep asking until `parse` accepts the answer.
    ///
    /// There is no default value; only closed input ends the loop.
    pub fn prompt_until<T>(
        &mut self,
        message: &str,
        retry_message: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<T> {
        self.say(message)?;
        loop {
            let input = self.read_line()?;
            match parse(&input) {
                Some(value) => return Ok(value),
                None => self.say(retry_message)?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
