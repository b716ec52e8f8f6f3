//! Line-oriented prompts on stdin/stdout.
use std::fmt;
use std::io::{BufRead, ErrorKind, Write};

use crate::error::HelperError;

pub const TOKEN_PROMPT: &str = "Please provide your Personal Token:";
pub const DOMAIN_PROMPT: &str = "Please provide the Domain Name:";
pub const ZONE_PROMPT: &str = "Enter a DNS zone:";

/// The three values collected from the user, already trimmed.
pub struct Answers {
    pub token: String,
    pub domain_name: String,
    pub dns_zone: String,
}

impl fmt::Debug for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Answers")
            .field("token", &"<redacted>")
            .field("domain_name", &self.domain_name)
            .field("dns_zone", &self.dns_zone)
            .finish()
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label`, then read one line and return it without surrounding whitespace.
    pub fn ask(&mut self, field: &'static str, label: &str) -> Result<String, HelperError> {
        writeln!(self.output, "{label}")
            .and_then(|_| self.output.flush())
            .map_err(|e| HelperError::input(field, e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| HelperError::input(field, e))?;
        if read == 0 || !line.ends_with('\n') {
            return Err(HelperError::input(
                field,
                std::io::Error::new(ErrorKind::UnexpectedEof, "input closed"),
            ));
        }

        Ok(line.trim().to_string())
    }

    pub fn collect(&mut self) -> Result<Answers, HelperError> {
        let token = self.ask("personal token", TOKEN_PROMPT)?;
        let domain_name = self.ask("domain name", DOMAIN_PROMPT)?;
        let dns_zone = self.ask("DNS zone", ZONE_PROMPT)?;

        Ok(Answers {
            token,
            domain_name,
            dns_zone,
        })
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
