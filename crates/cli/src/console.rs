//! Prompting and validated input over a generic reader/writer pair.
//!
//! Numeric prompts re-ask until the input parses. End of input returns
//! `None` so callers can wind down instead of spinning.

use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Prompt and read one trimmed line. `None` on end of input.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for an integer, re-asking until one parses.
    pub fn prompt_i64(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Please enter a valid integer.")?,
            }
        }
    }

    /// Prompt for a number, re-asking until one parses.
    pub fn prompt_f64(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<f64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Please enter a valid number (e.g. 12.50).")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reprompts_until_integer_parses() {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new("abc\n 42 \n"), &mut out);
        assert_eq!(console.prompt_i64("n: ").unwrap(), Some(42));
        drop(console);

        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("Please enter a valid integer."));
    }

    #[test]
    fn reprompts_until_number_parses() {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new("cheap\n12.50\n"), &mut out);
        assert_eq!(console.prompt_f64("price: ").unwrap(), Some(12.5));
        drop(console);

        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("Please enter a valid number (e.g. 12.50)."));
    }

    #[test]
    fn end_of_input_yields_none() {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new(""), &mut out);
        assert_eq!(console.prompt_line("x: ").unwrap(), None);
        assert_eq!(console.prompt_i64("x: ").unwrap(), None);
    }

    #[test]
    fn prompt_line_trims_input() {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new("  Widget  \n"), &mut out);
        assert_eq!(console.prompt_line("name: ").unwrap(), Some("Widget".to_string()));
        drop(console);

        assert_eq!(String::from_utf8(out).unwrap(), "name: ");
    }
}
