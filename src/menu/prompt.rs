//! Line-oriented prompting
//!
//! Reads answers from any `BufRead` and writes prompts to any `Write`, so the
//! menu can be driven from stdin or from a script in tests.

use std::io::{BufRead, Write};

use crate::error::{KitchenError, KitchenResult};

/// Prompts for answers and re-asks until they parse
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line
    pub fn say(&mut self, text: &str) -> KitchenResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `prompt` and read one trimmed line
    ///
    /// # Errors
    ///
    /// `InputClosed` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> KitchenResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(KitchenError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer
    ///
    /// Validation errors are shown and the question repeated; any other
    /// error is returned.
    pub fn ask_with<T, F>(&mut self, prompt: &str, parse: F) -> KitchenResult<T>
    where
        F: Fn(&str) -> KitchenResult<T>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_validation() => self.say(&format!("  {}", e))?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Like `ask_with`, but a blank answer means `None`
    pub fn ask_optional_with<T, F>(&mut self, prompt: &str, parse: F) -> KitchenResult<Option<T>>
    where
        F: Fn(&str) -> KitchenResult<T>,
    {
        self.ask_with(prompt, |answer| {
            if answer.is_empty() {
                Ok(None)
            } else {
                parse(answer).map(Some)
            }
        })
    }

    /// Ask for a number between 1 and `max`
    pub fn choose(&mut self, prompt: &str, max: usize) -> KitchenResult<usize> {
        self.ask_with(prompt, |answer| match answer.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => Ok(n),
            _ => Err(KitchenError::Validation(format!(
                "Please enter a number between 1 and {}",
                max
            ))),
        })
    }

    /// Yes/no question; blank means no
    pub fn confirm(&mut self, prompt: &str) -> KitchenResult<bool> {
        self.ask_with(prompt, |answer| match answer.to_lowercase().as_str() {
            "y" | "yes" => Ok(true),
            "" | "n" | "no" => Ok(false),
            _ => Err(KitchenError::Validation("Please answer yes or no".into())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse::parse_positive;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_ask_trims() {
        let mut p = prompter("  tomato \n");
        assert_eq!(p.ask("Name: ").unwrap(), "tomato");
        assert_eq!(output(p), "Name: ");
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut p = prompter("abc\n-1\n2.5\n");
        assert_eq!(p.ask_with("Quantity: ", parse_positive).unwrap(), 2.5);

        let text = output(p);
        assert_eq!(text.matches("Quantity: ").count(), 3);
        assert!(text.contains("Invalid number: 'abc'"));
        assert!(text.contains("must be greater than zero"));
    }

    #[test]
    fn test_closed_input() {
        let mut p = prompter("");
        assert!(matches!(p.ask("? "), Err(KitchenError::InputClosed)));

        let mut p = prompter("nope\n");
        assert!(matches!(
            p.ask_with("Quantity: ", parse_positive),
            Err(KitchenError::InputClosed)
        ));
    }

    #[test]
    fn test_choose_and_confirm() {
        let mut p = prompter("0\n10\n3\nmaybe\nY\n\n");
        assert_eq!(p.choose("Option: ", 9).unwrap(), 3);
        assert!(p.confirm("Sure? ").unwrap());
        assert!(!p.confirm("Sure? ").unwrap());
        assert!(output(p).contains("between 1 and 9"));
    }

    #[test]
    fn test_optional_answer() {
        let mut p = prompter("\n4\n");
        assert_eq!(p.ask_optional_with("Days: ", parse_positive).unwrap(), None);
        assert_eq!(p.ask_optional_with("Days: ", parse_positive).unwrap(), Some(4.0));
    }
}
