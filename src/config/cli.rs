use crate::core::Console;
use crate::utils::error::Result;
use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

/// Line-based console over any reader/writer pair; `stdio()` for the terminal.
///
/// Prompts go to the output writer unless a separate prompt writer is set,
/// which keeps a machine-readable summary alone on the output stream.
pub struct StdConsole<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    prompt_writer: Option<Box<dyn Write>>,
}

impl StdConsole<StdinLock<'static>, StdoutLock<'static>> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            prompt_writer: None,
        }
    }

    pub fn with_prompt_writer(mut self, prompt_writer: impl Write + 'static) -> Self {
        self.prompt_writer = Some(Box::new(prompt_writer));
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn write(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_prompt(&mut self, text: &str) -> Result<()> {
        match self.prompt_writer.as_mut() {
            Some(prompt_writer) => {
                prompt_writer.write_all(text.as_bytes())?;
                // prompts have no trailing newline
                prompt_writer.flush()?;
                Ok(())
            }
            None => self.write(text),
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        // invalid UTF-8 becomes U+FFFD and fails menu/number parsing downstream
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(|c| c == '\r' || c == '\n').len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_lines_until_eof() {
        let mut console = StdConsole::new(Cursor::new("1\r\n2.5\n"), Vec::new());
        assert_eq!(console.read_line().unwrap(), Some("1".to_string()));
        assert_eq!(console.read_line().unwrap(), Some("2.5".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_read_line_accepts_invalid_utf8() {
        let mut console = StdConsole::new(Cursor::new(b"\xff\n1".to_vec()), Vec::new());
        assert_eq!(console.read_line().unwrap(), Some("\u{FFFD}".to_string()));
        assert_eq!(console.read_line().unwrap(), Some("1".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_write_goes_to_writer() {
        let mut console = StdConsole::new(Cursor::new(""), Vec::new());
        console.write_prompt("Enter width (m): ").unwrap();
        console.write("Total: 0 UAH\n").unwrap();
        assert_eq!(
            console.into_writer(),
            b"Enter width (m): Total: 0 UAH\n".to_vec()
        );
    }

    #[test]
    fn test_prompt_writer_keeps_output_clean() {
        let mut console =
            StdConsole::new(Cursor::new(""), Vec::new()).with_prompt_writer(io::sink());
        console.write_prompt("Enter width (m): ").unwrap();
        console.write("{}\n").unwrap();
        assert_eq!(console.into_writer(), b"{}\n".to_vec());
    }
}
