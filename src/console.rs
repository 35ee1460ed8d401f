use std::io::{self, BufRead, Write};

/// Blocking source of input lines
pub trait InputSource {
    /// Read one line without its line terminator.\
    /// Returns `None` once the input is exhausted
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Sink for output lines
pub trait OutputSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Reads lines from any buffered reader (stdin, a `Cursor` in tests)
pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader { reader }
    }
}

impl LineReader<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        LineReader::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for LineReader<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        // Strip the terminator, keep everything else for the caller to judge
        let len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(len);
        Ok(Some(buf))
    }
}

/// Writes lines to any writer (stdout, a `Vec<u8>` in tests)
pub struct LineWriter<W> {
    writer: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(writer: W) -> Self {
        LineWriter { writer }
    }

    #[allow(dead_code)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl LineWriter<io::Stdout> {
    pub fn stdout() -> Self {
        LineWriter::new(io::stdout())
    }
}

impl<W: Write> OutputSink for LineWriter<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::io::Cursor;

    /// Scripted input: each entry is one line
    pub fn scripted(lines: &[&str]) -> LineReader<Cursor<Vec<u8>>> {
        let mut text = String::new();
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }
        LineReader::new(Cursor::new(text.into_bytes()))
    }

    pub fn captured() -> LineWriter<Vec<u8>> {
        LineWriter::new(Vec::new())
    }

    /// The lines written so far
    pub fn lines(writer: LineWriter<Vec<u8>>) -> Vec<String> {
        String::from_utf8(writer.into_inner())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_read_lines_strips_terminators() {
        let mut reader = LineReader::new(Cursor::new(b"42\r\n  abc \nlast".to_vec()));
        assert_eq!(reader.read_line().unwrap(), Some("42".to_string()));
        assert_eq!(reader.read_line().unwrap(), Some("  abc ".to_string()));
        assert_eq!(reader.read_line().unwrap(), Some("last".to_string()));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_empty_line_is_not_end_of_input() {
        let mut reader = scripted(&[""]);
        assert_eq!(reader.read_line().unwrap(), Some(String::new()));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_write_lines() {
        let mut writer = captured();
        writer.write_line("one").unwrap();
        (&mut writer).write_line("two").unwrap();
        assert_eq!(lines(writer), vec!["one", "two"]);
    }
}
