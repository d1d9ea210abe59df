//! JSON array output assembled incrementally
//!
//! The scanner writes one path per line. `JsonArrayFormatter` reframes those
//! lines as the elements of a single JSON array, writing each element as soon
//! as its terminating newline arrives.

use std::io::{self, Write};

use super::ResultFormatter;

/// Array bookkeeping kept separate from the byte buffer so items can be
/// emitted while the buffer is borrowed.
#[derive(Debug, Default)]
struct ArrayState {
    opened: bool,
    wrote_any: bool,
}

impl ArrayState {
    fn push_item<W: Write>(&mut self, out: &mut W, item: &[u8]) -> io::Result<()> {
        if item.is_empty() {
            return Ok(());
        }
        if !self.opened {
            out.write_all(b"[")?;
            self.opened = true;
        }
        if self.wrote_any {
            out.write_all(b",")?;
        }
        // Paths that are not valid UTF-8 get U+FFFD replacements
        let text = String::from_utf8_lossy(item);
        serde_json::to_writer(&mut *out, &*text)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        self.wrote_any = true;
        Ok(())
    }

    fn close<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.opened {
            out.write_all(b"]\n")
        } else {
            out.write_all(b"[]\n")
        }
    }
}

/// Writes newline-delimited input as one JSON array of strings.
///
/// Input may arrive in fragments that do not line up with item boundaries;
/// bytes after the last newline are held until more input or [`finish`].
/// Empty lines are dropped. Output is only a complete array once
/// [`finish`] has been called.
///
/// Bytes passed to `write` are accepted before any item is emitted. If the
/// inner writer then fails, the error is returned by the next call, which
/// consumes nothing.
///
/// [`finish`]: ResultFormatter::finish
pub struct JsonArrayFormatter<W: Write> {
    out: W,
    pending: Vec<u8>,
    array: ArrayState,
    /// Inner writer failure, reported by the next call
    deferred: Option<io::Error>,
    finished: bool,
}

impl<W: Write> JsonArrayFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pending: Vec::new(),
            array: ArrayState::default(),
            deferred: None,
            finished: false,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Emit every complete line in `pending`, searching from `search_from`.
    ///
    /// Bytes before `search_from` are known to contain no newline.
    fn emit_complete_items(&mut self, search_from: usize) -> io::Result<()> {
        let mut consumed = 0;
        let mut search = search_from;
        while let Some(pos) = self.pending[search..].iter().position(|&b| b == b'\n') {
            let end = search + pos;
            let pushed = self
                .array
                .push_item(&mut self.out, &self.pending[consumed..end]);
            consumed = end + 1;
            search = consumed;
            if pushed.is_err() {
                self.pending.drain(..consumed);
                return pushed;
            }
        }
        self.pending.drain(..consumed);
        Ok(())
    }

    fn close_array(&mut self) -> io::Result<()> {
        // Unterminated trailing fragment counts as the last item
        if !self.pending.is_empty() {
            let rest = std::mem::take(&mut self.pending);
            self.array.push_item(&mut self.out, &rest)?;
        }
        self.array.close(&mut self.out)?;
        self.out.flush()
    }
}

impl<W: Write> Write for JsonArrayFormatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.finished {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "JSON array already closed",
            ));
        }
        if let Some(err) = self.deferred.take() {
            return Err(err);
        }
        let search_from = self.pending.len();
        self.pending.extend_from_slice(buf);
        if let Err(err) = self.emit_complete_items(search_from) {
            self.deferred = Some(err);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(err) = self.deferred.take() {
            return Err(err);
        }
        self.out.flush()
    }
}

impl<W: Write> ResultFormatter for JsonArrayFormatter<W> {
    fn finish(&mut self) -> io::Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        let closed = self.close_array();
        match self.deferred.take() {
            Some(err) => Err(err),
            None => closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(chunks: &[&[u8]]) -> String {
        let mut formatter = JsonArrayFormatter::new(Vec::new());
        for chunk in chunks {
            formatter.write_all(chunk).unwrap();
        }
        formatter.finish().unwrap();
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    fn parse(output: &str) -> Vec<String> {
        serde_json::from_str(output).expect("output should be a JSON array of strings")
    }

    #[test]
    fn test_no_items_is_empty_array() {
        assert_eq!(render(&[]), "[]\n");
    }

    #[test]
    fn test_single_item() {
        assert_eq!(render(&[b"/a/b\n"]), "[\"/a/b\"]\n");
    }

    #[test]
    fn test_many_items_in_one_write() {
        let output = render(&[b"/one\n/two\n/three\n"]);
        assert_eq!(output, "[\"/one\",\"/two\",\"/three\"]\n");
        assert_eq!(parse(&output), vec!["/one", "/two", "/three"]);
    }

    #[test]
    fn test_items_split_across_fragments() {
        let output = render(&[b"/o", b"ne\n/t", b"w", b"o\n", b"\n", b"/three", b"\n"]);
        assert_eq!(output, "[\"/one\",\"/two\",\"/three\"]\n");
    }

    #[test]
    fn test_byte_at_a_time() {
        let input = "/data/日本語/ハ\u{3099}.mkv\n/data/second\n";
        let mut formatter = JsonArrayFormatter::new(Vec::new());
        for byte in input.as_bytes() {
            formatter.write_all(std::slice::from_ref(byte)).unwrap();
        }
        formatter.finish().unwrap();
        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(
            parse(&output),
            vec!["/data/日本語/ハ\u{3099}.mkv", "/data/second"]
        );
    }

    #[test]
    fn test_empty_lines_are_ignored() {
        assert_eq!(render(&[b"\n\n/a\n\n\n/b\n\n"]), "[\"/a\",\"/b\"]\n");
        assert_eq!(render(&[b"\n\n\n"]), "[]\n");
    }

    #[test]
    fn test_trailing_fragment_becomes_last_item() {
        assert_eq!(render(&[b"/a\n/b"]), "[\"/a\",\"/b\"]\n");
        assert_eq!(render(&[b"/only"]), "[\"/only\"]\n");
    }

    #[test]
    fn test_items_are_escaped() {
        let output = render(&[b"quote\"d\nback\\slash\ntab\there\nbell\x07\n"]);
        assert_eq!(
            output,
            "[\"quote\\\"d\",\"back\\\\slash\",\"tab\\there\",\"bell\\u0007\"]\n"
        );
        assert_eq!(
            parse(&output),
            vec!["quote\"d", "back\\slash", "tab\there", "bell\x07"]
        );
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let output = render(&[b"bad\xffname\n"]);
        assert_eq!(parse(&output), vec!["bad\u{fffd}name"]);
    }

    #[test]
    fn test_nothing_written_before_first_item() {
        let mut formatter = JsonArrayFormatter::new(Vec::new());
        formatter.write_all(b"/partial").unwrap();
        assert!(formatter.get_ref().is_empty());
        formatter.write_all(b"\n").unwrap();
        assert_eq!(formatter.get_ref().as_slice(), b"[\"/partial\"");
    }

    #[test]
    fn test_finish_twice_is_harmless() {
        let mut formatter = JsonArrayFormatter::new(Vec::new());
        formatter.write_all(b"/a\n").unwrap();
        formatter.finish().unwrap();
        formatter.finish().unwrap();
        assert_eq!(formatter.into_inner(), b"[\"/a\"]\n");
    }

    #[test]
    fn test_write_after_finish_fails() {
        let mut formatter = JsonArrayFormatter::new(Vec::new());
        formatter.finish().unwrap();
        assert!(formatter.write_all(b"/late\n").is_err());
        assert_eq!(formatter.into_inner(), b"[]\n");
    }

    /// Fails the first write it sees with `kind`, then behaves like a Vec.
    struct FailOnce {
        out: Vec<u8>,
        fail_with: Option<io::ErrorKind>,
    }

    impl Write for FailOnce {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if let Some(kind) = self.fail_with.take() {
                return Err(io::Error::new(kind, "transient"));
            }
            self.out.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_inner_failure_reported_without_consuming_input() {
        let inner = FailOnce {
            out: Vec::new(),
            fail_with: Some(io::ErrorKind::WouldBlock),
        };
        let mut formatter = JsonArrayFormatter::new(inner);

        // Accepted even though emitting the item failed
        assert_eq!(formatter.write(b"/lost\n").unwrap(), 6);

        let err = formatter.write(b"/kept\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WouldBlock);

        // Nothing of the rejected call was buffered, so a retry is not duplicated
        formatter.write_all(b"/kept\n").unwrap();
        formatter.finish().unwrap();
        let output = String::from_utf8(formatter.into_inner().out).unwrap();
        assert_eq!(parse(&output), vec!["/kept"]);
    }

    #[test]
    fn test_interrupted_inner_writer_does_not_duplicate() {
        let inner = FailOnce {
            out: Vec::new(),
            fail_with: Some(io::ErrorKind::Interrupted),
        };
        let mut formatter = JsonArrayFormatter::new(inner);
        formatter.write_all(b"/a\n/b\n").unwrap();
        formatter.finish().unwrap();
        let output = String::from_utf8(formatter.into_inner().out).unwrap();
        assert_eq!(parse(&output), vec!["/a", "/b"]);
    }

    #[test]
    fn test_finish_reports_deferred_failure() {
        let inner = FailOnce {
            out: Vec::new(),
            fail_with: Some(io::ErrorKind::BrokenPipe),
        };
        let mut formatter = JsonArrayFormatter::new(inner);
        formatter.write_all(b"/a\n").unwrap();
        let err = formatter.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_unfinished_array_is_left_open() {
        let mut formatter = JsonArrayFormatter::new(Vec::new());
        formatter.write_all(b"/a\n/b\n").unwrap();
        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output, "[\"/a\",\"/b\"");
        assert!(serde_json::from_str::<Vec<String>>(&output).is_err());
    }
}
