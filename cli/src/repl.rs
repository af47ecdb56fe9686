use std::io::{self, BufRead, Write};

use log::{debug, info};
use tamago_core::{CompileError, compile_line_at};

/// Compile each input line on its own and write the result: the IR text on
/// success, otherwise the parse errors or the lowering error. A failing line
/// never stops the loop. Lines are read as bytes; invalid UTF-8 is replaced
/// and the replacement characters are skipped by the tokenizer.
pub fn start<R: BufRead, W: Write>(mut input: R, mut out: W) -> io::Result<()> {
    let mut count = 0usize;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        count += 1;
        let line = decode_line(&buf);
        if std::str::from_utf8(&buf).is_err() {
            debug!("repl: line {} is not valid UTF-8", count);
        }
        match compile_line_at(&line, count) {
            Ok(module) => write!(out, "{}", module)?,
            Err(err @ CompileError::Parse(_)) => write!(out, "{}", err)?,
            Err(err @ CompileError::Lower(_)) => writeln!(out, "{}", err)?,
        }
        out.flush()?;
    }
    info!("repl: end of input after {} line(s)", count);
    Ok(())
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        let mut out = Vec::new();
        start(input.as_bytes(), &mut out).expect("repl");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn prints_ir_for_valid_lines() {
        assert_eq!(run("21 + 21\n"), "define i64 @main() {\nentry:\n\t%0 = add i64 21, 21\n\tret i64 %0\n}\n");
    }

    #[test]
    fn prints_parse_errors_and_keeps_going() {
        let out = run("+ ; *\n7\n");
        assert!(out.starts_with(
            "parse errors:\n\tno prefix parse function for + found\n\tno prefix parse function for * found\n"
        ));
        assert!(out.ends_with("\tret i64 7\n}\n"));
    }

    #[test]
    fn invalid_utf8_line_does_not_end_the_session() {
        let mut out = Vec::new();
        start(&b"1 \xff 2\n21 + 21\n"[..], &mut out).expect("repl");
        let out = String::from_utf8(out).expect("utf8");
        // The bad byte is dropped, leaving two statements; the last one is returned.
        assert!(out.starts_with("define i64 @main() {\nentry:\n\tret i64 2\n}\n"), "got:\n{}", out);
        assert!(out.ends_with("\t%0 = add i64 21, 21\n\tret i64 %0\n}\n"), "got:\n{}", out);
    }

    #[test]
    fn last_line_without_newline_is_compiled() {
        assert_eq!(run("7"), "define i64 @main() {\nentry:\n\tret i64 7\n}\n");
    }

    #[test]
    fn blank_line_reports_empty_program() {
        assert_eq!(run("\n"), "empty program\n");
    }
}
