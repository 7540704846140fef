//! Relaxed JSON preprocessing
//!
//! Blanks out `//` line comments, `/* */` block comments and trailing commas
//! so the result can be handed to a strict JSON parser. Blanked bytes become
//! spaces and newlines are kept, so parser error positions still line up with
//! the original text.

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Code,
    Str,
    StrEscape,
    LineComment,
    BlockComment,
}

/// Strip comments and trailing commas from relaxed JSON text
pub fn strip_comments(input: &str) -> String {
    let mut buf = input.as_bytes().to_vec();
    blank_comments(&mut buf);
    blank_trailing_commas(&mut buf);

    // Only whole comment spans (ASCII delimited) are blanked, so this stays UTF-8.
    match String::from_utf8(buf) {
        Ok(stripped) => stripped,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

fn blank_comments(buf: &mut [u8]) {
    let mut state = State::Code;
    let mut i = 0;

    while i < buf.len() {
        let b = buf[i];
        match state {
            State::Code => match (b, buf.get(i + 1).copied()) {
                (b'"', _) => state = State::Str,
                (b'/', Some(b'/')) => {
                    buf[i] = b' ';
                    buf[i + 1] = b' ';
                    i += 1;
                    state = State::LineComment;
                }
                (b'/', Some(b'*')) => {
                    buf[i] = b' ';
                    buf[i + 1] = b' ';
                    i += 1;
                    state = State::BlockComment;
                }
                _ => {}
            },
            State::Str => match b {
                b'\\' => state = State::StrEscape,
                b'"' => state = State::Code,
                _ => {}
            },
            State::StrEscape => state = State::Str,
            State::LineComment => {
                if b == b'\n' {
                    state = State::Code;
                } else {
                    buf[i] = b' ';
                }
            }
            State::BlockComment => {
                if b == b'*' && buf.get(i + 1) == Some(&b'/') {
                    buf[i] = b' ';
                    buf[i + 1] = b' ';
                    i += 1;
                    state = State::Code;
                } else if b != b'\n' {
                    buf[i] = b' ';
                }
            }
        }
        i += 1;
    }
}

fn blank_trailing_commas(buf: &mut [u8]) {
    let mut in_string = false;
    let mut escaped = false;
    let mut pending_comma: Option<usize> = None;

    for i in 0..buf.len() {
        let b = buf[i];

        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => {
                in_string = true;
                pending_comma = None;
            }
            b',' => pending_comma = Some(i),
            b'}' | b']' => {
                if let Some(at) = pending_comma.take() {
                    buf[at] = b' ';
                }
            }
            b' ' | b'\t' | b'\n' | b'\r' => {}
            _ => pending_comma = None,
        }
    }
}
