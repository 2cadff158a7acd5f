//! Content line folding.

/// Maximum line length in octets, CRLF excluded.
const MAX_LINE_OCTETS: usize = 75;

/// Appends a content line to `output`, folded and terminated by CRLF.
///
/// Continuation lines start with a single space that counts towards their
/// length. Folds only between UTF-8 characters.
pub fn push_folded(output: &mut String, line: &str) {
    let mut segment_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();
        if segment_len + char_len > MAX_LINE_OCTETS {
            output.push_str("\r\n ");
            segment_len = 1;
        }
        output.push(c);
        segment_len += char_len;
    }

    output.push_str("\r\n");
}

/// Folds a single line, without the trailing CRLF.
#[must_use]
pub fn fold_line(line: &str) -> String {
    let mut output = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3 + 2);
    push_folded(&mut output, line);
    output.truncate(output.len() - 2);
    output
}
