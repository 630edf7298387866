/// Minimal CSV field splitter for a single line supporting quoted fields:
/// the delimiter splits fields outside quotes, double quotes may wrap a
/// field, and inside quotes `""` yields a literal `"`.
///
/// The final field is always appended, so a line with N delimiters yields
/// N+1 fields. Embedded newlines are not supported; the reader hands this
/// function one physical line at a time.
pub fn split_delimited_line(line: &str, delimiter: char) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    cur.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                cur.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == delimiter {
            out.push(std::mem::take(&mut cur));
        } else {
            cur.push(c);
        }
    }
    out.push(cur);
    out
}

#[cfg(test)]
mod tests {
    use super::split_delimited_line;

    fn split(line: &str) -> Vec<String> {
        split_delimited_line(line, ',')
    }

    #[test]
    fn splits_plain_fields() {
        assert_eq!(split("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_empty_fields_including_trailing() {
        assert_eq!(split("a,,c,"), vec!["a", "", "c", ""]);
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn quoted_field_may_contain_delimiter() {
        assert_eq!(split(r#""Acme, Inc.",X"#), vec!["Acme, Inc.", "X"]);
    }

    #[test]
    fn doubled_quote_inside_quotes_is_literal() {
        assert_eq!(split(r#""She said ""hi""""#), vec![r#"She said "hi""#]);
    }

    #[test]
    fn quote_mid_field_starts_quoted_run() {
        // quotes are consumed, not copied
        assert_eq!(split(r#"ab"c,d"e"#), vec!["abc,de"]);
    }

    #[test]
    fn n_delimiters_yield_n_plus_one_fields() {
        assert_eq!(split(",,,").len(), 4);
    }
}
