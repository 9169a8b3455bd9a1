use std::borrow::Cow;

/// Appends one `,`-delimited, `\r\n`-terminated row. Fields are quoted only
/// when they contain a delimiter, a quote or a line break.
pub fn write_row<S: AsRef<str>>(out: &mut String, fields: impl IntoIterator<Item = S>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape(field.as_ref()));
    }
    out.push_str("\r\n");
}

fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_row() {
        let mut out = String::new();
        write_row(&mut out, ["Wings", "6pc", "", "5.99"]);
        assert_eq!(out, "Wings,6pc,,5.99\r\n");
    }

    #[test]
    fn test_quoting() {
        let mut out = String::new();
        write_row(
            &mut out,
            ["Fries, Large", r#"The "Big" One"#, "two\nlines", "plain"],
        );
        assert_eq!(
            out,
            "\"Fries, Large\",\"The \"\"Big\"\" One\",\"two\nlines\",plain\r\n"
        );
    }
}
