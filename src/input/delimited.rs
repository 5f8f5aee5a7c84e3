use crate::input::InputError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line on which the record starts.
    pub line: usize,
    pub fields: Vec<String>,
}

impl Record {
    fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.trim().is_empty())
    }
}

/// Splits delimited text into records.
///
/// Fields may be wrapped in double quotes; inside quotes the delimiter and
/// line breaks are literal and `""` is an escaped quote. Whitespace after a
/// closing quote is ignored; any other text there is an error. `\n`, `\r\n`
/// and a lone `\r` all end a record. Blank records are dropped.
pub fn split_records(text: &str, delimiter: char) -> Result<Vec<Record>, InputError> {
    let mut splitter = Splitter::default();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if splitter.in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    splitter.field.push('"');
                }
                '"' => splitter.in_quotes = false,
                '\r' if chars.peek() == Some(&'\n') => splitter.field.push('\r'),
                '\r' | '\n' => {
                    splitter.line += 1;
                    splitter.field.push(c);
                }
                _ => splitter.field.push(c),
            }
            continue;
        }

        match c {
            '"' if splitter.field.is_empty() && !splitter.quoted => {
                splitter.in_quotes = true;
                splitter.quoted = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' | '\n' => splitter.end_record(),
            c if c == delimiter => splitter.end_field(),
            c if splitter.quoted && c.is_whitespace() => {}
            _ if splitter.quoted => {
                return Err(InputError::TextAfterQuote { line: splitter.line });
            }
            _ => splitter.field.push(c),
        }
    }

    if splitter.in_quotes {
        return Err(InputError::UnterminatedQuote {
            line: splitter.record_line,
        });
    }
    if !splitter.fields.is_empty() || !splitter.field.is_empty() {
        splitter.end_record();
    }
    Ok(splitter.records)
}

struct Splitter {
    records: Vec<Record>,
    fields: Vec<String>,
    field: String,
    in_quotes: bool,
    quoted: bool,
    line: usize,
    record_line: usize,
}

impl Default for Splitter {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            fields: Vec::new(),
            field: String::new(),
            in_quotes: false,
            quoted: false,
            line: 1,
            record_line: 1,
        }
    }
}

impl Splitter {
    fn end_field(&mut self) {
        self.fields.push(std::mem::take(&mut self.field));
        self.quoted = false;
    }

    fn end_record(&mut self) {
        self.end_field();
        let record = Record {
            line: self.record_line,
            fields: std::mem::take(&mut self.fields),
        };
        if record.is_blank() {
            if record.fields.len() > 1 {
                tracing::warn!(line = record.line, "skipping row with only empty fields");
            }
        } else {
            self.records.push(record);
        }
        self.line += 1;
        self.record_line = self.line;
    }
}
