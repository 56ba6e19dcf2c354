//! Path templates.
//!
//! A template is plain text with named placeholders:
//!
//! - `{field}` or `${field}` is replaced with a repository field
//! - `{{` and `}}` produce literal braces
//!
//! Templates are compiled once with [`PathTemplate::parse`], which checks the
//! syntax only. Whether a field name exists is checked when the template is
//! executed against a [`Repository`].

use crate::error::{Error, Result};
use crate::repository::Repository;
use std::iter::Peekable;
use std::str::Chars;

/// A piece of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(String),
}

/// A compiled path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Compiles a template string.
    ///
    /// Unlike most template engines, the empty string is rejected: it can
    /// never produce a usable path.
    pub fn parse(template: &str) -> Result<Self> {
        if template.is_empty() {
            return Err(compile_error(template, "template is empty"));
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '$' if chars.peek() == Some(&'{') => {
                    chars.next();
                    if chars.peek() == Some(&'{') {
                        // `${{` is a literal `$` followed by an escaped brace
                        chars.next();
                        literal.push_str("${");
                        continue;
                    }
                    let field = read_field(template, &mut chars)?;
                    flush(&mut literal, &mut segments);
                    segments.push(Segment::Field(field));
                }
                '{' => {
                    let field = read_field(template, &mut chars)?;
                    flush(&mut literal, &mut segments);
                    segments.push(Segment::Field(field));
                }
                '}' => return Err(compile_error(template, "unmatched '}'")),
                _ => literal.push(c),
            }
        }
        flush(&mut literal, &mut segments);

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    /// The template string this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Renders the template for `repo`.
    ///
    /// `language` is only used to give an unknown-field error its context.
    pub fn execute(&self, language: &str, repo: &Repository) -> Result<String> {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Field(name) => {
                    let value = repo.field(name).ok_or_else(|| Error::TemplateExecution {
                        language: language.to_string(),
                        field: name.clone(),
                    })?;
                    output.push_str(&value);
                }
            }
        }
        Ok(output)
    }
}

fn flush(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

/// Reads a placeholder body up to and including its closing brace.
fn read_field(template: &str, chars: &mut Peekable<Chars<'_>>) -> Result<String> {
    let mut name = String::new();
    loop {
        match chars.next() {
            Some('}') => break,
            Some('{') => return Err(compile_error(template, "nested '{' in placeholder")),
            Some(c) => name.push(c),
            None => return Err(compile_error(template, "unclosed placeholder")),
        }
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(compile_error(template, "empty placeholder"));
    }
    let mut name_chars = name.chars();
    let valid_start = name_chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start || !name_chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(compile_error(
            template,
            &format!("invalid placeholder name '{}'", name),
        ));
    }
    Ok(name.to_string())
}

fn compile_error(template: &str, message: &str) -> Error {
    Error::TemplateCompile {
        template: template.to_string(),
        message: message.to_string(),
    }
}
