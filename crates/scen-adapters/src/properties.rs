//! Parser de archivos `.properties`.
//!
//! Formato soportado:
//! - `clave=valor`, `clave: valor` y `clave valor`.
//! - Comentarios con `#` o `!` al inicio de línea (tras espacios).
//! - Líneas lógicas continuadas con `\` final; los espacios iniciales de la
//!   línea siguiente se descartan.
//! - Escapes `\t`, `\n`, `\r`, `\f`, `\uXXXX`; cualquier otro `\x` es `x`.
//!
//! Claves repetidas: gana el último valor (se conserva la posición de la
//! primera aparición).

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use scen_core::StepFailure;
use thiserror::Error;

pub type Properties = IndexMap<String, String>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertiesError {
    #[error("malformed \\uXXXX escape at line {line}")]
    MalformedUnicodeEscape { line: usize },
    #[error("cannot read {path}: {message}")]
    Io { path: PathBuf, message: String },
}

impl From<PropertiesError> for StepFailure {
    fn from(err: PropertiesError) -> Self {
        match err {
            PropertiesError::Io { .. } => StepFailure::Io(err.to_string()),
            other => StepFailure::Failed(other.to_string()),
        }
    }
}

const BLANKS: [char; 3] = [' ', '\t', '\x0c'];

pub fn parse(input: &str) -> Result<Properties, PropertiesError> {
    let mut props = Properties::new();
    for (line, logical) in logical_lines(input) {
        let (raw_key, raw_value) = split_entry(&logical);
        let key = unescape(raw_key, line)?;
        let value = unescape(raw_value, line)?;
        props.insert(key, value);
    }
    Ok(props)
}

pub fn load_file(path: &Path) -> Result<Properties, PropertiesError> {
    let input = fs::read_to_string(path).map_err(|e| PropertiesError::Io { path: path.to_path_buf(),
                                                                             message: e.to_string() })?;
    parse(&input)
}

/// Une continuaciones y descarta comentarios/blancos. Devuelve
/// `(línea inicial, contenido)`.
fn logical_lines(input: &str) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut start = 0;
    let mut continuing = false;

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim_start_matches(BLANKS);
        if !continuing {
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            start = idx + 1;
        }
        if ends_with_continuation(line) {
            current.push_str(&line[..line.len() - 1]);
            continuing = true;
        } else {
            current.push_str(line);
            out.push((start, std::mem::take(&mut current)));
            continuing = false;
        }
    }
    if continuing {
        out.push((start, current));
    }
    out
}

/// Un número impar de `\` finales indica continuación.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Separa clave y valor crudos (sin procesar escapes).
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if BLANKS.contains(&c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }
    let mut rest = line[key_end..].trim_start_matches(BLANKS);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches(BLANKS);
    }
    (&line[..key_end], rest)
}

fn unescape(raw: &str, line: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = (hex.len() == 4).then(|| u32::from_str_radix(&hex, 16).ok())
                                              .flatten()
                                              .and_then(char::from_u32)
                                              .ok_or(PropertiesError::MalformedUnicodeEscape { line })?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_separator_styles() {
        let props = parse("a=1\nb: 2\nc 3\nd = 4\ne\t:\t5\n").unwrap();
        let pairs: Vec<(&str, &str)> = props.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2"), ("c", "3"), ("d", "4"), ("e", "5")]);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let props = parse("# comment\n   ! other\n\n  home = /path/to/home\n").unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props["home"], "/path/to/home");
    }

    #[test]
    fn joins_continuation_lines() {
        let props = parse("fruits = apple, \\\n         banana, \\\n   # not a comment\n").unwrap();
        assert_eq!(props["fruits"], "apple, banana, # not a comment");
    }

    #[test]
    fn even_trailing_backslashes_are_literal() {
        let props = parse("path = c:\\\\\nnext = 1\n").unwrap();
        assert_eq!(props["path"], "c:\\");
        assert_eq!(props["next"], "1");
    }

    #[test]
    fn escapes_in_keys_and_values() {
        let props = parse("my\\ key\\=x = tab\\there\\u0041\n").unwrap();
        assert_eq!(props["my key=x"], "tab\there\u{41}");
    }

    #[test]
    fn key_without_value_is_empty() {
        let props = parse("lonely\nalso:\n").unwrap();
        assert_eq!(props["lonely"], "");
        assert_eq!(props["also"], "");
    }

    #[test]
    fn only_first_separator_is_consumed() {
        let props = parse("k = = v\n").unwrap();
        assert_eq!(props["k"], "= v");
    }

    #[test]
    fn last_duplicate_wins() {
        let props = parse("k=1\nother=x\nk=2\n").unwrap();
        assert_eq!(props["k"], "2");
        assert_eq!(props.get_index(0).map(|(k, _)| k.as_str()), Some("k"));
    }

    #[test]
    fn malformed_unicode_reports_line() {
        let err = parse("ok=1\n\nbad=\\u12\n").unwrap_err();
        assert_eq!(err, PropertiesError::MalformedUnicodeEscape { line: 3 });
    }
}
