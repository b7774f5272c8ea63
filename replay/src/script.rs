//! Parsing of replay scripts.
use color_eyre::eyre::{bail, Result};

/// A single command of a replay script.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// Insert or update a map entry.
    Set { key: String, value: String },
    /// Remove all listed keys from the map.
    Remove(Vec<String>),
    /// Add all listed names to the tag set.
    Tag(Vec<String>),
    /// Remove all listed names from the tag set.
    Untag(Vec<String>),
    /// Remove all map entries.
    Clear,
}

/// A command together with the (1-based) line it was read from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Line {
    pub number: usize,
    pub command: Command,
}

/// Parses a complete script, skipping blank lines and `#` comments.
pub fn parse(source: &str) -> Result<Vec<Line>> {
    let mut lines = vec![];
    for (index, text) in source.lines().enumerate() {
        let number = index + 1;
        match parse_line(text) {
            Ok(Some(command)) => lines.push(Line { number, command }),
            Ok(None) => (),
            Err(err) => bail!("line {number}: {err}"),
        }
    }
    Ok(lines)
}

fn parse_line(text: &str) -> Result<Option<Command>> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = match text.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (text, ""),
    };
    let names = || -> Vec<String> { rest.split_whitespace().map(String::from).collect() };

    let command = match keyword {
        "set" => {
            let Some((key, value)) = rest.split_once(char::is_whitespace) else {
                bail!("expected `set <key> <value>`");
            };
            Command::Set {
                key: key.to_string(),
                value: value.trim_start().to_string(),
            }
        }
        "remove" | "tag" | "untag" => {
            let names = names();
            if names.is_empty() {
                bail!("`{keyword}` needs at least one argument");
            }
            match keyword {
                "remove" => Command::Remove(names),
                "tag" => Command::Tag(names),
                _ => Command::Untag(names),
            }
        }
        "clear" => {
            if !rest.is_empty() {
                bail!("`clear` takes no arguments");
            }
            Command::Clear
        }
        _ => bail!("unknown command `{keyword}`"),
    };
    Ok(Some(command))
}
