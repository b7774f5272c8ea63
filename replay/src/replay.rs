//! Applying parsed commands and rendering the result.
use crate::script::{Command, Line};
use ordered_collections::{OrderedMap, OrderedSet};
use serde_json::{Map, Value};
use std::{io, ops::ControlFlow};

/// The map and tag set built up by a script.
#[derive(Default, Debug)]
pub struct Replay {
    entries: OrderedMap<String, String>,
    tags: OrderedSet<String>,
}

impl Replay {
    /// Applies a single command.
    pub fn apply(&mut self, command: &Command) {
        match command {
            Command::Set { key, value } => {
                if let Some(old) = self.entries.insert(key.clone(), value.clone()) {
                    log::debug!("updated {key}: {old} -> {value}");
                }
            }
            Command::Remove(keys) => {
                let removed = self.entries.remove_all(keys);
                log::debug!("removed {removed} of {} keys", keys.len());
            }
            Command::Tag(names) => self.tags.add(names.iter().cloned()),
            Command::Untag(names) => {
                self.tags.remove(names);
            }
            Command::Clear => self.entries.clear(),
        }
    }

    /// Applies all commands in order.
    pub fn run(&mut self, lines: &[Line]) {
        for line in lines {
            log::trace!("line {}: {:?}", line.number, line.command);
            self.apply(&line.command);
        }
        log::info!(
            "replayed {} commands, {} entries and {} tags remain",
            lines.len(),
            self.entries.len(),
            self.tags.len()
        );
    }

    /// The map entries in declaration order.
    pub fn entries(&self) -> &OrderedMap<String, String> {
        &self.entries
    }

    /// The tags in the order they were first added.
    pub fn tags(&self) -> &OrderedSet<String> {
        &self.tags
    }

    /// Writes one `key = value` line per entry followed by the tag line.
    ///
    /// With a `limit`, at most that many entries are written.
    pub fn write_text(&self, out: &mut impl io::Write, limit: Option<usize>) -> io::Result<()> {
        if limit != Some(0) {
            let mut written = 0;
            let flow = self.entries.for_each(|key, value| {
                if let Err(err) = writeln!(out, "{key} = {value}") {
                    return ControlFlow::Break(Err(err));
                }
                written += 1;
                if Some(written) == limit {
                    ControlFlow::Break(Ok(()))
                } else {
                    ControlFlow::Continue(())
                }
            });
            if let ControlFlow::Break(result) = flow {
                result?;
            }
        }
        writeln!(out, "tags: {}", self.tags.join(", "))
    }

    /// Returns the map entries as a JSON object, keeping their order.
    ///
    /// With a `limit`, at most that many entries are included.
    pub fn to_json(&self, limit: Option<usize>) -> Value {
        let mut object = Map::new();
        if limit != Some(0) {
            let flow = self.entries.for_each(|key, value| {
                object.insert(key.clone(), Value::String(value.clone()));
                if Some(object.len()) == limit {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            });
            if flow.is_break() {
                log::debug!(
                    "json output limited to {} of {} entries",
                    object.len(),
                    self.entries.len()
                );
            }
        }
        Value::Object(object)
    }
}
