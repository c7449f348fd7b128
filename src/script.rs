use crate::error::HashTableError;
use crate::error::Result;
use crate::table::HashTable;
use crate::value::Value;
use slog::debug;
use slog::info;
use slog::Logger;
use std::io::BufRead;
use std::io::Write;

const KEY_NOT_FOUND: &str = "Key not found";

/// One line of a table script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String, Value),
    Remove(String),
    Lookup(String),
    Hash(String),
}

/// Split off the next token, honouring double quotes. Returns `None` once the
/// input is exhausted.
fn next_token(input: &str) -> Result<Option<(String, &str)>> {
    let input = input.trim_start();
    if input.is_empty() {
        return Ok(None);
    }
    if let Some(quoted) = input.strip_prefix('"') {
        let end = quoted.find('"').ok_or(HashTableError::UnterminatedQuote)?;
        return Ok(Some((quoted[..end].to_string(), &quoted[end + 1..])));
    }
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    Ok(Some((input[..end].to_string(), &input[end..])))
}

fn expect_token<'a>(
    input: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<(String, &'a str)> {
    next_token(input)?.ok_or(HashTableError::MissingArgument { command, argument })
}

fn expect_end(rest: &str) -> Result<()> {
    match next_token(rest)? {
        Some((extra, _)) => Err(HashTableError::UnexpectedArgument(extra)),
        None => Ok(()),
    }
}

impl Command {
    /// Parse one script line. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.starts_with('#') {
            return Ok(None);
        }
        let (name, rest) = match next_token(line)? {
            Some(token) => token,
            None => return Ok(None),
        };
        let command = match name.as_str() {
            "add" => {
                let (key, rest) = expect_token(rest, "add", "key")?;
                let rest = rest.trim();
                let value = if rest.starts_with('"') {
                    let (value, tail) = expect_token(rest, "add", "value")?;
                    expect_end(tail)?;
                    value
                } else if rest.is_empty() {
                    return Err(HashTableError::MissingArgument {
                        command: "add",
                        argument: "value",
                    });
                } else {
                    rest.to_string()
                };
                let value = match value.parse::<Value>() {
                    Ok(value) => value,
                    Err(never) => match never {},
                };
                Self::Add(key, value)
            }
            "remove" | "rm" => {
                let (key, rest) = expect_token(rest, "remove", "key")?;
                expect_end(rest)?;
                Self::Remove(key)
            }
            "lookup" | "get" => {
                let (key, rest) = expect_token(rest, "lookup", "key")?;
                expect_end(rest)?;
                Self::Lookup(key)
            }
            "hash" => {
                let (key, rest) = expect_token(rest, "hash", "key")?;
                expect_end(rest)?;
                Self::Hash(key)
            }
            _ => return Err(HashTableError::UnknownCommand(name)),
        };
        Ok(Some(command))
    }
}

/// Runs script commands against a single table, writing results to a sink.
pub struct Interpreter {
    table: HashTable<String, Value>,
    log: Logger,
}

impl Interpreter {
    pub fn new(log: Logger) -> Self {
        Self {
            table: HashTable::new(),
            log,
        }
    }

    pub fn table(&self) -> &HashTable<String, Value> {
        &self.table
    }

    /// Apply one command. Only `lookup` and `hash` produce output.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        match command {
            Command::Add(key, value) => {
                debug!(self.log, "add({}, {})", key, value; "bucket" => self.table.hash(&key));
                self.table.add(key, value);
            }
            Command::Remove(key) => {
                debug!(self.log, "remove({})", key; "bucket" => self.table.hash(&key));
                self.table.remove(&key);
            }
            Command::Lookup(key) => {
                let value = self.table.lookup(&key);
                debug!(self.log, "lookup({}) = {:?}", key, value);
                match value {
                    Some(value) => writeln!(out, "{}", value)?,
                    None => writeln!(out, "{}", KEY_NOT_FOUND)?,
                }
            }
            Command::Hash(key) => {
                let id = self.table.hash(&key);
                debug!(self.log, "hash({}) = {}", key, id);
                writeln!(out, "{}", id)?;
            }
        }
        Ok(())
    }

    /// Execute every command read from `input`. Return the number of commands run.
    ///
    /// Stops at the first line that fails to parse; commands before it stay applied.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<usize> {
        let mut executed = 0;
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let command = Command::parse_line(&line).map_err(|err| err.at_line(index + 1))?;
            if let Some(command) = command {
                self.execute(command, out)?;
                executed += 1;
            }
        }
        out.flush()?;
        info!(
            self.log,
            "script finished";
            "commands" => executed, "entries" => self.table.len(), "buckets" => self.table.bucket_count()
        );
        Ok(executed)
    }
}
