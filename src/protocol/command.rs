//! Command definitions
//!
//! A command is what the client sends: a name and its arguments.

use bytes::Bytes;

/// A request to send to the server
///
/// Name and arguments are raw bytes; nothing is escaped or validated,
/// framing relies on explicit lengths only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command name, e.g. `GET`
    name: Bytes,

    /// Arguments in send order
    args: Vec<Bytes>,
}

impl Command {
    /// Create a command with no arguments
    pub fn new(name: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a command from a name and an argument list
    pub fn with_args<I, A>(name: impl Into<Bytes>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Bytes>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<Bytes>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Split an input line on ASCII whitespace
    ///
    /// The first field is the command name. Returns `None` for a blank line.
    pub fn parse_line(line: &[u8]) -> Option<Self> {
        let mut fields = line
            .split(|b| b.is_ascii_whitespace())
            .filter(|field| !field.is_empty())
            .map(Bytes::copy_from_slice);

        let name = fields.next()?;
        Some(Self {
            name,
            args: fields.collect(),
        })
    }

    pub fn name(&self) -> &Bytes {
        &self.name
    }

    pub fn args(&self) -> &[Bytes] {
        &self.args
    }

    /// Number of bulk strings on the wire (name included)
    pub fn part_count(&self) -> usize {
        1 + self.args.len()
    }

    /// Name followed by arguments, in wire order
    pub fn parts(&self) -> impl Iterator<Item = &Bytes> {
        std::iter::once(&self.name).chain(self.args.iter())
    }

    /// True when the name matches `name` ignoring ASCII case
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.as_bytes())
    }
}
