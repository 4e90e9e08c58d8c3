#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

#[cfg(not(feature = "std"))]
mod std;

mod arity;

pub use crate::arity::Arity;

use std::collections::HashMap;
use std::fmt::{self, Write};
use std::string::String;
use std::vec::Vec;

#[cfg(feature = "derive")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "debug")]
use log::debug;

#[cfg(not(feature = "debug"))]
macro_rules! debug {
    ($($arg:tt)+) => {};
}

/// Key of the flag every [`Parser`] registers for printing its documentation.
pub const HELP: &str = "-h";
pub const HELP_LONG: &str = "--help";
const HELP_ABOUT: &str = "Show this help.";

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Error {
    // only -1 has a meaning amongst negative counts
    InvalidArity(i32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArity(n) => write!(f, "invalid arity {}, expected -1 or a count >= 0", n),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// What the caller should do once parsing is over.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Outcome {
    Continue,
    // the documentation has been written, nothing else should run
    HelpShown,
}

/// Description of a flag, used to register it on a [`Parser`].
#[derive(Default, Clone, Debug)]
#[cfg_attr(feature = "derive", derive(Deserialize))]
pub struct FlagDef<'a> {
    // primary key, e.g -n
    pub name: &'a str,
    // second key pointing at the same flag, e.g --number
    #[cfg_attr(feature = "derive", serde(default, borrow))]
    pub alias: Option<&'a str>,
    #[cfg_attr(feature = "derive", serde(default))]
    pub arity: Arity,
    #[cfg_attr(feature = "derive", serde(default))]
    pub about: &'a str,
}

#[derive(Default, Debug)]
#[cfg_attr(feature = "derive", derive(Deserialize))]
pub struct ParserConfig<'a> {
    // used in the help header only
    #[cfg_attr(feature = "derive", serde(default, borrow))]
    pub name: Option<&'a str>,
    #[cfg_attr(feature = "derive", serde(default, borrow))]
    pub flags: Vec<FlagDef<'a>>,
}

/// A registered flag and everything collected for it while parsing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "derive", derive(Serialize))]
pub struct Flag {
    pub name: String,
    pub alias: Option<String>,
    pub arity: Arity,
    pub description: String,
    pub found: bool,
    pub values: Vec<String>,
}

pub trait IntoStr {
    fn into_str(&self) -> &str;
}

impl IntoStr for &str {
    fn into_str(&self) -> &str {
        self
    }
}

impl IntoStr for String {
    fn into_str(&self) -> &str {
        self.as_str()
    }
}

impl IntoStr for &String {
    fn into_str(&self) -> &str {
        self.as_str()
    }
}

/// Flag table plus the results of scanning a command line.
///
/// Every key (a flag's name and its alias) maps to an index into `flags`, so both keys always read
/// and write the same record.
#[derive(Debug)]
pub struct Parser {
    program_name: String,
    keys: HashMap<String, usize>,
    flags: Vec<Flag>,
    positional: Vec<String>,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl<'a> From<ParserConfig<'a>> for Parser {
    fn from(config: ParserConfig<'a>) -> Self {
        let mut parser = Parser::new();
        if let Some(name) = config.name {
            parser.set_program_name(name);
        }
        for def in config.flags {
            parser.register(def);
        }
        parser
    }
}

impl Parser {
    pub fn new() -> Self {
        let mut parser = Parser {
            program_name: String::new(),
            keys: HashMap::new(),
            flags: Vec::new(),
            positional: Vec::new(),
        };
        parser.add_flag(HELP, HELP_LONG, Arity::None, HELP_ABOUT);
        parser
    }

    /// Registers a flag under `name` and, unless it is empty, `alias`.
    ///
    /// Keys that are already taken are silently repointed at the new flag. Only the keys given here
    /// move, so re-adding just the name of an aliased flag leaves the alias on the old record.
    pub fn add_flag(&mut self, name: &str, alias: &str, arity: Arity, description: &str) -> &mut Self {
        self.register(FlagDef {
            name,
            alias: Some(alias),
            arity,
            about: description,
        })
    }

    pub fn register(&mut self, def: FlagDef) -> &mut Self {
        let alias = def.alias.filter(|a| !a.is_empty());
        debug!("registering flag {} (alias {:?}, arity {:?})", def.name, alias, def.arity);
        let index = self.flags.len();
        self.flags.push(Flag {
            name: String::from(def.name),
            alias: alias.map(String::from),
            arity: def.arity,
            description: String::from(def.about),
            found: false,
            values: Vec::new(),
        });
        if let Some(old) = self.keys.insert(String::from(def.name), index) {
            debug!("{} was already registered as flag #{}, overriding", def.name, old);
        }
        if let Some(alias) = alias {
            if let Some(old) = self.keys.insert(String::from(alias), index) {
                debug!("{} was already registered as flag #{}, overriding", alias, old);
            }
        }
        self
    }

    pub fn set_program_name(&mut self, name: &str) -> &mut Self {
        self.program_name = String::from(name);
        self
    }

    /// Parses a full process argument list, skipping the program name in slot 0.
    ///
    /// Prints the documentation to stdout when `-h`/`--help` was passed.
    #[cfg(feature = "std")]
    pub fn parse<S: IntoStr, T: IntoIterator<Item = S>>(&mut self, tokens: T) -> Outcome {
        self.parse_from(tokens, 1)
    }

    #[cfg(feature = "std")]
    pub fn parse_from<S: IntoStr, T: IntoIterator<Item = S>>(&mut self, tokens: T, start: usize) -> Outcome {
        self.scan(tokens, start);
        if self.help_requested() {
            debug!("help requested, printing doc");
            self.show_help();
            return Outcome::HelpShown;
        }
        Outcome::Continue
    }

    /// Same as `parse_from`, but the documentation goes to `out` rather than stdout.
    pub fn parse_with<S: IntoStr, T: IntoIterator<Item = S>, W: Write>(
        &mut self,
        tokens: T,
        start: usize,
        out: &mut W,
    ) -> Result<Outcome, fmt::Error> {
        self.scan(tokens, start);
        if self.help_requested() {
            debug!("help requested, writing doc");
            self.write_help(out)?;
            return Ok(Outcome::HelpShown);
        }
        Ok(Outcome::Continue)
    }

    // Single pass over the tokens. A flag token moves the cursor, anything else is handed to the flag
    // under the cursor while it has room and becomes positional otherwise.
    fn scan<S: IntoStr, T: IntoIterator<Item = S>>(&mut self, tokens: T, start: usize) {
        let mut current: Option<usize> = None;
        for token in tokens.into_iter().skip(start) {
            let arg = token.into_str();
            if let Some(&index) = self.keys.get(arg) {
                debug!("found flag {}", arg);
                self.flags[index].found = true;
                current = Some(index);
            } else if let Some(index) = current {
                let flag = &mut self.flags[index];
                if flag.arity.accepts(flag.values.len()) {
                    debug!("adding value {} to {}", arg, flag.name);
                    flag.values.push(String::from(arg));
                } else {
                    debug!("{} takes no more values, {} is positional", flag.name, arg);
                    self.positional.push(String::from(arg));
                }
            } else {
                debug!("found positional arg {}", arg);
                self.positional.push(String::from(arg));
            }
        }
        debug!("finished looping through args");
    }

    pub fn flag(&self, key: &str) -> Option<&Flag> {
        self.keys.get(key).map(|&index| &self.flags[index])
    }

    /// Whether `key` is a registered flag that appeared at least once.
    pub fn flag_found(&self, key: &str) -> bool {
        self.flag(key).map_or(false, |flag| flag.found)
    }

    /// Every value collected for `key`, in scan order. Empty for unknown keys.
    pub fn flag_results(&self, key: &str) -> &[String] {
        self.flag(key).map(|flag| flag.values.as_slice()).unwrap_or(&[])
    }

    /// First value collected for `key`, or `""` when there is none.
    pub fn flag_result(&self, key: &str) -> &str {
        self.flag_results(key).first().map(String::as_str).unwrap_or("")
    }

    pub fn arguments(&self) -> &[String] {
        &self.positional
    }

    pub fn help_requested(&self) -> bool {
        self.flag_found(HELP)
    }

    /*
      Format:
         Documentation of ${program_name}

         ${name} / ${alias} :
         ${description}
    */
    pub fn doc(&self) -> String {
        let mut doc = String::new();
        if !self.program_name.is_empty() {
            doc.push_str("Documentation of ");
            doc.push_str(&self.program_name);
            doc.push('\n');
        }
        // a record can be orphaned when all of its keys were registered again
        let mut reachable = Vec::with_capacity(self.flags.len());
        reachable.resize(self.flags.len(), false);
        for &index in self.keys.values() {
            reachable[index] = true;
        }
        self.flags
            .iter()
            .zip(reachable)
            .filter(|(_, reachable)| *reachable)
            .fold(doc, |mut doc, (flag, _)| {
                let size = flag.name.len() + flag.alias.as_ref().map_or(0, |s| s.len() + 3) + flag.description.len();
                doc.reserve(size + 5);
                doc.push('\n');
                doc.push_str(&flag.name);
                if let Some(alias) = &flag.alias {
                    doc.push_str(" / ");
                    doc.push_str(alias);
                }
                doc.push_str(" :\n");
                doc.push_str(&flag.description);
                doc.push('\n');
                doc
            })
    }

    pub fn write_help<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str(&self.doc())
    }

    #[cfg(feature = "std")]
    pub fn show_help(&self) {
        print!("{}", self.doc());
    }
}
