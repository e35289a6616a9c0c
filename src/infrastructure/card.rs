//! Card writer
//!
//! Terminal targets get the card base64 encoded inside an escape sequence
//! the CI log viewer recognizes; any other path gets the raw JSON.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::Engine as _;

use crate::domain::entities::Card;
use crate::domain::ports::{CardError, CardSink};

const FRAME_START: &str = "\x1b]1338;";
const FRAME_END: &str = "\x1b]0m";

/// Where the card goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardTarget {
    Disabled,
    Stdout,
    Stderr,
    File(PathBuf),
}

impl CardTarget {
    /// `/dev/stdout` and `/dev/stderr` select the framed streams; empty disables
    pub fn from_path(path: Option<&str>) -> Self {
        match path.map(str::trim) {
            None | Some("") => CardTarget::Disabled,
            Some("/dev/stdout") => CardTarget::Stdout,
            Some("/dev/stderr") => CardTarget::Stderr,
            Some(path) => CardTarget::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CardWriter {
    target: CardTarget,
}

impl CardWriter {
    pub fn new(target: CardTarget) -> Self {
        Self { target }
    }
}

/// Write `ESC ]1338; <base64 json> ESC ]0m` and a newline
pub fn write_framed<W: Write>(out: &mut W, json: &[u8]) -> io::Result<()> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(json);
    writeln!(out, "{}{}{}", FRAME_START, encoded, FRAME_END)?;
    out.flush()
}

fn write_file(path: &Path, json: &[u8]) -> io::Result<()> {
    std::fs::write(path, json)
}

impl CardSink for CardWriter {
    fn write_card(&self, card: &Card) -> Result<(), CardError> {
        match &self.target {
            CardTarget::Disabled => {}
            CardTarget::Stdout => write_framed(&mut io::stdout().lock(), &card.to_json()?)?,
            CardTarget::Stderr => write_framed(&mut io::stderr().lock(), &card.to_json()?)?,
            CardTarget::File(path) => write_file(path, &card.to_json()?)?,
        }
        Ok(())
    }
}
