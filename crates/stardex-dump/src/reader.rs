//! Streaming page reader for MediaWiki XML dumps
//!
//! The dump is far larger than available memory, so pages are surfaced one
//! at a time from the event stream: forward-only, single pass, no seeking.

use crate::error::DumpError;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Site name expected in a Memory Alpha dump's `<sitename>` header.
pub const SITE_NAME: &str = "Memory Alpha";

/// One document unit pulled from the dump: a titled page and its raw
/// wikitext body. Ephemeral; consumed immediately by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawUnit {
    /// Page title as it appears in the dump
    pub title: String,
    /// Raw wikitext of the page's current revision
    pub text: String,
}

/// Page being accumulated from XML events.
#[derive(Debug, Default)]
struct PartialPage {
    title: Option<String>,
    text: Option<String>,
}

/// Result of scanning for the next page.
enum ScanResult {
    /// A complete page
    Unit(RawUnit),
    /// Page lacked a title or text; keep going
    Skipped,
    /// End of the dump
    Eof,
}

/// Lazy, forward-only reader over the pages of a dump.
///
/// Yields `Result<RawUnit, DumpError>`; an `Err` means the underlying
/// source failed and the stream cannot continue. A final page truncated by
/// EOF is dropped, not yielded.
pub struct DumpReader<R: BufRead> {
    reader: Reader<R>,
    current: Option<PartialPage>,
    done: bool,
}

impl DumpReader<BufReader<File>> {
    /// Open a dump file for streaming.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DumpError> {
        let file = File::open(path.as_ref())?;
        // 1MB read-ahead; enough to detect page boundaries without
        // materializing the document
        let buf_reader = BufReader::with_capacity(1024 * 1024, file);
        Ok(Self::from_reader(buf_reader))
    }
}

impl<R: BufRead> DumpReader<R> {
    /// Wrap an already-open buffered source.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Reader::from_reader(reader),
            current: None,
            done: false,
        }
    }

    /// Scan events until the next complete page or EOF.
    fn next_page(&mut self) -> Result<ScanResult, DumpError> {
        let mut buf = Vec::with_capacity(8192);
        let mut text_buf = String::new();
        let mut capturing = false;

        loop {
            buf.clear();
            let event = self.reader.read_event_into(&mut buf)?;

            match event {
                Event::Start(ref e) => match e.name().as_ref() {
                    b"page" => {
                        self.current = Some(PartialPage::default());
                    }
                    b"title" | b"text" => {
                        capturing = true;
                        text_buf.clear();
                    }
                    _ => {}
                },
                Event::Text(ref e) => {
                    if capturing {
                        if let Ok(text) = e.unescape() {
                            text_buf.push_str(&text);
                        }
                    }
                }
                Event::CData(ref e) => {
                    if capturing {
                        if let Ok(text) = String::from_utf8(e.to_vec()) {
                            text_buf.push_str(&text);
                        }
                    }
                }
                Event::End(ref e) => {
                    if let Some(ref mut page) = self.current {
                        match e.name().as_ref() {
                            b"title" => {
                                page.title = Some(text_buf.clone());
                                capturing = false;
                            }
                            b"text" => {
                                page.text = Some(text_buf.clone());
                                capturing = false;
                            }
                            b"page" => {
                                let page = self.current.take().unwrap();
                                return Ok(match (page.title, page.text) {
                                    (Some(title), Some(text)) => {
                                        ScanResult::Unit(RawUnit { title, text })
                                    }
                                    _ => ScanResult::Skipped,
                                });
                            }
                            _ => {}
                        }
                    }
                }
                Event::Eof => {
                    if let Some(page) = self.current.take() {
                        debug!(title = ?page.title, "dropping page truncated at end of dump");
                    }
                    return Ok(ScanResult::Eof);
                }
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for DumpReader<R> {
    type Item = Result<RawUnit, DumpError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.next_page() {
                Ok(ScanResult::Unit(unit)) => return Some(Ok(unit)),
                Ok(ScanResult::Skipped) => continue,
                Ok(ScanResult::Eof) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Read the `<sitename>` header from a dump, stopping at the first page.
pub fn read_site_name(path: impl AsRef<Path>) -> Result<Option<String>, DumpError> {
    let file = File::open(path.as_ref())?;
    let mut reader = Reader::from_reader(BufReader::new(file));
    let mut buf = Vec::with_capacity(1024);
    let mut in_site_name = false;

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"sitename" => in_site_name = true,
                // The header precedes all pages; no point scanning further
                b"page" => return Ok(None),
                _ => {}
            },
            Event::Text(ref e) => {
                if in_site_name {
                    if let Ok(text) = e.unescape() {
                        return Ok(Some(text.trim().to_string()));
                    }
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Check that a file is a Memory Alpha dump by its `<sitename>` header.
pub fn is_memory_alpha_dump(path: impl AsRef<Path>) -> Result<bool, DumpError> {
    Ok(read_site_name(path)?.as_deref() == Some(SITE_NAME))
}
