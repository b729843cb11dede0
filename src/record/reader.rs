// Tue Oct 13 2026 - Alex

use crate::record::error::RecordError;
use crate::record::header::{RecordHeader, HEADER_LEN};
use log::{debug, trace, warn};
use std::io::{ErrorKind, Read};

pub const MAX_BODY_LEN: usize = 0x8000;

#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub header: RecordHeader,
    pub body: &'a [u8],
}

pub struct RecordReader<R: Read> {
    inner: R,
    buffer: Vec<u8>,
    position: u64,
    records: usize,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: vec![0u8; MAX_BODY_LEN],
            position: 0,
            records: 0,
        }
    }

    /// Bytes consumed from the stream so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn records_read(&self) -> usize {
        self.records
    }

    /// `Ok(None)` when the stream ends cleanly on a record boundary.
    pub fn next_header(&mut self) -> Result<Option<RecordHeader>, RecordError> {
        let mut raw = [0u8; HEADER_LEN];
        let start = self.position;
        let received = self.fill(&mut raw)?;
        if received == 0 {
            return Ok(None);
        }
        if received < HEADER_LEN {
            return Err(RecordError::ShortRead {
                position: start,
                expected: HEADER_LEN,
                received,
            });
        }

        let header = RecordHeader::parse(&raw)?;
        if !header.edition_matches() {
            if let Some(kind) = header.kind() {
                warn!(
                    "Record 0x{:04x} at offset {} has edition {}, expected {}",
                    header.record_type, start, header.edition, kind.edition
                );
            }
        }
        debug!("Header at offset {}: {}", start, header);
        Ok(Some(header))
    }

    pub fn read_body(&mut self, declared_len: usize) -> Result<&[u8], RecordError> {
        if declared_len > MAX_BODY_LEN {
            return Err(RecordError::CapacityExceeded {
                size: declared_len,
                capacity: MAX_BODY_LEN,
            });
        }

        let start = self.position;
        let mut buffer = std::mem::take(&mut self.buffer);
        let received = self.fill(&mut buffer[..declared_len]);
        self.buffer = buffer;
        let received = received?;

        if received < declared_len {
            return Err(RecordError::ShortRead {
                position: start,
                expected: declared_len,
                received,
            });
        }

        self.records += 1;
        Ok(&self.buffer[..declared_len])
    }

    pub fn next_record(&mut self) -> Result<Option<Record<'_>>, RecordError> {
        let header = match self.next_header()? {
            Some(header) => header,
            None => {
                trace!("End of stream after {} records, {} bytes", self.records, self.position);
                return Ok(None);
            }
        };
        let body = self.read_body(header.body_len as usize)?;
        Ok(Some(Record { header, body }))
    }

    /// Reads until `buf` is full or the stream ends, returning the byte count.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, RecordError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(RecordError::Io(e)),
            }
        }
        self.position += filled as u64;
        Ok(filled)
    }
}
