//! planar_code reader and writer.
//!
//! Format
//! - File header `>>planar_code` followed by anything (usually ` le` or ` be`)
//!   up to `<<`. The header text selects the byte order of 16-bit entries;
//!   little-endian when neither is given.
//! - Each map: if the first byte is non-zero it is `nv` and all entries are
//!   single bytes; a zero byte switches to 16-bit `nv` and entries. A map ends
//!   once `nv` zero entries have been read.
//! - Headers `>>p...<<` between maps are skipped.

use anyhow::{bail, Context, Result};
use std::io::Write;

const HEADER: &[u8] = b">>planar_code";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

/// Iterator over the rotation codes of a planar_code byte stream.
pub struct PlanarCodeReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    endian: Endian,
    failed: bool,
}

impl<'a> PlanarCodeReader<'a> {
    /// Check and consume the file header.
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        if !bytes.starts_with(HEADER) {
            bail!("no planar_code header");
        }
        let close = find(bytes, b"<<", HEADER.len()).context("planar_code header is not closed")?;
        let options = &bytes[HEADER.len()..close];
        let endian = if find(options, b"be", 0).is_some() {
            Endian::Big
        } else {
            Endian::Little
        };
        Ok(Self {
            bytes,
            pos: close + 2,
            endian,
            failed: false,
        })
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    fn skip_interior_header(&mut self) -> Result<()> {
        if self.bytes[self.pos..].starts_with(b">>p") {
            let close = find(self.bytes, b"<<", self.pos)
                .with_context(|| format!("unterminated header at byte {}", self.pos))?;
            self.pos = close + 2;
        }
        Ok(())
    }

    fn byte(&mut self) -> Result<u8> {
        let b = *self
            .bytes
            .get(self.pos)
            .with_context(|| format!("unexpected end of input at byte {}", self.pos))?;
        self.pos += 1;
        Ok(b)
    }

    fn word(&mut self) -> Result<u16> {
        let pair = self
            .bytes
            .get(self.pos..self.pos + 2)
            .with_context(|| format!("unexpected end of input at byte {}", self.pos))?;
        let pair = [pair[0], pair[1]];
        self.pos += 2;
        Ok(match self.endian {
            Endian::Little => u16::from_le_bytes(pair),
            Endian::Big => u16::from_be_bytes(pair),
        })
    }

    fn read_code(&mut self) -> Result<Vec<u32>> {
        let first = self.byte()?;
        let wide = first == 0;
        let nv = if wide { self.word()? as u32 } else { first as u32 };
        let mut code = vec![nv];
        let mut zeros = 0;
        while zeros < nv {
            let entry = if wide {
                self.word()? as u32
            } else {
                self.byte()? as u32
            };
            if entry == 0 {
                zeros += 1;
            }
            code.push(entry);
        }
        Ok(code)
    }
}

impl Iterator for PlanarCodeReader<'_> {
    type Item = Result<Vec<u32>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.skip_interior_header().and_then(|()| {
            if self.pos >= self.bytes.len() {
                Ok(None)
            } else {
                self.read_code().map(Some)
            }
        });
        match item {
            Ok(code) => code.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| from + i)
}

/// Write the file header (little-endian).
pub fn write_header<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(HEADER)?;
    out.write_all(b" le<<")?;
    Ok(())
}

/// Append one rotation code, using single bytes when every value fits.
pub fn write_code<W: Write>(out: &mut W, code: &[u32]) -> Result<()> {
    if code.iter().all(|&x| x <= u8::MAX as u32) && code.first().is_some_and(|&nv| nv > 0) {
        let bytes: Vec<u8> = code.iter().map(|&x| x as u8).collect();
        out.write_all(&bytes)?;
        return Ok(());
    }
    out.write_all(&[0])?;
    for &x in code {
        let Ok(x) = u16::try_from(x) else {
            bail!("value {x} does not fit planar_code");
        };
        out.write_all(&x.to_le_bytes())?;
    }
    Ok(())
}
