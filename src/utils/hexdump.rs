// Tue Oct 13 2026 - Alex

use crate::utils::codepage::Codepage;
use std::fmt::Write;

const BYTES_PER_LINE: usize = 16;
const GROUP: usize = 4;

pub struct HexDump;

impl HexDump {
    pub fn lines(data: &[u8]) -> Vec<String> {
        data.chunks(BYTES_PER_LINE)
            .enumerate()
            .map(|(i, chunk)| Self::format_line(i * BYTES_PER_LINE, chunk))
            .collect()
    }

    /// `<offset>: <hex groups> <ascii> <ebcdic>`, short lines padded so the
    /// character columns stay aligned.
    pub fn format_line(offset: usize, chunk: &[u8]) -> String {
        let mut line = String::with_capacity(90);
        let _ = write!(line, "{:x}: ", offset);

        for i in 0..BYTES_PER_LINE {
            match chunk.get(i) {
                Some(b) => {
                    let _ = write!(line, "{:02x}", b);
                }
                None => line.push_str("  "),
            }
            if (i + 1) % GROUP == 0 {
                line.push(' ');
            }
        }

        for i in 0..BYTES_PER_LINE {
            line.push(chunk.get(i).map_or(' ', |&b| Codepage::printable_ascii(b)));
        }
        line.push(' ');
        for i in 0..BYTES_PER_LINE {
            line.push(chunk.get(i).map_or(' ', |&b| Codepage::printable_ebcdic(b)));
        }

        line
    }
}
