use bytes::BufMut;

use crate::headers::Headers;

/// Write header lines followed by the empty line ending the section.
pub fn write_fields<B: BufMut>(headers: &Headers, mut bufm: B) {
    for (name, value) in headers {
        bufm.put_slice(name.as_bytes());
        bufm.put_slice(b": ");
        bufm.put_slice(value.as_bytes());
        bufm.put_slice(b"\r\n");
    }

    bufm.put_slice(b"\r\n");
}

/// Write chunk size line, payload and its terminator.
pub fn write_chunk<B: BufMut>(chunk: &[u8], mut bufm: B) {
    write_hex(chunk.len(), &mut bufm);
    bufm.put_slice(b"\r\n");
    bufm.put_slice(chunk);
    bufm.put_slice(b"\r\n");
}

/// Write `value` as lowercase hexadecimal without leading zeros.
fn write_hex<B: BufMut>(mut value: usize, bufm: &mut B) {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    const MAX_LEN: usize = usize::BITS as usize / 4;

    let mut buf = [0u8; MAX_LEN];
    let mut at = MAX_LEN;
    loop {
        at -= 1;
        buf[at] = DIGITS[value & 0xf];
        value >>= 4;
        if value == 0 {
            break;
        }
    }

    bufm.put_slice(&buf[at..]);
}
