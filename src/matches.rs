macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            const PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

// ===== lookup table =====

byte_map! {
    /// token   = 1*tchar
    /// tchar   = "!" / "#" / "$" / "%" / "&" / "'" / "*"
    ///         / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
    ///         / DIGIT / ALPHA
    #[inline(always)]
    pub const fn is_token(byte: u8) {
        matches!(
            byte,
            | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*'
            | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
        )
        || byte.is_ascii_alphanumeric()
    }
}

byte_map! {
    /// method  = 1*UPPERALPHA
    #[inline(always)]
    pub const fn is_method(byte: u8) {
        byte.is_ascii_uppercase()
    }
}

byte_map! {
    /// Request target after the leading `/`.
    ///
    /// target-char = DIGIT / LOWERALPHA / "/" / "." / "-"
    #[inline(always)]
    pub const fn is_target(byte: u8) {
        byte.is_ascii_digit()
        || byte.is_ascii_lowercase()
        || matches!(byte, b'/' | b'.' | b'-')
    }
}

// ===== crlf =====

/// Returns the index of the first `\r\n` in `bytes`.
///
/// A lone `\r` or `\n` is not a line terminator.
pub fn find_crlf(bytes: &[u8]) -> Option<usize> {
    let mut offset = 0;
    while let Some(cr) = bytes[offset..].iter().position(|&b| b == b'\r') {
        let at = offset + cr;
        match bytes.get(at + 1) {
            Some(b'\n') => return Some(at),
            Some(_) => offset = at + 1,
            None => return None,
        }
    }
    None
}
