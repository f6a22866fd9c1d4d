//! The encryption of Type 1 fonts.

/// Key of the encrypted portion of a font program.
pub(crate) const EEXEC_KEY: u16 = 55665;
/// Key of individual charstrings.
pub(crate) const CHARSTRING_KEY: u16 = 4330;

/// The number of lead-in bytes of a charstring, as announced by `lenIV`.
pub(crate) const LEN_IV: usize = 4;

const C1: u16 = 52845;
const C2: u16 = 22719;

/// Encrypt `plain` after `skip` lead-in bytes.
///
/// The lead-in bytes are zeros instead of random bytes, which keeps the
/// output reproducible.
pub(crate) fn encrypt(plain: &[u8], key: u16, skip: usize) -> Vec<u8> {
    let mut r = key;
    let mut out = Vec::with_capacity(skip + plain.len());
    for &p in std::iter::repeat(&0).take(skip).chain(plain) {
        let c = p ^ (r >> 8) as u8;
        r = u16::from(c).wrapping_add(r).wrapping_mul(C1).wrapping_add(C2);
        out.push(c);
    }
    out
}

/// Decrypt `cipher` and drop `skip` lead-in bytes.
#[cfg(test)]
pub(crate) fn decrypt(cipher: &[u8], key: u16, skip: usize) -> Vec<u8> {
    let mut r = key;
    let mut out = Vec::with_capacity(cipher.len());
    for &c in cipher {
        out.push(c ^ (r >> 8) as u8);
        r = u16::from(c).wrapping_add(r).wrapping_mul(C1).wrapping_add(C2);
    }
    out.split_off(skip.min(out.len()))
}

/// Hex-encode data with 64 digits per line.
pub(crate) fn hex_lines(data: &[u8]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut out = String::with_capacity(data.len() * 2 + data.len() / 32 + 1);
    for line in data.chunks(32) {
        for &byte in line {
            out.push(char::from(DIGITS[usize::from(byte >> 4)]));
            out.push(char::from(DIGITS[usize::from(byte & 0xF)]));
        }
        out.push('\n');
    }
    out
}
