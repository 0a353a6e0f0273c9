use crate::{consts::ALPHABET, types::DecodingError};

const INVALID: u8 = u8::MAX;

// Reverse lookup of the alphabet, indexed by ascii code.
const DECODE_MAP: [u8; 128] = build_decode_map();

const fn build_decode_map() -> [u8; 128] {
    let mut map = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
}

fn digit_of(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_MAP[c as usize] {
        INVALID => None,
        digit => Some(digit),
    }
}

/// Encodes bytes in base58. Each leading zero byte becomes a leading `1`.
pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    // Base 58 digits, least significant first.
    let mut digits: Vec<u8> = Vec::with_capacity(input.len() * 138 / 100 + 1);
    for &byte in &input[zeros..] {
        let mut carry = u32::from(byte);
        for digit in digits.iter_mut() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut encoded = String::with_capacity(zeros + digits.len());
    encoded.extend(std::iter::repeat('1').take(zeros));
    encoded.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char));
    encoded
}

/// Decodes a base58 string. Each leading `1` becomes a leading zero byte.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodingError> {
    let mut zeros = 0;
    let mut leading = true;

    // Bytes, least significant first.
    let mut bytes: Vec<u8> = Vec::with_capacity(input.len());
    for (index, c) in input.char_indices() {
        let digit = digit_of(c).ok_or(DecodingError::InvalidChar { char: c, index })?;
        if leading && digit == 0 {
            zeros += 1;
            continue;
        }
        leading = false;

        let mut carry = u32::from(digit);
        for byte in bytes.iter_mut() {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut decoded = vec![0u8; zeros];
    decoded.extend(bytes.iter().rev());
    Ok(decoded)
}
