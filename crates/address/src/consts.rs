/// Number of bytes in an address.
pub const ADDR_LEN: usize = 20;

/// Version byte prepended to the address bytes before base58check encoding.
/// It makes every encoded address start with `A`.
pub const ADDR_VERSION: u8 = 0x17;

/// Number of bytes of the double sha256 kept as checksum.
pub const CHECKSUM_LEN: usize = 4;

/// Length of a decoded base58check address: version + address + checksum.
pub const DECODED_LEN: usize = 1 + ADDR_LEN + CHECKSUM_LEN;

/// The bitcoin base58 alphabet.
pub const ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
