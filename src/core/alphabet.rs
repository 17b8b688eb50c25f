/// Reverse-table marker for bytes that are not alphabet symbols.
pub const INVALID: u8 = 0xFF;

/// The pad character used by base32 and base64.
pub const PAD: u8 = b'=';

/// Standard RFC 4648 base16 alphabet (uppercase hex).
pub static BASE16: Alphabet = Alphabet::new("base16", b"0123456789ABCDEF", None);

/// Standard RFC 4648 base32 alphabet.
pub static BASE32: Alphabet = Alphabet::new("base32", b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", Some(PAD));

/// Standard RFC 4648 base64 alphabet.
pub static BASE64: Alphabet = Alphabet::new(
    "base64",
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    Some(PAD),
);

/// A fixed-width symbol alphabet with its reverse lookup table.
///
/// Alphabets are built entirely at compile time. The constructor rejects
/// (with a const-evaluation panic) any alphabet whose size is not 16, 32 or
/// 64, that contains a non-printable or duplicate symbol, or that contains
/// its own pad character. An invalid alphabet in a `static` therefore fails
/// to compile instead of failing at runtime.
#[derive(Debug)]
pub struct Alphabet {
    name: &'static str,
    symbols: &'static [u8],
    reverse: [u8; 256],
    bits_per_symbol: u32,
    padding: Option<u8>,
}

impl Alphabet {
    /// Builds an alphabet and its reverse table.
    pub const fn new(name: &'static str, symbols: &'static [u8], padding: Option<u8>) -> Self {
        let bits_per_symbol = match symbols.len() {
            16 => 4,
            32 => 5,
            64 => 6,
            _ => panic!("alphabet size must be 16, 32 or 64"),
        };

        if let Some(pad) = padding
            && !pad.is_ascii_graphic()
        {
            panic!("pad character must be printable ASCII");
        }

        Alphabet {
            name,
            symbols,
            reverse: build_reverse_table(symbols, padding),
            bits_per_symbol,
            padding,
        }
    }

    /// Short name, e.g. `"base64"`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of symbols (16, 32 or 64).
    pub const fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Bits carried by one symbol.
    pub const fn bits_per_symbol(&self) -> u32 {
        self.bits_per_symbol
    }

    /// Pad character, if the codec pads.
    pub const fn padding(&self) -> Option<u8> {
        self.padding
    }

    /// Number of symbols in one aligned block: `lcm(bits, 8) / bits`.
    ///
    /// 2 for base16, 8 for base32, 4 for base64.
    pub const fn block_size(&self) -> usize {
        (lcm(self.bits_per_symbol, 8) / self.bits_per_symbol) as usize
    }

    /// Number of input bytes covered by one block: `lcm(bits, 8) / 8`.
    pub const fn block_bytes(&self) -> usize {
        (lcm(self.bits_per_symbol, 8) / 8) as usize
    }

    /// Returns the symbol for a group value.
    ///
    /// Callers mask the value to `bits_per_symbol` bits, so the index is
    /// always in range.
    #[inline]
    pub(crate) fn symbol(&self, index: usize) -> char {
        self.symbols[index] as char
    }

    /// Maps an input byte back to its group value.
    ///
    /// Returns `None` for the pad character and every other non-symbol.
    #[inline]
    pub fn value(&self, byte: u8) -> Option<u8> {
        match self.reverse[byte as usize] {
            INVALID => None,
            value => Some(value),
        }
    }

    /// The symbols in index order.
    pub fn symbols(&self) -> &'static [u8] {
        self.symbols
    }

    /// The full 256-entry reverse table (`INVALID` marks non-symbols).
    pub fn reverse_table(&self) -> &[u8; 256] {
        &self.reverse
    }

    /// True for alphabet symbols and, where the codec pads, the pad character.
    pub fn is_encoding_char(&self, byte: u8) -> bool {
        self.padding == Some(byte) || self.reverse[byte as usize] != INVALID
    }

    /// Every accepted character, for error hints.
    pub fn valid_chars(&self) -> String {
        let mut chars: String = self.symbols.iter().map(|&b| b as char).collect();
        if let Some(pad) = self.padding {
            chars.push(pad as char);
        }
        chars
    }
}

/// Builds the 256-entry reverse table for `symbols`.
///
/// Panics (at compile time, when used in a const context) on a duplicate
/// symbol, a non-printable symbol, or a symbol equal to the pad character.
pub const fn build_reverse_table(symbols: &[u8], padding: Option<u8>) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < symbols.len() {
        let symbol = symbols[i];
        if !symbol.is_ascii_graphic() {
            panic!("alphabet symbols must be printable ASCII");
        }
        if let Some(pad) = padding
            && pad == symbol
        {
            panic!("alphabet contains its pad character");
        }
        if table[symbol as usize] != INVALID {
            panic!("alphabet contains a duplicate symbol");
        }
        table[symbol as usize] = i as u8;
        i += 1;
    }
    table
}

const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

const fn lcm(a: u32, b: u32) -> u32 {
    a / gcd(a, b) * b
}
