//! Suffix matching for base58-encoded addresses
//!
//! The trailing `k` characters of a base58 encoding are the low `k` digits
//! of the value, so a raw candidate can be pre-screened against the target
//! suffix by reducing it mod 58^k without encoding it. The pre-filter is a
//! screen only: candidates that pass are confirmed with a full string
//! comparison before they count as matches.

/// Base58 charset reverse lookup (char -> digit value)
const BASE58_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, // 0-15
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, // 16-31
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, // 32-47
    -1, 0, 1, 2, 3, 4, 5, 6, 7, 8, -1, -1, -1, -1, -1, -1, // 48-63
    -1, 9, 10, 11, 12, 13, 14, 15, 16, -1, 17, 18, 19, 20, 21, -1, // 64-79
    22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, -1, -1, -1, -1, -1, // 80-95
    -1, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, -1, 44, 45, 46, // 96-111
    47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, -1, -1, -1, -1, -1, // 112-127
];

/// Longest supported suffix; 58^10 still fits in a u64
const MAX_SUFFIX_LEN: usize = 10;

/// Suffix matcher for base58 addresses
#[derive(Debug, Clone)]
pub struct SuffixPattern {
    /// The target suffix
    pub suffix: String,
    /// 58^len
    tail_mod: u64,
    /// Value of the suffix read as base58 digits
    tail_residue: u64,
    /// Estimated difficulty (expected candidates per match)
    pub difficulty: f64,
}

impl SuffixPattern {
    /// Create a new pattern from a suffix string
    pub fn new(suffix: &str) -> Result<Self, PatternError> {
        if suffix.is_empty() {
            return Err(PatternError::Empty);
        }
        if suffix.len() > MAX_SUFFIX_LEN {
            return Err(PatternError::TooLong(suffix.len()));
        }

        let mut tail_mod: u64 = 1;
        let mut tail_residue: u64 = 0;
        for c in suffix.chars() {
            let idx = c as usize;
            if idx >= 128 || BASE58_REV[idx] < 0 {
                return Err(PatternError::InvalidCharacter(c));
            }
            tail_mod *= 58;
            tail_residue = tail_residue * 58 + BASE58_REV[idx] as u64;
        }

        let difficulty = 58.0f64.powi(suffix.len() as i32);

        Ok(Self {
            suffix: suffix.to_string(),
            tail_mod,
            tail_residue,
            difficulty,
        })
    }

    /// Check if an encoded address ends with the target suffix
    #[inline]
    pub fn matches(&self, address: &str) -> bool {
        address.ends_with(&self.suffix)
    }

    /// Fast screen on the raw bytes, before encoding
    ///
    /// Returns false only when the encoding provably cannot end with the
    /// suffix. Values below 58^len keep their trailing characters in the
    /// '1'-padding region where the digit comparison is not decisive, so
    /// they pass through to the full check.
    #[inline]
    pub fn matches_raw(&self, raw: &[u8; 32]) -> bool {
        let mut m: u64 = 0;
        for &byte in raw {
            m = ((m as u128 * 256 + byte as u128) % self.tail_mod as u128) as u64;
        }
        if m == self.tail_residue {
            return true;
        }
        self.value_below_mod(raw)
    }

    /// True when the whole 32-byte value is smaller than 58^len
    fn value_below_mod(&self, raw: &[u8; 32]) -> bool {
        if raw[..24].iter().any(|&b| b != 0) {
            return false;
        }
        let tail = u64::from_be_bytes(raw[24..].try_into().unwrap());
        tail < self.tail_mod
    }
}

#[derive(Debug, Clone)]
pub enum PatternError {
    Empty,
    TooLong(usize),
    InvalidCharacter(char),
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::Empty => write!(f, "Suffix must not be empty"),
            PatternError::TooLong(len) => {
                write!(f, "Suffix too long: {} chars (max {})", len, MAX_SUFFIX_LEN)
            }
            PatternError::InvalidCharacter(c) => {
                write!(f, "Invalid base58 character in suffix: '{}'", c)
            }
        }
    }
}

impl std::error::Error for PatternError {}
