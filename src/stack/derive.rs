// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reversed codes and short codes of stacking codewords.

use crate::codeword::Codeword;

/// The two forms reported for each stacking codeword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    /// Entries `1..d+1` of the codeword, `d` values.
    pub short_code: Codeword,
    /// The whole codeword back-to-front.
    pub reversed: Codeword,
}

impl Derivation {
    /// Derive both forms from `code`.
    ///
    /// The short code is taken from the reversed form read back to the
    /// original orientation, so it agrees with `code[1..d+1]`.
    ///
    /// # Panics
    ///
    /// Panics if `code` is shorter than `d + 1`; [`stack`](super::stack)
    /// only yields codewords that are long enough.
    pub fn new(code: &Codeword, d: usize) -> Self {
        let reversed = code.reversed();
        let restored = reversed.reversed();
        let short_code = Codeword::from(restored[1..d + 1].to_vec());
        Self {
            short_code,
            reversed,
        }
    }
}

/// One derivation per codeword, in the order given.
pub fn derive(valid: &[Codeword], d: usize) -> Vec<Derivation> {
    valid.iter().map(|code| Derivation::new(code, d)).collect()
}
