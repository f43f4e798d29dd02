// Near-key tables for Turkish keyboard layouts

use std::fmt;
use std::str::FromStr;

use kelime_trie::ProximityTable;

use crate::SpellerError;

// =========================================================================
// Layout tables
// =========================================================================

/// Turkish F layout: each key with the keys a finger is likely to hit
/// instead of it.
const TURKISH_F_NEAR_KEYS: &[(char, &str)] = &[
    ('a', "eüs"),
    ('b', "svn"),
    ('c', "vçx"),
    ('ç', "czö"),
    ('d', "orsf"),
    ('e', "iawr"),
    ('f', "gd"),
    ('g', "fğh"),
    ('ğ', "gıpü"),
    ('h', "npgj"),
    ('ı', "ğou"),
    ('i', "ueş"),
    ('j', "öhk"),
    ('k', "tmjl"),
    ('l', "mykş"),
    ('m', "klnö"),
    ('n', "rhbm"),
    ('o', "ıdp"),
    ('ö', "jvmç"),
    ('p', "hqoğ"),
    ('r', "dnet"),
    ('s', "zbad"),
    ('ş', "yli"),
    ('t', "ükry"),
    ('u', "iyı"),
    ('ü', "atğ"),
    ('v', "öcb"),
    ('y', "lştu"),
    ('z', "çsx"),
    ('x', "wzc"),
    ('q', "pqw"),
    ('w', "qxe"),
];

/// Turkish Q layout: horizontal neighbors only.
const TURKISH_Q_NEAR_KEYS: &[(char, &str)] = &[
    ('a', "s"),
    ('b', "vn"),
    ('c', "vx"),
    ('ç', "ö"),
    ('d', "sf"),
    ('e', "wr"),
    ('f', "gd"),
    ('g', "fh"),
    ('ğ', "pü"),
    ('h', "gj"),
    ('ı', "ou"),
    ('i', "ş"),
    ('j', "hk"),
    ('k', "jl"),
    ('l', "kş"),
    ('m', "nö"),
    ('n', "bm"),
    ('o', "ıp"),
    ('ö', "mç"),
    ('p', "oğ"),
    ('r', "et"),
    ('s', "ad"),
    ('ş', "li"),
    ('t', "ry"),
    ('u', "yı"),
    ('ü', "ğ"),
    ('v', "cb"),
    ('y', "tu"),
    ('z', "x"),
    ('x', "zc"),
    ('q', "w"),
    ('w', "qe"),
];

// =========================================================================
// KeyboardLayout
// =========================================================================

/// Supported keyboard layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardLayout {
    TurkishF,
    TurkishQ,
}

impl KeyboardLayout {
    /// Raw `(key, neighbors)` rows of this layout.
    pub fn rows(self) -> &'static [(char, &'static str)] {
        match self {
            KeyboardLayout::TurkishF => TURKISH_F_NEAR_KEYS,
            KeyboardLayout::TurkishQ => TURKISH_Q_NEAR_KEYS,
        }
    }

    /// Build the proximity table for this layout.
    pub fn near_keys(self) -> ProximityTable {
        ProximityTable::from_rows(self.rows())
    }
}

impl FromStr for KeyboardLayout {
    type Err = SpellerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f" | "tr-f" | "turkish-f" => Ok(KeyboardLayout::TurkishF),
            "q" | "tr-q" | "turkish-q" => Ok(KeyboardLayout::TurkishQ),
            _ => Err(SpellerError::UnknownLayout(s.to_string())),
        }
    }
}

impl fmt::Display for KeyboardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyboardLayout::TurkishF => f.write_str("turkish-f"),
            KeyboardLayout::TurkishQ => f.write_str("turkish-q"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f_layout_neighbors() {
        let table = KeyboardLayout::TurkishF.near_keys();
        assert!(table.is_near('m', 'n'));
        assert!(table.is_near('k', 't'));
        assert!(table.is_near('ğ', 'ü'));
        assert!(!table.is_near('m', 'z'));
    }

    #[test]
    fn q_layout_neighbors() {
        let table = KeyboardLayout::TurkishQ.near_keys();
        assert!(table.is_near('i', 'ş'));
        assert!(table.is_near('a', 's'));
        assert!(!table.is_near('a', 'e'));
    }

    #[test]
    fn tables_cover_the_alphabet() {
        for layout in [KeyboardLayout::TurkishF, KeyboardLayout::TurkishQ] {
            let table = layout.near_keys();
            for c in "abcçdefgğhıijklmnoöprsştuüvyz".chars() {
                assert!(table.neighbors(c).count() > 0, "{layout}: no neighbors for {c}");
            }
        }
    }

    #[test]
    fn parse_layout_names() {
        assert_eq!("f".parse::<KeyboardLayout>(), Ok(KeyboardLayout::TurkishF));
        assert_eq!("Q".parse::<KeyboardLayout>(), Ok(KeyboardLayout::TurkishQ));
        assert_eq!(
            "turkish-f".parse::<KeyboardLayout>(),
            Ok(KeyboardLayout::TurkishF)
        );
        assert_eq!(
            "dvorak".parse::<KeyboardLayout>(),
            Err(SpellerError::UnknownLayout("dvorak".to_string()))
        );
    }

    #[test]
    fn display_round_trips() {
        for layout in [KeyboardLayout::TurkishF, KeyboardLayout::TurkishQ] {
            assert_eq!(layout.to_string().parse::<KeyboardLayout>(), Ok(layout));
        }
    }
}
