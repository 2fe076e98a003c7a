//! Saved-view link table
//!
//! Keys are a view key followed by the four-digit year. Fragments are
//! appended to the server base; an empty fragment opens the server root.

/// `(view key + year, fragment)` pairs
pub static LINKS: &[(&str, &str)] = &[
    ("A2024", ""),
    ("A2025", ""),
    ("B2024", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MDgzLCJuYW1lIjoi157XqdeZ157XldeqINeR16nXmdeq15XXoyDXqdei150gLSAyMDI0ICjXk9ep15HXldeo15MpIiwibGF5b3V0IjoiZ3JpZCIsInR5cGUiOiJpZGVhcyJ9fQ=="),
    ("B2025", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTQ0LCJuYW1lIjoi157XqdeZ157XldeqINeR16nXmdeq15XXoyDXqdei150gLSAyMDI1ICjXk9ep15HXldeo15MpIiwibGF5b3V0IjoiZ3JpZCIsInR5cGUiOiJpZGVhcyJ9fQ=="),
    ("C2024", ""),
    ("C2025", ""),
    ("D2024", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTI1LCJuYW1lIjoi15fXk9ep15XXqiAyNCAo15PXqdeR15XXqNeTKSIsImxheW91dCI6ImdyaWQiLCJ0eXBlIjoiaWRlYXMifX0="),
    ("D2025", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTU1LCJuYW1lIjoi15fXk9ep15XXqiAyNSAo15PXqdeR15XXqNeTKSIsImxheW91dCI6ImdyaWQiLCJ0eXBlIjoiaWRlYXMifX0="),
    ("E2024", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTIzLCJuYW1lIjoi157Xntep15nXm9eV16ogMjQgKNeT16nXkdeV16jXkykiLCJsYXlvdXQiOiJncmlkIiwidHlwZSI6ImlkZWFzIn19"),
    ("E2025", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTUzLCJuYW1lIjoi157Xntep15nXm9eV16ogMjUgKNeT16nXkdeV16jXkykiLCJsYXlvdXQiOiJncmlkIiwidHlwZSI6ImlkZWFzIn19"),
    ("F2024", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MDkxLCJuYW1lIjoi15DXntem16Ig16nXoNeUIDI0LSjXk9ep15HXldeo15MpIiwibGF5b3V0IjoiZ3JpZCIsInR5cGUiOiJpZGVhcyJ9fQ=="),
    ("F2025", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTQ1LCJuYW1lIjoi15DXntem16Ig16nXoNeUIDI1LSjXk9ep15HXldeo15MpIiwibGF5b3V0IjoiZ3JpZCIsInR5cGUiOiJpZGVhcyJ9fQ=="),
    ("G2024", ""),
    ("G2025", ""),
    ("H2024", ""),
    ("H2025", ""),
    ("I2024", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTM1LCJuYW1lIjoi15fXk9ep15XXqiAtINeU15XXnteo15UgMjQgKNeT16nXkdeV16jXkykiLCJsYXlvdXQiOiJncmlkIiwidHlwZSI6ImlkZWFzIn19"),
    ("I2025", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTU4LCJuYW1lIjoi15fXk9ep15XXqiAtINeU15XXnteo15UgMjUgKNeT16nXkdeV16jXkykiLCJsYXlvdXQiOiJncmlkIiwidHlwZSI6ImlkZWFzIn19"),
    ("J2024", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTU4LCJuYW1lIjoi15fXk9ep15XXqiAtINeU15XXnteo15UgMjUgKNeT16nXkdeV16jXkykiLCJsYXlvdXQiOiJncmlkIiwidHlwZSI6ImlkZWFzIn19"),
    ("J2025", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTU2LCJuYW1lIjoi15fXk9ep15XXqiDXnteQ15XXqdeo15XXqiDXnNeR15nXpteV16IgMjUgKNeT16nXkdeV16jXkykiLCJsYXlvdXQiOiJncmlkIiwidHlwZSI6ImlkZWFzIn19"),
    ("K2024", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MzY0LCJuYW1lIjoi15fXk9ep15XXqiDXnteR15XXmNec15XXqiAyNCAo15PXqdeR15XXqNeTKSIsImxheW91dCI6ImdyaWQiLCJ0eXBlIjoiaWRlYXMifX0="),
    ("K2025", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MzUzLCJuYW1lIjoi15fXk9ep15XXqiDXnteR15XXmNec15XXqiAyNSAo15PXqdeR15XXqNeTKSIsImxheW91dCI6ImdyaWQiLCJ0eXBlIjoiaWRlYXMifX0="),
    ("L2024", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MDkzLCJuYW1lIjoi15DXntem16Ig16nXoNeUICAyNCDXlNeV157XqC0o15PXqdeR15XXqNeTKSIsImxheW91dCI6ImdyaWQiLCJ0eXBlIjoiaWRlYXMifX0="),
    ("L2025", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTUxLCJuYW1lIjoi15DXntem16Ig16nXoNeUICAyNSDXlNeV157XqC0o15PXqdeR15XXqNeTKSIsImxheW91dCI6ImdyaWQiLCJ0eXBlIjoiaWRlYXMifX0="),
    ("M2024", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MDkyLCJuYW1lIjoi15DXntem16Ig16nXoNeUICAyNCDXnteQ15XXqdeoINec15HXmdem15XXoi0o15PXqdeR15XXqNeTKSIsImxheW91dCI6ImdyaWQiLCJ0eXBlIjoiaWRlYXMifX0="),
    ("M2025", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTQ5LCJuYW1lIjoi15DXntem16Ig16nXoNeUICAyNSDXnteQ15XXqdeoINec15HXmdem15XXoi0o15PXqdeR15XXqNeTKSIsImxheW91dCI6ImdyaWQiLCJ0eXBlIjoiaWRlYXMifX0="),
    ("N2024", ""),
    ("N2025", ""),
    ("O2024", ""),
    ("O2025", ""),
    ("P2024", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQxMjAwLCJuYW1lIjoi16jXqdeV16ogLSDXkNee16bXoiDXqdeg15QiLCJsYXlvdXQiOiJncmlkIiwidHlwZSI6ImlkZWFzIn19"),
    ("P2025", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MzQ5LCJuYW1lIjoi15DXntem16Ig16nXoNeUINee15HXldeY15zXldeqIDI0ICjXk9ep15HXldeo15MpIiwibGF5b3V0IjoiZ3JpZCIsInR5cGUiOiJpZGVhcyJ9fQ=="),
    ("SCA2024", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTM3LCJuYW1lIjoi15DXl9eV15Yg15HXmdem15XXoiDXm9ec15zXmSAyNCAo15PXqdeR15XXqNeTKSIsImxheW91dCI6ImdyaWQiLCJ0eXBlIjoiaWRlYXMifX0="),
    ("SCA2025", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTYwLCJuYW1lIjoi15DXl9eV15Yg15HXmdem15XXoiDXm9ec15zXmSAyNSAo15PXqdeR15XXqNeTKSIsImxheW91dCI6ImdyaWQiLCJ0eXBlIjoiaWRlYXMifX0="),
    ("SDA2024", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTQyLCJuYW1lIjoi15DXl9eV15Yg15HXmdem15XXoiDXpNeo15XXmden15jXmdedINep15TXldee16jXlSAyNCAo15PXqdeR15XXqNeTKSIsImxheW91dCI6ImdyaWQiLCJ0eXBlIjoiaWRlYXMifX0="),
    ("SDA2025", "/pm/#/ideas/common?_meta=eyJ2aWV3Ijp7ImlkIjo1MjQ0MTYyLCJuYW1lIjoi15DXl9eV15Yg15HXmdem15XXoiDXpNeo15XXmden15jXmdedINep15TXldee16jXlSAyNSAo15PXqdeR15XXqNeTKSIsImxheW91dCI6ImdyaWQiLCJ0eXBlIjoiaWRlYXMifX0="),
];

/// Years the table has entries for
pub const COVERED_YEARS: &[u16] = &[2024, 2025];

/// Fragment for a lookup key
#[must_use]
pub fn fragment(key: &str) -> Option<&'static str> {
    LINKS.iter().find(|(k, _)| *k == key).map(|(_, fragment)| *fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = LINKS.iter().map(|(k, _)| k).collect();
        assert_eq!(keys.len(), LINKS.len());
    }

    #[test]
    fn fragments_are_empty_or_saved_views() {
        for (key, fragment) in LINKS {
            assert!(
                fragment.is_empty() || fragment.starts_with("/pm/#/ideas/common?_meta="),
                "{key}"
            );
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(fragment("A2025"), Some(""));
        assert!(fragment("B2025").is_some_and(|f| !f.is_empty()));
        assert_eq!(fragment("B2026"), None);
        assert_eq!(fragment("SBA2025"), None);
    }
}
