//! Emoji and pictograph removal.

/// Inclusive code point ranges stripped from tag text.
///
/// Overlapping ranges are kept as listed; membership is a plain union.
const DENYLIST: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // emoticons
    (0x1F300, 0x1F5FF), // symbols & pictographs
    (0x1F680, 0x1F6FF), // transport & map symbols
    (0x1F1E0, 0x1F1FF), // regional indicators (flags)
    (0x2500, 0x2BEF),   // box drawing, shapes, misc symbols
    (0x2702, 0x27B0),   // dingbats
    (0x24C2, 0x1F251),  // enclosed characters and everything up to them
    (0x1F926, 0x1F937), // supplemental gestures
    (0x10000, 0x10FFFF),
    (0x2640, 0x2642),   // gender signs
    (0x2600, 0x2B55),
    (0x200D, 0x200D),   // zero width joiner
    (0x23CF, 0x23CF),
    (0x23E9, 0x23E9),
    (0x231A, 0x231A),
    (0xFE0F, 0xFE0F),   // variation selector-16
    (0x3030, 0x3030),
];

/// True if `ch` falls in one of the stripped ranges.
pub fn is_denied(ch: char) -> bool {
    let cp = ch as u32;
    DENYLIST.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Remove emoji, pictographs and symbol dingbats, leaving ordinary text.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|&ch| !is_denied(ch)).collect()
}
