use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StitchEntry {
    pub name: &'static str,
    pub description: &'static str,
}

/// Built-in stitch reference shown in the learning center.
pub const STITCH_GLOSSARY: &[StitchEntry] = &[
    StitchEntry {
        name: "Chain (ch)",
        description: "The foundation of most crochet projects.",
    },
    StitchEntry {
        name: "Slip Stitch (sl st)",
        description: "Used to join rounds or move yarn across stitches.",
    },
    StitchEntry {
        name: "Single Crochet (sc)",
        description: "A short, dense stitch.",
    },
    StitchEntry {
        name: "Half Double Crochet (hdc)",
        description: "Medium height stitch, between sc and dc.",
    },
    StitchEntry {
        name: "Double Crochet (dc)",
        description: "A tall, versatile stitch.",
    },
    StitchEntry {
        name: "Treble Crochet (tr)",
        description: "An extra-tall stitch for lacy patterns.",
    },
    StitchEntry {
        name: "Magic Ring (mr)",
        description: "A technique to start rounds without a hole.",
    },
    StitchEntry {
        name: "Increase (inc)",
        description: "Two stitches worked into the same base stitch.",
    },
    StitchEntry {
        name: "Decrease (dec)",
        description: "Combining two stitches into one.",
    },
];

/// Looks up a stitch by its abbreviation, e.g. `"sc"` or `"sl st"`.
pub fn lookup_stitch(abbreviation: &str) -> Option<&'static StitchEntry> {
    let needle = abbreviation.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return None;
    }
    STITCH_GLOSSARY.iter().find(|entry| {
        entry
            .name
            .rsplit_once('(')
            .and_then(|(_, rest)| rest.strip_suffix(')'))
            .is_some_and(|abbr| abbr.eq_ignore_ascii_case(&needle))
    })
}
