/// Musical note names (chromatic scale)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl NoteName {
    /// Pitch class within an octave (C=0, B=11)
    pub fn semitone(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::CSharp => 1,
            NoteName::D => 2,
            NoteName::DSharp => 3,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::FSharp => 6,
            NoteName::G => 7,
            NoteName::GSharp => 8,
            NoteName::A => 9,
            NoteName::ASharp => 10,
            NoteName::B => 11,
        }
    }
}

/// One selectable label and the pitch class it spells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub label: &'static str,
    pub pitch: NoteName,
}

const fn entry(label: &'static str, pitch: NoteName) -> CatalogEntry {
    CatalogEntry { label, pitch }
}

/// Every label the ticker can show. Sharp and flat spellings of the same
/// pitch class are separate entries, so five pitch classes appear twice.
pub const CATALOG: [CatalogEntry; 17] = [
    entry("C", NoteName::C),
    entry("C#", NoteName::CSharp),
    entry("Db", NoteName::CSharp),
    entry("D", NoteName::D),
    entry("D#", NoteName::DSharp),
    entry("Eb", NoteName::DSharp),
    entry("E", NoteName::E),
    entry("F", NoteName::F),
    entry("F#", NoteName::FSharp),
    entry("Gb", NoteName::FSharp),
    entry("G", NoteName::G),
    entry("G#", NoteName::GSharp),
    entry("Ab", NoteName::GSharp),
    entry("A", NoteName::A),
    entry("A#", NoteName::ASharp),
    entry("Bb", NoteName::ASharp),
    entry("B", NoteName::B),
];

/// All labels spelling the given pitch class, in catalog order
pub fn spellings(pitch: NoteName) -> impl Iterator<Item = &'static str> {
    CATALOG
        .iter()
        .filter(move |e| e.pitch == pitch)
        .map(|e| e.label)
}
