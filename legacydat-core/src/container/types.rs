/// The v2 footer-header magic, decoded to its readable tag.
///
/// Magic bytes are stored little-endian on disk, i.e. reversed relative to
/// the readable tag strings below (`"TSUC"` on disk is `CUSC` reversed...
/// the readable tag is the magic read backwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Bin,
    Custom,
    Font,
    Frame,
    CgaPal,
    SvgaPal,
    TgaPal,
    Piece,
    Psl,
    Screen,
    Shape,
    ShapePal,
    Text,
    Sound,
    Sequence,
    TextAlt,
    Level,
    Unknown,
}

impl TypeTag {
    /// Canonical readable magic string for each tag, as it appears reversed
    /// on disk.
    const KNOWN: &'static [(TypeTag, &'static [u8; 4])] = &[
        (TypeTag::Custom, b"TSUC"),
        (TypeTag::Font, b"TNOF"),
        (TypeTag::Frame, b"MARF"),
        (TypeTag::CgaPal, b"CLAP"),
        (TypeTag::SvgaPal, b"SLAP"),
        (TypeTag::TgaPal, b"TLAP"),
        (TypeTag::Piece, b"CEIP"),
        (TypeTag::Psl, b"LSP\0"),
        (TypeTag::Screen, b"RCS\0"),
        (TypeTag::Shape, b"PAHS"),
        (TypeTag::ShapePal, b"LPHS"),
        (TypeTag::Text, b"LRTS"),
        (TypeTag::Sound, b"DNS\0"),
        (TypeTag::Sequence, b"SQES"),
        (TypeTag::TextAlt, b"4TXT"),
        (TypeTag::Level, b"\0\0\0\0"),
    ];

    /// Classifies a raw 4-byte on-disk magic into a type tag.
    pub fn from_magic(raw: &[u8; 4]) -> TypeTag {
        let mut reversed = *raw;
        reversed.reverse();
        for (tag, magic) in Self::KNOWN {
            if reversed == **magic {
                return *tag;
            }
        }
        TypeTag::Unknown
    }

    /// The on-disk 4-byte magic for this tag (reversed readable form).
    /// Returns `None` for tags with no fixed magic (`Bin`, `Unknown`).
    pub fn to_magic(self) -> Option<[u8; 4]> {
        for (tag, magic) in Self::KNOWN {
            if *tag == self {
                let mut bytes = **magic;
                bytes.reverse();
                return Some(bytes);
            }
        }
        None
    }

    /// Canonical output subdirectory name used by the extraction orchestrator.
    pub fn dir_name(self) -> &'static str {
        match self {
            TypeTag::Bin => "Bin",
            TypeTag::Custom => "Custom",
            TypeTag::Font => "Fonts",
            TypeTag::Frame => "Frames",
            TypeTag::CgaPal => "cgaPalette",
            TypeTag::SvgaPal => "svgaPalette",
            TypeTag::TgaPal => "tgaPalette",
            TypeTag::Piece => "Pieces",
            TypeTag::Psl => "LSP",
            TypeTag::Screen => "Screens",
            TypeTag::Shape => "Shapes",
            TypeTag::ShapePal => "ShapePalettes",
            TypeTag::Text => "Text",
            TypeTag::Sound => "Sounds",
            TypeTag::Sequence => "Sequences",
            TypeTag::TextAlt => "Text4",
            TypeTag::Level => "Levels",
            TypeTag::Unknown => "Unknown",
        }
    }
}

/// Flags attached to a v2 entry record; meaning beyond raw bytes is not
/// interpreted by the core (the assembler writes `[64, 0, 0]` for
/// sequence entries; all other producers pass flags through verbatim).
pub type EntryFlags = [u8; 3];

/// One addressable blob inside a container.
#[derive(Debug, Clone)]
pub struct Entry {
    pub id: u16,
    pub offset: u32,
    pub size: u16,
    pub flags: EntryFlags,
}

/// An ordered sequence of entries sharing one type tag.
#[derive(Debug, Clone)]
pub struct EntryList {
    pub type_tag: TypeTag,
    pub entries: Vec<Entry>,
}

impl EntryList {
    pub fn find_by_id(&self, id: u16) -> Option<(usize, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, e)| e.id == id)
    }
}
