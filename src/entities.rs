//! Record types returned by the Songle API.
//!
//! Each record declares a static [`Schema`] describing its field table; the
//! mapper consults the descriptor instead of inspecting types at runtime.
//! All offsets (`start`, `duration` of annotation entries) are milliseconds
//! from the start of the audio, and every list keeps the temporal order the
//! service sent.

use serde::{Deserialize, Serialize};

use crate::mapper::schema::{nested, nested_list, scalar, Schema};
use crate::mapper::Record;

/// An artist as known to the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    /// Service-assigned artist id.
    pub id: u64,
    /// Display name.
    pub name: String,
}

static ARTIST: Schema = Schema {
    name: "Artist",
    fields: &[scalar("id"), scalar("name")],
};

impl Record for Artist {
    fn schema() -> &'static Schema {
        &ARTIST
    }
}

/// Metadata for one analyzed song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Service-assigned song id.
    pub id: u64,
    /// Song title.
    pub title: String,
    /// URL of the song on the source website.
    pub url: String,
    /// Permalink on the Songle site.
    pub permalink: String,
    /// The owning artist.
    pub artist: Artist,
    /// Duration in seconds.
    pub duration: f64,
    /// Service classification code.
    pub code: String,
    /// Root-mean-square amplitude of the recording.
    pub rms_amplitude: f64,
    /// When the song entry was created.
    pub created_at: String,
    /// When the song entry was last updated.
    pub updated_at: String,
    /// When analysis finished.
    pub recognized_at: String,
}

static SONG: Schema = Schema {
    name: "Song",
    fields: &[
        scalar("id"),
        scalar("title"),
        scalar("url"),
        scalar("permalink"),
        nested("artist", &ARTIST),
        scalar("duration"),
        scalar("code"),
        scalar("rms_amplitude"),
        scalar("created_at"),
        scalar("updated_at"),
        scalar("recognized_at"),
    ],
};

impl Record for Song {
    fn schema() -> &'static Schema {
        &SONG
    }
}

/// One beat in the beat map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beat {
    /// Position in the beat sequence.
    pub index: u32,
    /// Offset in milliseconds.
    pub start: u64,
    /// Beats per bar at this point.
    pub count: u32,
    /// Position of this beat within its bar, 1-based.
    pub position: u32,
    /// Local tempo; the service emits fractional values.
    pub bpm: f64,
}

static BEAT: Schema = Schema {
    name: "Beat",
    fields: &[
        scalar("index"),
        scalar("start"),
        scalar("count"),
        scalar("position"),
        scalar("bpm"),
    ],
};

impl Record for Beat {
    fn schema() -> &'static Schema {
        &BEAT
    }
}

/// The beat map of a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatInfo {
    /// Beats in temporal order.
    pub beats: Vec<Beat>,
}

static BEAT_INFO: Schema = Schema {
    name: "BeatInfo",
    fields: &[nested_list("beats", &BEAT)],
};

impl Record for BeatInfo {
    fn schema() -> &'static Schema {
        &BEAT_INFO
    }
}

/// One saved version of an annotation map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    /// Revision id, usable as the `revision_id` query parameter.
    pub id: u64,
    /// When the revision was created.
    pub created_at: String,
    /// When the revision was last updated.
    pub updated_at: String,
}

static REVISION: Schema = Schema {
    name: "Revision",
    fields: &[scalar("id"), scalar("created_at"), scalar("updated_at")],
};

impl Record for Revision {
    fn schema() -> &'static Schema {
        &REVISION
    }
}

/// One chord in the chord map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    /// Position in the chord sequence.
    pub index: u32,
    /// Offset in milliseconds.
    pub start: u64,
    /// Length in milliseconds.
    pub duration: u64,
    /// Chord name; `"N"` denotes no chord.
    pub name: String,
}

static CHORD: Schema = Schema {
    name: "Chord",
    fields: &[
        scalar("index"),
        scalar("start"),
        scalar("duration"),
        scalar("name"),
    ],
};

impl Record for Chord {
    fn schema() -> &'static Schema {
        &CHORD
    }
}

/// The chord map of a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordInfo {
    /// Chords in temporal order.
    pub chords: Vec<Chord>,
}

static CHORD_INFO: Schema = Schema {
    name: "ChordInfo",
    fields: &[nested_list("chords", &CHORD)],
};

impl Record for ChordInfo {
    fn schema() -> &'static Schema {
        &CHORD_INFO
    }
}

/// One melody note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Position in the note sequence.
    pub index: u32,
    /// Offset in milliseconds.
    pub start: u64,
    /// Length in milliseconds.
    pub duration: u64,
}

static NOTE: Schema = Schema {
    name: "Note",
    fields: &[scalar("index"), scalar("start"), scalar("duration")],
};

impl Record for Note {
    fn schema() -> &'static Schema {
        &NOTE
    }
}

/// The melody map of a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MelodyInfo {
    /// Notes in temporal order.
    pub notes: Vec<Note>,
}

static MELODY_INFO: Schema = Schema {
    name: "MelodyInfo",
    fields: &[nested_list("notes", &NOTE)],
};

impl Record for MelodyInfo {
    fn schema() -> &'static Schema {
        &MELODY_INFO
    }
}

/// One concrete occurrence of a repeated passage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repeat {
    /// Position in the occurrence sequence.
    pub index: u32,
    /// Offset in milliseconds.
    pub start: u64,
    /// Length in milliseconds.
    pub duration: u64,
}

static REPEAT: Schema = Schema {
    name: "Repeat",
    fields: &[scalar("index"), scalar("start"), scalar("duration")],
};

impl Record for Repeat {
    fn schema() -> &'static Schema {
        &REPEAT
    }
}

/// A group of chorus occurrences sharing the same material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChorusSegment {
    /// Position in the segment sequence.
    pub index: u32,
    /// Whether the service classified this segment as the chorus.
    pub is_chorus: bool,
    /// Length of one occurrence in milliseconds.
    pub duration: u64,
    /// Occurrences in temporal order.
    pub repeats: Vec<Repeat>,
}

static CHORUS_SEGMENT: Schema = Schema {
    name: "ChorusSegment",
    fields: &[
        scalar("index"),
        scalar("is_chorus"),
        scalar("duration"),
        nested_list("repeats", &REPEAT),
    ],
};

impl Record for ChorusSegment {
    fn schema() -> &'static Schema {
        &CHORUS_SEGMENT
    }
}

/// A group of repeated (non-chorus) occurrences sharing the same material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatSegment {
    /// Position in the segment sequence.
    pub index: u32,
    /// Whether the service classified this segment as the chorus.
    pub is_chorus: bool,
    /// Length of one occurrence in milliseconds.
    pub duration: u64,
    /// Occurrences in temporal order.
    pub repeats: Vec<Repeat>,
}

static REPEAT_SEGMENT: Schema = Schema {
    name: "RepeatSegment",
    fields: &[
        scalar("index"),
        scalar("is_chorus"),
        scalar("duration"),
        nested_list("repeats", &REPEAT),
    ],
};

impl Record for RepeatSegment {
    fn schema() -> &'static Schema {
        &REPEAT_SEGMENT
    }
}

/// Chorus and repeat structure of a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChorusInfo {
    /// Chorus segments in temporal order.
    pub chorus_segments: Vec<ChorusSegment>,
    /// Repeat segments in temporal order.
    pub repeat_segments: Vec<RepeatSegment>,
}

static CHORUS_INFO: Schema = Schema {
    name: "ChorusInfo",
    fields: &[
        nested_list("chorus_segments", &CHORUS_SEGMENT),
        nested_list("repeat_segments", &REPEAT_SEGMENT),
    ],
};

impl Record for ChorusInfo {
    fn schema() -> &'static Schema {
        &CHORUS_INFO
    }
}
