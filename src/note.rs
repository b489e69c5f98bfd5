//! Note name, note number, and frequency conversion.
//!
//! Note names use scientific pitch notation: a letter A-G, an optional
//! accidental (`♯`/`♭`, with ASCII `#`/`b` accepted as shorthand), and an
//! octave, possibly negative. Middle C (MIDI 60) is `C4`; concert A
//! (MIDI 69) is `A4` at the reference tuning.

use crate::error::{Error, Result};

/// MIDI note number of A4 at the reference tuning.
const A4: i32 = 69;

/// Pitch-class values for every accepted spelling.
const NOTE_NUMBERS: [(&str, i32); 17] = [
    ("C", 0),
    ("C♯", 1),
    ("D♭", 1),
    ("D", 2),
    ("D♯", 3),
    ("E♭", 3),
    ("E", 4),
    ("F", 5),
    ("F♯", 6),
    ("G♭", 6),
    ("G", 7),
    ("G♯", 8),
    ("A♭", 8),
    ("A", 9),
    ("A♯", 10),
    ("B♭", 10),
    ("B", 11),
];

/// Canonical spellings, indexed by pitch class.
const NOTE_NAMES: [&str; 12] = [
    "C", "C♯", "D", "E♭", "E", "F", "F♯", "G", "G♯", "A", "B♭", "B",
];

/// Replace ASCII shorthand accidentals with the canonical symbols:
/// every `#` becomes `♯` and every `b` becomes `♭`.
pub fn normalise_note_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '#' => '♯',
            'b' => '♭',
            c => c,
        })
        .collect()
}

/// Parse a note name into a note number.
///
/// Shorthand accidentals are normalised first, so `"C#4"` and `"C♯4"` are
/// equivalent. Fails with [`Error::NoteName`] when the string does not have
/// the letter/accidental/octave shape or uses a spelling outside the
/// chromatic table (e.g. `E♯`).
///
/// The result is not clamped to 0-127; out-of-range octaves yield
/// out-of-range numbers.
pub fn name_to_number(name: &str) -> Result<i32> {
    parse_name(&normalise_note_name(name)).ok_or_else(|| Error::NoteName {
        name: name.to_string(),
    })
}

fn parse_name(name: &str) -> Option<i32> {
    let mut chars = name.chars();
    let letter = chars.next()?;
    if !('A'..='G').contains(&letter) {
        return None;
    }

    let rest = chars.as_str();
    let (class_len, octave_str) = match rest.chars().next() {
        Some(c @ ('♯' | '♭')) => (letter.len_utf8() + c.len_utf8(), &rest[c.len_utf8()..]),
        _ => (letter.len_utf8(), rest),
    };
    let class = &name[..class_len];
    let class = NOTE_NUMBERS.iter().find(|(n, _)| *n == class).map(|(_, v)| *v)?;

    // Octave is -?\d+ only; a stray sign or empty tail fails the parse.
    if octave_str.is_empty() || octave_str.starts_with('+') {
        return None;
    }
    let octave: i32 = octave_str.parse().ok()?;

    Some((octave + 1) * 12 + class)
}

/// Canonical name for a note number: `number_to_name(69)` is `"A4"`.
///
/// Spellings come from the canonical table (`C♯` but `E♭` and `B♭`). Total
/// over all integers; negative numbers land in octaves below -1.
pub fn number_to_name(n: i32) -> String {
    format!("{}{}", NOTE_NAMES[n.rem_euclid(12) as usize], number_to_octave(n))
}

/// Octave of a note number: `floor(n / 12) - 1`, so MIDI 60 is octave 4
/// and MIDI 0 is octave -1.
#[inline]
pub fn number_to_octave(n: i32) -> i32 {
    n.div_euclid(12) - 1
}

/// Frequency in Hz of a (possibly fractional) note number at the given
/// tuning, where `tuning` is the frequency of A4 (concert pitch 440.0).
#[inline]
pub fn number_to_frequency(tuning: f64, n: f64) -> f64 {
    tuning * 2.0_f64.powf((n - A4 as f64) / 12.0)
}

/// Note number of a frequency at the given tuning.
///
/// Rounded to the nearest millionth of a semitone so equal-tempered
/// frequencies come back as whole numbers instead of carrying float noise.
pub fn frequency_to_number(tuning: f64, frequency: f64) -> f64 {
    let number = A4 as f64 + 12.0 * (frequency / tuning).log2();
    (number * 1_000_000.0).round() / 1_000_000.0
}

/// Deprecated name for [`name_to_number`].
#[deprecated(note = "use `name_to_number`")]
pub fn note_to_number(name: &str) -> Result<i32> {
    static WARNED: std::sync::Once = std::sync::Once::new();
    WARNED.call_once(|| tracing::warn!("note_to_number(name) is now name_to_number(name)"));
    name_to_number(name)
}

/// Deprecated name for [`number_to_name`].
#[deprecated(note = "use `number_to_name`")]
pub fn number_to_note(n: i32) -> String {
    static WARNED: std::sync::Once = std::sync::Once::new();
    WARNED.call_once(|| tracing::warn!("number_to_note(n) is now number_to_name(n)"));
    number_to_name(n)
}
