//! Stateless conversion utilities for wire-level MIDI messages.
//!
//! Everything here is a pure mapping over fixed-shape input data: there is
//! no state machine, no I/O, and no shared state, so every function is
//! safely callable from any thread.
//!
//! - **Status classification**: raw bytes to [`MessageType`], channel
//!   extraction, `is_note`/`is_control`/`is_pitch` predicates.
//! - **Note conversion**: between note names, note numbers, and
//!   frequencies, with a configurable tuning (concert pitch A4 = 440 Hz
//!   by default).
//! - **Pitch bend**: 14-bit payload decoding to signed integers or
//!   semitones.
//! - **Normalization**: zero-velocity note-on as note-off, and raw driver
//!   events into typed [`NormalizedEvent`]s.
//!
//! # Example
//!
//! ```
//! use midiconv::{name_to_number, number_to_frequency, to_channel, to_type, MessageType};
//!
//! assert_eq!(to_type(&[144, 60, 100]), MessageType::NoteOn);
//! assert_eq!(to_type(&[144, 60, 0]), MessageType::NoteOff); // note release
//! assert_eq!(to_channel(&[144, 60, 100]), 1);
//!
//! let a4 = name_to_number("A4")?;
//! assert_eq!(a4, 69);
//! assert_eq!(number_to_frequency(440.0, a4 as f64), 440.0);
//! # Ok::<(), midiconv::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

pub(crate) mod event;
pub(crate) mod message;
pub(crate) mod note;
pub(crate) mod pitch;

pub use event::{normalise, MidiInputEvent, NormalizedEvent};
pub use message::{
    is_control, is_note, is_pitch, normalise_note, to_channel, to_status, to_type, MessageType,
};
pub use note::{
    frequency_to_number, name_to_number, normalise_note_name, number_to_frequency, number_to_name,
    number_to_octave,
};
pub use pitch::{pitch_to_float, pitch_to_int, DEFAULT_BEND_RANGE};

// Deprecated aliases, kept as forwarding shims
#[allow(deprecated)]
pub use message::normalise_note_off;
#[allow(deprecated)]
pub use note::{note_to_number, number_to_note};
