//! Normalized MIDI input events.
//!
//! Turns the raw `{data, time_stamp}` records a MIDI input driver delivers
//! into typed events with payload values decoded and scaled: pressure and
//! velocity to 0.0-1.0, pitch bend to semitones.

use serde::{Deserialize, Serialize};

use crate::message::{to_type, MessageType};
use crate::pitch::{pitch_to_float, DEFAULT_BEND_RANGE};

/// Raw event as delivered by a MIDI input driver.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MidiInputEvent {
    /// Status byte plus up to two data bytes.
    pub data: [u8; 3],
    /// Driver timestamp, in the driver's time base.
    pub time_stamp: f64,
}

impl MidiInputEvent {
    #[inline]
    pub fn new(data: [u8; 3], time_stamp: f64) -> Self {
        Self { data, time_stamp }
    }
}

/// Decoded event with normalized payload values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum NormalizedEvent {
    /// Pitch bend in semitones at the default ±2 range.
    Pitch { time: f64, semitones: f32 },
    /// Program change.
    Program { time: f64, program: u8 },
    /// Channel aftertouch, applied to all sounding keys.
    ChannelTouch { time: f64, pressure: f32 },
    /// Polyphonic aftertouch for one key.
    PolyTouch { time: f64, note: u8, pressure: f32 },
    /// Note-on, note-off, or control change with its value scaled to 0-1.
    Message {
        time: f64,
        kind: MessageType,
        data: u8,
        value: f32,
    },
}

impl NormalizedEvent {
    /// The driver timestamp the event was decoded from.
    #[inline]
    pub fn time(&self) -> f64 {
        match *self {
            NormalizedEvent::Pitch { time, .. }
            | NormalizedEvent::Program { time, .. }
            | NormalizedEvent::ChannelTouch { time, .. }
            | NormalizedEvent::PolyTouch { time, .. }
            | NormalizedEvent::Message { time, .. } => time,
        }
    }
}

/// Decode a raw input event into a [`NormalizedEvent`].
///
/// Dispatches on the message type; a zero-velocity note-on comes out as a
/// note-off message, per [`to_type`].
pub fn normalise(event: &MidiInputEvent) -> NormalizedEvent {
    let data = &event.data;
    let time = event.time_stamp;

    match to_type(data) {
        MessageType::PitchBend => NormalizedEvent::Pitch {
            time,
            semitones: pitch_to_float(DEFAULT_BEND_RANGE, data),
        },
        MessageType::ProgramChange => NormalizedEvent::Program {
            time,
            program: data[1],
        },
        MessageType::ChannelTouch => NormalizedEvent::ChannelTouch {
            time,
            pressure: data[1] as f32 / 127.0,
        },
        MessageType::PolyTouch => NormalizedEvent::PolyTouch {
            time,
            note: data[1],
            pressure: data[2] as f32 / 127.0,
        },
        kind => NormalizedEvent::Message {
            time,
            kind,
            data: data[1],
            value: data[2] as f32 / 127.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalise_note_on() {
        let event = MidiInputEvent::new([144, 60, 127], 10.5);
        match normalise(&event) {
            NormalizedEvent::Message {
                time,
                kind,
                data,
                value,
            } => {
                assert_eq!(time, 10.5);
                assert_eq!(kind, MessageType::NoteOn);
                assert_eq!(data, 60);
                assert_relative_eq!(value, 1.0);
            }
            other => panic!("expected Message, got {other:?}"),
        }
    }

    #[test]
    fn test_normalise_zero_velocity_note_on() {
        let event = MidiInputEvent::new([144, 60, 0], 0.0);
        match normalise(&event) {
            NormalizedEvent::Message { kind, .. } => assert_eq!(kind, MessageType::NoteOff),
            other => panic!("expected Message, got {other:?}"),
        }
    }

    #[test]
    fn test_normalise_control() {
        let event = MidiInputEvent::new([176, 7, 64], 1.0);
        match normalise(&event) {
            NormalizedEvent::Message {
                kind, data, value, ..
            } => {
                assert_eq!(kind, MessageType::Control);
                assert_eq!(data, 7);
                assert_relative_eq!(value, 64.0 / 127.0);
            }
            other => panic!("expected Message, got {other:?}"),
        }
    }

    #[test]
    fn test_normalise_pitch() {
        let event = MidiInputEvent::new([224, 0, 64], 2.0);
        assert_eq!(
            normalise(&event),
            NormalizedEvent::Pitch {
                time: 2.0,
                semitones: 0.0
            }
        );
    }

    #[test]
    fn test_normalise_program() {
        let event = MidiInputEvent::new([192, 12, 0], 3.0);
        assert_eq!(
            normalise(&event),
            NormalizedEvent::Program {
                time: 3.0,
                program: 12
            }
        );
    }

    #[test]
    fn test_normalise_touch() {
        let event = MidiInputEvent::new([208, 127, 0], 4.0);
        match normalise(&event) {
            NormalizedEvent::ChannelTouch { pressure, .. } => assert_relative_eq!(pressure, 1.0),
            other => panic!("expected ChannelTouch, got {other:?}"),
        }

        let event = MidiInputEvent::new([160, 60, 127], 5.0);
        match normalise(&event) {
            NormalizedEvent::PolyTouch { note, pressure, .. } => {
                assert_eq!(note, 60);
                assert_relative_eq!(pressure, 1.0);
            }
            other => panic!("expected PolyTouch, got {other:?}"),
        }
    }

    #[test]
    fn test_normalise_uses_event_own_buffer() {
        // Two events decoded back to back must not leak state between calls
        let a = MidiInputEvent::new([144, 60, 100], 1.0);
        let b = MidiInputEvent::new([144, 72, 50], 2.0);
        let na = normalise(&a);
        let nb = normalise(&b);
        assert_eq!(na.time(), 1.0);
        assert_eq!(nb.time(), 2.0);
        match (na, nb) {
            (
                NormalizedEvent::Message { data: da, .. },
                NormalizedEvent::Message { data: db, .. },
            ) => {
                assert_eq!(da, 60);
                assert_eq!(db, 72);
            }
            other => panic!("expected two Messages, got {other:?}"),
        }
    }
}
