//! Status-byte classification for MIDI channel messages.
//!
//! A channel message is 1-3 bytes: the status byte carries the message type
//! in its high nibble and the channel (0-15 on the wire, 1-16 at this API)
//! in its low nibble. Data bytes are 7-bit (0-127).

use serde::{Deserialize, Serialize};

/// MIDI channel message types, in status-byte order.
///
/// Status bytes 128-239 map onto these seven types in steps of 16:
/// note-off 128-143, note-on 144-159, poly aftertouch 160-175,
/// control change 176-191, program change 192-207, channel aftertouch
/// 208-223, pitch bend 224-239.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    NoteOff,
    NoteOn,
    PolyTouch,
    Control,
    #[serde(rename = "pc")]
    ProgramChange,
    ChannelTouch,
    #[serde(rename = "pitch")]
    PitchBend,
}

/// Type order matching status bytes 128, 144, .., 224.
const TYPES: [MessageType; 7] = [
    MessageType::NoteOff,
    MessageType::NoteOn,
    MessageType::PolyTouch,
    MessageType::Control,
    MessageType::ProgramChange,
    MessageType::ChannelTouch,
    MessageType::PitchBend,
];

impl MessageType {
    /// Status byte for this type on channel 1.
    #[inline]
    pub const fn status_base(self) -> u8 {
        match self {
            MessageType::NoteOff => 128,
            MessageType::NoteOn => 144,
            MessageType::PolyTouch => 160,
            MessageType::Control => 176,
            MessageType::ProgramChange => 192,
            MessageType::ChannelTouch => 208,
            MessageType::PitchBend => 224,
        }
    }

    /// Wire-level name: `noteoff`, `noteon`, `polytouch`, `control`, `pc`,
    /// `channeltouch`, `pitch`.
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageType::NoteOff => "noteoff",
            MessageType::NoteOn => "noteon",
            MessageType::PolyTouch => "polytouch",
            MessageType::Control => "control",
            MessageType::ProgramChange => "pc",
            MessageType::ChannelTouch => "channeltouch",
            MessageType::PitchBend => "pitch",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a raw message by its status byte.
///
/// A note-on whose velocity byte is 0 is reported as [`MessageType::NoteOff`],
/// the standard MIDI convention for note release.
///
/// The status byte must be a channel message (128-239); panics otherwise.
#[inline]
pub fn to_type(message: &[u8]) -> MessageType {
    let ty = TYPES[(message[0] >> 4) as usize - 8];
    if ty == MessageType::NoteOn && message.get(2) == Some(&0) {
        MessageType::NoteOff
    } else {
        ty
    }
}

/// Status byte for a message type on a channel.
///
/// Returns `None` when `channel` is outside 1-16.
#[inline]
pub fn to_status(channel: u8, ty: MessageType) -> Option<u8> {
    if (1..=16).contains(&channel) {
        Some(ty.status_base() + channel - 1)
    } else {
        None
    }
}

/// Channel of a message, 1-16.
#[inline]
pub fn to_channel(message: &[u8]) -> u8 {
    message[0] % 16 + 1
}

/// True for note-off and note-on messages (status 128-159).
#[inline]
pub fn is_note(message: &[u8]) -> bool {
    (128..160).contains(&message[0])
}

/// True for control change messages (status 176-191).
#[inline]
pub fn is_control(message: &[u8]) -> bool {
    (176..192).contains(&message[0])
}

/// True for pitch bend messages (status 224-239).
#[inline]
pub fn is_pitch(message: &[u8]) -> bool {
    (224..240).contains(&message[0])
}

/// Rewrite a zero-velocity note-on into the matching note-off, in place.
///
/// Idempotent: after the rewrite the status byte is outside 144-159, so a
/// second pass leaves the message untouched. Returns the same slice for
/// chaining.
pub fn normalise_note(message: &mut [u8]) -> &mut [u8] {
    if message.get(2) == Some(&0) && (144..160).contains(&message[0]) {
        message[0] -= 16;
    }
    message
}

/// Deprecated name for [`normalise_note`].
#[deprecated(note = "use `normalise_note`")]
pub fn normalise_note_off(message: &mut [u8]) -> &mut [u8] {
    static WARNED: std::sync::Once = std::sync::Once::new();
    WARNED.call_once(|| tracing::warn!("normalise_note_off(message) is now normalise_note(message)"));
    normalise_note(message)
}
