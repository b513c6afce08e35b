//! Vocabulaire MIDI émis par la télécommande (canal 1)

const NOTE_OFF: u8 = 0x80;
const NOTE_ON: u8 = 0x90;
const CONTROL_CHANGE: u8 = 0xB0;

/// Message MIDI de trois octets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiMessage {
    NoteOn { note: u8, velocity: u8 },
    NoteOff { note: u8, velocity: u8 },
    ControlChange { controller: u8, value: u8 },
}

impl MidiMessage {
    /// Encode le message ; les octets de données sont ramenés sur 7 bits.
    pub fn to_bytes(self) -> [u8; 3] {
        match self {
            MidiMessage::NoteOn { note, velocity } => [NOTE_ON, note & 0x7F, velocity & 0x7F],
            MidiMessage::NoteOff { note, velocity } => [NOTE_OFF, note & 0x7F, velocity & 0x7F],
            MidiMessage::ControlChange { controller, value } => {
                [CONTROL_CHANGE, controller & 0x7F, value & 0x7F]
            }
        }
    }

    /// Décode un message de trois octets (canal 1 uniquement)
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match *bytes {
            [NOTE_ON, note, velocity] => Some(MidiMessage::NoteOn { note, velocity }),
            [NOTE_OFF, note, velocity] => Some(MidiMessage::NoteOff { note, velocity }),
            [CONTROL_CHANGE, controller, value] => {
                Some(MidiMessage::ControlChange { controller, value })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bytes() {
        assert_eq!(
            MidiMessage::NoteOn { note: 60, velocity: 127 }.to_bytes(),
            [0x90, 60, 127]
        );
        assert_eq!(
            MidiMessage::NoteOff { note: 60, velocity: 0 }.to_bytes(),
            [0x80, 60, 0]
        );
        assert_eq!(
            MidiMessage::ControlChange { controller: 0x07, value: 80 }.to_bytes(),
            [0xB0, 0x07, 80]
        );
    }

    #[test]
    fn test_data_bytes_are_seven_bit() {
        assert_eq!(
            MidiMessage::NoteOn { note: 0xFF, velocity: 0x80 }.to_bytes(),
            [0x90, 0x7F, 0x00]
        );
    }

    #[test]
    fn test_from_bytes() {
        assert_eq!(
            MidiMessage::from_bytes(&[0xB0, 7, 12]),
            Some(MidiMessage::ControlChange { controller: 7, value: 12 })
        );
        assert_eq!(MidiMessage::from_bytes(&[0x91, 60, 1]), None);
        assert_eq!(MidiMessage::from_bytes(&[0x90, 60]), None);
    }
}
