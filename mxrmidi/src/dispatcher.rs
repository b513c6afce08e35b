//! Traduction des actions et niveaux en messages MIDI

use crate::action::Action;
use crate::channel::ControlChannel;
use crate::error::Result;
use crate::message::MidiMessage;
use std::time::Duration;
use tracing::{debug, warn};

/// Vélocité du Note On d'une impulsion
pub const PULSE_VELOCITY: u8 = 127;

/// Délai entre le Note On et le Note Off d'une impulsion
pub const DEFAULT_PULSE_DELAY: Duration = Duration::from_millis(20);

/// Contrôleur du gain master (CC 7, canal 1)
pub const MASTER_GAIN: u8 = 0x07;

const LEVEL_MAX: i64 = 127;

/// Borne une valeur dans `0..=127`
pub fn clamp_level(raw: i64) -> u8 {
    raw.clamp(0, LEVEL_MAX) as u8
}

/// Lit un entier en tête de chaîne, `0` si aucun chiffre
///
/// Les espaces initiaux et un signe sont acceptés, la suite est ignorée
/// (`"42abc"` → 42, `"-3"` → -3, `"abc"` → 0). Un dépassement sature.
pub fn parse_level(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return 0;
    }

    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    if negative { -magnitude } else { magnitude }
}

/// Valeur absolue pour un contrôle continu (fader)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCommand {
    pub controller: u8,
    pub value: u8,
}

impl LevelCommand {
    pub fn new(controller: u8, raw: i64) -> Self {
        Self {
            controller,
            value: clamp_level(raw),
        }
    }

    /// Une entrée non numérique vaut 0 : elle n'est jamais rejetée
    pub fn parse(controller: u8, raw: &str) -> Self {
        Self::new(controller, parse_level(raw))
    }
}

/// Dispatcher des commandes de la télécommande
///
/// Sans état propre : toute la sortie passe par le [`ControlChannel`] partagé.
#[derive(Debug, Clone)]
pub struct ControlDispatcher {
    channel: ControlChannel,
    pulse_delay: Duration,
}

impl ControlDispatcher {
    pub fn new(channel: ControlChannel, pulse_delay: Duration) -> Self {
        Self {
            channel,
            pulse_delay,
        }
    }

    pub fn channel(&self) -> &ControlChannel {
        &self.channel
    }

    pub fn pulse_delay(&self) -> Duration {
        self.pulse_delay
    }

    /// Appui bref sur un bouton
    ///
    /// Envoie immédiatement `NoteOn(note, 127)` puis planifie
    /// `NoteOff(note, 0)` après le délai d'impulsion, sur une tâche Tokio :
    /// l'appelant n'attend pas le Note Off. Doit être appelé depuis un runtime
    /// Tokio.
    ///
    /// Une erreur n'est retournée que si le Note On n'a pas pu partir ; l'échec
    /// du Note Off est seulement journalisé.
    pub fn pulse(&self, action: Action) -> Result<()> {
        let note = action.note();
        self.channel.send(MidiMessage::NoteOn {
            note,
            velocity: PULSE_VELOCITY,
        })?;
        debug!(?action, note, "pulse on");

        let channel = self.channel.clone();
        let delay = self.pulse_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = channel.send(MidiMessage::NoteOff { note, velocity: 0 }) {
                warn!(?action, note, "pulse off failed: {}", e);
            }
        });

        Ok(())
    }

    /// Envoie une valeur absolue (un seul Control Change, sans accusé)
    pub fn set_level(&self, command: LevelCommand) -> Result<()> {
        debug!(controller = command.controller, value = command.value, "set level");
        self.channel.send(MidiMessage::ControlChange {
            controller: command.controller,
            value: command.value,
        })
    }

    /// Variante texte de [`set_level`](Self::set_level), pour les valeurs
    /// reçues dans une URL
    pub fn set_level_raw(&self, controller: u8, raw: &str) -> Result<()> {
        self.set_level(LevelCommand::parse(controller, raw))
    }
}
