//! Canal de sortie MIDI partagé par tout le processus

use crate::error::{ControlError, Result};
use crate::message::MidiMessage;
use midir::{MidiInputConnection, MidiOutput, MidiOutputConnection};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

#[cfg(unix)]
use midir::MidiInput;
#[cfg(unix)]
use midir::os::unix::{VirtualInput, VirtualOutput};

/// Vrai dès qu'un port MIDI réel a été ouvert par [`ControlChannel::open`]
static OPENED: AtomicBool = AtomicBool::new(false);

/// Destination brute des octets MIDI
///
/// Implémenté par la connexion midir ; d'autres transports (ou des sinks
/// d'enregistrement) peuvent être branchés via [`ControlChannel::from_sink`].
pub trait MidiSink: Send {
    fn send(&mut self, bytes: &[u8]) -> Result<()>;
}

struct MidirSink(MidiOutputConnection);

impl MidiSink for MidirSink {
    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        self.0
            .send(bytes)
            .map_err(|e| ControlError::Send(e.to_string()))
    }
}

/// Poignée unique vers la sortie MIDI
///
/// Clonable à volonté : tous les clones partagent la même connexion et les
/// envois sont sérialisés par un mutex. Un canal « indisponible » refuse
/// chaque envoi avec [`ControlError::ChannelUnavailable`].
#[derive(Clone)]
pub struct ControlChannel {
    name: Arc<str>,
    sink: Option<Arc<Mutex<Box<dyn MidiSink>>>>,
}

impl ControlChannel {
    /// Ouvre le port MIDI de la télécommande
    ///
    /// - Linux/macOS : crée un port virtuel nommé `port_name`
    /// - Windows : se connecte au premier port existant dont le nom contient
    ///   `port_name` (port loopMIDI créé par l'utilisateur)
    ///
    /// Un seul port peut être ouvert par processus.
    pub fn open(port_name: &str) -> Result<Self> {
        let conn = claim(&OPENED, || connect_output(port_name))?;
        info!(port = port_name, "MIDI output ready");
        Ok(Self::from_sink(port_name, MidirSink(conn)))
    }

    /// Construit un canal au-dessus d'un sink arbitraire
    pub fn from_sink(name: &str, sink: impl MidiSink + 'static) -> Self {
        Self {
            name: Arc::from(name),
            sink: Some(Arc::new(Mutex::new(Box::new(sink)))),
        }
    }

    /// Canal sans sortie : chaque envoi échoue
    pub fn unavailable(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            sink: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_available(&self) -> bool {
        self.sink.is_some()
    }

    pub(crate) fn send(&self, message: MidiMessage) -> Result<()> {
        let sink = self
            .sink
            .as_ref()
            .ok_or_else(|| ControlError::ChannelUnavailable(self.name.to_string()))?;

        let mut sink = sink
            .lock()
            .map_err(|_| ControlError::Send("MIDI sink lock poisoned".to_string()))?;

        debug!(port = %self.name, ?message, "MIDI out");
        sink.send(&message.to_bytes())
    }
}

impl std::fmt::Debug for ControlChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlChannel")
            .field("name", &self.name)
            .field("available", &self.is_available())
            .finish()
    }
}

/// Réserve `slot` le temps de `connect`
///
/// Échoue avec [`ControlError::AlreadyOpen`] si le slot est déjà pris. Un
/// échec de `connect` libère le slot.
fn claim<T>(slot: &AtomicBool, connect: impl FnOnce() -> Result<T>) -> Result<T> {
    if slot.swap(true, Ordering::SeqCst) {
        return Err(ControlError::AlreadyOpen);
    }

    connect().inspect_err(|_| slot.store(false, Ordering::SeqCst))
}

#[cfg(unix)]
fn connect_output(port_name: &str) -> Result<MidiOutputConnection> {
    let output = MidiOutput::new(port_name).map_err(|e| ControlError::Init(e.to_string()))?;
    output
        .create_virtual(port_name)
        .map_err(|e| ControlError::Init(e.to_string()))
}

#[cfg(not(unix))]
fn connect_output(port_name: &str) -> Result<MidiOutputConnection> {
    let output = MidiOutput::new(port_name).map_err(|e| ControlError::Init(e.to_string()))?;

    let ports = output.ports();
    let port = ports
        .iter()
        .find(|port| {
            output
                .port_name(port)
                .map(|name| name.contains(port_name))
                .unwrap_or(false)
        })
        .ok_or_else(|| ControlError::PortNotFound(port_name.to_string()))?;

    output
        .connect(port, port_name)
        .map_err(|e| ControlError::Init(e.to_string()))
}

/// Crée le port d'entrée virtuel jumeau (Linux/macOS)
///
/// Mixxx voit ainsi un périphérique bidirectionnel ; les messages reçus sont
/// ignorés. La connexion retournée doit rester vivante aussi longtemps que le
/// port. Sous Windows le port loopMIDI existe déjà : retourne `None`.
#[cfg(unix)]
pub fn open_virtual_input(port_name: &str) -> Result<Option<MidiInputConnection<()>>> {
    let input = MidiInput::new(port_name).map_err(|e| ControlError::Init(e.to_string()))?;
    let conn = input
        .create_virtual(port_name, |_stamp, _message, _| {}, ())
        .map_err(|e| ControlError::Init(e.to_string()))?;
    Ok(Some(conn))
}

#[cfg(not(unix))]
pub fn open_virtual_input(_port_name: &str) -> Result<Option<MidiInputConnection<()>>> {
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_claim_is_rejected() {
        let slot = AtomicBool::new(false);

        assert_eq!(claim(&slot, || Ok(1)).unwrap(), 1);
        assert!(matches!(
            claim(&slot, || Ok(2)),
            Err(ControlError::AlreadyOpen)
        ));
    }

    #[test]
    fn test_rejected_claim_does_not_connect() {
        let slot = AtomicBool::new(true);
        let mut called = false;

        let result = claim(&slot, || {
            called = true;
            Ok(())
        });

        assert!(matches!(result, Err(ControlError::AlreadyOpen)));
        assert!(!called);
    }

    #[test]
    fn test_failed_connect_releases_slot() {
        let slot = AtomicBool::new(false);

        let failed: Result<()> = claim(&slot, || {
            Err(ControlError::PortNotFound("MixxxWebRemote".to_string()))
        });
        assert!(matches!(failed, Err(ControlError::PortNotFound(_))));
        assert!(!slot.load(Ordering::SeqCst));

        assert!(claim(&slot, || Ok(())).is_ok());
        assert!(slot.load(Ordering::SeqCst));
    }
}
