//! # mxrmidi - Dispatcher de contrôle MIDI pour Mixxx
//!
//! Cette crate traduit des actions symboliques de la télécommande en messages
//! MIDI envoyés sur un port unique que Mixxx écoute via un mapping contrôleur.
//!
//! # Architecture
//!
//! - **ControlChannel** : poignée unique vers la sortie MIDI, partagée derrière
//!   un mutex. L'envoi brut n'est pas exposé.
//! - **ControlDispatcher** : `pulse()` (Note On puis Note Off après 20 ms,
//!   sans bloquer l'appelant) et `set_level()` (un Control Change borné à 0..=127).
//! - **Action** : les six boutons de la télécommande et leur note MIDI fixe.
//!
//! # Exemple d'utilisation
//!
//! ```no_run
//! use mxrmidi::{Action, ControlChannel, ControlDispatcher, LevelCommand, MASTER_GAIN};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> mxrmidi::Result<()> {
//! let channel = ControlChannel::open("MixxxWebRemote")?;
//! let dispatcher = ControlDispatcher::new(channel, Duration::from_millis(20));
//!
//! dispatcher.pulse(Action::CommitTransition)?;
//! dispatcher.set_level(LevelCommand::new(MASTER_GAIN, 96))?;
//! dispatcher.set_level_raw(MASTER_GAIN, "abc")?; // envoie 0
//! # Ok(())
//! # }
//! ```

mod action;
mod channel;
mod dispatcher;
mod error;
mod message;

#[cfg(feature = "mxrconfig")]
mod config_ext;

#[cfg(feature = "mxrserver")]
pub mod api;
#[cfg(feature = "mxrserver")]
pub mod openapi;
#[cfg(feature = "mxrserver")]
mod server_ext;

pub use action::Action;
pub use channel::{ControlChannel, MidiSink, open_virtual_input};
pub use dispatcher::{
    ControlDispatcher, DEFAULT_PULSE_DELAY, LevelCommand, MASTER_GAIN, PULSE_VELOCITY,
    clamp_level, parse_level,
};
pub use error::{ControlError, Result};
pub use message::MidiMessage;

#[cfg(feature = "mxrconfig")]
pub use config_ext::MidiConfigExt;

#[cfg(feature = "mxrserver")]
pub use server_ext::ControlApiExt;
