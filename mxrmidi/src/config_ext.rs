//! Extension de mxrconfig pour la sortie MIDI

use crate::dispatcher::DEFAULT_PULSE_DELAY;
use anyhow::Result;
use mxrconfig::Config;
use serde_yaml::{Number, Value};
use std::time::Duration;

/// Nom du port MIDI par défaut (doit correspondre au mapping Mixxx)
pub const DEFAULT_PORT_NAME: &str = "MixxxWebRemote";

/// Trait d'extension pour mxrconfig::Config
///
/// Les getters persistent la valeur par défaut si la clé est absente.
pub trait MidiConfigExt {
    /// Nom du port MIDI (`midi.port_name`)
    fn get_midi_port_name(&self) -> Result<String>;

    fn set_midi_port_name(&self, name: &str) -> Result<()>;

    /// Délai entre Note On et Note Off (`midi.pulse_delay_ms`)
    fn get_pulse_delay(&self) -> Result<Duration>;

    fn set_pulse_delay(&self, delay: Duration) -> Result<()>;
}

impl MidiConfigExt for Config {
    fn get_midi_port_name(&self) -> Result<String> {
        match self.get_value(&["midi", "port_name"]) {
            Ok(Value::String(s)) if !s.trim().is_empty() => Ok(s),
            _ => {
                self.set_midi_port_name(DEFAULT_PORT_NAME)?;
                Ok(DEFAULT_PORT_NAME.to_string())
            }
        }
    }

    fn set_midi_port_name(&self, name: &str) -> Result<()> {
        self.set_value(&["midi", "port_name"], Value::String(name.to_string()))
    }

    fn get_pulse_delay(&self) -> Result<Duration> {
        let configured = match self.get_value(&["midi", "pulse_delay_ms"]) {
            Ok(Value::Number(n)) => n.as_u64(),
            _ => None,
        };

        match configured {
            Some(ms) => Ok(Duration::from_millis(ms)),
            None => {
                self.set_pulse_delay(DEFAULT_PULSE_DELAY)?;
                Ok(DEFAULT_PULSE_DELAY)
            }
        }
    }

    fn set_pulse_delay(&self, delay: Duration) -> Result<()> {
        self.set_value(
            &["midi", "pulse_delay_ms"],
            Value::Number(Number::from(delay.as_millis() as u64)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_config(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config.get_midi_port_name().unwrap(), DEFAULT_PORT_NAME);
        assert_eq!(config.get_pulse_delay().unwrap(), DEFAULT_PULSE_DELAY);
    }

    #[test]
    fn test_invalid_values_fall_back_and_persist() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_config(dir.path().to_str().unwrap()).unwrap();
        config
            .set_value(&["midi", "pulse_delay_ms"], Value::String("soon".into()))
            .unwrap();
        config.set_midi_port_name("  ").unwrap();

        assert_eq!(config.get_pulse_delay().unwrap(), DEFAULT_PULSE_DELAY);
        assert_eq!(config.get_midi_port_name().unwrap(), DEFAULT_PORT_NAME);
        assert_eq!(
            config.get_value(&["midi", "pulse_delay_ms"]).unwrap(),
            Value::Number(20.into())
        );
    }
}
