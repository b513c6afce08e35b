//! Types d'erreurs pour mxrmidi

/// Erreurs du canal de contrôle MIDI
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("Control channel unavailable: {0}")]
    ChannelUnavailable(String),

    #[error("MIDI port not found: {0}")]
    PortNotFound(String),

    #[error("MIDI control channel already open")]
    AlreadyOpen,

    #[error("MIDI initialization failed: {0}")]
    Init(String),

    #[error("MIDI send failed: {0}")]
    Send(String),
}

/// Type Result spécialisé pour mxrmidi
pub type Result<T> = std::result::Result<T, ControlError>;
