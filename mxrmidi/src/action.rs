//! Actions momentanées de la télécommande

/// Bouton de la télécommande
///
/// Chaque action correspond à une note MIDI fixe. Ces numéros sont un contrat
/// avec le mapping contrôleur configuré dans Mixxx : ils ne doivent jamais
/// changer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Déclenche immédiatement le fondu Auto DJ
    CommitTransition,
    /// Passe au morceau suivant de la file Auto DJ
    AdvanceQueue,
    /// Avance rapide, platine 1
    SeekForward1,
    /// Retour rapide, platine 1
    SeekBackward1,
    /// Avance rapide, platine 2
    SeekForward2,
    /// Retour rapide, platine 2
    SeekBackward2,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::CommitTransition,
        Action::AdvanceQueue,
        Action::SeekForward1,
        Action::SeekBackward1,
        Action::SeekForward2,
        Action::SeekBackward2,
    ];

    /// Note MIDI associée
    pub const fn note(self) -> u8 {
        match self {
            Action::CommitTransition => 60,
            Action::AdvanceQueue => 61,
            Action::SeekForward1 => 62,
            Action::SeekBackward1 => 63,
            Action::SeekForward2 => 64,
            Action::SeekBackward2 => 65,
        }
    }

    /// Chemin HTTP qui déclenche l'action
    pub const fn path(self) -> &'static str {
        match self {
            Action::CommitTransition => "/fade_now",
            Action::AdvanceQueue => "/skip_next",
            Action::SeekForward1 => "/forward",
            Action::SeekBackward1 => "/backward",
            Action::SeekForward2 => "/forward2",
            Action::SeekBackward2 => "/backward2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_note_table_is_fixed() {
        let notes: Vec<u8> = Action::ALL.iter().map(|a| a.note()).collect();
        assert_eq!(notes, vec![60, 61, 62, 63, 64, 65]);
    }

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = Action::ALL.iter().map(|a| a.path()).collect();
        assert_eq!(paths.len(), Action::ALL.len());
    }
}
