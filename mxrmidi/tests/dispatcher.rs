use mxrmidi::{
    Action, ControlChannel, ControlDispatcher, ControlError, LevelCommand, MASTER_GAIN,
    MidiMessage, MidiSink,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// Sink de test : enregistre chaque message avec son instant d'envoi
#[derive(Clone, Default)]
struct RecordingSink {
    sent: Arc<Mutex<Vec<(Instant, MidiMessage)>>>,
}

impl RecordingSink {
    fn messages(&self) -> Vec<MidiMessage> {
        self.sent.lock().unwrap().iter().map(|(_, m)| *m).collect()
    }

    fn timed(&self) -> Vec<(Instant, MidiMessage)> {
        self.sent.lock().unwrap().clone()
    }
}

impl MidiSink for RecordingSink {
    fn send(&mut self, bytes: &[u8]) -> mxrmidi::Result<()> {
        let message = MidiMessage::from_bytes(bytes).expect("unexpected MIDI bytes");
        self.sent.lock().unwrap().push((Instant::now(), message));
        Ok(())
    }
}

/// Sink dont chaque envoi échoue
struct BrokenSink;

impl MidiSink for BrokenSink {
    fn send(&mut self, _bytes: &[u8]) -> mxrmidi::Result<()> {
        Err(ControlError::Send("device gone".to_string()))
    }
}

const DELAY: Duration = Duration::from_millis(20);

fn recording_dispatcher() -> (RecordingSink, ControlDispatcher) {
    let sink = RecordingSink::default();
    let channel = ControlChannel::from_sink("test", sink.clone());
    (sink, ControlDispatcher::new(channel, DELAY))
}

#[tokio::test(start_paused = true)]
async fn test_pulse_sends_on_then_off_after_delay() {
    for action in Action::ALL {
        let (sink, dispatcher) = recording_dispatcher();
        let start = Instant::now();

        dispatcher.pulse(action).unwrap();

        // Le Note On part avant le retour de pulse()
        assert_eq!(
            sink.messages(),
            vec![MidiMessage::NoteOn { note: action.note(), velocity: 127 }]
        );

        tokio::time::sleep(Duration::from_millis(19)).await;
        assert_eq!(sink.messages().len(), 1, "{:?}: Note Off sent too early", action);

        tokio::time::sleep(Duration::from_millis(2)).await;
        let timed = sink.timed();
        assert_eq!(
            timed.iter().map(|(_, m)| *m).collect::<Vec<_>>(),
            vec![
                MidiMessage::NoteOn { note: action.note(), velocity: 127 },
                MidiMessage::NoteOff { note: action.note(), velocity: 0 },
            ]
        );

        let off_after = timed[1].0 - start;
        assert!(off_after >= DELAY && off_after < DELAY + Duration::from_millis(1));

        // Aucun autre message ensuite
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(sink.messages().len(), 2);
    }
}

#[tokio::test(start_paused = true)]
async fn test_pulse_does_not_block_caller() {
    let (sink, dispatcher) = recording_dispatcher();
    let start = Instant::now();

    dispatcher.pulse(Action::CommitTransition).unwrap();

    assert_eq!(Instant::now(), start);
    assert_eq!(sink.messages().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_pulses_keep_per_action_order() {
    let (sink, dispatcher) = recording_dispatcher();

    dispatcher.pulse(Action::SeekForward1).unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    dispatcher.pulse(Action::SeekForward2).unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    let messages = sink.messages();
    assert_eq!(messages.len(), 4);
    for action in [Action::SeekForward1, Action::SeekForward2] {
        let on = messages
            .iter()
            .position(|m| *m == MidiMessage::NoteOn { note: action.note(), velocity: 127 })
            .unwrap();
        let off = messages
            .iter()
            .position(|m| *m == MidiMessage::NoteOff { note: action.note(), velocity: 0 })
            .unwrap();
        assert!(on < off);
    }
    // Les paires s'entrelacent : le second Note On précède le premier Note Off
    assert_eq!(
        messages[1],
        MidiMessage::NoteOn { note: Action::SeekForward2.note(), velocity: 127 }
    );
}

#[tokio::test]
async fn test_set_level_clamps() {
    let (sink, dispatcher) = recording_dispatcher();

    for raw in [-50, 0, 80, 127, 300] {
        dispatcher.set_level(LevelCommand::new(MASTER_GAIN, raw)).unwrap();
    }

    let values: Vec<u8> = sink
        .messages()
        .into_iter()
        .map(|m| match m {
            MidiMessage::ControlChange { controller, value } => {
                assert_eq!(controller, MASTER_GAIN);
                value
            }
            other => panic!("unexpected message {:?}", other),
        })
        .collect();
    assert_eq!(values, vec![0, 0, 80, 127, 127]);
}

#[tokio::test]
async fn test_unavailable_channel_is_reported() {
    let dispatcher = ControlDispatcher::new(ControlChannel::unavailable("missing"), DELAY);

    assert!(matches!(
        dispatcher.pulse(Action::AdvanceQueue),
        Err(ControlError::ChannelUnavailable(_))
    ));
    assert!(matches!(
        dispatcher.set_level(LevelCommand::new(MASTER_GAIN, 10)),
        Err(ControlError::ChannelUnavailable(_))
    ));
}

#[tokio::test]
async fn test_send_failure_is_reported() {
    let channel = ControlChannel::from_sink("broken", BrokenSink);
    let dispatcher = ControlDispatcher::new(channel, DELAY);

    assert!(matches!(
        dispatcher.pulse(Action::CommitTransition),
        Err(ControlError::Send(_))
    ));
}
