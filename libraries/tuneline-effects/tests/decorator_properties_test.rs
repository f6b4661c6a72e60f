//! Property-based tests for decorator chains
//!
//! Uses proptest to check effect ordering and delegation over arbitrary
//! stacks of enhancements, in any order and any multiplicity.

use proptest::prelude::*;
use std::sync::Arc;
use tuneline_core::{
    ControlError, ControlEvent, ControlOp, EventJournal, EventSink, PlaybackControl, Result,
};
use tuneline_effects::{Decorated, Enhancement, Equalizer, VolumeNormalizer};
use tuneline_sources::{LocalFileAdapter, LocalFileBackend, LocalFilePlayer};

// ===== Helpers =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Equalizer,
    Volume,
}

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::Equalizer => "equalizer",
            Kind::Volume => "volume-normalizer",
        }
    }

    fn instantiate(self, sink: Arc<dyn EventSink>) -> Box<dyn Enhancement> {
        match self {
            Kind::Equalizer => Box::new(Equalizer::with_sink(sink)),
            Kind::Volume => Box::new(VolumeNormalizer::with_sink(sink)),
        }
    }
}

fn arbitrary_stack() -> impl Strategy<Value = Vec<Kind>> {
    prop::collection::vec(prop_oneof![Just(Kind::Equalizer), Just(Kind::Volume)], 0..12)
}

/// Wrap `base` innermost-first: the last kind ends up outermost
fn stack<'a>(
    base: impl PlaybackControl + 'a,
    kinds: &[Kind],
    journal: &EventJournal,
) -> Box<dyn PlaybackControl + 'a> {
    let mut head: Box<dyn PlaybackControl + 'a> = Box::new(base);
    for kind in kinds {
        head = Box::new(Decorated::new(kind.instantiate(journal.shared()), head));
    }
    head
}

/// File backend that refuses every operation
struct UnreadableFile;

impl LocalFileBackend for UnreadableFile {
    fn play_local_file(&self) -> Result<()> {
        Err(ControlError::backend("local-file", ControlOp::Start, "permission denied"))
    }

    fn stop_local_file(&self) -> Result<()> {
        Err(ControlError::backend("local-file", ControlOp::Stop, "permission denied"))
    }

    fn pause_local_file(&self) -> Result<()> {
        Err(ControlError::backend("local-file", ControlOp::Pause, "permission denied"))
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: start reaches the backend once, then every effect fires once, base outward
    #[test]
    fn start_effects_fire_base_to_outermost(kinds in arbitrary_stack()) {
        let journal = EventJournal::new();
        let file = LocalFilePlayer::with_sink(journal.shared());
        let mut head = stack(LocalFileAdapter::new(&file), &kinds, &journal);

        head.start().unwrap();

        let mut expected = vec!["local-file"];
        expected.extend(kinds.iter().map(|k| k.name()));
        prop_assert_eq!(journal.origins(), expected);
        prop_assert_eq!(journal.events().iter().filter(|e| e.is_backend()).count(), 1);
    }

    /// Property: stop and pause are pure delegation at any depth
    #[test]
    fn stop_and_pause_add_no_effects(kinds in arbitrary_stack()) {
        let journal = EventJournal::new();
        let file = LocalFilePlayer::with_sink(journal.shared());
        let mut head = stack(LocalFileAdapter::new(&file), &kinds, &journal);

        for op in [ControlOp::Stop, ControlOp::Pause] {
            journal.clear();
            head.perform(op).unwrap();

            let events = journal.events();
            prop_assert_eq!(events.len(), 1);
            prop_assert!(events[0].is_backend());
            prop_assert_eq!(events[0].operation(), op);
        }
    }

    /// Property: identical topologies produce identical effect sequences
    #[test]
    fn same_topology_same_sequence(kinds in arbitrary_stack()) {
        let run = |kinds: &[Kind]| -> Vec<ControlEvent> {
            let journal = EventJournal::new();
            let file = LocalFilePlayer::with_sink(journal.shared());
            let mut head = stack(LocalFileAdapter::new(&file), kinds, &journal);
            head.start().unwrap();
            journal.events()
        };

        prop_assert_eq!(run(&kinds), run(&kinds));
    }

    /// Property: a failing backend error surfaces unchanged and suppresses every effect
    #[test]
    fn backend_failure_suppresses_all_effects(
        kinds in arbitrary_stack(),
        op in prop_oneof![Just(ControlOp::Start), Just(ControlOp::Stop), Just(ControlOp::Pause)]
    ) {
        let journal = EventJournal::new();
        let file = UnreadableFile;
        let mut head = stack(LocalFileAdapter::new(&file), &kinds, &journal);

        let err = head.perform(op).unwrap_err();

        prop_assert_eq!(err, ControlError::backend("local-file", op, "permission denied"));
        prop_assert!(journal.is_empty());
    }
}
