//! Property-based tests for the state machine.
//!
//! These tests use proptest to drive machines through random operation
//! sequences and check the undo/redo rules hold throughout.

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use waypoint::{FiniteStateMachine, FsmError, MachineConfig, StateDefinition};

static STATES: [&str; 4] = ["idle", "running", "paused", "done"];
static EVENTS: [&str; 4] = ["start", "pause", "resume", "finish"];

#[derive(Clone, Debug)]
enum Op {
    Change(String),
    Trigger(String),
    Reset,
    Undo,
    Redo,
    ClearHistory,
}

prop_compose! {
    fn arbitrary_config()(
        initial in 0..STATES.len(),
        edges in prop::collection::vec(
            (0..STATES.len(), 0..EVENTS.len(), 0..STATES.len()),
            0..12,
        ),
    ) -> MachineConfig {
        let mut states: BTreeMap<String, StateDefinition> = STATES
            .iter()
            .map(|s| (s.to_string(), StateDefinition::new()))
            .collect();
        for (from, event, to) in edges {
            if let Some(definition) = states.get_mut(STATES[from]) {
                definition
                    .transitions
                    .insert(EVENTS[event].to_string(), STATES[to].to_string());
            }
        }
        MachineConfig::new(STATES[initial], states)
    }
}

fn arbitrary_name(pool: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(pool).prop_map(str::to_string),
        1 => Just(String::new()),
        1 => Just("unknown".to_string()),
    ]
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_name(&STATES).prop_map(Op::Change),
        arbitrary_name(&EVENTS).prop_map(Op::Trigger),
        Just(Op::Reset),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::ClearHistory),
    ]
}

fn apply(fsm: &mut FiniteStateMachine, op: &Op) -> Result<(), TestCaseError> {
    let before = fsm.current_state().to_string();
    match op {
        Op::Change(target) => match fsm.change_state(target) {
            Ok(()) => prop_assert_eq!(fsm.current_state(), target.as_str()),
            Err(err) => {
                let is_expected_err = matches!(err, FsmError::InvalidState { .. });
                prop_assert!(is_expected_err);
                prop_assert_eq!(fsm.current_state(), before.as_str());
            }
        },
        Op::Trigger(event) => {
            let expected = fsm.config().transition(&before, event).map(str::to_string);
            match fsm.trigger(event) {
                Ok(()) => prop_assert_eq!(Some(fsm.current_state().to_string()), expected),
                Err(err) => {
                    let is_expected_err = matches!(err, FsmError::InvalidEvent { .. });
                    prop_assert!(is_expected_err);
                    prop_assert_eq!(fsm.current_state(), before.as_str());
                }
            }
        }
        Op::Reset => {
            fsm.reset();
            prop_assert_eq!(fsm.current_state(), fsm.initial_state());
            prop_assert!(!fsm.can_undo());
        }
        Op::Undo => {
            let predicted = fsm.can_undo();
            prop_assert_eq!(fsm.undo(), predicted);
            if !predicted {
                prop_assert_eq!(fsm.current_state(), before.as_str());
            }
        }
        Op::Redo => {
            let predicted = fsm.can_redo();
            prop_assert_eq!(fsm.redo(), predicted);
            if !predicted {
                prop_assert_eq!(fsm.current_state(), before.as_str());
            }
            prop_assert!(!fsm.can_redo());
        }
        Op::ClearHistory => {
            fsm.clear_history();
            prop_assert_eq!(fsm.current_state(), before.as_str());
            prop_assert!(!fsm.can_undo());
            prop_assert!(!fsm.can_redo());
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn starts_in_initial_state(config in arbitrary_config()) {
        let initial = config.initial().to_string();
        let fsm = FiniteStateMachine::new(config).unwrap();
        prop_assert_eq!(fsm.current_state(), initial.as_str());
    }

    #[test]
    fn current_state_is_always_configured(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..40),
    ) {
        let mut fsm = FiniteStateMachine::new(config).unwrap();
        for op in &ops {
            apply(&mut fsm, op)?;
            prop_assert!(fsm.config().contains_state(fsm.current_state()));
        }
    }

    #[test]
    fn undo_after_change_restores_previous_state(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        target in prop::sample::select(&STATES[..]),
    ) {
        let mut fsm = FiniteStateMachine::new(config).unwrap();
        for op in &ops {
            apply(&mut fsm, op)?;
        }

        let before = fsm.current_state().to_string();
        fsm.change_state(target).unwrap();

        if before == target {
            prop_assert!(!fsm.undo());
        } else {
            prop_assert!(fsm.undo());
            prop_assert_eq!(fsm.current_state(), before.as_str());
            prop_assert!(!fsm.undo());

            prop_assert!(fsm.redo());
            prop_assert_eq!(fsm.current_state(), target);
            prop_assert!(!fsm.redo());
        }
    }

    #[test]
    fn clear_history_disables_undo_and_redo(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let mut fsm = FiniteStateMachine::new(config).unwrap();
        for op in &ops {
            apply(&mut fsm, op)?;
        }

        fsm.clear_history();
        prop_assert!(!fsm.undo());
        prop_assert!(!fsm.redo());
    }

    #[test]
    fn get_states_matches_transition_maps(
        config in arbitrary_config(),
        event in prop::sample::select(&EVENTS[..]),
    ) {
        let fsm = FiniteStateMachine::new(config.clone()).unwrap();

        let all: BTreeSet<&str> = config.states.keys().map(String::as_str).collect();
        prop_assert_eq!(fsm.get_states(None), all);

        let with_event: BTreeSet<&str> = config
            .states
            .iter()
            .filter(|(_, definition)| definition.transitions.contains_key(event))
            .map(|(name, _)| name.as_str())
            .collect();
        prop_assert_eq!(fsm.get_states(Some(event)), with_event);
    }

    #[test]
    fn config_roundtrips_through_json(config in arbitrary_config()) {
        let json = config.to_json().unwrap();
        let loaded = MachineConfig::from_json(&json).unwrap();
        prop_assert_eq!(loaded, config);
    }
}
