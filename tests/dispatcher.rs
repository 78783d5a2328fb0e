
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use kchord::*;
use KbdKey::*;



fn init_tracing () {
    let _ = tracing_subscriber::fmt()
        .with_env_filter (tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// a dispatcher on a fresh local source, with super pinned to command so results dont depend on the host platform
fn setup () -> (LocalInputSource, Dispatcher) {
    init_tracing();
    let src = LocalInputSource::new();
    let k = Dispatcher::new_w_config (src.clone(), DispatcherConfig::new().super_key(ModKey::Command));
    (src, k)
}

fn counter () -> (Arc<AtomicUsize>, KbdCbFn_T) {
    let n = Arc::new (AtomicUsize::new(0));
    let cb = { let n = n.clone(); handler (move |_| { n.fetch_add (1, Ordering::SeqCst); }) };
    (n, cb)
}

fn count (n:&Arc<AtomicUsize>) -> usize { n.load (Ordering::SeqCst) }

/// records which named callback fired, in order
fn recorder () -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> KbdCbFn_T) {
    let log = Arc::new (Mutex::new (Vec::new()));
    let mk = { let log = log.clone(); move |name:&'static str| {
        let log = log.clone();
        handler (move |_| log.lock().unwrap().push(name))
    } };
    (log, mk)
}



#[test]
fn binds_alternatives_in_order() {
    let (_src, k) = setup();
    let (_, cb) = counter();
    k.on ("shift + enter", cb.clone()).unwrap();
    k.on ("a, b, c", cb.clone()).unwrap();
    assert_eq!(k.len(), 4);
    assert_eq!(k.combos(), vec!["shift + enter", "a", "b", "c"]);
}

#[test]
fn binding_is_chainable() {
    let (_src, k) = setup();
    let (_, cb) = counter();
    k.on ("a", cb.clone()).unwrap() .up ("b", cb.clone()).unwrap() .down ("c", cb.clone()).unwrap();
    assert_eq!(k.len(), 3);
}

#[test]
fn invokes_only_the_matching_key() {
    let (src, k) = setup();
    let (log, mk) = recorder();
    k.on ("a, b, c", mk("abc")).unwrap();
    k.on ("a", mk("a")).unwrap();
    k.on ("b", mk("b")).unwrap();
    k.on ("c", mk("c")).unwrap();
    src.tap_key (A);
    assert_eq!(*log.lock().unwrap(), vec!["abc", "a"]);
}

#[test]
fn invokes_all_listeners_that_match() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("enter", cb.clone()).unwrap();
    k.on ("a", cb.clone()).unwrap();
    k.on ("b", cb.clone()).unwrap();
    k.on ("c", cb.clone()).unwrap();
    k.up ("d", cb.clone()).unwrap();
    [Enter, A, B, C] .into_iter() .for_each (|key| src.tap_key(key));
    src.press_key (D);
    assert_eq!(count(&n), 4);
    src.release_key (D);
    assert_eq!(count(&n), 5);
}

#[test]
fn up_bindings_fire_only_on_release() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.up ("enter", cb).unwrap();
    src.press_key (Enter);
    assert_eq!(count(&n), 0);
    src.release_key (Enter);
    assert_eq!(count(&n), 1);
}

#[test]
fn comma_key_bindings() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on (",", cb.clone()).unwrap();
    k.on ("ctrl + ,, command + ,", cb.clone()).unwrap();
    assert_eq!(k.len(), 3);

    src.tap_key (Comma);
    assert_eq!(count(&n), 1);

    src.press_key (Ctrl);
    src.tap_key (Comma);
    src.release_key (Ctrl);
    assert_eq!(count(&n), 2);

    src.press_key (Command);
    src.tap_key (Comma);
    src.release_key (Command);
    assert_eq!(count(&n), 3);
}

#[test]
fn multiple_modifiers() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("command + shift + ,", cb).unwrap();
    src.press_key (Command);
    src.press_key (Shift);
    assert_eq!(count(&n), 0);
    src.press_key (Comma);
    assert_eq!(count(&n), 1);
}

#[test]
fn each_modifier_selects_its_own_enter() {
    let (src, k) = setup();
    let (n, cb) = counter();
    ["shift + enter", "ctrl + enter", "alt + enter", "command + enter"] .into_iter() .for_each (|s| { k.on (s, cb.clone()).unwrap(); });
    [Shift, Ctrl, Alt, Command] .into_iter() .enumerate() .for_each ( |(i, m)| {
        src.press_key (m);
        src.tap_key (Enter);
        assert_eq!(count(&n), i + 1);
        src.release_key (m);
    } );
}

#[test]
fn exclusivity_between_bare_and_modded_chords() {
    let (src, k) = setup();
    let (log, mk) = recorder();
    k.on ("shift + enter", mk("shift")).unwrap();
    k.on ("ctrl + enter", mk("ctrl")).unwrap();
    k.on ("enter", mk("bare")).unwrap();

    src.tap_key (Enter);
    src.press_key (Shift);
    src.tap_key (Enter);
    src.release_key (Shift);
    assert_eq!(*log.lock().unwrap(), vec!["bare", "shift"]);
}

#[test]
fn bare_chord_fires_under_mods_w_no_competitor() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("a", cb).unwrap();
    src.press_key (Shift);
    src.tap_key (A);
    assert_eq!(count(&n), 1);
}

#[test]
fn super_enter() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("super + enter", cb).unwrap();
    src.press_key (Command);
    src.press_key (Enter);
    assert_eq!(count(&n), 1);
}

#[test]
fn super_w_alternate_command_codes() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("super + a", cb).unwrap();
    src.press (224);
    src.press_key (A);
    assert_eq!(count(&n), 1);
    src.release (224);
    src.press (93);
    src.press_key (A);
    assert_eq!(count(&n), 2);
}

#[test]
fn super_flags_follow_the_concrete_modifier() {
    let (src, k) = setup();
    assert_eq!(k.super_key(), ModKey::Command);
    src.press_key (Command);
    assert!(k.command());
    assert!(k.super_down());
    src.release_key (Command);
    assert!(!k.super_down());

    let src = LocalInputSource::new();
    let k = Dispatcher::new_w_config (src.clone(), DispatcherConfig::new().super_key(ModKey::Ctrl));
    let (n, cb) = counter();
    k.on ("super + enter", cb).unwrap();
    src.press_key (Command);
    src.tap_key (Enter);
    assert_eq!(count(&n), 0);
    src.release_key (Command);
    src.press_key (Ctrl);
    assert!(k.super_down());
    src.tap_key (Enter);
    assert_eq!(count(&n), 1);
}

#[test]
fn default_super_is_the_platform_one() {
    let k = Dispatcher::new (LocalInputSource::new());
    assert_eq!(k.super_key(), ModKey::platform_super());
}

#[test]
fn super_a_does_not_fire_w_extra_shift() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("super + a", cb).unwrap();
    src.press_key (Shift);
    src.press_key (Command);
    src.tap_key (A);
    assert_eq!(count(&n), 0);
    src.release_key (Shift);
    src.tap_key (A);
    assert_eq!(count(&n), 1);
}

#[test]
fn modifier_flags_track_press_and_release() {
    let (src, k) = setup();
    [Ctrl, Shift, Command, Alt] .into_iter() .for_each ( |m| {
        let mk = m.mod_key().unwrap();
        src.press_key (m);
        src.tap_key (Enter);
        assert!(k.is_down(mk));
        assert!(k.modifiers());
        src.release_key (m);
        assert!(!k.is_down(mk));
        assert!(!k.modifiers());
    } );
}

#[test]
fn modifiers_aggregate() {
    let (src, k) = setup();
    assert!(!k.modifiers());
    src.press_key (Shift);
    src.press_key (Ctrl);
    assert!(k.shift() && k.ctrl() && !k.alt());
    assert!(k.modifiers());
    src.release_key (Shift);
    assert!(k.modifiers());
    src.release_key (Ctrl);
    assert!(!k.modifiers());
}

#[test]
fn focus_clears_modifiers() {
    let (src, k) = setup();
    src.press_key (Command);
    src.press_key (Alt);
    assert!(k.modifiers());
    src.focus();
    assert!(!k.command() && !k.alt());
    assert!(!k.modifiers());
    assert!(!k.super_down());
}

#[test]
fn bare_modifier_presses_dont_dispatch() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("shift", cb.clone()).unwrap();
    k.on ("*", cb).unwrap();
    src.tap_key (Shift);
    assert_eq!(count(&n), 0);
}

#[test]
fn ignores_editable_targets_by_default() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("enter", cb.clone()).unwrap();
    k.on ("a", cb).unwrap();
    src.emit_key (KbdEvent::key_down(Enter.code()).editable());
    src.emit_key (KbdEvent::key_down(A.code()).editable());
    assert_eq!(count(&n), 0);
}

#[test]
fn editable_targets_still_track_modifiers() {
    let (src, k) = setup();
    src.emit_key (KbdEvent::key_down(Shift.code()).editable());
    assert!(k.shift());
}

#[test]
fn custom_ignore_predicates() {
    init_tracing();
    let src = LocalInputSource::new();
    let k = Dispatcher::new_w_config (src.clone(), DispatcherConfig::new().no_ignore());
    let (n, cb) = counter();
    k.on ("a", cb.clone()).unwrap();
    src.emit_key (KbdEvent::key_down(A.code()).editable());
    assert_eq!(count(&n), 1);

    let src = LocalInputSource::new();
    let k = Dispatcher::new_w_config (src.clone(), DispatcherConfig::new().ignore_with (|ev| ev.code == A.code()));
    k.on ("a, b", cb).unwrap();
    src.tap_key (A);
    src.tap_key (B);
    assert_eq!(count(&n), 2);
}



#[test]
fn sequence_a_b_c() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("a b c", cb).unwrap();
    src.tap_key (A);
    assert_eq!(count(&n), 0);
    src.tap_key (B);
    assert_eq!(count(&n), 0);
    src.tap_key (C);
    assert_eq!(count(&n), 1);
}

#[test]
fn sequence_broken_by_mismatch() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("a b c", cb).unwrap();
    [A, X, B, C] .into_iter() .for_each (|key| src.tap_key(key));
    assert_eq!(count(&n), 0);
    [A, A, B, C] .into_iter() .for_each (|key| src.tap_key(key));
    assert_eq!(count(&n), 1);
}

#[test]
fn sequence_steps_ignore_modifier_presses() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("a b", cb).unwrap();
    src.tap_key (A);
    src.tap_key (Shift);
    src.tap_key (B);
    assert_eq!(count(&n), 1);
}

#[test]
fn gated_sequence() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("command + a b c", cb).unwrap();
    src.press_key (Command);
    assert_eq!(count(&n), 0);
    src.tap_key (A);
    src.tap_key (B);
    assert_eq!(count(&n), 0);
    src.tap_key (C);
    assert_eq!(count(&n), 1);
    src.release_key (Command);
}

#[test]
fn gated_sequence_needs_the_mods_on_every_step() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("command + a b", cb).unwrap();
    src.press_key (Command);
    src.tap_key (A);
    src.release_key (Command);
    src.tap_key (B);
    assert_eq!(count(&n), 0);

    // releasing the modifier mid-way reset it, so pressing it again and finishing doesnt complete either
    src.press_key (Command);
    src.tap_key (B);
    assert_eq!(count(&n), 0);
    src.tap_key (A);
    src.tap_key (B);
    assert_eq!(count(&n), 1);
}

#[test]
fn gated_sequence_reset_on_focus() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("command + a b", cb).unwrap();
    src.press_key (Command);
    src.tap_key (A);
    src.focus();
    src.press_key (Command);
    src.tap_key (B);
    assert_eq!(count(&n), 0);
}

#[test]
fn wildcard_chord_w_modifier() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("command + *", cb).unwrap();
    src.press_key (Command);
    assert_eq!(count(&n), 0);
    src.tap_key (A);
    src.tap_key (B);
    assert_eq!(count(&n), 2);
    src.release_key (Command);
    src.tap_key (A);
    assert_eq!(count(&n), 2);
}

#[test]
fn wildcard_sequence() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("* a", cb).unwrap();
    src.tap_key (B);
    src.tap_key (A);
    assert_eq!(count(&n), 1);
    src.tap_key (D);
    src.tap_key (C);
    assert_eq!(count(&n), 1);
}

#[test]
fn release_bound_sequences_step_on_release() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.up ("a b", cb).unwrap();
    src.press_key (A);
    src.press_key (B);
    assert_eq!(count(&n), 0);
    src.release_key (A);
    src.release_key (B);
    assert_eq!(count(&n), 1);
}

#[test]
fn sequences_have_no_timeout() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("g g", cb).unwrap();
    src.tap_key (G);
    std::thread::sleep (std::time::Duration::from_millis(50));
    src.tap_key (G);
    assert_eq!(count(&n), 1);
}



#[test]
fn unbind_by_spec_and_callback() {
    let (_src, k) = setup();
    let (_, log) = counter();
    let (_, dir) = counter();
    let (_, warn) = counter();
    k.on ("shift + enter", log.clone()).unwrap();
    k.on ("shift + enter", dir.clone()).unwrap();
    assert_eq!(k.len(), 2);
    k.unbind_fn ("enter", &dir).unwrap();
    assert_eq!(k.len(), 1);

    k.on ("shift + 1", warn.clone()).unwrap();
    assert_eq!(k.len(), 2);
    k.unbind_fn ("shift + 1", &warn).unwrap();
    assert_eq!(k.len(), 1);
    assert_eq!(k.combos(), vec!["shift + enter"]);
}

#[test]
fn unbind_fn_leaves_other_callbacks_firing() {
    let (src, k) = setup();
    let (n1, cb1) = counter();
    let (n2, cb2) = counter();
    k.on ("enter", cb1).unwrap();
    k.on ("enter", cb2.clone()).unwrap();
    k.unbind_fn ("enter", &cb2).unwrap();
    src.tap_key (Enter);
    assert_eq!((count(&n1), count(&n2)), (1, 0));
}

#[test]
fn unbind_w_modifiers() {
    let (_src, k) = setup();
    let (_, cb) = counter();
    k.on ("command + enter", cb.clone()).unwrap();
    k.on ("shift + enter", cb.clone()).unwrap();
    assert_eq!(k.len(), 2);
    k.unbind ("command + enter").unwrap();
    assert_eq!(k.combos(), vec!["shift + enter"]);
}

#[test]
fn unbind_by_key_alone() {
    let (_src, k) = setup();
    let (_, cb) = counter();
    k.on ("shift + enter", cb.clone()).unwrap();
    k.on ("shift + enter", cb.clone()).unwrap();
    k.unbind ("enter").unwrap();
    assert!(k.is_empty());

    k.on ("left", cb.clone()).unwrap();
    k.on ("right", cb.clone()).unwrap();
    k.unbind ("left, right").unwrap();
    assert!(k.is_empty());

    k.on ("a b c", cb).unwrap();
    k.unbind ("a b c").unwrap();
    assert!(k.is_empty());
}

#[test]
fn unbind_all() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("enter", cb.clone()).unwrap();
    k.on ("a", cb.clone()).unwrap();
    k.on ("b", cb).unwrap();
    assert_eq!(k.len(), 3);
    k.unbind_all();
    assert!(k.is_empty());
    [Enter, A, B] .into_iter() .for_each (|key| src.tap_key(key));
    assert_eq!(count(&n), 0);
}

#[test]
fn unbinding_from_inside_a_callback() {
    let (src, k) = setup();
    let (n, cb) = counter();
    let k2 = k.clone();
    k.on ("a", handler (move |_| { k2.unbind ("a").unwrap(); })).unwrap();
    k.on ("a", cb).unwrap();
    // the in-flight dispatch still sees the second combo, later ones dont
    src.tap_key (A);
    assert_eq!(count(&n), 1);
    src.tap_key (A);
    assert_eq!(count(&n), 1);
    assert!(k.is_empty());
}



#[test]
fn bind_errors_are_atomic() {
    let (src, k) = setup();
    let (n, cb) = counter();
    assert_eq!(k.on ("a, b, nope", cb.clone()).err(), Some(ComboError::UnknownKey("nope".into())));
    assert!(k.is_empty());
    assert!(matches!(k.on ("shift + ", cb.clone()), Err(ComboError::Malformed(_))));
    assert!(matches!(k.on ("hyper + a", cb.clone()), Err(ComboError::UnknownModifier(_))));
    assert!(k.is_empty());
    src.tap_key (A);
    assert_eq!(count(&n), 0);
    assert!(k.unbind ("nope").is_err());
}

#[test]
fn unknown_codes_are_silent() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("a", cb).unwrap();
    src.press (4242);
    src.release (4242);
    assert_eq!(count(&n), 0);
}



#[test]
fn dispatchers_are_independent() {
    init_tracing();
    let src = LocalInputSource::new();
    let k1 = Dispatcher::new (src.clone());
    let k2 = Dispatcher::new (LocalInputSource::new());
    assert_eq!(src.subscriber_count(), 3);
    src.press_key (Shift);
    assert!(k1.shift());
    assert!(!k2.shift());
}

#[test]
fn destroy_detaches() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("a", cb).unwrap();
    assert!(k.is_attached());
    assert_eq!(src.subscriber_count(), 3);

    k.destroy();
    assert!(!k.is_attached());
    assert_eq!(src.subscriber_count(), 0);
    assert!(k.is_empty());
    src.tap_key (A);
    k.invoke (&KbdEvent::key_down(A.code()));
    assert_eq!(count(&n), 0);

    // idempotent
    k.destroy();
    assert!(!k.is_attached());
}

#[test]
fn dropped_dispatcher_stops_dispatching() {
    let (src, k) = setup();
    let (n, cb) = counter();
    k.on ("a", cb).unwrap();
    let k2 = k.clone();
    drop (k);
    assert_eq!(src.subscriber_count(), 3);
    drop (k2);
    assert_eq!(src.subscriber_count(), 0);
    src.tap_key (A);
    assert_eq!(count(&n), 0);
}

#[test]
fn dropped_dispatchers_dont_pile_up_on_the_source() {
    init_tracing();
    let src = LocalInputSource::new();
    (0..100) .for_each (|_| drop (Dispatcher::new (src.clone())));
    assert_eq!(src.subscriber_count(), 0);

    // destroy then drop deregisters just the once
    let k = Dispatcher::new (src.clone());
    let keep = Dispatcher::new (src.clone());
    k.destroy();
    drop (k);
    assert_eq!(src.subscriber_count(), 3);
    assert!(keep.is_attached());
}

#[test]
fn direct_invoke_without_the_source() {
    let (_src, k) = setup();
    let (n, cb) = counter();
    k.on ("ctrl + s", cb).unwrap();
    k.invoke (&KbdEvent::key_down(Ctrl.code()));
    k.invoke (&KbdEvent::key_down(S.code()));
    assert_eq!(count(&n), 1);
}
