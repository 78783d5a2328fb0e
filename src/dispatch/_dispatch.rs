
use std::sync::{Arc, Weak};
use std::sync::atomic::{AtomicBool, Ordering};

use atomic_refcell::AtomicRefCell;
use derivative::Derivative;
use derive_deref::Deref;
use tracing::{debug, info, trace, warn};

use crate::*;




# [ derive (Debug, Default, Clone) ]
/// representation for all our state flags .. modifier-keys down, aggregates, attached-state etc
pub struct Flag (Arc<AtomicBool>);
// ^^ simple sugar that helps reduce clutter in code

impl Flag {
    pub fn new (state:bool) -> Flag { Flag ( Arc::new ( AtomicBool::new(state) ) ) }

    pub fn set   (&self) { self.0 .store (true,  Ordering::SeqCst) }
    pub fn clear (&self) { self.0 .store (false, Ordering::SeqCst) }
    pub fn store (&self, state:bool) { self.0 .store (state, Ordering::SeqCst) }

    /// clears the flag, returning whether it was set (only one concurrent caller ever sees true)
    pub fn take     (&self) -> bool { self.0 .swap (false, Ordering::SeqCst) }

    pub fn is_set   (&self) -> bool { true  == self.0 .load (Ordering::SeqCst) }
    pub fn is_clear (&self) -> bool { false == self.0 .load (Ordering::SeqCst) }
}




# [ derive (Derivative) ]
# [ derivative (Debug) ]
/// The dispatcher state .. everything here is owned by exactly one dispatcher, and dispatchers share nothing
pub struct _Dispatcher {
    // having this disallows direct instantiation
    _private : (),

    // the input source we're attached to (held strongly until we're dropped)
    # [ derivative (Debug="ignore") ]
    source : Arc <dyn InputSource>,

    // our subscriptions on the source, so we can deregister them on destroy (or drop)
    subs : AtomicRefCell <Vec<SubscriptionId>>,

    attached : Flag,

    // the live modifier-key states
    pub mod_keys : ModKeys,

    // the ordered registry of bound combos
    pub cm : CombosMap,

    pub cfg : DispatcherConfig,
}


# [ derive (Debug, Clone, Deref) ]
/// Keyboard shortcut dispatcher attached to an input source .. Arc wrapped so cloning/passing around is cheap. <br>
/// Bind callbacks with `on` / `bind` / `down` / `up`, remove them with `unbind*`, and `destroy` to detach.
pub struct Dispatcher ( Arc <_Dispatcher> );




impl Dispatcher {

    /// Creates a dispatcher attached to the given input source, with the default config
    pub fn new <S> (source:S) -> Dispatcher where S: InputSource + 'static {
        Dispatcher::new_w_config (source, DispatcherConfig::default())
    }

    /// Creates a dispatcher attached to the given input source, subscribing for key-down, key-up and focus notifications
    pub fn new_w_config <S> (source:S, cfg:DispatcherConfig) -> Dispatcher where S: InputSource + 'static {
        let d = Dispatcher ( Arc::new ( _Dispatcher {
            _private : (),
            source   : Arc::new (source),
            subs     : AtomicRefCell::new (Vec::new()),
            attached : Flag::new (true),
            mod_keys : ModKeys::new (cfg.super_key),
            cm       : CombosMap::new(),
            cfg,
        } ) );

        // the subscriptions only hold a weak ref back to us, so the source never keeps a dropped dispatcher alive
        let weak : Weak<_Dispatcher> = Arc::downgrade (&d.0);
        let cb : SourceCbFn_T = Arc::new ( move |sev: &SourceEvent| {
            if let Some(inner) = weak.upgrade() { Dispatcher(inner).handle_source_event(sev) }
        } );
        use SourceEv_T::*;
        let ids = [SourceEv_KeyDown, SourceEv_KeyUp, SourceEv_Focus] .map (|ev_t| d.source.subscribe (ev_t, cb.clone()));
        d.subs.borrow_mut() .extend (ids);

        info! ("dispatcher attached .. super key is '{}'", d.cfg.super_key);
        d
    }


    fn handle_source_event (&self, sev:&SourceEvent) {
        match sev {
            SourceEvent::key_event (ev) => self.invoke (ev),
            SourceEvent::focus_event    => self.reset(),
        }
    }


    /// Processes a single press/release notification to completion : modifier tracking, ignore check,
    /// then chord matching and sequence stepping, then invoking every matched callback in registration order. <br>
    /// Never fails .. an event that matches nothing is a silent no-op.
    pub fn invoke (&self, ev:&KbdEvent) {
        if self.attached.is_clear() { return }

        // bare modifier presses/releases only update modifier state, no dispatch on them
        if let Some(mk) = ev.mod_key() {
            if ev.is_key_down() {
                self.mod_keys.process_press (mk);
            } else {
                self.mod_keys.process_release (mk);
                self.cm.reset_seqs_w_mod (mk);
            }
            return
        }

        if self.cfg.is_ignored (ev) {
            trace! ("ignoring {} of key-code {} on editable target", ev.ev_t, ev.code);
            return
        }

        let cur_mods = self.mod_keys.get_cur_mod_keys_bitmap();

        // we collect everything (and step all sequences) before invoking any callback, so callbacks that
        // bind/unbind or panic cant affect which siblings were matched for this event
        let mut fired = self.cm.gen_chord_matches (ev, &cur_mods);
        fired .extend (self.cm.step_sequences (ev, &cur_mods));

        trace! ("{} of key-code {} w mods {:?} .. {} match(es)", ev.ev_t, ev.code, cur_mods, fired.len());
        fired .iter() .for_each (|c| c.invoke (ev));
    }


    /// Focus regained : forcibly clear all modifier state (we might have missed releases while focus was away)
    pub fn reset (&self) {
        if self.attached.is_clear() { return }
        debug! ("focus regained .. clearing modifier state");
        self.mod_keys.reset();
        self.cm.reset_gated_seqs();
    }



    /// Binds the callback to every alternative in the combo-spec for the given event-type. <br>
    /// The whole spec is parsed first, so on any error nothing gets registered.
    pub fn bind (&self, ev_t:KbdEvent_T, spec:&str, cb:KbdCbFn_T) -> Result<&Dispatcher> {
        let specs = ComboSpec::parse (spec, self.mod_keys.super_key) .map_err ( |e| {
            warn! ("rejected binding '{}' : {}", spec, e); e
        } )?;
        let combos = specs .into_iter() .map (|cs| Combo::new (cs, ev_t, cb.clone())) .collect::<Vec<Combo>>();
        debug! ("bound {} combo(s) on {} for '{}'", combos.len(), ev_t, spec);
        self.cm.add_combos (combos);
        Ok (self)
    }

    /// shorthand press-bind .. the plain `dispatcher(spec, callback)` form
    pub fn on (&self, spec:&str, cb:KbdCbFn_T) -> Result<&Dispatcher> {
        self.bind (KbdEvent_T::KbdEvent_KeyDown, spec, cb)
    }

    pub fn down (&self, spec:&str, cb:KbdCbFn_T) -> Result<&Dispatcher> {
        self.bind (KbdEvent_T::KbdEvent_KeyDown, spec, cb)
    }

    pub fn up (&self, spec:&str, cb:KbdCbFn_T) -> Result<&Dispatcher> {
        self.bind (KbdEvent_T::KbdEvent_KeyUp, spec, cb)
    }


    /// Unbinds everything
    pub fn unbind_all (&self) -> &Dispatcher {
        self.cm.clear();
        debug! ("unbound all combos");
        self
    }

    /// Unbinds every combo matching any alternative in the combo-spec, whatever its callback. <br>
    /// An alternative with no modifiers matches all combos on that key (or sequence) regardless of their modifiers.
    pub fn unbind (&self, spec:&str) -> Result<&Dispatcher> {
        self.unbind_impl (spec, None)
    }

    /// Like `unbind`, but only removes combos bound to this exact callback
    pub fn unbind_fn (&self, spec:&str, cb:&KbdCbFn_T) -> Result<&Dispatcher> {
        self.unbind_impl (spec, Some(cb))
    }

    fn unbind_impl (&self, spec:&str, cb:Option<&KbdCbFn_T>) -> Result<&Dispatcher> {
        let targets = ComboSpec::parse (spec, self.mod_keys.super_key)?;
        let n = self.cm.remove_combos (&targets, cb);
        debug! ("unbound {} combo(s) for '{}'", n, spec);
        Ok (self)
    }


    /// Detaches from the input source (deregistering all our subscriptions) and clears the registry and modifier state. <br>
    /// Once destroyed, no further notifications get dispatched. Calling it again is a no-op.
    pub fn destroy (&self) {
        if !self.attached.take() { return }
        let ids = std::mem::take (&mut *self.subs.borrow_mut());
        ids .into_iter() .for_each (|id| self.source.unsubscribe(id));
        self.cm.clear();
        self.mod_keys.reset();
        info! ("dispatcher destroyed");
    }



    // introspection

    pub fn shift   (&self) -> bool { self.mod_keys.shift.is_set() }
    pub fn ctrl    (&self) -> bool { self.mod_keys.ctrl.is_set() }
    pub fn alt     (&self) -> bool { self.mod_keys.alt.is_set() }
    pub fn command (&self) -> bool { self.mod_keys.command.is_set() }

    pub fn is_down (&self, mk:ModKey) -> bool { self.mod_keys.is_down(mk) }

    /// true if any modifier is currently down
    pub fn modifiers (&self) -> bool { self.mod_keys.is_any_down() }

    /// the concrete modifier that 'super' resolves to for this dispatcher
    pub fn super_key (&self) -> ModKey { self.mod_keys.super_key }

    /// true while the super modifier is down
    pub fn super_down (&self) -> bool { self.mod_keys.super_down.is_set() }

    pub fn len      (&self) -> usize { self.cm.len() }
    pub fn is_empty (&self) -> bool  { self.cm.is_empty() }

    /// the registered combos (re-serialized, in registration order)
    pub fn combos (&self) -> Vec<String> {
        self.cm.snapshot() .iter() .map (|c| c.spec.to_string()) .collect()
    }

    pub fn source (&self) -> &Arc<dyn InputSource> { &self.source }

    pub fn is_attached (&self) -> bool { self.attached.is_set() }

}



impl Drop for _Dispatcher {
    // dropping the last handle w/o a destroy still deregisters us .. after a destroy, subs is already empty
    fn drop (&mut self) {
        let ids = std::mem::take (self.subs.get_mut());
        if ids.is_empty() { return }
        ids .into_iter() .for_each (|id| self.source.unsubscribe(id));
        debug! ("dropped attached dispatcher .. deregistered from its source");
    }
}
