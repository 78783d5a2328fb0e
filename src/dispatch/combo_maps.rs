#![ allow (non_camel_case_types) ]

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use derivative::Derivative;
use derive_deref::Deref;

use crate::*;



/// the bound callback type .. invoked inline on the input-source's thread with the triggering event
pub type KbdCbFn_T = Arc <dyn Fn (&KbdEvent) + Send + Sync + 'static>;

/// wraps a closure into a bound-callback (keep the returned Arc around if you want to unbind by callback later)
pub fn handler <F> (f:F) -> KbdCbFn_T where F: Fn (&KbdEvent) + Send + Sync + 'static {
    Arc::new (f)
}



# [ derive (Derivative) ]
# [ derivative (Debug) ]
/// A registered matcher .. the parsed combo-spec, the event-type it triggers on, its callback, and (for sequences) its progress
pub struct _Combo {
    _private : (),
    pub spec     : ComboSpec,
    pub ev_t     : KbdEvent_T,
    pub mod_bits : ModKeyBits,
    # [ derivative (Debug="ignore") ]
    pub cb       : KbdCbFn_T,
    pub seq      : SeqCursor,
}

# [ derive (Debug, Clone, Deref) ]
/// Arc wrapped combo, so dispatch can work off a cheap snapshot of the registry
pub struct Combo ( Arc <_Combo> );


impl Combo {

    pub fn new (spec:ComboSpec, ev_t:KbdEvent_T, cb:KbdCbFn_T) -> Combo {
        let mod_bits = spec.mod_bits();
        Combo ( Arc::new ( _Combo { _private:(), spec, ev_t, mod_bits, cb, seq: SeqCursor::default() } ) )
    }

    pub fn is_sequence (&self) -> bool { self.spec.is_sequence() }

    /// callback identity is the identity of the Arc allocation (ignoring vtable pointers)
    pub fn has_cb (&self, cb:&KbdCbFn_T) -> bool {
        Arc::as_ptr(&self.cb) as *const () == Arc::as_ptr(cb) as *const ()
    }

    /// unbind matching .. the same keys, and either the same modifier set, or an unbind target with no modifiers at all
    pub fn matches_unbind_target (&self, target:&ComboSpec) -> bool {
        self.spec.keys() == target.keys() && (!target.is_gated() || self.mod_bits == target.mod_bits())
    }

    /// whether this combo's modifier-set exactly equals the currently-down modifiers
    pub fn mods_exact (&self, cur_mods:&ModKeyBits) -> bool { self.mod_bits == *cur_mods }

    pub fn invoke (&self, ev:&KbdEvent) { (self.cb)(ev) }

}




# [ derive (Debug, Default) ]
/// The ordered combos registry .. registration order is dispatch order
pub struct CombosMap {
    combos : RwLock <Vec<Combo>>,
    // ^^ binds/unbinds can come at any time (incl from inside callbacks), but dispatch never holds this while invoking
}


impl CombosMap {

    pub fn new () -> CombosMap { CombosMap::default() }

    fn read (&self) -> RwLockReadGuard<'_, Vec<Combo>> {
        self.combos.read() .unwrap_or_else (|e| e.into_inner())
    }
    fn write (&self) -> RwLockWriteGuard<'_, Vec<Combo>> {
        self.combos.write() .unwrap_or_else (|e| e.into_inner())
    }

    pub fn len      (&self) -> usize { self.read().len() }
    pub fn is_empty (&self) -> bool  { self.read().is_empty() }

    /// a stable copy of the current registry, in order
    pub fn snapshot (&self) -> Vec<Combo> { self.read().clone() }

    pub fn add_combos (&self, combos:Vec<Combo>) {
        self.write() .extend (combos);
    }

    pub fn clear (&self) { self.write().clear() }

    /// removes every combo matching any of the targets (and bound to the given callback, if one is given) .. returns count removed
    pub fn remove_combos (&self, targets:&[ComboSpec], cb:Option<&KbdCbFn_T>) -> usize {
        let mut combos = self.write();
        let n_before = combos.len();
        combos .retain ( |c| {
            let cb_match = cb .map_or (true, |cb| c.has_cb(cb));
            !(cb_match && targets.iter().any (|t| c.matches_unbind_target(t)))
        } );
        n_before - combos.len()
    }


    /// Collects the chord (single-key) combos that should fire for this event given the currently-down modifiers. <br>
    /// Combos with modifiers need an exact modifier-set match. Combos without modifiers fire when nothing is down,
    /// or when modifiers are down but no competing combo on this key declares modifiers at all.
    pub fn gen_chord_matches (&self, ev:&KbdEvent, cur_mods:&ModKeyBits) -> Vec<Combo> {
        let cands = self.read() .iter()
            .filter (|c| !c.is_sequence() && c.ev_t == ev.ev_t && c.spec.base_key().matches(ev))
            .cloned() .collect::<Vec<Combo>>();

        let any_down  = cur_mods .iter() .any (|b| *b);
        let competing = cands .iter() .any (|c| c.spec.is_gated());

        cands .into_iter() .filter ( |c| {
            if !c.spec.is_gated() { !any_down || !competing } else { c.mods_exact(cur_mods) }
        } ) .collect()
    }


    /// Steps every sequence combo of this event-type with the key, returns those that completed (in registration order)
    pub fn step_sequences (&self, ev:&KbdEvent, cur_mods:&ModKeyBits) -> Vec<Combo> {
        let seqs = self.read() .iter()
            .filter (|c| c.is_sequence() && c.ev_t == ev.ev_t)
            .cloned() .collect::<Vec<Combo>>();

        seqs .into_iter() .filter ( |c| {
            let mods_ok = !c.spec.is_gated() || c.mods_exact(cur_mods);
            c.seq.step (c.spec.keys(), ev, mods_ok)
        } ) .collect()
    }


    /// resets progress on sequences gated by the given modifier (e.g. when it gets released mid-sequence)
    pub fn reset_seqs_w_mod (&self, mk:ModKey) {
        self.read() .iter() .filter (|c| c.is_sequence() && c.spec.mods().contains(&mk)) .for_each (|c| c.seq.reset());
    }

    /// resets progress on all modifier-gated sequences
    pub fn reset_gated_seqs (&self) {
        self.read() .iter() .filter (|c| c.is_sequence() && c.spec.is_gated()) .for_each (|c| c.seq.reset());
    }

}
