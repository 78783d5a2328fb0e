
// allow non camel-case names for this entire file
#![allow(non_camel_case_types)]

use strum_macros::Display;

use crate::*;



/// The kbd event type is either a key press (key-down) or a key release (key-up)
# [ derive (Debug, Eq, PartialEq, Hash, Copy, Clone, Display) ]
pub enum KbdEvent_T {
    #[strum(to_string="press")]   KbdEvent_KeyDown,
    #[strum(to_string="release")] KbdEvent_KeyUp,
}


/// The notification kinds an input-source must be able to deliver to its subscribers
# [ derive (Debug, Eq, PartialEq, Hash, Copy, Clone) ]
pub enum SourceEv_T {
    SourceEv_KeyDown,
    SourceEv_KeyUp,
    SourceEv_Focus,
}


/// A press/release notification from the input-source .. carries the numeric key-code, and whether the event target
/// is a text-entry capable element (input, select, textarea etc) which we ignore by default
# [ derive (Debug, Eq, PartialEq, Hash, Copy, Clone) ]
pub struct KbdEvent {
    pub ev_t : KbdEvent_T,
    pub code : u32,
    pub target_editable : bool,
}


impl KbdEvent {

    pub fn new (ev_t:KbdEvent_T, code:u32) -> KbdEvent {
        KbdEvent { ev_t, code, target_editable: false }
    }
    pub fn key_down (code:u32) -> KbdEvent { KbdEvent::new (KbdEvent_T::KbdEvent_KeyDown, code) }
    pub fn key_up   (code:u32) -> KbdEvent { KbdEvent::new (KbdEvent_T::KbdEvent_KeyUp,   code) }

    /// marks the event as coming from a text-entry target
    pub fn editable (self) -> KbdEvent { KbdEvent { target_editable: true, ..self } }

    /// the KbdKey for this events key-code, if its one we know
    pub fn key (&self) -> Option<KbdKey> { KbdKey::from_code (self.code) }

    /// the modifier driven by this events key, if its a modifier key
    pub fn mod_key (&self) -> Option<ModKey> { self.key() .and_then (|k| k.mod_key()) }

    pub fn is_key_down (&self) -> bool { self.ev_t == KbdEvent_T::KbdEvent_KeyDown }
    pub fn is_key_up   (&self) -> bool { self.ev_t == KbdEvent_T::KbdEvent_KeyUp }

    /// the source notification kind this event is delivered as
    pub fn source_ev_t (&self) -> SourceEv_T {
        match self.ev_t {
            KbdEvent_T::KbdEvent_KeyDown => SourceEv_T::SourceEv_KeyDown,
            KbdEvent_T::KbdEvent_KeyUp   => SourceEv_T::SourceEv_KeyUp,
        }
    }
}
