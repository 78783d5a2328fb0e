
// allow non camel-case names for this entire file
#![allow(non_camel_case_types)]

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::atomic::{AtomicU64, Ordering};

use derivative::Derivative;
use derive_deref::Deref;
use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::*;



/// What a source delivers to its subscribers .. a key press/release, or a bare focus-regained notification
# [ allow (non_camel_case_types) ]
# [ derive (Debug, Eq, PartialEq, Hash, Copy, Clone) ]
pub enum SourceEvent {
    key_event (KbdEvent),
    focus_event,
}

impl SourceEvent {
    pub fn source_ev_t (&self) -> SourceEv_T {
        match self {
            SourceEvent::key_event (ev) => ev.source_ev_t(),
            SourceEvent::focus_event    => SourceEv_T::SourceEv_Focus,
        }
    }
}


/// the subscriber callback type the source invokes (inline, on the sources own calling thread)
pub type SourceCbFn_T = Arc <dyn Fn (&SourceEvent) + Send + Sync + 'static>;


/// Handle returned from a subscription, used to unsubscribe later
# [ derive (Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Copy, Clone) ]
pub struct SubscriptionId (pub u64);



/// The input-producing element a dispatcher attaches to. <br>
/// It must support subscribing/unsubscribing to key-down, key-up and focus-regained notifications, and deliver each
/// notification to completion before the next. After unsubscribe, that subscription must never be invoked again.
pub trait InputSource : Send + Sync {
    fn subscribe   (&self, ev_t:SourceEv_T, cb:SourceCbFn_T) -> SubscriptionId;
    fn unsubscribe (&self, id:SubscriptionId);
}




# [ derive (Derivative, Default) ]
# [ derivative (Debug) ]
/// in-process input source .. holds its subscribers and fans out whatever notifications it is fed. <br>
/// Safe to (un)subscribe and emit from any threads concurrently.
pub struct _LocalInputSource {
    next_id : AtomicU64,
    # [ derivative (Debug="ignore") ]
    subs : RwLock <SubsMap>,
    // ^^ we snapshot out of this before invoking anything, so subscribers can (un)subscribe from inside their callbacks
}

type SubsMap = FxHashMap <SubscriptionId, (SourceEv_T, SourceCbFn_T)>;

impl _LocalInputSource {
    fn read (&self) -> RwLockReadGuard<'_, SubsMap> {
        self.subs.read() .unwrap_or_else (|e| e.into_inner())
    }
    fn write (&self) -> RwLockWriteGuard<'_, SubsMap> {
        self.subs.write() .unwrap_or_else (|e| e.into_inner())
    }
}

# [ derive (Debug, Clone, Default, Deref) ]
/// Arc wrapped local input source for cheap cloning/sharing (e.g. one clone given to a dispatcher, one kept to emit on)
pub struct LocalInputSource ( Arc <_LocalInputSource> );



impl LocalInputSource {

    pub fn new () -> LocalInputSource { LocalInputSource::default() }

    /// delivers the notification to every subscriber of its kind, in subscription order
    pub fn emit (&self, ev:SourceEvent) {
        let ev_t = ev.source_ev_t();
        let cbs = self.read() .iter()
            .filter (|(_, (t,_))| *t == ev_t)
            .sorted_by_key (|(id,_)| **id)
            .map (|(_, (_,cb))| cb.clone())
            .collect::<Vec<SourceCbFn_T>>();
        cbs .iter() .for_each (|cb| cb(&ev));
    }

    pub fn emit_key (&self, ev:KbdEvent) { self.emit (SourceEvent::key_event(ev)) }

    pub fn press   (&self, code:u32) { self.emit_key (KbdEvent::key_down(code)) }
    pub fn release (&self, code:u32) { self.emit_key (KbdEvent::key_up(code)) }
    pub fn focus   (&self)           { self.emit (SourceEvent::focus_event) }

    pub fn press_key   (&self, key:KbdKey) { self.press   (key.code()) }
    pub fn release_key (&self, key:KbdKey) { self.release (key.code()) }

    /// press then release .. the common 'tap' of a key
    pub fn tap_key (&self, key:KbdKey) { self.press_key(key); self.release_key(key); }

    pub fn subscriber_count (&self) -> usize { self.read().len() }

}


impl InputSource for LocalInputSource {

    fn subscribe (&self, ev_t:SourceEv_T, cb:SourceCbFn_T) -> SubscriptionId {
        let id = SubscriptionId (self.next_id.fetch_add (1, Ordering::SeqCst));
        self.write() .insert (id, (ev_t, cb));
        id
    }

    fn unsubscribe (&self, id:SubscriptionId) {
        self.write() .remove (&id);
    }

}
