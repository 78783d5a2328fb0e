
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::trace;

use crate::*;



# [ derive (Debug, Default) ]
/// Per-sequence progress .. a cursor into the sequence's expected key-slots. <br>
/// There's no timeout here: a partially matched sequence stays armed until some mismatching key breaks it.
pub struct SeqCursor (AtomicUsize);


impl SeqCursor {

    pub fn get   (&self) -> usize { self.0 .load (Ordering::SeqCst) }
    pub fn reset (&self)          { self.0 .store (0, Ordering::SeqCst) }

    /// Steps the cursor for one qualifying (non-modifier) key event, returns true if that completed the sequence. <br>
    /// `mods_ok` is whether the sequence's modifier predicate holds right now .. for gated sequences it must hold on every step.
    pub fn step (&self, keys:&[KeySlot], ev:&KbdEvent, mods_ok:bool) -> bool {
        if keys.is_empty() { return false }
        if !mods_ok { self.reset(); return false }

        let mut pos = self.get() .min (keys.len() - 1);
        if !keys[pos].matches(ev) {
            // broken chain .. but the same key might well be a fresh start
            pos = 0;
            if !keys[0].matches(ev) { self.reset(); return false }
        }
        pos += 1;

        if pos == keys.len() {
            self.reset();
            return true
        }
        trace! ("sequence cursor at {} of {}", pos, keys.len());
        self.0 .store (pos, Ordering::SeqCst);
        false
    }

}
