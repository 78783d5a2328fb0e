
use std::str::FromStr;

use once_cell::sync::Lazy;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::trace;

use crate::*;



/// The modifier keys we track .. left/right variants report the same key-codes, so no L/R distinction here
# [ derive (Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Copy, Clone, EnumIter, EnumString, Display, AsRefStr) ]
pub enum ModKey {
    #[strum(to_string="command", serialize="cmd", serialize="meta")] Command,
    #[strum(to_string="ctrl", serialize="control")]                  Ctrl,
    #[strum(to_string="alt", serialize="option")]                    Alt,
    #[strum(to_string="shift")]                                      Shift,
}

/// bitmap of mod-keys in the order given by ModKey::static_mod_keys .. compared for exact-set matching of combos
pub type ModKeyBits = [bool; 4];


/// the platform 'super' key .. command on apple platforms, ctrl elsewhere (resolved once per process)
static PLATFORM_SUPER_KEY: Lazy<ModKey> = Lazy::new ( || {
    if cfg! (any (target_os = "macos", target_os = "ios")) { ModKey::Command } else { ModKey::Ctrl }
} );



impl ModKey {

    /// note that this is the source of ordering for the bits in ModKeyBits
    pub fn static_mod_keys () -> [ModKey; 4] {
        use ModKey::*;
        [Command, Ctrl, Alt, Shift]
    }

    /// the process-wide platform super key
    pub fn platform_super () -> ModKey { *PLATFORM_SUPER_KEY }

    /// resolves a modifier token (already super-substituted) into its ModKey
    pub fn resolve (name:&str) -> Result<ModKey> {
        ModKey::from_str(name) .map_err (|_| ComboError::UnknownModifier (name.to_string()))
    }

    /// the kbd key that drives this modifier
    pub fn key (self) -> KbdKey {
        match self {
            ModKey::Command => KbdKey::Command,
            ModKey::Ctrl    => KbdKey::Ctrl,
            ModKey::Alt     => KbdKey::Alt,
            ModKey::Shift   => KbdKey::Shift,
        }
    }

    /// makes the (order-independent) bitmap for a list of mod-keys
    pub fn make_mod_keys_bitmap (mks:&[ModKey]) -> ModKeyBits {
        ModKey::static_mod_keys() .map (|mk| mks.contains(&mk))
    }

}




# [ derive (Debug) ]
/// Live modifier state for one dispatcher .. the per-modifier down flags, the any-modifier-down aggregate,
/// and the super-is-down flag for whichever concrete modifier 'super' resolves to
pub struct ModKeys {
    _private : (),
    pub command : Flag,
    pub ctrl    : Flag,
    pub alt     : Flag,
    pub shift   : Flag,

    // aggregates, recomputed on every change
    pub any_down   : Flag,
    pub super_down : Flag,

    pub super_key : ModKey,
}


impl ModKeys {

    pub fn new (super_key:ModKey) -> ModKeys {
        ModKeys {
            _private : (),
            command : Flag::default(),
            ctrl    : Flag::default(),
            alt     : Flag::default(),
            shift   : Flag::default(),
            any_down   : Flag::default(),
            super_down : Flag::default(),
            super_key,
        }
    }

    pub fn flag (&self, mk:ModKey) -> &Flag {
        match mk {
            ModKey::Command => &self.command,
            ModKey::Ctrl    => &self.ctrl,
            ModKey::Alt     => &self.alt,
            ModKey::Shift   => &self.shift,
        }
    }

    /// (mod-key, flag) pairs in the static mod-keys order
    pub fn mod_flag_pairs (&self) -> [(ModKey, &Flag); 4] {
        ModKey::static_mod_keys() .map (|mk| (mk, self.flag(mk)))
    }

    /// generate the bitmap for the currently-down modifiers
    pub fn get_cur_mod_keys_bitmap (&self) -> ModKeyBits {
        self.mod_flag_pairs() .map (|(_, fg)| fg.is_set())
    }

    pub fn is_down     (&self, mk:ModKey) -> bool { self.flag(mk).is_set() }
    pub fn is_any_down (&self) -> bool { self.any_down.is_set() }

    fn refresh_aggregates (&self) {
        self.any_down   .store (self.mod_flag_pairs() .iter() .any (|(_, fg)| fg.is_set()));
        self.super_down .store (self.flag(self.super_key).is_set());
    }

    pub fn process_press (&self, mk:ModKey) {
        self.flag(mk).set();
        self.refresh_aggregates();
        trace! ("mod-key down : {} .. mods now {:?}", mk, self.get_cur_mod_keys_bitmap());
    }

    pub fn process_release (&self, mk:ModKey) {
        self.flag(mk).clear();
        self.refresh_aggregates();
        trace! ("mod-key up : {} .. mods now {:?}", mk, self.get_cur_mod_keys_bitmap());
    }

    /// forcibly clears everything .. used on focus-regained (where we might have missed releases) and on teardown
    pub fn reset (&self) {
        self.mod_flag_pairs() .iter() .for_each (|(_, fg)| fg.clear());
        self.refresh_aggregates();
    }

}
