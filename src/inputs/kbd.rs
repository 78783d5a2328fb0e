
use std::str::FromStr;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use strum::IntoEnumIterator;

use crate::*;


/// Enum representation of all the Keyboard Keys
// we've put actual KbdKey def in kbd_codes just because its such a long enum, but we'll re-export it from here!
pub use super::kbd_codes::KbdKey;


/// reverse lookup from numeric key-code to KbdKey .. built once from the enum itself, plus the extra command codes
static CODES_MAP: Lazy<FxHashMap<u32,KbdKey>> = Lazy::new ( || {
    let mut map = KbdKey::iter() .map (|k| (u32::from(k), k)) .collect::<FxHashMap<u32,KbdKey>>();
    // right-command reports 93, and some hosts send 224 for command .. both alias to the same key
    [93, 224] .into_iter() .for_each (|c| { map.insert (c, KbdKey::Command); });
    map
} );



impl KbdKey {

    /// Resolves a single key-name token (e.g. "enter", "a", ",", "cmd") into its KbdKey
    pub fn resolve (name:&str) -> Result<KbdKey> {
        KbdKey::from_str(name) .map_err (|_| ComboError::UnknownKey (name.to_string()))
    }

    /// The numeric key-code this key is reported with
    pub fn code (self) -> u32 { u32::from(self) }

    /// Looks up the KbdKey for a numeric key-code, if its one we know
    pub fn from_code (code:u32) -> Option<KbdKey> { CODES_MAP.get(&code).copied() }

    /// Returns true if this key is one of the tracked modifier keys (command, ctrl, alt, shift)
    pub fn is_modifier_key (self) -> bool { self.mod_key().is_some() }

    /// The modifier this key drives, if its a modifier key
    pub fn mod_key (self) -> Option<ModKey> {
        use KbdKey::*;
        match self {
            Command => Some (ModKey::Command),
            Ctrl    => Some (ModKey::Ctrl),
            Alt     => Some (ModKey::Alt),
            Shift   => Some (ModKey::Shift),
            _       => None,
        }
    }

}
