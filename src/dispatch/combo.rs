#![ allow (non_camel_case_types) ]

use std::fmt;

use itertools::Itertools;

use crate::*;



/// One key position in a combo .. either a specific key, or the '*' wildcard that matches any (non-modifier) key
# [ derive (Debug, Eq, PartialEq, Hash, Copy, Clone) ]
pub enum KeySlot {
    key (KbdKey),
    wildcard,
}

impl KeySlot {
    pub fn matches (&self, ev:&KbdEvent) -> bool {
        match self {
            KeySlot::wildcard => true,
            KeySlot::key (k)  => ev.key() == Some(*k),
        }
    }
}

impl fmt::Display for KeySlot {
    fn fmt (&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeySlot::wildcard => write! (f, "*"),
            KeySlot::key (k)  => write! (f, "{}", k),
        }
    }
}




# [ derive (Debug, Eq, PartialEq, Hash, Clone) ]
/// The parsed form of one alternative in a combo-spec (the matcher template, before a callback/event-type is attached). <br>
/// A single key-slot makes it a chord, more than one makes it a sequence. <br>
/// Only built via `parse`, so there's always at least one key-slot.
pub struct ComboSpec {
    // modifiers as written (canonicalized, but NOT sorted .. comparisons go via bitmaps)
    mods : Vec<ModKey>,
    // the key (chord) or keys (sequence)
    keys : Vec<KeySlot>,
}



impl ComboSpec {

    /// Parses a full combo-spec like "ctrl + a, command + a" or "command + shift + a b c" into its alternatives. <br>
    /// Any 'super' token resolves to the given super-key. Fails as a whole if any alternative is bad.
    pub fn parse (spec:&str, super_key:ModKey) -> Result<Vec<ComboSpec>> {
        let alts = split_alternatives (spec);
        if alts.is_empty() {
            return Err (ComboError::Malformed (spec.to_string()))
        }
        alts .iter() .map (|alt| ComboSpec::parse_alt (alt, super_key)) .collect()
    }


    /// Parses a single (non-empty) alternative, e.g. "shift + tab" or "a b c" or "ctrl + ,"
    pub fn parse_alt (alt:&str, super_key:ModKey) -> Result<ComboSpec> {
        let mut parts = alt.split('+') .map (|p| p.trim()) .collect::<Vec<&str>>();
        let key_part = parts.pop() .unwrap_or_default();

        let mods = parts .iter() .map ( |&tok| match tok {
            "" | "*" => Err (ComboError::Malformed (alt.to_string())),
            "super"  => Ok (super_key),
            _        => ModKey::resolve (tok),
        } ) .collect::<Result<Vec<ModKey>>>()?;

        let keys = key_part.split_whitespace() .map ( |tok| match tok {
            "*"     => Ok (KeySlot::wildcard),
            "super" => Ok (KeySlot::key (super_key.key())),
            _       => KbdKey::resolve (tok) .map (KeySlot::key),
        } ) .collect::<Result<Vec<KeySlot>>>()?;

        if keys.is_empty() {
            return Err (ComboError::Malformed (alt.to_string()))
        }
        Ok ( ComboSpec { mods, keys } )
    }


    /// modifiers in their written order
    pub fn mods (&self) -> &[ModKey]  { &self.mods }

    /// the key (chord) or keys (sequence), never empty
    pub fn keys (&self) -> &[KeySlot] { &self.keys }

    pub fn is_gated (&self) -> bool { !self.mods.is_empty() }

    pub fn is_sequence (&self) -> bool { self.keys.len() > 1 }

    /// the base key of a chord (for a sequence, this is its first step)
    pub fn base_key (&self) -> KeySlot { self.keys[0] }

    pub fn mod_bits (&self) -> ModKeyBits { ModKey::make_mod_keys_bitmap (&self.mods) }

    /// same key/sequence and the same modifier set (in any order)
    pub fn same_signature (&self, other:&ComboSpec) -> bool {
        self.keys == other.keys && self.mod_bits() == other.mod_bits()
    }

}


impl fmt::Display for ComboSpec {
    // re-serializes to the combo-spec grammar .. modifiers in their written order, then the key(s)
    fn fmt (&self, f: &mut fmt::Formatter) -> fmt::Result {
        let keys = self.keys.iter() .join (" ");
        if self.mods.is_empty() { return write! (f, "{}", keys) }
        write! (f, "{} + {}", self.mods.iter().join(" + "), keys)
    }
}




/// Splits a combo-spec into its alternatives on ',' .. except where the ',' is itself the key (right after a '+',
/// or when the whole spec is just ","). Empty alternatives from doubled/trailing commas are dropped.
fn split_alternatives (spec:&str) -> Vec<String> {
    if spec.trim() == "," { return vec! [",".to_string()] }

    let mut alts : Vec<String> = Vec::new();
    let mut cur = String::new();
    for c in spec.chars() {
        if c == ',' && !cur.trim_end().ends_with('+') {
            alts.push (std::mem::take (&mut cur));
        } else {
            cur.push(c);
        }
    }
    alts.push(cur);

    alts .into_iter() .map (|a| a.trim().to_string()) .filter (|a| !a.is_empty()) .collect()
}
