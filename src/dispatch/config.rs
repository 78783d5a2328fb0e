#![ allow (non_camel_case_types) ]

use std::sync::Arc;

use derivative::Derivative;

use crate::*;



/// predicate deciding whether an incoming (non-modifier) key event should be ignored without any dispatch
pub type IgnoreFn_T = Arc <dyn Fn (&KbdEvent) -> bool + Send + Sync + 'static>;

/// the default ignore predicate .. skip events whose target is a text-entry element
pub fn ignore_editable_targets (ev:&KbdEvent) -> bool { ev.target_editable }



# [ derive (Clone, Derivative) ]
# [ derivative (Debug) ]
/// Per-dispatcher configuration, built fluently off the defaults .. e.g. `DispatcherConfig::new().super_key(ModKey::Ctrl).no_ignore()`
pub struct DispatcherConfig {
    /// the concrete modifier that 'super' in combo-specs resolves to (the platform super key unless overridden)
    pub super_key : ModKey,

    /// the ignore predicate, if any (defaults to ignoring text-entry targets)
    # [ derivative (Debug="ignore") ]
    pub ignore : Option<IgnoreFn_T>,
}


impl Default for DispatcherConfig {
    fn default () -> DispatcherConfig {
        DispatcherConfig {
            super_key : ModKey::platform_super(),
            ignore    : Some (Arc::new (ignore_editable_targets)),
        }
    }
}


impl DispatcherConfig {

    pub fn new () -> DispatcherConfig { DispatcherConfig::default() }

    pub fn super_key (self, super_key:ModKey) -> DispatcherConfig {
        DispatcherConfig { super_key, ..self }
    }

    pub fn ignore_with <F> (self, f:F) -> DispatcherConfig where F: Fn (&KbdEvent) -> bool + Send + Sync + 'static {
        DispatcherConfig { ignore: Some (Arc::new(f)), ..self }
    }

    pub fn no_ignore (self) -> DispatcherConfig {
        DispatcherConfig { ignore: None, ..self }
    }

    /// whether this event should be dropped before dispatch
    pub fn is_ignored (&self, ev:&KbdEvent) -> bool {
        self.ignore .as_ref() .is_some_and (|f| f(ev))
    }

}
