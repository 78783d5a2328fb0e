
// same organization as before .. module files live inside their module dirs, and we just declare the modules here
//.. as mostly empty wrappers, re-exporting the _module_name shadowed file (where there is one) along with the other sub-modules

// in general, we re-export everything toplevel from the sub-modules
//.. so once a caller does 'use kchord::*' they have the whole of the dispatcher api w/o reaching into sub-module paths



// first our single-file sub-modules

/// error type for combo-spec parsing and binding
pub mod error;



// then our sub-modules with folders

/// inputs .. keyboard-keys and their codes, key-events, and the input-source we attach to
pub mod inputs {
    // sub-modules in module directory
    pub mod kbd_codes;
    pub mod kbd;
    pub mod events;
    pub mod input_source;

    // and our (selective or wholesale) sub-module re-exports
    pub use self::kbd_codes::*;
    pub use self::kbd::*;
    pub use self::events::*;
    pub use self::input_source::*;
}


/// the dispatcher itself .. modifier-key tracking, combo parsing, sequence tracking, the combos registry and event dispatch
pub mod dispatch {
    // shadowed module file that we'll re-export from here
    mod _dispatch;
    pub use self::_dispatch::*;

    // other sub-modules in module directory
    pub mod mod_keys;
    pub mod combo;
    pub mod sequence;
    pub mod combo_maps;
    pub mod config;

    // and our (selective or wholesale) sub-module re-exports
    pub use self::mod_keys::*;
    pub use self::combo::*;
    pub use self::sequence::*;
    pub use self::combo_maps::*;
    pub use self::config::*;
}


// and finally our lib level re-exports
pub use crate::error::*;
pub use crate::inputs::*;
pub use crate::dispatch::*;
