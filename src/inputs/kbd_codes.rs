
// the KbdKey enum is long enough that we keep it (and its code mapping) in its own file, and re-export it via kbd

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};


/// Enum representation of all the named Keyboard Keys. <br>
/// The strum `to_string` is the canonical lowercase token used in combo-specs, any `serialize` entries are accepted aliases
# [ derive (Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Copy, Clone, EnumIter, EnumString, Display, AsRefStr) ]
pub enum KbdKey {

    #[strum(to_string="backspace")]                     Backspace,
    #[strum(to_string="tab")]                           Tab,
    #[strum(to_string="enter", serialize="return")]     Enter,
    #[strum(to_string="shift")]                         Shift,
    #[strum(to_string="ctrl", serialize="control")]     Ctrl,
    #[strum(to_string="alt", serialize="option")]       Alt,
    #[strum(to_string="pause", serialize="break")]      Pause,
    #[strum(to_string="capslock", serialize="caps")]    CapsLock,
    #[strum(to_string="esc", serialize="escape")]       Escape,
    #[strum(to_string="space", serialize="spacebar")]   Space,
    #[strum(to_string="pageup", serialize="pgup")]      PageUp,
    #[strum(to_string="pagedown", serialize="pgdown")]  PageDown,
    #[strum(to_string="end")]                           End,
    #[strum(to_string="home")]                          Home,
    #[strum(to_string="left")]                          Left,
    #[strum(to_string="up")]                            Up,
    #[strum(to_string="right")]                         Right,
    #[strum(to_string="down")]                          Down,
    #[strum(to_string="insert", serialize="ins")]       Insert,
    #[strum(to_string="delete", serialize="del")]       Delete,
    #[strum(to_string="command", serialize="cmd", serialize="meta")] Command,

    #[strum(to_string="0")] Num0,
    #[strum(to_string="1")] Num1,
    #[strum(to_string="2")] Num2,
    #[strum(to_string="3")] Num3,
    #[strum(to_string="4")] Num4,
    #[strum(to_string="5")] Num5,
    #[strum(to_string="6")] Num6,
    #[strum(to_string="7")] Num7,
    #[strum(to_string="8")] Num8,
    #[strum(to_string="9")] Num9,

    #[strum(to_string="a")] A,
    #[strum(to_string="b")] B,
    #[strum(to_string="c")] C,
    #[strum(to_string="d")] D,
    #[strum(to_string="e")] E,
    #[strum(to_string="f")] F,
    #[strum(to_string="g")] G,
    #[strum(to_string="h")] H,
    #[strum(to_string="i")] I,
    #[strum(to_string="j")] J,
    #[strum(to_string="k")] K,
    #[strum(to_string="l")] L,
    #[strum(to_string="m")] M,
    #[strum(to_string="n")] N,
    #[strum(to_string="o")] O,
    #[strum(to_string="p")] P,
    #[strum(to_string="q")] Q,
    #[strum(to_string="r")] R,
    #[strum(to_string="s")] S,
    #[strum(to_string="t")] T,
    #[strum(to_string="u")] U,
    #[strum(to_string="v")] V,
    #[strum(to_string="w")] W,
    #[strum(to_string="x")] X,
    #[strum(to_string="y")] Y,
    #[strum(to_string="z")] Z,

    #[strum(to_string="numpad0")] Numpad0,
    #[strum(to_string="numpad1")] Numpad1,
    #[strum(to_string="numpad2")] Numpad2,
    #[strum(to_string="numpad3")] Numpad3,
    #[strum(to_string="numpad4")] Numpad4,
    #[strum(to_string="numpad5")] Numpad5,
    #[strum(to_string="numpad6")] Numpad6,
    #[strum(to_string="numpad7")] Numpad7,
    #[strum(to_string="numpad8")] Numpad8,
    #[strum(to_string="numpad9")] Numpad9,

    #[strum(to_string="multiply")]  NumpadMultiply,
    #[strum(to_string="add")]       NumpadAdd,
    #[strum(to_string="subtract")]  NumpadSubtract,
    #[strum(to_string="decimal")]   NumpadDecimal,
    #[strum(to_string="divide")]    NumpadDivide,

    #[strum(to_string="f1")]  F1,
    #[strum(to_string="f2")]  F2,
    #[strum(to_string="f3")]  F3,
    #[strum(to_string="f4")]  F4,
    #[strum(to_string="f5")]  F5,
    #[strum(to_string="f6")]  F6,
    #[strum(to_string="f7")]  F7,
    #[strum(to_string="f8")]  F8,
    #[strum(to_string="f9")]  F9,
    #[strum(to_string="f10")] F10,
    #[strum(to_string="f11")] F11,
    #[strum(to_string="f12")] F12,

    #[strum(to_string="numlock")]     NumLock,
    #[strum(to_string="scrolllock")]  ScrollLock,

    #[strum(to_string=";", serialize="semicolon")]     Semicolon,
    #[strum(to_string="=", serialize="equal")]         Equal,
    #[strum(to_string=",", serialize="comma")]         Comma,
    #[strum(to_string="-", serialize="minus")]         Minus,
    #[strum(to_string=".", serialize="period")]        Period,
    #[strum(to_string="/", serialize="slash")]         Slash,
    #[strum(to_string="`", serialize="backquote")]     Backquote,
    #[strum(to_string="[", serialize="bracketleft")]   BracketLeft,
    #[strum(to_string="\\", serialize="backslash")]    Backslash,
    #[strum(to_string="]", serialize="bracketright")]  BracketRight,
    #[strum(to_string="'", serialize="quote")]         Quote,
}



impl From<KbdKey> for u32 {
    fn from (key: KbdKey) -> u32 {
        use KbdKey::*;
        match key {
            Backspace => 8,     Tab => 9,           Enter => 13,
            Shift => 16,        Ctrl => 17,         Alt => 18,
            Pause => 19,        CapsLock => 20,     Escape => 27,
            Space => 32,        PageUp => 33,       PageDown => 34,
            End => 35,          Home => 36,
            Left => 37,         Up => 38,           Right => 39,        Down => 40,
            Insert => 45,       Delete => 46,       Command => 91,

            Num0 => 48, Num1 => 49, Num2 => 50, Num3 => 51, Num4 => 52,
            Num5 => 53, Num6 => 54, Num7 => 55, Num8 => 56, Num9 => 57,

            A => 65, B => 66, C => 67, D => 68, E => 69, F => 70, G => 71, H => 72, I => 73,
            J => 74, K => 75, L => 76, M => 77, N => 78, O => 79, P => 80, Q => 81, R => 82,
            S => 83, T => 84, U => 85, V => 86, W => 87, X => 88, Y => 89, Z => 90,

            Numpad0 => 96,  Numpad1 => 97,  Numpad2 => 98,  Numpad3 => 99,  Numpad4 => 100,
            Numpad5 => 101, Numpad6 => 102, Numpad7 => 103, Numpad8 => 104, Numpad9 => 105,

            NumpadMultiply => 106, NumpadAdd => 107, NumpadSubtract => 109, NumpadDecimal => 110, NumpadDivide => 111,

            F1 => 112, F2 => 113, F3 => 114, F4  => 115, F5  => 116, F6  => 117,
            F7 => 118, F8 => 119, F9 => 120, F10 => 121, F11 => 122, F12 => 123,

            NumLock => 144,     ScrollLock => 145,

            Semicolon => 186,   Equal => 187,       Comma => 188,       Minus => 189,
            Period => 190,      Slash => 191,       Backquote => 192,
            BracketLeft => 219, Backslash => 220,   BracketRight => 221, Quote => 222,
        }
    }
}
