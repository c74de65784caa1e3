//! Key bindings shown in the footer and the help popup.

use std::{collections::BTreeMap, sync::LazyLock};

/// Every binding of the console, in help order.
pub const CONTROLS: [(&str, &str); 17] = [
    ("tab", "switch focused deck"),
    ("space/p", "play/pause"),
    ("c", "cue"),
    ("s", "sync"),
    ("h/l", "rewind/fast forward"),
    ("1-4", "set hot cue"),
    ("x", "clear hot cues"),
    ("o", "load file into deck"),
    ("j/k", "browser up/down"),
    ("enter", "load highlighted track"),
    ("b", "next browser tab"),
    ("/", "search"),
    ("a", "add files"),
    ("f", "select folder"),
    ("m", "menu"),
    ("?", "help"),
    ("q", "quit"),
];

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| CONTROLS.into_iter().collect());

/// Footer text. `tab` names the deck it will focus.
pub fn controls_text(focused_deck: u8) -> String {
    let order = [
        "tab", "space/p", "c", "s", "h/l", "1-4", "o", "enter", "j/k", "/", "m", "?", "q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == "tab" {
                let other = if focused_deck == 1 { 2 } else { 1 };
                Some(format!("[tab] deck {other}"))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{k}] {v}"))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}
