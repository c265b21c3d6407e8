//! Fuzz target for color hex parsing.
//!
//! `Rgb::from_hex` must reject bad input with `None`, never a panic.

#![no_main]

use docsite_highlight::color::Rgb;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Some(color) = Rgb::from_hex(data) {
        // Accepted colors survive a trip through their CSS form.
        assert_eq!(Rgb::from_hex(&color.to_css()), Some(color));
    }

    if !data.starts_with('#') {
        let _ = Rgb::from_hex(&format!("#{data}"));
    }

    for (i, _) in data.char_indices().take(10) {
        let _ = Rgb::from_hex(&data[i..]);
        let _ = Rgb::from_hex(&data[..i]);
    }
});
