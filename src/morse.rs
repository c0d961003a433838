// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! International Morse code.
//!
//! Letters are case-insensitive. Characters without a code are dropped, and a
//! space survives as a literal space so that multi-word entries never match an
//! unspaced ciphertext.

/// Code symbol for a short signal.
pub const DOT: char = '.';
/// Code symbol for a long signal.
pub const DASH: char = '-';

/// Every character with a Morse code, in table order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,?'!/()&:;=+-_\"$@";

/// Look up the code for a single character.
pub fn code_for(c: char) -> Option<&'static str> {
    let code = match c.to_ascii_uppercase() {
        'A' => ".-",
        'B' => "-...",
        'C' => "-.-.",
        'D' => "-..",
        'E' => ".",
        'F' => "..-.",
        'G' => "--.",
        'H' => "....",
        'I' => "..",
        'J' => ".---",
        'K' => "-.-",
        'L' => ".-..",
        'M' => "--",
        'N' => "-.",
        'O' => "---",
        'P' => ".--.",
        'Q' => "--.-",
        'R' => ".-.",
        'S' => "...",
        'T' => "-",
        'U' => "..-",
        'V' => "...-",
        'W' => ".--",
        'X' => "-..-",
        'Y' => "-.--",
        'Z' => "--..",
        '0' => "-----",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        '.' => ".-.-.-",
        ',' => "--..--",
        '?' => "..--..",
        '\'' => ".----.",
        '!' => "-.-.--",
        '/' => "-..-.",
        '(' => "-.--.",
        ')' => "-.--.-",
        '&' => ".-...",
        ':' => "---...",
        ';' => "-.-.-.",
        '=' => "-...-",
        '+' => ".-.-.",
        '-' => "-....-",
        '_' => "..--.-",
        '"' => ".-..-.",
        '$' => "...-..-",
        '@' => ".--.-.",
        _ => return None,
    };
    Some(code)
}

/// Encode text as unspaced Morse.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 4);
    for c in text.chars() {
        if c == ' ' {
            out.push(' ');
        } else if let Some(code) = code_for(c) {
            out.push_str(code);
        }
    }
    out
}

/// Is `c` a code symbol?
#[inline]
pub fn is_symbol(c: char) -> bool {
    c == DOT || c == DASH
}

/// Position and value of the first character that is not a code symbol.
pub fn first_invalid_symbol(ciphertext: &str) -> Option<(usize, char)> {
    ciphertext
        .chars()
        .enumerate()
        .find(|(_, c)| !is_symbol(*c))
}
