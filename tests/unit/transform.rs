//! The four transformation variants against real Morse.

use dotdash::{morse, Transformation, Variant};

#[test]
fn test_forward_is_plain_morse() {
    let t = Transformation::canonical(Variant::Forward);
    assert_eq!(t.encode("ab"), ".--...");
}

#[test]
fn test_backward_text_reverses_letters() {
    let t = Transformation::canonical(Variant::BackwardText);
    assert_eq!(t.encode("ab"), "-....-");
}

#[test]
fn test_backward_code_reverses_symbols() {
    let t = Transformation::canonical(Variant::BackwardCode);
    assert_eq!(t.encode("ab"), "...--.");
}

#[test]
fn test_backward_both_reverses_each_letter_in_place() {
    // n = "-.", e = "."; each letter's code is flipped, letter order is kept
    let t = Transformation::canonical(Variant::BackwardBoth);
    assert_eq!(Transformation::canonical(Variant::Forward).encode("ne"), "-..");
    assert_eq!(t.encode("ne"), ".-.");
}

#[test]
fn test_labels_in_display_order() {
    let labels: Vec<_> = Transformation::all().iter().map(|t| t.label()).collect();
    assert_eq!(labels.len(), 4);
    assert_eq!(labels[0], "forward plaintext, forward morse");
    assert_eq!(labels[3], "backward plaintext, backward morse");
}

#[test]
fn test_custom_encoder_is_used_as_is() {
    fn shout(word: &str) -> String {
        morse::encode(&word.to_uppercase())
    }
    let t = Transformation::custom("shout", shout);
    assert_eq!(t.variant(), None);
    assert_eq!(t.encode("e"), ".");
}
