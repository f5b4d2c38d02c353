//! Chord-symbol transposition by root substitution

use crate::pitch::PitchClass;

fn is_note_letter(c: char) -> bool {
    ('A'..='G').contains(&c)
}

/// Split a leading `[A-G][#b]?` root token off a symbol
fn split_root(symbol: &str) -> Option<(&str, &str)> {
    let mut chars = symbol.chars();
    if !chars.next().is_some_and(is_note_letter) {
        return None;
    }
    let root_len = match chars.next() {
        Some('#' | 'b') => 2,
        _ => 1,
    };
    Some(symbol.split_at(root_len))
}

fn shift_root(root: &str, semitones: i32) -> Option<&'static str> {
    PitchClass::from_name(root).map(|pc| pc.transpose(semitones).name())
}

/// Move a chord symbol's root by `semitones`, keeping the suffix verbatim.
///
/// Symbols without a recognised root ("N.C.", "Cb7") come back unchanged.
pub fn transpose_chord_symbol(symbol: &str, semitones: i32) -> String {
    let Some((root, suffix)) = split_root(symbol) else {
        tracing::trace!("no root in {:?}, leaving it", symbol);
        return symbol.to_string();
    };
    match shift_root(root, semitones) {
        Some(new_root) => format!("{}{}", new_root, suffix),
        None => {
            tracing::trace!("unrecognised root {:?} in {:?}, leaving it", root, symbol);
            symbol.to_string()
        }
    }
}

/// Transpose every chord symbol in free text ("Am7 | D7 | Gmaj7/B").
///
/// A symbol is a root token followed by any run of characters that are
/// neither whitespace nor note letters, so slash-chord basses move too.
pub fn transpose_progression(text: &str, semitones: i32) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(is_note_letter) {
        out.push_str(&rest[..start]);
        let Some((root, tail)) = split_root(&rest[start..]) else {
            break;
        };
        let suffix_len = tail
            .find(|c: char| c.is_whitespace() || is_note_letter(c))
            .unwrap_or(tail.len());
        let (suffix, remaining) = tail.split_at(suffix_len);

        out.push_str(shift_root(root, semitones).unwrap_or(root));
        out.push_str(suffix);
        rest = remaining;
    }

    out.push_str(rest);
    out
}
