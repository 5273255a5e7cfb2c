//! Derived pseudo-identifier for the data API
//!
//! The data endpoint expects the email address twice: once as-is and once
//! shifted through a fixed 95-character alphabet (printable ASCII, offset 26).
//! This is a lookup key the backend recomputes, not a secret. Anyone can
//! reverse it with [`reveal`].

/// First code unit of the printable alphabet (space)
const ALPHABET_START: i32 = 32;
/// Size of the printable alphabet (space through '~')
const ALPHABET_LEN: i32 = 95;
/// Fixed shift applied to every code unit
const SHIFT: i32 = 26;

/// Shift every UTF-16 code unit of `email` by +26 inside the printable range.
///
/// Code units outside the range are mapped with the same truncating
/// remainder arithmetic the backend uses, so the output matches it
/// byte-for-byte even for unusual input.
pub fn derive_id(email: &str) -> String {
    shift(email, SHIFT)
}

/// Inverse of [`derive_id`] for printable ASCII input
pub fn reveal(derived: &str) -> String {
    shift(derived, ALPHABET_LEN - SHIFT)
}

fn shift(input: &str, by: i32) -> String {
    let units: Vec<u16> = input
        .encode_utf16()
        .map(|unit| {
            let code = i32::from(unit);
            let shifted = ((code - ALPHABET_START + by) % ALPHABET_LEN) + ALPHABET_START;
            shifted as u16
        })
        .collect();
    String::from_utf16_lossy(&units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_printable_ascii_by_26() {
        assert_eq!(derive_id("a"), "{");
        assert_eq!(derive_id("A"), "[");
        assert_eq!(derive_id(" "), ":");
    }

    #[test]
    fn wraps_at_end_of_alphabet() {
        // 'z' (122) -> 122 - 32 + 26 = 116 % 95 = 21 -> 53 ('5')
        assert_eq!(derive_id("z"), "5");
        assert_eq!(derive_id("~"), "9");
    }

    #[test]
    fn email_example_is_stable() {
        assert_eq!(derive_id("jo@x.io"), "%*Z3H$*");
    }

    #[test]
    fn reveal_undoes_derive_for_printable_input() {
        let email = "student.name+cohort@example.edu";
        assert_eq!(reveal(&derive_id(email)), email);
    }

    #[test]
    fn empty_email_derives_empty_id() {
        assert_eq!(derive_id(""), "");
    }
}
