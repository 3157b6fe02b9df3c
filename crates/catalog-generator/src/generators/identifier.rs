//! ISBN-like identifier generator.

use rand::Rng;

/// Digit counts of the four random groups following the `978` prefix.
const GROUP_DIGITS: [usize; 4] = [1, 4, 4, 1];

/// Generate an identifier of the form `978-D-DDDD-DDDD-D`.
///
/// Identifiers are not checked for uniqueness or a valid check digit.
pub fn generate_identifier<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut identifier = String::with_capacity(17);
    identifier.push_str("978");
    for digits in GROUP_DIGITS {
        identifier.push('-');
        for _ in 0..digits {
            let digit: u8 = rng.random_range(0..10);
            identifier.push(char::from(b'0' + digit));
        }
    }
    identifier
}

/// Whether `value` has the `978-D-DDDD-DDDD-D` shape.
pub fn is_identifier(value: &str) -> bool {
    let mut groups = value.split('-');
    if groups.next() != Some("978") {
        return false;
    }
    for digits in GROUP_DIGITS {
        match groups.next() {
            Some(group) if group.len() == digits && group.bytes().all(|b| b.is_ascii_digit()) => {}
            _ => return false,
        }
    }
    groups.next().is_none()
}
