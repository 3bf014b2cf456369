use rand::Rng;

use crate::models::constants::{Disclosure, FIRST_DISCLOSURE_AT, SECOND_DISCLOSURE_AT};

/// Decide whether a wrong guess must force the race or class hint into view.
///
/// At the first checkpoint one of the two is shown if neither is yet.
/// At the second checkpoint the missing one is shown so both are known.
/// If neither is visible at the second checkpoint, one is picked at random.
pub fn forced_disclosure<R: Rng + ?Sized>(
    wrong_count: usize,
    race_revealed: bool,
    class_revealed: bool,
    rng: &mut R,
) -> Option<Disclosure> {
    if wrong_count != FIRST_DISCLOSURE_AT && wrong_count != SECOND_DISCLOSURE_AT {
        return None;
    }

    match (race_revealed, class_revealed) {
        (true, true) => None,
        (false, false) => Some(if rng.gen_bool(0.5) {
            Disclosure::Race
        } else {
            Disclosure::Class
        }),
        _ if wrong_count == FIRST_DISCLOSURE_AT => None,
        (false, true) => Some(Disclosure::Race),
        (true, false) => Some(Disclosure::Class),
    }
}
