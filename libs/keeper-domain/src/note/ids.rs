use crate::id::positive_id;

positive_id!(
    /// Unique identifier for a Note
    NoteId,
    "note id"
);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_note_id_ok() {
        for raw in [1, 50] {
            assert_eq!(NoteId::new(raw).unwrap().value(), raw);
        }
    }

    #[test]
    fn test_note_id_try_from() {
        assert!(NoteId::try_from(0).is_err());
        assert_eq!(NoteId::try_from(9).unwrap(), NoteId::new(9).unwrap());
    }

    proptest! {
        #[test]
        fn prop_non_positive_note_id_is_rejected(n in i64::MIN..=0) {
            prop_assert!(NoteId::new(n).is_err());
        }

        #[test]
        fn prop_positive_note_id_round_trips(n in 1..=i64::MAX) {
            prop_assert_eq!(i64::from(NoteId::new(n).unwrap()), n);
        }
    }
}
