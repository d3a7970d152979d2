use crate::id::positive_id;

positive_id!(
    /// Unique identifier for a Transcription
    TranscriptionId,
    "transcription id"
);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_non_positive_transcription_id_is_rejected(n in i64::MIN..=0) {
            prop_assert!(TranscriptionId::new(n).is_err());
        }

        #[test]
        fn prop_positive_transcription_id_round_trips(n in 1..=i64::MAX) {
            prop_assert_eq!(TranscriptionId::new(n).unwrap().value(), n);
        }
    }
}
