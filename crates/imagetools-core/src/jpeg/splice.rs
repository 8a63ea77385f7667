//! EXIF segment insertion.

use super::MARKER_PREFIX;

/// Offset the separator search starts from, past SOI and the first marker's
/// leading byte.
const SEPARATOR_SEARCH_START: usize = 3;

/// Offset at which an EXIF segment is inserted into `resized`.
///
/// This is the first `0xFF` at or after offset 3. For a typical re-encoded
/// JPEG (`SOI`, `APP0`, ...) that is the marker following the first segment,
/// provided that segment's payload holds no `0xFF`.
pub fn insertion_point(resized: &[u8]) -> Option<usize> {
    resized
        .get(SEPARATOR_SEARCH_START..)?
        .iter()
        .position(|&byte| byte == MARKER_PREFIX)
        .map(|position| position + SEPARATOR_SEARCH_START)
}

/// Insert `exif` into `resized`, returning a new buffer.
///
/// An empty `exif` yields `resized` unchanged. If `resized` has no insertion
/// point, the EXIF segment is dropped and `resized` is returned unchanged.
pub fn splice_exif(resized: &[u8], exif: &[u8]) -> Vec<u8> {
    if exif.is_empty() {
        return resized.to_vec();
    }

    let Some(point) = insertion_point(resized) else {
        tracing::warn!(
            resized_len = resized.len(),
            "no marker found in resized image; EXIF not restored"
        );
        return resized.to_vec();
    };

    tracing::debug!(point, exif_len = exif.len(), "splicing EXIF segment");

    let (head, tail) = resized.split_at(point);
    let mut spliced = Vec::with_capacity(resized.len() + exif.len());
    spliced.extend_from_slice(head);
    spliced.extend_from_slice(exif);
    spliced.extend_from_slice(tail);
    spliced
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXIF: &[u8] = &[0xFF, 0xE1, 0x00, 0x04, 0xDE, 0xAD];

    #[test]
    fn test_insertion_point_skips_soi() {
        let resized = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x04, 0xCA, 0xFE, 0xFF, 0xDB];
        assert_eq!(insertion_point(&resized), Some(8));
    }

    #[test]
    fn test_insertion_point_hits_ff_inside_payload() {
        let resized = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x04, 0xFF, 0x00, 0xFF, 0xDB];
        assert_eq!(insertion_point(&resized), Some(6));
    }

    #[test]
    fn test_insertion_point_missing() {
        assert_eq!(insertion_point(&[0xFF, 0xD8, 0xFF]), None);
        assert_eq!(insertion_point(&[0xFF, 0xD8, 0xFF, 0x00, 0x01]), None);
        assert_eq!(insertion_point(&[]), None);
    }

    #[test]
    fn test_splice_inserts_between_head_and_tail() {
        let resized = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x04, 0xCA, 0xFE, 0xFF, 0xDA, 0x02];
        let spliced = splice_exif(&resized, EXIF);

        assert_eq!(spliced.len(), resized.len() + EXIF.len());
        assert_eq!(&spliced[..8], &resized[..8]);
        assert_eq!(&spliced[8..14], EXIF);
        assert_eq!(&spliced[14..], &resized[8..]);
    }

    #[test]
    fn test_splice_empty_exif_is_identity() {
        let resized = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x04, 0xCA, 0xFE, 0xFF, 0xDA];
        assert_eq!(splice_exif(&resized, &[]), resized.to_vec());
    }

    #[test]
    fn test_splice_without_insertion_point_returns_input() {
        let resized = [0xFF, 0xD8, 0x00, 0x01, 0x02];
        assert_eq!(splice_exif(&resized, EXIF), resized.to_vec());
    }

    #[test]
    fn test_splice_does_not_modify_input() {
        let resized = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x02, 0xFF, 0xDA];
        let before = resized.clone();
        let _ = splice_exif(&resized, EXIF);
        assert_eq!(resized, before);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: splicing an empty segment never changes the input.
        #[test]
        fn prop_empty_exif_identity(resized in prop::collection::vec(any::<u8>(), 0..256)) {
            prop_assert_eq!(splice_exif(&resized, &[]), resized);
        }

        /// Property: removing the spliced segment gives back the input.
        #[test]
        fn prop_splice_is_reversible(
            resized in prop::collection::vec(any::<u8>(), 0..256),
            exif in prop::collection::vec(any::<u8>(), 1..64),
        ) {
            let spliced = splice_exif(&resized, &exif);
            match insertion_point(&resized) {
                Some(point) => {
                    prop_assert_eq!(&spliced[point..point + exif.len()], exif.as_slice());
                    let mut unspliced = spliced[..point].to_vec();
                    unspliced.extend_from_slice(&spliced[point + exif.len()..]);
                    prop_assert_eq!(unspliced, resized);
                }
                None => prop_assert_eq!(spliced, resized),
            }
        }
    }
}
