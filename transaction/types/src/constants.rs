// Copyright (c) 2024-2026 The Plume Foundation

//! Plume chain constants.

/// One PLM, in base units. All default fee amounts are multiples of
/// this precision.
pub const CHAIN_PRECISION: u64 = 100_000;

/// Basis-point scale: 10_000 bps = 100%. All ratio fields in the
/// operation protocol are basis points on this scale; fee and ratio
/// math is fixed-point integer arithmetic against it, never floating
/// point.
pub const RATIO_SCALE_BPS: u32 = 10_000;

/// The share of a post's profit reserved for its platform, in basis
/// points. Receiptor splits divide only the remainder.
pub const DEFAULT_PLATFORM_RECEIPT_RATIO_BPS: u32 = 7_500;

/// Largest profit ratio a single receiptor may hold, in basis points:
/// whatever the platform's reserved share leaves over.
pub const MAX_RECEIPTOR_RATIO_BPS: u32 = RATIO_SCALE_BPS - DEFAULT_PLATFORM_RECEIPT_RATIO_BPS;

/// Maximum number of receiptor entries a post may carry.
pub const MAX_RECEIPTORS_PER_POST: usize = 5;

/// Maximum byte length of a platform name.
pub const MAX_PLATFORM_NAME_LEN: usize = 128;

/// Maximum byte length of a platform url.
pub const MAX_URL_LEN: usize = 256;

/// Maximum byte length of a content hash string.
pub const MAX_HASH_VALUE_LEN: usize = 256;

/// Maximum byte length of a post or license title.
pub const MAX_TITLE_LEN: usize = 512;

/// Maximum byte length of a post or license body.
pub const MAX_BODY_LEN: usize = 65_536;

/// Maximum byte length of the free-form `extra_data` field.
pub const MAX_EXTRA_DATA_LEN: usize = 65_536;

/// Maximum number of platforms a single vote-update operation may add
/// and remove, combined.
pub const MAX_PLATFORM_VOTES_PER_OP: usize = 100;

/// Largest magnitude of a post score. Scores are integers in
/// `[-MAX_SCORE_MAGNITUDE, MAX_SCORE_MAGNITUDE]`, excluding zero.
pub const MAX_SCORE_MAGNITUDE: i32 = 5;

/// Permission bit: the post may be forwarded.
pub const PERMISSION_FORWARD: u32 = 1 << 0;

/// Permission bit: the post may be liked (scored).
pub const PERMISSION_LIKE: u32 = 1 << 1;

/// Permission bit: the post's profit shares may be bought out.
pub const PERMISSION_BUYOUT: u32 = 1 << 2;

/// Permission bit: the post may be commented on.
pub const PERMISSION_COMMENT: u32 = 1 << 3;

/// Permission bit: the post may be rewarded.
pub const PERMISSION_REWARD: u32 = 1 << 4;

/// All permission bits set. Absent permission flags on a post mean
/// this value: everything permitted.
pub const PERMISSION_ALL: u32 = 0xFFFF;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receiptor_ceiling_leaves_platform_share() {
        // The platform keeps 75%; receiptors split the remaining 25%.
        assert_eq!(MAX_RECEIPTOR_RATIO_BPS, 2_500);
        assert!(DEFAULT_PLATFORM_RECEIPT_RATIO_BPS <= RATIO_SCALE_BPS);
    }

    #[test]
    fn permission_bits_are_within_the_mask() {
        for bit in [
            PERMISSION_FORWARD,
            PERMISSION_LIKE,
            PERMISSION_BUYOUT,
            PERMISSION_COMMENT,
            PERMISSION_REWARD,
        ] {
            assert_eq!(bit & PERMISSION_ALL, bit);
        }
    }

    #[test]
    fn score_bound_is_positive() {
        assert!(MAX_SCORE_MAGNITUDE > 0);
    }
}
