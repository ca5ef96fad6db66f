//! Tab-separated report writers.
//!
//! Every run writes four reports, one row per haplotype in first-seen order:
//!
//! | File | Columns |
//! |------|---------|
//! | `{prefix}-haplotype-sequences-n-ids.tab` | ID, HAPLOTYPE, REF_DIFF, IS_REF |
//! | `{prefix}-haplotype-min-sequences-n-ids.tab` | ID, HAPLOTYPE, REF_DIFF, IS_REF |
//! | `{prefix}-haplotype-ids-n-info.tab` | ID, HAP_COUNT, REF_DIFF, IS_REF |
//! | `{prefix}-haplotype-ids-n-names.tab` | ID, HAP_COUNT, HAP_NAMES, REF_DIFF, IS_REF |

pub mod reports;
