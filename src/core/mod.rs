pub mod color;
pub mod gradient;
pub mod hit_test;
pub mod normalization;
pub mod point_sequence;
pub mod sync;
pub mod types;

pub use color::{ColorParseError, Rgb};
pub use gradient::{
    GradientMode, GradientStop, RampStop, canonicalize_stops, derive_ramp_stops, fallback_palette,
    opacity_weighted_stops, sample_palette,
};
pub use hit_test::{Hit, hit_test};
pub use normalization::{Bounds, Normalization, NormalizationSeed, compute_normalization};
pub use point_sequence::PointSequence;
pub use sync::{DEFAULT_SYNC_TOLERANCE, MergedPartition, merge_partitions};
pub use types::{DataPoint, DrawArea};
