pub mod date_parser;
pub mod interval;

pub use date_parser::{
    HEADER_LABELS, ParsedDate, is_header_label, label_date_formats, parse_label,
    parse_label_positions,
};
pub use interval::{
    DEFAULT_MIN_PARSED_SAMPLES, DEFAULT_SAMPLE_SIZE, IntervalBucket, IntervalSample,
    bucket_for_mean_gap, classify_interval, mean_gap,
};
