//! Train position resolution.
//!
//! Pure functions deriving what to display from a
//! [`TrainPositionContext`]: current and next station, loop handling and
//! bound text, through-service lines, station numbering and the header tag.
//! None of them fail; missing data yields empty results.

mod bound;
mod config;
mod context;
mod header;
mod loop_line;
mod numbering;
mod position;
mod through_service;

pub use bound::{BoundInput, BoundTexts, bound_text_for_direction, bound_texts};
pub use config::{
    MEIJO_LINE_ID, OSAKA_LOOP_LINE_ID, ResolverConfig, TOEI_OEDO_LINE_ID, YAMANOTE_LINE_ID,
};
pub use context::{Resolution, TrainPositionContext};
pub use header::{HeaderState, HeaderTag};
pub use loop_line::{
    LoopLine, is_loop_line, is_partial_loop_line, loop_bound_stations, loop_line_of, via_stations,
};
pub use numbering::{Numbering, NumberingInput, numbering};
pub use position::{
    PositionFix, TrackInput, current_index, current_line, effective_train_type, next_station,
    previous_station, resolve_current, stopped_station,
};
pub use through_service::{ThroughServiceInput, connected_lines, next_line};
