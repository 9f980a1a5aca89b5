//! Declarative scene layout for programmatic video.
//!
//! `wavyte-layout` turns arrangement intents and viewport slots into concrete pixel geometry, and
//! keeps the result readable by detecting and resolving bounding-box collisions.
//!
//! # Pipeline overview
//!
//! 1. **Slots**: `SlotLayoutConfig + Viewport -> SlotMap` ([`resolve_scene_slots`])
//! 2. **Arrange**: `items + ArrangementConfig -> Vec<Position>` ([`calculate_item_positions`])
//! 3. **Resolve** (optional): move flexible boxes apart ([`auto_resolve_collisions`])
//! 4. **Validate**: bounds errors and overlap warnings ([`validate_layout`])
//! 5. **Convert**: center positions to top-left boxes ([`position_to_css`], [`position_to_top_left`])
//!
//! [`plan_scene`] runs steps 1 to 4 for a JSON [`ScenePlan`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure**: every function takes its full input and returns a fresh value; items are never
//!   inspected, only counted.
//! - **Always renderable**: geometry functions never fail. Degradations are reported as
//!   [`Diagnostic`] values (and `tracing` events); [`LayoutError`] is reserved for malformed input
//!   at parse/plan boundaries.
//! - **Center coordinates**: [`Position`] `x`/`y` are centers. [`CenterRect`] and [`TopLeftRect`]
//!   keep the two conventions apart.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod arrange;
mod collision;
mod foundation;
mod scene;
mod slots;
mod validate;

pub use arrange::cache::{ArrangementCache, arrangement_fingerprint};
pub use arrange::calculators::{
    CheckedPositions, DEFAULT_COLLISION_ITEM_SIZE, ItemPositions, calculate_item_positions,
};
pub use arrange::config::{ArrangementConfig, ArrangementKind, BasePosition};
pub use arrange::helpers::{
    calculate_bounding_box, calculate_dynamic_spacing, calculate_stagger_delays,
    scale_positions_to_fit,
};
pub use arrange::position::{
    CssBox, CssOptions, Position, TopLeftPosition, position_to_css, position_to_top_left,
};
pub use collision::bbox::{AnchorMode, BoundingBox, Constraints};
pub use collision::detect::{Collision, DetectOptions, Severity, check_overlap, detect_collisions};
pub use collision::resolve::{
    RESOLVE_MARGIN_PX, ResolveOptions, ResolveOutcome, SafePositionOptions,
    auto_resolve_collisions, enforce_minimum_spacing, find_safe_position,
};
pub use foundation::core::{
    CenterRect, Edges, FrameIndex, FrameRange, LayoutArea, Point, Rect, TopLeftRect, Vec2,
    Viewport,
};
pub use foundation::diagnostics::{Diagnosed, Diagnostic, DiagnosticCode, DiagnosticLevel};
pub use foundation::error::{LayoutError, LayoutResult};
pub use scene::plan::{RegionPlan, ResolvedScene, ScenePlan, plan_scene, plan_scene_with_cache};
pub use slots::resolver::{
    DEFAULT_TITLE_HEIGHT, Format, SlotLayoutConfig, SlotLayoutKind, SlotMap, detect_format,
    is_mobile_format, resolve_scene_slots,
};
pub use validate::layout::{
    BoundsViolation, Side, ValidateOptions, ValidationReport, validate_layout,
};
