use std::collections::BTreeMap;

use crate::{
    foundation::core::{Edges, LayoutArea, Viewport},
    foundation::diagnostics::{Diagnosed, Diagnostic, DiagnosticCode},
    foundation::error::LayoutResult,
    foundation::math::approx_eq,
};

/// Header height used by `headerRowColumns` when `titleHeight` is not given.
pub const DEFAULT_TITLE_HEIGHT: f64 = 120.0;

const RATIO_SUM_TOLERANCE: f64 = 0.01;

/// Named slot regions keyed by role (`header`, `row1`, `col2`, `cell-1-2`...).
pub type SlotMap = BTreeMap<String, LayoutArea>;

/// Orientation class of a viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Landscape or square.
    Desktop,
    /// Portrait.
    Mobile,
}

/// Portrait viewports are mobile; everything else, squares included, is desktop.
pub fn detect_format(viewport: Viewport) -> Format {
    if viewport.height > viewport.width {
        Format::Mobile
    } else {
        Format::Desktop
    }
}

/// Whether [`detect_format`] reports mobile.
pub fn is_mobile_format(viewport: Viewport) -> bool {
    detect_format(viewport) == Format::Mobile
}

/// Macro-layout template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotLayoutKind {
    /// One `full` slot.
    #[default]
    Full,
    /// Optional `header`, then `row1..rowN`.
    RowStack,
    /// Optional `header`, then `col1..colN`.
    ColumnSplit,
    /// `header`, a `row`, then `col1..colN` below it.
    HeaderRowColumns,
    /// Optional `header`, then `cell-{r}-{c}` (1-based).
    GridSlots,
}

/// Macro layout configuration; camelCase JSON with defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlotLayoutConfig {
    /// Template.
    #[serde(rename = "type")]
    pub kind: SlotLayoutKind,
    /// Inset from every viewport edge.
    pub padding: f64,
    /// Height of the `header` slot; absent means no header (except `headerRowColumns`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_height: Option<f64>,
    /// Space between neighbouring slots.
    pub gap: f64,
    /// Row count for `rowStack` and `gridSlots`.
    pub rows: usize,
    /// Column count when `ratios` is absent.
    pub columns: usize,
    /// Relative column widths; their count overrides `columns`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratios: Option<Vec<f64>>,
    /// Share of the space below the header given to the `row` slot of `headerRowColumns`.
    pub row_height_ratio: f64,
    /// Forced format; detected from the viewport when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

impl Default for SlotLayoutConfig {
    fn default() -> Self {
        Self {
            kind: SlotLayoutKind::Full,
            padding: 60.0,
            title_height: None,
            gap: 0.0,
            rows: 2,
            columns: 2,
            ratios: None,
            row_height_ratio: 0.5,
            format: None,
        }
    }
}

impl SlotLayoutConfig {
    /// Defaults with the given template.
    pub fn new(kind: SlotLayoutKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(s: &str) -> LayoutResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Carve `viewport` into named slots.
///
/// In the mobile format, column axes are stacked vertically (names are kept), so a portrait
/// result never places two slots side by side.
#[tracing::instrument(skip(config), fields(kind = ?config.kind))]
pub fn resolve_scene_slots(config: &SlotLayoutConfig, viewport: Viewport) -> Diagnosed<SlotMap> {
    let mut diagnostics = Vec::new();
    let mut slots = SlotMap::new();

    let format = config.format.unwrap_or_else(|| detect_format(viewport));
    let column_axis = match format {
        Format::Desktop => Axis::Horizontal,
        Format::Mobile => Axis::Vertical,
    };
    let gap = config.gap.max(0.0);
    let content = viewport
        .to_area()
        .inset(Edges::uniform(config.padding.max(0.0)));

    match config.kind {
        SlotLayoutKind::Full => {
            slots.insert("full".to_string(), content);
        }
        SlotLayoutKind::RowStack => {
            let body = take_header(content, config.title_height, gap, &mut slots);
            let rows = equal_weights(config.rows);
            insert_named(&mut slots, "row", split(body, &rows, gap, Axis::Vertical));
        }
        SlotLayoutKind::ColumnSplit => {
            let body = take_header(content, config.title_height, gap, &mut slots);
            let weights = column_weights(config, &mut diagnostics);
            insert_named(&mut slots, "col", split(body, &weights, gap, column_axis));
        }
        SlotLayoutKind::HeaderRowColumns => {
            let title = Some(config.title_height.unwrap_or(DEFAULT_TITLE_HEIGHT));
            let body = take_header(content, title, gap, &mut slots);
            let ratio = config.row_height_ratio.clamp(0.0, 1.0);
            let parts = split(body, &[ratio, 1.0 - ratio], gap, Axis::Vertical);
            slots.insert("row".to_string(), parts[0]);
            let weights = column_weights(config, &mut diagnostics);
            insert_named(&mut slots, "col", split(parts[1], &weights, gap, column_axis));
        }
        SlotLayoutKind::GridSlots => {
            let body = take_header(content, config.title_height, gap, &mut slots);
            let rows = config.rows.max(1);
            let columns = config.columns.max(1);
            match format {
                Format::Desktop => {
                    let bands = split(body, &equal_weights(rows), gap, Axis::Vertical);
                    for (r, band) in bands.into_iter().enumerate() {
                        let cells = split(band, &equal_weights(columns), gap, Axis::Horizontal);
                        for (c, cell) in cells.into_iter().enumerate() {
                            slots.insert(format!("cell-{}-{}", r + 1, c + 1), cell);
                        }
                    }
                }
                Format::Mobile => {
                    let cells = split(body, &equal_weights(rows * columns), gap, Axis::Vertical);
                    for (i, cell) in cells.into_iter().enumerate() {
                        slots.insert(format!("cell-{}-{}", i / columns + 1, i % columns + 1), cell);
                    }
                }
            }
        }
    }

    let has_columns = matches!(
        config.kind,
        SlotLayoutKind::ColumnSplit | SlotLayoutKind::HeaderRowColumns | SlotLayoutKind::GridSlots
    );
    if format == Format::Mobile && has_columns {
        diagnostics.push(Diagnostic::info(
            DiagnosticCode::MobileReflow,
            format!("{:?} columns stacked vertically for mobile format", config.kind),
        ));
    }

    tracing::debug!(?format, slots = slots.len(), "resolved scene slots");
    Diagnosed::new(slots, diagnostics)
}

/// Insert a `header` slot when `title_height` is set and return the area below it.
fn take_header(
    area: LayoutArea,
    title_height: Option<f64>,
    gap: f64,
    slots: &mut SlotMap,
) -> LayoutArea {
    let Some(h) = title_height else {
        return area;
    };
    let h = h.max(0.0).min(area.height);
    slots.insert(
        "header".to_string(),
        LayoutArea::new(area.left, area.top, area.width, h),
    );
    let used = (h + gap).min(area.height);
    LayoutArea::new(area.left, area.top + used, area.width, area.height - used)
}

fn insert_named(slots: &mut SlotMap, prefix: &str, areas: Vec<LayoutArea>) {
    for (i, area) in areas.into_iter().enumerate() {
        slots.insert(format!("{prefix}{}", i + 1), area);
    }
}

fn equal_weights(n: usize) -> Vec<f64> {
    vec![1.0; n.max(1)]
}

fn column_weights(config: &SlotLayoutConfig, diags: &mut Vec<Diagnostic>) -> Vec<f64> {
    let Some(ratios) = config.ratios.as_deref().filter(|r| !r.is_empty()) else {
        return equal_weights(config.columns);
    };
    if ratios.iter().any(|r| !r.is_finite() || *r <= 0.0) {
        diags.push(Diagnostic::warning(
            DiagnosticCode::SlotRatios,
            "column ratios must be positive; using equal columns",
        ));
        return equal_weights(config.columns);
    }
    let sum: f64 = ratios.iter().sum();
    if !approx_eq(sum, 1.0, RATIO_SUM_TOLERANCE) {
        diags.push(Diagnostic::warning(
            DiagnosticCode::SlotRatios,
            format!("column ratios sum to {sum}; normalizing"),
        ));
    }
    ratios.to_vec()
}

/// Split `area` along `axis` into parts proportional to `weights`, `gap` apart.
fn split(area: LayoutArea, weights: &[f64], gap: f64, axis: Axis) -> Vec<LayoutArea> {
    let total: f64 = weights.iter().sum();
    let extent = match axis {
        Axis::Horizontal => area.width,
        Axis::Vertical => area.height,
    };
    let seams = weights.len().saturating_sub(1) as f64;
    let gap = if seams > 0.0 { gap.min(extent / seams) } else { gap };
    let space = (extent - gap * seams).max(0.0);

    let mut cursor = 0.0;
    weights
        .iter()
        .map(|w| {
            let len = if total > 0.0 { space * w / total } else { 0.0 };
            let part = match axis {
                Axis::Horizontal => {
                    LayoutArea::new(area.left + cursor, area.top, len, area.height)
                }
                Axis::Vertical => LayoutArea::new(area.left, area.top + cursor, area.width, len),
            };
            cursor += len + gap;
            part
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/slots/resolver.rs"]
mod tests;
