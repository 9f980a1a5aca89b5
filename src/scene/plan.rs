use std::collections::BTreeMap;

use crate::{
    arrange::cache::ArrangementCache,
    arrange::calculators::ItemPositions,
    arrange::config::ArrangementConfig,
    foundation::core::Viewport,
    foundation::diagnostics::Diagnosed,
    foundation::error::{LayoutError, LayoutResult},
    slots::resolver::{Format, SlotLayoutConfig, SlotMap, detect_format, resolve_scene_slots},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A scene layout as authored in JSON: a macro layout plus items arranged inside its slots.
///
/// ```json
/// {
///   "viewport": { "width": 1920, "height": 1080 },
///   "slots": { "type": "columnSplit", "titleHeight": 140 },
///   "regions": {
///     "cards": { "slot": "col1", "items": ["a", "b", "c"], "layout": { "arrangement": "grid" } }
///   }
/// }
/// ```
pub struct ScenePlan {
    /// Canvas size; must be positive and finite.
    #[serde(default)]
    pub viewport: Viewport,
    /// Macro layout carving the viewport into slots.
    #[serde(default)]
    pub slots: SlotLayoutConfig,
    /// Regions keyed by name; resolved in name order.
    #[serde(default)]
    pub regions: BTreeMap<String, RegionPlan>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Items arranged within one slot.
pub struct RegionPlan {
    /// Slot name produced by [`ScenePlan::slots`].
    pub slot: String,
    /// Opaque item payloads; only their count matters here.
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
    /// Arrangement; its `area` and `viewport` are overridden by the slot and scene.
    #[serde(default)]
    pub layout: ArrangementConfig,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Concrete geometry for a [`ScenePlan`].
pub struct ResolvedScene {
    /// Format the slots were resolved for.
    pub format: Format,
    /// Resolved slot rectangles.
    pub slots: SlotMap,
    /// Positions per region name.
    pub regions: BTreeMap<String, ItemPositions>,
}

impl ScenePlan {
    /// Parse a scene plan from JSON.
    pub fn from_json(s: &str) -> LayoutResult<Self> {
        serde_json::from_str(s).map_err(|e| LayoutError::serde(format!("scene plan: {e}")))
    }
}

/// Resolve slots, then arrange every region inside its slot.
pub fn plan_scene(plan: &ScenePlan) -> LayoutResult<Diagnosed<ResolvedScene>> {
    plan_scene_with_cache(plan, &mut ArrangementCache::new())
}

/// [`plan_scene`] reusing arrangement results from `cache` (for per-frame re-planning).
#[tracing::instrument(skip(plan, cache), fields(regions = plan.regions.len()))]
pub fn plan_scene_with_cache(
    plan: &ScenePlan,
    cache: &mut ArrangementCache,
) -> LayoutResult<Diagnosed<ResolvedScene>> {
    let viewport = Viewport::new(plan.viewport.width, plan.viewport.height)?;
    let mut diagnostics = Vec::new();
    let slots = resolve_scene_slots(&plan.slots, viewport).drain_into(&mut diagnostics);

    let mut regions = BTreeMap::new();
    for (name, region) in &plan.regions {
        let area = slots.get(&region.slot).copied().ok_or_else(|| {
            LayoutError::validation(format!(
                "region '{name}' references unknown slot '{}'",
                region.slot
            ))
        })?;
        let config = ArrangementConfig {
            area: Some(area),
            viewport,
            ..region.layout.clone()
        };
        let positions = cache
            .get_or_compute(&region.items, &config)?
            .drain_into(&mut diagnostics);
        regions.insert(name.clone(), positions);
    }

    Ok(Diagnosed::new(
        ResolvedScene {
            format: plan.slots.format.unwrap_or_else(|| detect_format(viewport)),
            slots,
            regions,
        },
        diagnostics,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/plan.rs"]
mod tests;
