//! Spine/flap classification and fold order assembly.

use std::collections::HashMap;

use dieline_types::{Panel, PanelId, Point2, Rect};
use tracing::{debug, warn};

use crate::params::{SequenceParams, VerticalOrder};
use crate::result::{FoldReason, FoldSequence, FoldStep};

/// Flat panel rectangle, the input form of sequence inference.
///
/// This mirrors the host's layout list: no tree links, just geometry.
#[derive(Debug, Clone)]
pub struct PanelRect {
    /// Panel id.
    pub id: PanelId,
    /// Axis-aligned bounds in layout units.
    pub bounds: Rect,
    /// Center point in layout units.
    pub center: Point2<f64>,
}

impl PanelRect {
    /// Create a panel rectangle with its center derived from the bounds.
    #[must_use]
    pub fn new(id: PanelId, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            center: bounds.center(),
        }
    }
}

impl From<&Panel> for PanelRect {
    fn from(panel: &Panel) -> Self {
        Self {
            id: panel.id,
            bounds: panel.bounds,
            center: panel.center,
        }
    }
}

/// Flaps classified above and below one host panel, nearest-first.
#[derive(Debug, Default)]
struct HostFlaps {
    top: Vec<PanelId>,
    bottom: Vec<PanelId>,
}

/// Infer the fold order, display names, and driven map for a layout.
///
/// The base panel folds nothing and comes first; spine panels close
/// before flaps fold over them; bottom flaps (typically interior) close
/// before top flaps (typically the final seal) unless
/// [`VerticalOrder::TopFirst`] is selected.
///
/// The result is total over the input: any panel the classifier cannot
/// place geometrically is appended at the end, in original input order,
/// under a synthetic `P<n>` name. If the root id is not present at all
/// the whole input degrades to its original order with empty name and
/// driven maps.
#[must_use]
pub fn infer_sequence(
    panels: &[PanelRect],
    root: PanelId,
    params: &SequenceParams,
) -> FoldSequence {
    let Some(root_rect) = panels.iter().find(|p| p.id == root) else {
        warn!(%root, panel_count = panels.len(), "root panel not found, using input order");
        return fallback_sequence(panels);
    };

    let tol = params.tolerance;

    // Phase 1: spine (X-axis) classification around the root.
    let mut left: Vec<&PanelRect> = Vec::new();
    let mut right: Vec<&PanelRect> = Vec::new();
    for panel in panels {
        if panel.id == root {
            continue;
        }
        let band = root_rect.bounds.height.max(panel.bounds.height) * 0.5;
        if (panel.center.y - root_rect.center.y).abs() > band {
            continue;
        }
        if panel.bounds.right() <= root_rect.bounds.x + tol {
            left.push(panel);
        } else if panel.bounds.x >= root_rect.bounds.right() - tol {
            right.push(panel);
        }
    }
    // Nearest the root first: decreasing X on the left, increasing on the right.
    left.sort_by(|a, b| b.bounds.x.total_cmp(&a.bounds.x));
    right.sort_by(|a, b| a.bounds.x.total_cmp(&b.bounds.x));

    let mut names: HashMap<PanelId, String> = HashMap::with_capacity(panels.len());
    names.insert(root, "1".to_owned());
    for (i, panel) in left.iter().enumerate() {
        names.insert(panel.id, format!("{}", i + 2));
    }
    for (i, panel) in right.iter().enumerate() {
        names.insert(panel.id, format!("-{}", i + 2));
    }

    // Phase 2: flap (Y-axis) classification for the root and each spine.
    // Hosts are visited root-first, then left spines near-to-far, then
    // right spines; the first host whose span contains a candidate claims it.
    let mut driven: HashMap<PanelId, Vec<PanelId>> = HashMap::new();
    let root_name = "1".to_owned();
    let root_flaps = classify_flaps(root_rect, &root_name, panels, &mut names, tol);
    let left_flaps: Vec<HostFlaps> = left
        .iter()
        .map(|host| {
            let host_name = names[&host.id].clone();
            classify_flaps(host, &host_name, panels, &mut names, tol)
        })
        .collect();
    let right_flaps: Vec<HostFlaps> = right
        .iter()
        .map(|host| {
            let host_name = names[&host.id].clone();
            classify_flaps(host, &host_name, panels, &mut names, tol)
        })
        .collect();

    record_driven(&mut driven, root, &root_flaps);
    for (host, flaps) in left.iter().zip(&left_flaps) {
        record_driven(&mut driven, host.id, flaps);
    }
    for (host, flaps) in right.iter().zip(&right_flaps) {
        record_driven(&mut driven, host.id, flaps);
    }

    // Unresolved geometry gets its fallback names up front so the order
    // builder sees a total name map.
    let unresolved: Vec<PanelId> = panels
        .iter()
        .map(|p| p.id)
        .filter(|pid| !names.contains_key(pid))
        .collect();
    if !unresolved.is_empty() {
        debug!(count = unresolved.len(), "appending unresolved panels");
        for (i, pid) in unresolved.iter().enumerate() {
            names.insert(*pid, format!("P{}", i + 1));
        }
    }

    // Phase 3: assemble the fold order.
    let mut builder = OrderBuilder::new(&names, &driven);
    builder.phase(std::iter::once(root), FoldReason::Base);
    builder.phase(left.iter().map(|p| p.id), FoldReason::SpineLeft);
    builder.phase(right.iter().map(|p| p.id), FoldReason::SpineRight);

    let spine_bottom = || {
        left_flaps
            .iter()
            .chain(&right_flaps)
            .flat_map(|f| f.bottom.iter().copied())
    };
    let spine_top = || {
        left_flaps
            .iter()
            .chain(&right_flaps)
            .flat_map(|f| f.top.iter().copied())
    };
    match params.vertical_order {
        VerticalOrder::BottomFirst => {
            builder.phase(spine_bottom(), FoldReason::FlapBottom);
            builder.phase(spine_top(), FoldReason::FlapTop);
            builder.phase(root_flaps.bottom.iter().copied(), FoldReason::RootFlapBottom);
            builder.phase(root_flaps.top.iter().copied(), FoldReason::RootFlapTop);
        }
        VerticalOrder::TopFirst => {
            builder.phase(spine_top(), FoldReason::FlapTop);
            builder.phase(spine_bottom(), FoldReason::FlapBottom);
            builder.phase(root_flaps.top.iter().copied(), FoldReason::RootFlapTop);
            builder.phase(root_flaps.bottom.iter().copied(), FoldReason::RootFlapBottom);
        }
    }

    // Phase 4: unresolved geometry, appended in input order.
    builder.phase(unresolved.into_iter(), FoldReason::Unresolved);

    let (order, steps) = builder.finish();
    debug_assert_eq!(order.len(), panels.len());
    FoldSequence {
        order,
        names,
        driven,
        steps,
    }
}

/// Classify unnamed panels lying entirely above or below one host.
fn classify_flaps(
    host: &PanelRect,
    host_name: &str,
    panels: &[PanelRect],
    names: &mut HashMap<PanelId, String>,
    tol: f64,
) -> HostFlaps {
    let mut top: Vec<(f64, PanelId)> = Vec::new();
    let mut bottom: Vec<(f64, PanelId)> = Vec::new();

    for panel in panels {
        if panel.id == host.id || names.contains_key(&panel.id) {
            continue;
        }
        if !host.bounds.spans_x(panel.center.x, tol) {
            continue;
        }
        if panel.bounds.bottom() <= host.bounds.y + tol {
            top.push((host.bounds.y - panel.bounds.bottom(), panel.id));
        } else if panel.bounds.y >= host.bounds.bottom() - tol {
            bottom.push((panel.bounds.y - host.bounds.bottom(), panel.id));
        }
    }

    // Nearest the host first.
    top.sort_by(|a, b| a.0.total_cmp(&b.0));
    bottom.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (i, (_, id)) in top.iter().enumerate() {
        names.insert(*id, format!("{host_name}-{}T", i + 1));
    }
    for (i, (_, id)) in bottom.iter().enumerate() {
        names.insert(*id, format!("{host_name}-{}B", i + 1));
    }

    HostFlaps {
        top: top.into_iter().map(|(_, id)| id).collect(),
        bottom: bottom.into_iter().map(|(_, id)| id).collect(),
    }
}

fn record_driven(driven: &mut HashMap<PanelId, Vec<PanelId>>, host: PanelId, flaps: &HostFlaps) {
    if flaps.top.is_empty() && flaps.bottom.is_empty() {
        return;
    }
    let mut ids = flaps.bottom.clone();
    ids.extend_from_slice(&flaps.top);
    driven.insert(host, ids);
}

/// Accumulates steps phase by phase, assigning group ids to non-empty phases.
struct OrderBuilder<'a> {
    names: &'a HashMap<PanelId, String>,
    driven: &'a HashMap<PanelId, Vec<PanelId>>,
    order: Vec<PanelId>,
    steps: Vec<FoldStep>,
    group: u32,
}

impl<'a> OrderBuilder<'a> {
    fn new(
        names: &'a HashMap<PanelId, String>,
        driven: &'a HashMap<PanelId, Vec<PanelId>>,
    ) -> Self {
        Self {
            names,
            driven,
            order: Vec::new(),
            steps: Vec::new(),
            group: 0,
        }
    }

    fn phase(&mut self, ids: impl Iterator<Item = PanelId>, reason: FoldReason) {
        let mut any = false;
        for id in ids {
            any = true;
            let name = self
                .names
                .get(&id)
                .cloned()
                .unwrap_or_else(|| format!("P{}", self.order.len() + 1));
            self.steps.push(FoldStep {
                order: self.order.len(),
                panel: id,
                name,
                reason,
                group: self.group,
                driven: self.driven.get(&id).cloned().unwrap_or_default(),
            });
            self.order.push(id);
        }
        if any {
            self.group += 1;
        }
    }

    fn finish(self) -> (Vec<PanelId>, Vec<FoldStep>) {
        (self.order, self.steps)
    }
}

/// Degraded result for a missing root: input order, empty maps.
fn fallback_sequence(panels: &[PanelRect]) -> FoldSequence {
    let order: Vec<PanelId> = panels.iter().map(|p| p.id).collect();
    let steps = order
        .iter()
        .enumerate()
        .map(|(i, &panel)| FoldStep {
            order: i,
            panel,
            name: format!("P{}", i + 1),
            reason: FoldReason::Unresolved,
            group: 0,
            driven: Vec::new(),
        })
        .collect();
    FoldSequence {
        order,
        names: HashMap::new(),
        driven: HashMap::new(),
        steps,
    }
}
