//! Arena-backed rooted tree of panels.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Joint, Panel, PanelId, Rect, TreeError, TreeResult};

/// A rooted tree of panels.
///
/// Panels are stored in an arena; parent/children relationships are kept
/// as [`PanelId`] references rather than native pointers, so the tree has
/// no ownership cycles. Exactly one panel (the root / base panel) has no
/// parent, and every non-root panel carries exactly one [`Joint`] to its
/// parent — [`attach`](Self::attach) enforces this by construction.
///
/// # Example
///
/// ```
/// use dieline_types::{Panel, PanelId, PanelTree, Rect, Joint};
/// use nalgebra::Point2;
///
/// let mut tree = PanelTree::new(Panel::new(PanelId::new(0), "base", Rect::new(0.0, 0.0, 100.0, 60.0)));
/// let flap = Panel::new(PanelId::new(1), "flap", Rect::new(0.0, -20.0, 100.0, 20.0));
/// tree.attach(PanelId::new(0), flap, Joint::horizontal(Point2::new(0.0, 0.0), 100.0, 2.0)).unwrap();
///
/// assert_eq!(tree.root(), PanelId::new(0));
/// assert_eq!(tree.get(PanelId::new(1)).unwrap().parent, Some(PanelId::new(0)));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelTree {
    panels: Vec<Panel>,
    slots: HashMap<PanelId, usize>,
    root: PanelId,
}

impl PanelTree {
    /// Create a tree from its root panel.
    ///
    /// Any parent/joint data on the supplied panel is cleared: the root
    /// has no hinge.
    #[must_use]
    pub fn new(mut root: Panel) -> Self {
        root.parent = None;
        root.joint = None;
        root.children.clear();
        let root_id = root.id;
        let mut slots = HashMap::new();
        slots.insert(root_id, 0);
        Self {
            panels: vec![root],
            slots,
            root: root_id,
        }
    }

    /// Attach a panel under an existing parent, connected by a joint.
    ///
    /// # Errors
    ///
    /// Returns an error if the panel id is already present, the parent is
    /// unknown, or the joint fails validation.
    pub fn attach(&mut self, parent: PanelId, mut panel: Panel, joint: Joint) -> TreeResult<()> {
        if self.slots.contains_key(&panel.id) {
            return Err(TreeError::DuplicateId(panel.id));
        }
        let Some(&parent_slot) = self.slots.get(&parent) else {
            return Err(TreeError::UnknownParent(parent));
        };
        joint.validate().map_err(|source| TreeError::Joint {
            panel: panel.id,
            source,
        })?;

        panel.parent = Some(parent);
        panel.joint = Some(joint);
        panel.children.clear();

        let slot = self.panels.len();
        self.slots.insert(panel.id, slot);
        self.panels[parent_slot].children.push(panel.id);
        self.panels.push(panel);
        Ok(())
    }

    /// Rebuild a tree from pre-linked panels.
    ///
    /// The panels must already carry consistent `parent` links; children
    /// lists are recomputed from them. This is the entry point for hosts
    /// that deserialize a layout, and for the structural scaler's rebuild.
    ///
    /// # Errors
    ///
    /// Returns an error if ids are duplicated, there is not exactly one
    /// parentless panel, a parent link points outside the set, or a
    /// non-root panel is missing (or carries an invalid) joint.
    pub fn from_parts(panels: Vec<Panel>) -> TreeResult<Self> {
        let mut slots = HashMap::with_capacity(panels.len());
        for (slot, panel) in panels.iter().enumerate() {
            if slots.insert(panel.id, slot).is_some() {
                return Err(TreeError::DuplicateId(panel.id));
            }
        }

        let roots: Vec<PanelId> = panels
            .iter()
            .filter(|p| p.parent.is_none())
            .map(|p| p.id)
            .collect();
        let [root] = roots[..] else {
            return Err(TreeError::RootCount(roots.len()));
        };

        let mut tree = Self {
            panels,
            slots,
            root,
        };

        for panel in &mut tree.panels {
            panel.children.clear();
        }
        for slot in 0..tree.panels.len() {
            let id = tree.panels[slot].id;
            let Some(parent) = tree.panels[slot].parent else {
                continue;
            };
            let joint = tree.panels[slot]
                .joint
                .as_ref()
                .ok_or(TreeError::MissingJoint(id))?;
            joint
                .validate()
                .map_err(|source| TreeError::Joint { panel: id, source })?;
            let Some(&parent_slot) = tree.slots.get(&parent) else {
                return Err(TreeError::UnknownParent(parent));
            };
            tree.panels[parent_slot].children.push(id);
        }
        Ok(tree)
    }

    /// The root (base) panel id.
    #[inline]
    #[must_use]
    pub const fn root(&self) -> PanelId {
        self.root
    }

    /// Look up a panel by id.
    #[inline]
    #[must_use]
    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.slots.get(&id).map(|&slot| &self.panels[slot])
    }

    /// Number of panels in the tree.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the tree has no panels. Always false: a tree has a root.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Iterate over all panels in arena (insertion) order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    /// Panel ids in pre-order: every parent before its children.
    #[must_use]
    pub fn pre_order(&self) -> Vec<PanelId> {
        let mut order = Vec::with_capacity(self.panels.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(panel) = self.get(id) {
                // Reverse so the first child is visited first.
                for &child in panel.children.iter().rev() {
                    stack.push(child);
                }
            }
        }
        order
    }

    /// Bounding rectangle of every panel's bounds.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_rects(self.panels.iter().map(|p| &p.bounds))
    }
}
