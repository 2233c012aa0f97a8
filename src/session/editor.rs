use uuid::Uuid;

use crate::query::{Location, QueryParams};
use crate::share::{ShareError, SharePayload};
use crate::slots::{GenerateRequest, SlotDef, SlotSync};

/// A fillable template: identity plus its ordered slot definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub slug: String,
    pub slots: Vec<SlotDef>,
}

impl Template {
    pub fn new(slug: impl Into<String>, labels: &[&str]) -> Self {
        Self {
            slug: slug.into(),
            slots: labels.iter().map(|label| SlotDef::new(*label)).collect(),
        }
    }
}

/// Page-level state behind one editor view: the loaded template and its
/// slot values, kept in sync with the location's query namespace.
///
/// The session never owns the location. Navigable state is shared with
/// other page concerns, so every operation that touches it borrows the
/// location explicitly. Slot values mutate only through `update_slot` and
/// `clear_slots`, which keep the query namespace consistent with what is
/// on screen.
pub struct EditorSession {
    /// Unique identifier for this session.
    pub id: Uuid,
    template: Option<String>,
    slots: SlotSync,
}

impl EditorSession {
    /// Create a session with no template loaded. `prefix` names the query
    /// namespace the session will own (`text`, `nft`, ...).
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            template: None,
            slots: SlotSync::new(prefix),
        }
    }

    /// Slug of the loaded template, if any.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Read access to the slot state. Mutation goes through the session so
    /// the location's query namespace cannot drift from the values.
    pub fn slots(&self) -> &SlotSync {
        &self.slots
    }

    /// Install a template. A change in slot count resets the values by
    /// rehydrating from the location's current query; a same-count
    /// template (relabel, reskin) keeps them.
    pub fn load_template(&mut self, template: Template, location: &Location) {
        tracing::debug!(
            template = %template.slug,
            slots = template.slots.len(),
            "loading template"
        );
        self.template = Some(template.slug);
        self.slots.set_definitions(template.slots, location.query());
    }

    /// Replace the value at `index` and mirror the namespace into the
    /// location, replace-style: editing must not grow the back stack.
    /// Out-of-range indexes are dropped (and logged by the synchronizer)
    /// without touching the location. Returns whether the value was
    /// applied.
    pub fn update_slot(
        &mut self,
        index: usize,
        value: impl Into<String>,
        location: &mut Location,
    ) -> bool {
        if !self.slots.set_value(index, value) {
            return false;
        }
        self.sync_location(location);
        true
    }

    /// Clear every slot and scrub the session's namespace from the
    /// location's query. Foreign keys are untouched.
    pub fn clear_slots(&mut self, location: &mut Location) {
        self.slots.clear();
        self.sync_location(location);
    }

    /// True when a generate call is sensible: a template with at least one
    /// slot is loaded and every slot is filled.
    pub fn can_generate(&self) -> bool {
        self.template.is_some() && !self.slots.is_empty() && self.slots.all_filled()
    }

    /// Build the generation request body, if a template is loaded. The
    /// entries are the trimmed non-empty slots in index order; gating on
    /// completeness is `can_generate`'s job.
    pub fn generate_request(&self) -> Option<GenerateRequest> {
        let template = self.template.clone()?;
        Some(GenerateRequest {
            template,
            entries: self.slots.api_entries(),
        })
    }

    /// True when there is something worth sharing or clearing.
    pub fn can_share(&self) -> bool {
        self.slots.has_any()
    }

    /// Encode the current location as a share token.
    pub fn share_link(&self, location: &Location) -> Result<String, ShareError> {
        SharePayload::capture(location).encode()
    }

    /// Install a decoded share payload: navigate to its route, then
    /// rehydrate the slots from the carried params. Opening a link is real
    /// navigation, so the previous entry stays reachable via back. The
    /// rehydrate is unconditional: a link for the already-loaded template
    /// must still replace what is on screen.
    pub fn apply_share(&mut self, payload: &SharePayload, location: &mut Location) {
        payload.apply(location);
        self.slots.hydrate(location.query());
    }

    fn sync_location(&self, location: &mut Location) {
        let mut params = location.query().clone();
        self.slots.write_params(&mut params);
        location.replace_query(params);
    }
}
