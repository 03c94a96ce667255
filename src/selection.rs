use std::collections::HashMap;

use tracing::{debug, warn};

/// Stable identifier for an ingredient: its position in the seed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IngredientId(usize);

impl IngredientId {
    /// DOM id of the tag rendered for this ingredient.
    pub fn tag_dom_id(self) -> String {
        format!("ingredient-tag-{}", self.0)
    }
}

/// Partition of the page's ingredients into "available" (offered by the
/// search box) and "selected" (shown as tags and submitted with the form).
///
/// Every seeded ingredient lives in exactly one of the two lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientPool {
    names: Vec<String>,
    ids: HashMap<String, IngredientId>,
    /// Kept in seed (display) order.
    available: Vec<IngredientId>,
    /// Kept in selection order.
    selected: Vec<IngredientId>,
}

impl IngredientPool {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool = Self::default();
        for item in items {
            let name = item.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if pool.ids.contains_key(name) {
                warn!("Duplicate ingredient option ignored: {}", name);
                continue;
            }
            let id = IngredientId(pool.names.len());
            pool.names.push(name.to_string());
            pool.ids.insert(name.to_string(), id);
            pool.available.push(id);
        }
        pool
    }

    pub fn id_of(&self, name: &str) -> Option<IngredientId> {
        self.ids.get(name.trim()).copied()
    }

    pub fn name(&self, id: IngredientId) -> &str {
        &self.names[id.0]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn available(&self) -> impl Iterator<Item = &str> + '_ {
        self.available.iter().map(|id| self.name(*id))
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> + '_ {
        self.selected.iter().map(|id| self.name(*id))
    }

    /// Selected ingredients with their ids, for rendering tags.
    pub fn selected_entries(&self) -> Vec<(IngredientId, String)> {
        self.selected
            .iter()
            .map(|id| (*id, self.name(*id).to_string()))
            .collect()
    }

    /// Move `name` from available to the end of the selection.
    ///
    /// Returns `false` and changes nothing when the name is unknown or
    /// already selected.
    pub fn select(&mut self, name: &str) -> bool {
        let Some(id) = self.id_of(name) else {
            debug!("Ignoring unknown ingredient: {}", name);
            return false;
        };
        let Some(pos) = self.available.iter().position(|a| *a == id) else {
            return false;
        };
        self.available.remove(pos);
        self.selected.push(id);
        true
    }

    /// Move `name` back to available, at its original display position.
    ///
    /// Returns `false` and changes nothing when the name isn't selected.
    pub fn deselect(&mut self, name: &str) -> bool {
        let Some(id) = self.id_of(name) else {
            return false;
        };
        let Some(pos) = self.selected.iter().position(|s| *s == id) else {
            return false;
        };
        self.selected.remove(pos);
        let insert_at = self.available.partition_point(|a| *a < id);
        self.available.insert(insert_at, id);
        true
    }

    /// Select each name in order, skipping blanks and unknown names.
    /// Returns how many were selected.
    pub fn replay<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter(|n| !n.as_ref().trim().is_empty())
            .filter(|n| self.select(n.as_ref()))
            .count()
    }

    /// Value submitted for the `ingredients` form field.
    pub fn form_value(&self) -> String {
        self.selected().collect::<Vec<_>>().join(",")
    }

    /// Available names containing `query` (case-insensitive), in display
    /// order. An empty query matches nothing.
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<String> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return vec![];
        }
        self.available()
            .filter(|name| name.to_lowercase().contains(&query))
            .take(limit)
            .map(str::to_string)
            .collect()
    }
}
