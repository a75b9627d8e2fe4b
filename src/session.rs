//! Rename session: applies templates to entities and keeps their name history current.
//!
//! This is the glue a host application drives from its own events. A newly launched entity gets
//! [`Renamer::launch`], the two halves of an entity that came apart get [`Renamer::split`], and a manual rename is
//! just [`Renamer::record`].

use crate::config::RenameConfig;
use crate::history::{EntityId, NameHistory};
use crate::synthesize::synthesize_name;

/// Outcome of applying a template to one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    /// The name the entity had before.
    pub original: String,
    /// The name the entity should have now (possibly the same).
    pub name: String,
}

impl Rename {
    pub fn changed(&self) -> bool {
        self.name != self.original
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renamer {
    history: NameHistory,
    config: RenameConfig,
}

impl Renamer {
    pub fn new(config: RenameConfig) -> Self {
        Self {
            history: NameHistory::new(),
            config,
        }
    }

    pub fn with_history(history: NameHistory, config: RenameConfig) -> Self {
        Self { history, config }
    }

    pub fn history(&self) -> &NameHistory {
        &self.history
    }

    /// Compute the name `current_name` would take as a template, without recording anything.
    pub fn propose(&self, current_name: &str) -> String {
        let template = if self.config.trim_template {
            current_name.trim()
        } else {
            current_name
        };
        synthesize_name(template, self.history.names())
    }

    /// Name a newly launched entity and record the result.
    ///
    /// When the current name produces no change and description fallback is enabled, the last `[template]` found in
    /// `description` is used instead.
    pub fn launch(&mut self, id: EntityId, current_name: &str, description: Option<&str>) -> Rename {
        let mut name = self.propose(current_name);

        if name == current_name && self.config.description_fallback {
            if let Some(template) = description.and_then(template_from_description) {
                tracing::debug!(id, template, "using template from description");
                name = self.propose(template);
            }
        }

        let rename = Rename {
            original: current_name.to_string(),
            name,
        };
        if rename.changed() {
            tracing::debug!(id, from = %rename.original, to = %rename.name, "renamed on launch");
        }
        self.history.record(id, rename.name.clone());
        rename
    }

    /// Name both halves of an entity that came apart.
    ///
    /// Both names are computed against the same history before either is recorded, so two halves sharing a template
    /// receive the same name.
    pub fn split(&mut self, a: (EntityId, &str), b: (EntityId, &str)) -> (Rename, Rename) {
        let first = Rename {
            original: a.1.to_string(),
            name: self.propose(a.1),
        };
        let second = Rename {
            original: b.1.to_string(),
            name: self.propose(b.1),
        };
        tracing::debug!(a = a.0, b = b.0, first = %first.name, second = %second.name, "renamed on split");

        self.history.record(a.0, first.name.clone());
        self.history.record(b.0, second.name.clone());
        (first, second)
    }

    /// Record a name chosen outside the session (e.g. a manual rename).
    pub fn record(&mut self, id: EntityId, name: &str) {
        self.history.record(id, name);
    }

    /// Stop tracking an entity.
    pub fn forget(&mut self, id: EntityId) -> Option<String> {
        self.history.forget(id)
    }
}

/// Find the template in a free-form description.
///
/// Each line may hold one `[template]`: the text between its first `[` and the next `]`. The last line with a
/// template wins. The result is trimmed.
///
/// ## Examples
/// ```rust
/// use nextname::session::template_from_description;
///
/// let text = "Heavy lifter\nname: [Hauler %R]\n";
/// assert_eq!(template_from_description(text), Some("Hauler %R"));
/// assert_eq!(template_from_description("no template here"), None);
/// ```
pub fn template_from_description(description: &str) -> Option<&str> {
    description
        .lines()
        .filter_map(|line| {
            let start = line.find('[')? + 1;
            let len = line[start..].find(']')?;
            Some(line[start..start + len].trim())
        })
        .last()
}
