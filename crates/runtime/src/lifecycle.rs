//! Task, service and ability lifecycles tracked as 2-bit states.
//!
//! Starting an entry moves its state to [`State2BitValue::RUNNING`]; ending it
//! resets the state to its initial value (observers see the transition back to
//! idle) and drops the entry. Abilities may only start while the shared
//! [`AbilityPermissions`] allow them.

use std::collections::BTreeMap;

use golden_age_core::AbilityPermissions;

use crate::error::{Result, RuntimeError};
use crate::shared::Shared;
use crate::state::{State2Bit, State2BitValue};

/// Category of a lifecycle entry.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum LifecycleKind {
    Task,
    Service,
    Ability,
}

/// Begin/end operations for named tasks, services and abilities.
///
/// The returned [`State2Bit`] can be observed to follow the entry until it
/// ends.
pub trait GoldenAge {
    fn begin_task(&mut self, name: &str) -> Result<&mut State2Bit>;

    fn end_task(&mut self, name: &str) -> Result<()>;

    fn start_service(&mut self, name: &str) -> Result<&mut State2Bit>;

    fn end_service(&mut self, name: &str) -> Result<()>;

    /// # Errors
    ///
    /// Fails with [`RuntimeError::AbilityNotPermitted`] unless the ability was
    /// granted.
    fn start_ability(&mut self, name: &str) -> Result<&mut State2Bit>;

    fn end_ability(&mut self, name: &str) -> Result<()>;
}

/// In-memory [`GoldenAge`] implementation.
#[derive(Debug, Default)]
pub struct LifecycleRegistry {
    entries: BTreeMap<(LifecycleKind, String), State2Bit>,
    permissions: Shared<AbilityPermissions>,
}

impl LifecycleRegistry {
    pub fn new(permissions: Shared<AbilityPermissions>) -> Self {
        Self {
            entries: BTreeMap::new(),
            permissions,
        }
    }

    pub fn permissions(&self) -> &Shared<AbilityPermissions> {
        &self.permissions
    }

    /// Current value of an entry, or `None` if it is not running.
    pub fn state(&self, kind: LifecycleKind, name: &str) -> Option<State2BitValue> {
        self.entries
            .get(&(kind, name.to_owned()))
            .map(|state| *state.get())
    }

    pub fn state_mut(&mut self, kind: LifecycleKind, name: &str) -> Option<&mut State2Bit> {
        self.entries.get_mut(&(kind, name.to_owned()))
    }

    /// Names of the live entries of `kind`, in lexical order.
    pub fn active(&self, kind: LifecycleKind) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, name)| name.as_str())
    }

    fn start(&mut self, kind: LifecycleKind, name: &str) -> &mut State2Bit {
        let state = self.entries.entry((kind, name.to_owned())).or_default();
        if state.set(State2BitValue::RUNNING) {
            tracing::debug!(%kind, entry = name, "lifecycle started");
        }
        state
    }

    fn finish(&mut self, kind: LifecycleKind, name: &str) -> Result<()> {
        let mut state = self
            .entries
            .remove(&(kind, name.to_owned()))
            .ok_or_else(|| RuntimeError::NotStarted {
                kind,
                name: name.to_owned(),
            })?;
        state.delete_state();
        tracing::debug!(%kind, entry = name, "lifecycle ended");
        Ok(())
    }
}

impl GoldenAge for LifecycleRegistry {
    fn begin_task(&mut self, name: &str) -> Result<&mut State2Bit> {
        Ok(self.start(LifecycleKind::Task, name))
    }

    fn end_task(&mut self, name: &str) -> Result<()> {
        self.finish(LifecycleKind::Task, name)
    }

    fn start_service(&mut self, name: &str) -> Result<&mut State2Bit> {
        Ok(self.start(LifecycleKind::Service, name))
    }

    fn end_service(&mut self, name: &str) -> Result<()> {
        self.finish(LifecycleKind::Service, name)
    }

    fn start_ability(&mut self, name: &str) -> Result<&mut State2Bit> {
        let allowed = self
            .permissions
            .with(|permissions| permissions.is_ability_allowed(name))?;
        if !allowed {
            tracing::warn!(ability = name, "ability start rejected");
            return Err(RuntimeError::AbilityNotPermitted(name.to_owned()));
        }
        Ok(self.start(LifecycleKind::Ability, name))
    }

    fn end_ability(&mut self, name: &str) -> Result<()> {
        self.finish(LifecycleKind::Ability, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn begin_and_end_task() {
        let mut registry = LifecycleRegistry::default();
        let state = registry.begin_task("compile").unwrap();
        assert_eq!(*state.get(), State2BitValue::RUNNING);
        assert_eq!(
            registry.state(LifecycleKind::Task, "compile"),
            Some(State2BitValue::RUNNING)
        );

        registry.end_task("compile").unwrap();
        assert_eq!(registry.state(LifecycleKind::Task, "compile"), None);
    }

    #[test]
    fn observers_see_start_and_end() {
        let mut registry = LifecycleRegistry::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        registry
            .start_service("sync")
            .unwrap()
            .observe(move |value| sink.borrow_mut().push(*value));

        registry.end_service("sync").unwrap();
        assert_eq!(
            *seen.borrow(),
            vec![State2BitValue::RUNNING, State2BitValue::IDLE]
        );
    }

    #[test]
    fn ending_unknown_entry_fails() {
        let mut registry = LifecycleRegistry::default();
        let err = registry.end_ability("ghost").unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::NotStarted {
                kind: LifecycleKind::Ability,
                ..
            }
        ));
        assert_eq!(err.to_string(), "ability 'ghost' was never started");
    }

    #[test]
    fn abilities_require_permission() {
        let permissions = Shared::new(AbilityPermissions::new());
        let mut registry = LifecycleRegistry::new(permissions.clone());

        assert!(matches!(
            registry.start_ability("fly"),
            Err(RuntimeError::AbilityNotPermitted(name)) if name == "fly"
        ));

        permissions.with(|p| p.grant_permission("fly")).unwrap();
        assert!(registry.start_ability("fly").is_ok());
        assert_eq!(registry.active(LifecycleKind::Ability).collect::<Vec<_>>(), ["fly"]);
    }

    #[test]
    fn kinds_are_separate_namespaces() {
        let mut registry = LifecycleRegistry::default();
        registry.begin_task("build").unwrap();
        registry.start_service("build").unwrap();
        registry.end_task("build").unwrap();

        assert_eq!(registry.state(LifecycleKind::Task, "build"), None);
        assert_eq!(
            registry.state(LifecycleKind::Service, "build"),
            Some(State2BitValue::RUNNING)
        );
    }
}
