//! Named ability permissions.

use std::collections::HashSet;

/// Set of ability names that are currently allowed.
///
/// Granting and revoking are idempotent; membership is the only observable
/// property. Iteration order is unspecified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityPermissions {
    allowed: HashSet<String>,
}

impl AbilityPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the permission was not already granted.
    pub fn grant_permission(&mut self, ability: impl Into<String>) -> bool {
        self.allowed.insert(ability.into())
    }

    /// Returns `true` if the permission was present. Revoking an unknown name
    /// is not an error.
    pub fn revoke_permission(&mut self, ability: &str) -> bool {
        self.allowed.remove(ability)
    }

    pub fn is_ability_allowed(&self, ability: &str) -> bool {
        self.allowed.contains(ability)
    }

    pub fn granted(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AbilityPermissions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            allowed: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_then_revoke() {
        let mut permissions = AbilityPermissions::new();
        assert!(!permissions.is_ability_allowed("x"));

        assert!(permissions.grant_permission("x"));
        assert!(permissions.is_ability_allowed("x"));

        assert!(permissions.revoke_permission("x"));
        assert!(!permissions.is_ability_allowed("x"));
    }

    #[test]
    fn grant_is_idempotent() {
        let mut permissions = AbilityPermissions::new();
        assert!(permissions.grant_permission("teleport"));
        assert!(!permissions.grant_permission("teleport"));
        assert_eq!(permissions.len(), 1);
    }

    #[test]
    fn revoking_unknown_name_is_a_no_op() {
        let mut permissions: AbilityPermissions = ["fly"].into_iter().collect();
        assert!(!permissions.revoke_permission("swim"));
        assert!(permissions.is_ability_allowed("fly"));
    }

    #[test]
    fn granted_lists_every_name() {
        let permissions: AbilityPermissions = ["a", "b", "c"].into_iter().collect();
        let mut names: Vec<_> = permissions.granted().collect();
        names.sort_unstable();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_keeps_membership() {
        let permissions: AbilityPermissions = ["scan"].into_iter().collect();
        let json = serde_json::to_string(&permissions).unwrap();
        let back: AbilityPermissions = serde_json::from_str(&json).unwrap();
        assert!(back.is_ability_allowed("scan"));
    }
}
