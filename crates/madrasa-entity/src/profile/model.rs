//! Profile model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The stored profile of an authenticated actor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Profile {
    /// Actor id (matches the token subject).
    pub id: Uuid,
    /// Login email.
    pub email: Option<String>,
    /// Display name.
    pub full_name: Option<String>,
    /// Madrasa the actor administers.
    pub madrasa_name: Option<String>,
}

impl Profile {
    /// The madrasa name, ignoring blank values.
    pub fn madrasa(&self) -> Option<&str> {
        non_blank(self.madrasa_name.as_deref())
    }

    /// The display name, ignoring blank values.
    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.full_name.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_treated_as_missing() {
        let profile = Profile {
            id: Uuid::new_v4(),
            email: None,
            full_name: Some("  ".to_string()),
            madrasa_name: Some(String::new()),
        };
        assert_eq!(profile.madrasa(), None);
        assert_eq!(profile.display_name(), None);
    }
}
