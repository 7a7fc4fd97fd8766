//! Privacy & data preferences

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivacyToggle {
    ShareWithFamily,
    Notifications,
    CategorySuggestions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub share_with_family: bool,
    pub notifications: bool,
    pub category_suggestions: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            share_with_family: false,
            notifications: false,
            category_suggestions: true,
        }
    }
}

impl PrivacySettings {
    pub fn set(&mut self, toggle: PrivacyToggle, enabled: bool) {
        match toggle {
            PrivacyToggle::ShareWithFamily => self.share_with_family = enabled,
            PrivacyToggle::Notifications => self.notifications = enabled,
            PrivacyToggle::CategorySuggestions => self.category_suggestions = enabled,
        }
    }

    pub fn get(&self, toggle: PrivacyToggle) -> bool {
        match toggle {
            PrivacyToggle::ShareWithFamily => self.share_with_family,
            PrivacyToggle::Notifications => self.notifications,
            PrivacyToggle::CategorySuggestions => self.category_suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_share_nothing() {
        let s = PrivacySettings::default();
        assert!(!s.get(PrivacyToggle::ShareWithFamily));
        assert!(!s.get(PrivacyToggle::Notifications));
        assert!(s.get(PrivacyToggle::CategorySuggestions));
    }

    #[test]
    fn test_set() {
        let mut s = PrivacySettings::default();
        s.set(PrivacyToggle::Notifications, true);
        s.set(PrivacyToggle::CategorySuggestions, false);
        assert!(s.notifications);
        assert!(!s.category_suggestions);
    }
}
