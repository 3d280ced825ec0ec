//! Applicant profile cache over `localStorage`.
//!
//! The profile pre-fills the applicant step of every wizard and is
//! refreshed after each successful submission. Missing or corrupt
//! stored JSON degrades to "no profile"; storage failures are logged
//! and otherwise ignored.

use web_sys::Storage;

use crate::config::PROFILE_STORAGE_KEY;
use crate::types::UserProfile;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the cached profile, if any.
pub fn load_profile() -> Option<UserProfile> {
    let storage = local_storage()?;
    let raw = storage.get_item(PROFILE_STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str::<UserProfile>(&raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("Discarding unreadable stored profile: {}", e);
            None
        }
    }
}

/// Persist the profile for the next wizard visit.
pub fn save_profile(profile: &UserProfile) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, profile not saved");
        return;
    };
    match serde_json::to_string(profile) {
        Ok(raw) => {
            if storage.set_item(PROFILE_STORAGE_KEY, &raw).is_err() {
                log::warn!("Failed to write profile to localStorage");
            }
        }
        Err(e) => log::warn!("Failed to encode profile: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use crate::types::UserProfile;

    #[test]
    fn profile_round_trip() {
        let profile = UserProfile {
            full_name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
        };
        let raw = serde_json::to_string(&profile).unwrap();
        assert!(raw.contains("fullName"));
        let parsed: UserProfile = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn corrupt_profile_fails_to_parse() {
        assert!(serde_json::from_str::<UserProfile>("{not json").is_err());
    }
}
