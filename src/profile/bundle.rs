use super::model::Profile;

pub const BULK_EXPORT_ID: &str = "all-profiles";
pub const BULK_EXPORT_NAME: &str = "All Profiles Export";

/// Contents of an export file: one profile, or an envelope holding many.
/// Envelopes never nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileBundle {
    Single(Profile),
    Bulk(Vec<Profile>),
}

impl ProfileBundle {
    pub fn len(&self) -> usize {
        match self {
            ProfileBundle::Single(_) => 1,
            ProfileBundle::Bulk(profiles) => profiles.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_profiles(self) -> Vec<Profile> {
        match self {
            ProfileBundle::Single(profile) => vec![profile],
            ProfileBundle::Bulk(profiles) => profiles,
        }
    }
}
