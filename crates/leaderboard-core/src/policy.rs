//! How the `change` indicator evolves across refreshes.

/// Policy for the `change` field of entries after a refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ChangePolicy {
    /// `change` passes through untouched; it is decoration only.
    #[default]
    Cosmetic,

    /// `change` becomes `previous_rank - new_rank` after each refresh.
    Tracked,
}
