use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Patient coverage category
///
/// Exactly one is active per billing session; "nothing selected" is
/// `Unspecified`. Unrecognized wire tags also land on `Unspecified`, so
/// every tag maps to a defined discount policy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CoverageCategory {
    /// Universal health coverage, flat 30-baht co-pay
    Universal,
    /// Civil servant benefit, 10% reduction
    CivilServant,
    /// Social security, fully covered
    SocialSecurity,
    /// Self-pay
    Private,
    /// Company or private insurer settles outside this bill
    Company,
    /// No category selected
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Selectable coverage option for intake forms
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CoverageOption {
    pub value: CoverageCategory,
    pub label: &'static str,
}

impl CoverageCategory {
    /// Every category, selection-list order first
    pub const ALL: [CoverageCategory; 6] = [
        CoverageCategory::Universal,
        CoverageCategory::CivilServant,
        CoverageCategory::SocialSecurity,
        CoverageCategory::Private,
        CoverageCategory::Company,
        CoverageCategory::Unspecified,
    ];

    /// Fixed display label per category
    pub fn label(&self) -> &'static str {
        match self {
            CoverageCategory::Universal => "บัตรทอง (30 บาท)",
            CoverageCategory::CivilServant => "ข้าราชการ",
            CoverageCategory::SocialSecurity => "ประกันสังคม",
            CoverageCategory::Private => "จ่ายเอง",
            CoverageCategory::Company => "บริษัท/ประกันเอกชน",
            CoverageCategory::Unspecified => "ไม่ระบุ",
        }
    }

    /// Categories a clerk can pick on the intake form
    ///
    /// `Unspecified` is the absence of a selection, not an option.
    pub fn selectable() -> Vec<CoverageOption> {
        Self::ALL
            .iter()
            .filter(|category| **category != CoverageCategory::Unspecified)
            .map(|category| CoverageOption {
                value: *category,
                label: category.label(),
            })
            .collect()
    }
}
