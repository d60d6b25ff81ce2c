#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Crime category taxonomy and dataset year types.
//!
//! This crate defines the canonical crime category labels used across the
//! entire tokyo-crime-map system. The labels are the column names of the
//! Tokyo Metropolitan Police per-district (丁目) crime count dataset: the
//! grand total `総合計` plus 36 categories arranged in five groups, each
//! group led by its own `計` (subtotal) column.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The five crime groups of the Tokyo Metropolitan Police taxonomy.
///
/// Every [`CrimeCategory`] except the grand total belongs to exactly one
/// group; each group also carries its own subtotal category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CrimeGroup {
    /// 凶悪犯: felonious crimes (robbery and related).
    #[strum(serialize = "凶悪犯")]
    #[serde(rename = "凶悪犯")]
    Felonious,
    /// 粗暴犯: violent crimes (assault, injury, intimidation, extortion).
    #[strum(serialize = "粗暴犯")]
    #[serde(rename = "粗暴犯")]
    Violent,
    /// 侵入窃盗: theft by breaking into premises.
    #[strum(serialize = "侵入窃盗")]
    #[serde(rename = "侵入窃盗")]
    IntrusionTheft,
    /// 非侵入窃盗: theft without intrusion (vehicles, snatching, shoplifting).
    #[strum(serialize = "非侵入窃盗")]
    #[serde(rename = "非侵入窃盗")]
    NonIntrusionTheft,
    /// その他: fraud, embezzlement, gambling, and remaining penal code offenses.
    #[strum(serialize = "その他")]
    #[serde(rename = "その他")]
    Other,
}

impl CrimeGroup {
    /// Returns all groups in dataset column order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Felonious,
            Self::Violent,
            Self::IntrusionTheft,
            Self::NonIntrusionTheft,
            Self::Other,
        ]
    }

    /// Returns the subtotal category that leads this group's columns.
    #[must_use]
    pub const fn total(self) -> CrimeCategory {
        match self {
            Self::Felonious => CrimeCategory::FeloniousTotal,
            Self::Violent => CrimeCategory::ViolentTotal,
            Self::IntrusionTheft => CrimeCategory::IntrusionTheftTotal,
            Self::NonIntrusionTheft => CrimeCategory::NonIntrusionTheftTotal,
            Self::Other => CrimeCategory::OtherTotal,
        }
    }
}

/// One selectable crime count column of the per-district dataset.
///
/// The string form of every variant is the exact Japanese column label,
/// so `Display`/`FromStr`/serde all speak the dataset's own vocabulary.
/// Variants are declared in dataset column order; [`CrimeCategory::all`]
/// preserves it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CrimeCategory {
    /// 総合計: grand total across all categories.
    #[strum(serialize = "総合計")]
    #[serde(rename = "総合計")]
    GrandTotal,

    // ── 凶悪犯 ──────────────────────────────────────────
    /// 凶悪犯計: felonious crime subtotal.
    #[strum(serialize = "凶悪犯計")]
    #[serde(rename = "凶悪犯計")]
    FeloniousTotal,
    /// 強盗: robbery.
    #[strum(serialize = "強盗")]
    #[serde(rename = "強盗")]
    Robbery,
    /// その他1: other felonious crimes.
    #[strum(serialize = "その他1")]
    #[serde(rename = "その他1")]
    FeloniousOther,

    // ── 粗暴犯 ──────────────────────────────────────────
    /// 粗暴犯計: violent crime subtotal.
    #[strum(serialize = "粗暴犯計")]
    #[serde(rename = "粗暴犯計")]
    ViolentTotal,
    /// 凶器準備集合: assembly with deadly weapons.
    #[strum(serialize = "凶器準備集合")]
    #[serde(rename = "凶器準備集合")]
    WeaponsGathering,
    /// 暴行: assault.
    #[strum(serialize = "暴行")]
    #[serde(rename = "暴行")]
    Assault,
    /// 傷害: bodily injury.
    #[strum(serialize = "傷害")]
    #[serde(rename = "傷害")]
    Injury,
    /// 脅迫: intimidation.
    #[strum(serialize = "脅迫")]
    #[serde(rename = "脅迫")]
    Intimidation,
    /// 恐喝: extortion.
    #[strum(serialize = "恐喝")]
    #[serde(rename = "恐喝")]
    Extortion,

    // ── 侵入窃盗 ────────────────────────────────────────
    /// 侵入窃盗計: intrusion theft subtotal.
    #[strum(serialize = "侵入窃盗計")]
    #[serde(rename = "侵入窃盗計")]
    IntrusionTheftTotal,
    /// 金庫破り: safe breaking.
    #[strum(serialize = "金庫破り")]
    #[serde(rename = "金庫破り")]
    SafeBreaking,
    /// 学校荒し: school break-in.
    #[strum(serialize = "学校荒し")]
    #[serde(rename = "学校荒し")]
    SchoolBreakIn,
    /// 事務所荒し: office break-in.
    #[strum(serialize = "事務所荒し")]
    #[serde(rename = "事務所荒し")]
    OfficeBreakIn,
    /// 出店荒し: shop break-in.
    #[strum(serialize = "出店荒し")]
    #[serde(rename = "出店荒し")]
    StoreBreakIn,
    /// 空き巣: burglary of an empty home.
    #[strum(serialize = "空き巣")]
    #[serde(rename = "空き巣")]
    EmptyHomeBurglary,
    /// 忍込み: night-time intrusion while residents sleep.
    #[strum(serialize = "忍込み")]
    #[serde(rename = "忍込み")]
    SleepIntrusion,
    /// 居空き: intrusion while residents are present and awake.
    #[strum(serialize = "居空き")]
    #[serde(rename = "居空き")]
    OccupiedHomeIntrusion,
    /// その他2: other intrusion theft.
    #[strum(serialize = "その他2")]
    #[serde(rename = "その他2")]
    IntrusionTheftOther,

    // ── 非侵入窃盗 ──────────────────────────────────────
    /// 非侵入窃盗計: non-intrusion theft subtotal.
    #[strum(serialize = "非侵入窃盗計")]
    #[serde(rename = "非侵入窃盗計")]
    NonIntrusionTheftTotal,
    /// 自動車盗: car theft.
    #[strum(serialize = "自動車盗")]
    #[serde(rename = "自動車盗")]
    CarTheft,
    /// オートバイ盗: motorcycle theft.
    #[strum(serialize = "オートバイ盗")]
    #[serde(rename = "オートバイ盗")]
    MotorcycleTheft,
    /// 自転車盗: bicycle theft.
    #[strum(serialize = "自転車盗")]
    #[serde(rename = "自転車盗")]
    BicycleTheft,
    /// 車上ねらい: theft from a parked vehicle.
    #[strum(serialize = "車上ねらい")]
    #[serde(rename = "車上ねらい")]
    TheftFromVehicle,
    /// 自販機ねらい: vending machine theft.
    #[strum(serialize = "自販機ねらい")]
    #[serde(rename = "自販機ねらい")]
    VendingMachineTheft,
    /// 工事場ねらい: construction site theft.
    #[strum(serialize = "工事場ねらい")]
    #[serde(rename = "工事場ねらい")]
    ConstructionSiteTheft,
    /// すり: pickpocketing.
    #[strum(serialize = "すり")]
    #[serde(rename = "すり")]
    Pickpocketing,
    /// ひったくり: bag snatching.
    #[strum(serialize = "ひったくり")]
    #[serde(rename = "ひったくり")]
    BagSnatching,
    /// 置引き: theft of unattended belongings.
    #[strum(serialize = "置引き")]
    #[serde(rename = "置引き")]
    LuggageLifting,
    /// 万引き: shoplifting.
    #[strum(serialize = "万引き")]
    #[serde(rename = "万引き")]
    Shoplifting,
    /// その他3: other non-intrusion theft.
    #[strum(serialize = "その他3")]
    #[serde(rename = "その他3")]
    NonIntrusionTheftOther,

    // ── その他 ──────────────────────────────────────────
    /// その他計: subtotal of the remaining offenses.
    #[strum(serialize = "その他計")]
    #[serde(rename = "その他計")]
    OtherTotal,
    /// 詐欺: fraud.
    #[strum(serialize = "詐欺")]
    #[serde(rename = "詐欺")]
    Fraud,
    /// 占有離脱物横領: embezzlement of lost or abandoned property.
    #[strum(serialize = "占有離脱物横領")]
    #[serde(rename = "占有離脱物横領")]
    LostPropertyEmbezzlement,
    /// その他知能犯: other white-collar offenses.
    #[strum(serialize = "その他知能犯")]
    #[serde(rename = "その他知能犯")]
    IntellectualOther,
    /// 賭博: gambling.
    #[strum(serialize = "賭博")]
    #[serde(rename = "賭博")]
    Gambling,
    /// その他刑法犯: other penal code offenses.
    #[strum(serialize = "その他刑法犯")]
    #[serde(rename = "その他刑法犯")]
    PenalCodeOther,
}

impl CrimeCategory {
    /// Returns the group this category belongs to, or `None` for the
    /// grand total, which spans all groups.
    #[must_use]
    pub const fn group(self) -> Option<CrimeGroup> {
        match self {
            Self::GrandTotal => None,

            Self::FeloniousTotal | Self::Robbery | Self::FeloniousOther => {
                Some(CrimeGroup::Felonious)
            }

            Self::ViolentTotal
            | Self::WeaponsGathering
            | Self::Assault
            | Self::Injury
            | Self::Intimidation
            | Self::Extortion => Some(CrimeGroup::Violent),

            Self::IntrusionTheftTotal
            | Self::SafeBreaking
            | Self::SchoolBreakIn
            | Self::OfficeBreakIn
            | Self::StoreBreakIn
            | Self::EmptyHomeBurglary
            | Self::SleepIntrusion
            | Self::OccupiedHomeIntrusion
            | Self::IntrusionTheftOther => Some(CrimeGroup::IntrusionTheft),

            Self::NonIntrusionTheftTotal
            | Self::CarTheft
            | Self::MotorcycleTheft
            | Self::BicycleTheft
            | Self::TheftFromVehicle
            | Self::VendingMachineTheft
            | Self::ConstructionSiteTheft
            | Self::Pickpocketing
            | Self::BagSnatching
            | Self::LuggageLifting
            | Self::Shoplifting
            | Self::NonIntrusionTheftOther => Some(CrimeGroup::NonIntrusionTheft),

            Self::OtherTotal
            | Self::Fraud
            | Self::LostPropertyEmbezzlement
            | Self::IntellectualOther
            | Self::Gambling
            | Self::PenalCodeOther => Some(CrimeGroup::Other),
        }
    }

    /// Whether this category is a total column (the grand total or one of
    /// the five group subtotals) rather than a specific offense.
    #[must_use]
    pub const fn is_total(self) -> bool {
        matches!(
            self,
            Self::GrandTotal
                | Self::FeloniousTotal
                | Self::ViolentTotal
                | Self::IntrusionTheftTotal
                | Self::NonIntrusionTheftTotal
                | Self::OtherTotal
        )
    }

    /// Returns all categories belonging to the given group, subtotal
    /// included, in dataset column order.
    #[must_use]
    pub fn for_group(group: CrimeGroup) -> Vec<Self> {
        Self::all()
            .iter()
            .copied()
            .filter(|category| category.group() == Some(group))
            .collect()
    }

    /// Returns all selectable categories in dataset column order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::GrandTotal,
            Self::FeloniousTotal,
            Self::Robbery,
            Self::FeloniousOther,
            Self::ViolentTotal,
            Self::WeaponsGathering,
            Self::Assault,
            Self::Injury,
            Self::Intimidation,
            Self::Extortion,
            Self::IntrusionTheftTotal,
            Self::SafeBreaking,
            Self::SchoolBreakIn,
            Self::OfficeBreakIn,
            Self::StoreBreakIn,
            Self::EmptyHomeBurglary,
            Self::SleepIntrusion,
            Self::OccupiedHomeIntrusion,
            Self::IntrusionTheftOther,
            Self::NonIntrusionTheftTotal,
            Self::CarTheft,
            Self::MotorcycleTheft,
            Self::BicycleTheft,
            Self::TheftFromVehicle,
            Self::VendingMachineTheft,
            Self::ConstructionSiteTheft,
            Self::Pickpocketing,
            Self::BagSnatching,
            Self::LuggageLifting,
            Self::Shoplifting,
            Self::NonIntrusionTheftOther,
            Self::OtherTotal,
            Self::Fraud,
            Self::LostPropertyEmbezzlement,
            Self::IntellectualOther,
            Self::Gambling,
            Self::PenalCodeOther,
        ]
    }
}

/// A dataset year for which a per-district crime count file exists.
///
/// The string form is the bare four-digit year, matching the dataset
/// file name prefix (`{year}_東京都犯罪件数.geojson`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum DataYear {
    /// 2019 dataset.
    #[strum(serialize = "2019")]
    #[serde(rename = "2019")]
    Y2019,
    /// 2020 dataset.
    #[strum(serialize = "2020")]
    #[serde(rename = "2020")]
    Y2020,
    /// 2021 dataset.
    #[strum(serialize = "2021")]
    #[serde(rename = "2021")]
    Y2021,
    /// 2022 dataset.
    #[strum(serialize = "2022")]
    #[serde(rename = "2022")]
    Y2022,
    /// 2023 dataset.
    #[strum(serialize = "2023")]
    #[serde(rename = "2023")]
    Y2023,
}

impl DataYear {
    /// Returns all supported years, oldest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Y2019, Self::Y2020, Self::Y2021, Self::Y2022, Self::Y2023]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_group_consistency() {
        for category in CrimeCategory::all() {
            let Some(group) = category.group() else {
                assert_eq!(*category, CrimeCategory::GrandTotal);
                continue;
            };
            let members = CrimeCategory::for_group(group);
            assert!(
                members.contains(category),
                "{category:?} claims group {group:?} but isn't in for_group result"
            );
        }
    }

    #[test]
    fn every_group_total_is_a_total_in_its_own_group() {
        for group in CrimeGroup::all() {
            let total = group.total();
            assert!(total.is_total(), "{total:?} should be a total column");
            assert_eq!(total.group(), Some(*group));
        }
    }

    #[test]
    fn thirty_six_categories_plus_grand_total() {
        assert_eq!(CrimeCategory::all().len(), 37);
        let non_grand = CrimeCategory::all()
            .iter()
            .filter(|c| **c != CrimeCategory::GrandTotal)
            .count();
        assert_eq!(non_grand, 36);
    }

    #[test]
    fn labels_round_trip() {
        for category in CrimeCategory::all() {
            let label = category.to_string();
            let parsed: CrimeCategory = label.parse().unwrap();
            assert_eq!(parsed, *category);
        }
        assert_eq!(
            "強盗".parse::<CrimeCategory>().unwrap(),
            CrimeCategory::Robbery
        );
        assert!("存在しない分類".parse::<CrimeCategory>().is_err());
    }

    #[test]
    fn group_sizes_match_dataset_columns() {
        assert_eq!(CrimeCategory::for_group(CrimeGroup::Felonious).len(), 3);
        assert_eq!(CrimeCategory::for_group(CrimeGroup::Violent).len(), 6);
        assert_eq!(CrimeCategory::for_group(CrimeGroup::IntrusionTheft).len(), 9);
        assert_eq!(
            CrimeCategory::for_group(CrimeGroup::NonIntrusionTheft).len(),
            12
        );
        assert_eq!(CrimeCategory::for_group(CrimeGroup::Other).len(), 6);
    }

    #[test]
    fn year_labels_round_trip() {
        for year in DataYear::all() {
            let parsed: DataYear = year.to_string().parse().unwrap();
            assert_eq!(parsed, *year);
        }
        assert_eq!("2023".parse::<DataYear>().unwrap(), DataYear::Y2023);
        assert!("1999".parse::<DataYear>().is_err());
    }
}
