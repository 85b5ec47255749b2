//! Animal entity - one head of livestock in the herd book.
//!
//! An animal is created on intake with `Active` status and empty exit
//! fields, and is mutated only on exit, when status flips to `Inactive`
//! and the exit fields are set together. Weight, cost, and pasture are
//! frozen at intake.

use super::{Record, Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed set of livestock categories.
///
/// The per-head categories (unweaned calves) are priced flat per head by
/// the valuation engine; every other category is priced by live weight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Unweaned male calf, priced per head
    #[serde(rename = "Calf-Male")]
    CalfMale,
    /// Unweaned female calf, priced per head
    #[serde(rename = "Calf-Female")]
    CalfFemale,
    /// Weaned young male
    #[serde(rename = "Weaned-Male")]
    WeanedMale,
    /// Young female that has not calved
    Heifer,
    /// Lean steer bought for fattening
    #[serde(rename = "Feeder-Steer")]
    FeederSteer,
    /// Finished steer ready for sale
    #[serde(rename = "Finished-Steer")]
    FinishedSteer,
    /// Adult female
    Cow,
    /// Adult female with calf at foot
    #[serde(rename = "Cow-Nursing")]
    CowNursing,
    /// Pregnant adult female
    #[serde(rename = "Cow-Pregnant")]
    CowPregnant,
    /// Open (non-pregnant, non-nursing) adult female
    #[serde(rename = "Cow-Open")]
    CowOpen,
    /// Breeding bull
    Bull,
}

impl Category {
    /// Whether this category is quoted flat per head rather than by weight.
    #[must_use]
    pub const fn is_priced_per_head(self) -> bool {
        matches!(self, Self::CalfMale | Self::CalfFemale)
    }
}

/// Why an animal left the property.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitReason {
    /// Sold
    Sale,
    /// Died on the property
    Death,
    /// Slaughtered for ranch consumption
    Consumption,
    /// Stolen
    Theft,
}

/// One row of the livestock table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    /// Unique identifier assigned at intake
    pub id: u64,
    /// Ear-tag label, free text, not guaranteed unique
    pub tag: String,
    /// Livestock category
    pub category: Category,
    /// Live weight in kilograms at intake, non-negative
    pub weight_kg: f64,
    /// Purchase cost, non-negative
    pub purchase_cost: f64,
    /// Date the animal entered the property
    pub entry_date: NaiveDate,
    /// Name of the pasture it grazes - a weak reference, not enforced
    pub pasture: String,
    /// Active while on the property, Inactive after exit
    pub status: Status,
    /// Date of exit, set together with `exit_reason` and `status`
    pub exit_date: Option<NaiveDate>,
    /// Reason for exit, set together with `exit_date` and `status`
    pub exit_reason: Option<ExitReason>,
    /// Realized proceeds recorded on exit (even share of the batch total)
    pub sale_value: Option<f64>,
}

impl Animal {
    /// Whether the animal is presently on the property.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

impl Record for Animal {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_only_calf_categories_are_priced_per_head() {
        assert!(Category::CalfMale.is_priced_per_head());
        assert!(Category::CalfFemale.is_priced_per_head());
        assert!(!Category::WeanedMale.is_priced_per_head());
        assert!(!Category::Heifer.is_priced_per_head());
        assert!(!Category::FinishedSteer.is_priced_per_head());
        assert!(!Category::Cow.is_priced_per_head());
        assert!(!Category::Bull.is_priced_per_head());
    }

    #[test]
    fn test_animal_row_serializes_with_stable_labels() {
        // Labels are part of the on-disk format; renames must stay stable.
        let animal = Animal {
            id: 7,
            tag: "BR-041".to_string(),
            category: Category::FeederSteer,
            weight_kg: 310.0,
            purchase_cost: 2500.0,
            entry_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            pasture: "Pasture 01".to_string(),
            status: Status::Active,
            exit_date: None,
            exit_reason: None,
            sale_value: None,
        };

        let mut writer = csv::Writer::from_writer(vec![]);
        writer.serialize(&animal).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let mut lines = out.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,tag,category,weight_kg,purchase_cost,entry_date,pasture,status,exit_date,exit_reason,sale_value"
        );
        assert_eq!(
            lines.next().unwrap(),
            "7,BR-041,Feeder-Steer,310.0,2500.0,2024-03-10,Pasture 01,Active,,,"
        );
    }

    #[test]
    fn test_empty_exit_fields_deserialize_as_none() {
        let data = "id,tag,category,weight_kg,purchase_cost,entry_date,pasture,status,exit_date,exit_reason,sale_value\n\
                    7,BR-041,Cow,400.0,3000.0,2024-03-10,Pasture 01,Active,,,\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let animal: Animal = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(animal.exit_date, None);
        assert_eq!(animal.exit_reason, None);
        assert_eq!(animal.sale_value, None);
        assert!(animal.is_active());
    }
}
