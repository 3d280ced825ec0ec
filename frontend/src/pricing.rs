//! Fee tables for every service.
//!
//! Amounts are in whole rupees and shown on the review step before
//! payment. They are display-side only: the backend re-prices every
//! application from its own tables before capture.

use crate::types::{ApplicantType, FssaiTier, PatentKind};
use serde::{Deserialize, Serialize};

/// Itemized fee for one application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    /// FilingDesk professional fee
    pub professional_fee: u32,
    /// Statutory/government fee collected on behalf of the authority
    pub government_fee: u32,
    /// Sum of the two, the amount charged
    pub total: u32,
}

impl FeeBreakdown {
    pub fn new(professional_fee: u32, government_fee: u32) -> Self {
        Self {
            professional_fee,
            government_fee,
            total: professional_fee + government_fee,
        }
    }
}

/// Private limited company registration.
///
/// Stamp duty scales with the authorized capital band.
pub fn company_registration(authorized_capital: u32) -> FeeBreakdown {
    let stamp_duty = if authorized_capital <= 100_000 {
        1_500
    } else if authorized_capital <= 1_000_000 {
        2_500
    } else {
        4_500
    };
    FeeBreakdown::new(6_999, stamp_duty)
}

/// Trademark registration.
///
/// Government fee is per Nice class and depends on the applicant type
/// (individuals and small enterprises pay the concessional rate).
pub fn trademark(classes: u32, applicant: ApplicantType) -> FeeBreakdown {
    let per_class = match applicant {
        ApplicantType::Individual => 4_500,
        ApplicantType::Company => 9_000,
    };
    FeeBreakdown::new(1_999, per_class * classes)
}

/// Patent filing, provisional or complete specification.
pub fn patent(kind: PatentKind) -> FeeBreakdown {
    match kind {
        PatentKind::Provisional => FeeBreakdown::new(14_999, 1_600),
        PatentKind::Complete => FeeBreakdown::new(24_999, 4_000),
    }
}

/// PF & ESI employer registration.
///
/// Flat statutory filing, effort scales with head count.
pub fn labour_compliance(employees: u32) -> FeeBreakdown {
    let professional = if employees <= 20 {
        3_999
    } else if employees <= 100 {
        5_999
    } else {
        8_999
    };
    FeeBreakdown::new(professional, 0)
}

/// FSSAI food business license, charged per year of validity.
pub fn fssai_license(tier: FssaiTier, years: u32) -> FeeBreakdown {
    let (professional, government_per_year) = match tier {
        FssaiTier::Basic => (1_499, 100),
        FssaiTier::State => (2_999, 2_000),
        FssaiTier::Central => (4_999, 7_500),
    };
    FeeBreakdown::new(professional, government_per_year * years)
}

/// Class 3 digital signature certificate by validity.
pub fn digital_signature(years: u32) -> FeeBreakdown {
    let professional = match years {
        1 => 1_499,
        2 => 1_999,
        _ => 2_499,
    };
    FeeBreakdown::new(professional, 0)
}

/// Format an amount with Indian digit grouping: ₹12,34,567.
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("₹{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_parts() {
        let fee = FeeBreakdown::new(1_999, 4_500);
        assert_eq!(fee.total, 6_499);
    }

    #[test]
    fn company_stamp_duty_bands() {
        assert_eq!(company_registration(100_000).government_fee, 1_500);
        assert_eq!(company_registration(100_001).government_fee, 2_500);
        assert_eq!(company_registration(1_000_000).government_fee, 2_500);
        assert_eq!(company_registration(5_000_000).government_fee, 4_500);
    }

    #[test]
    fn trademark_scales_per_class() {
        let individual = trademark(3, ApplicantType::Individual);
        assert_eq!(individual.government_fee, 13_500);
        let company = trademark(3, ApplicantType::Company);
        assert_eq!(company.government_fee, 27_000);
        assert_eq!(individual.professional_fee, company.professional_fee);
    }

    #[test]
    fn complete_patent_costs_more_than_provisional() {
        assert!(patent(PatentKind::Complete).total > patent(PatentKind::Provisional).total);
    }

    #[test]
    fn labour_head_count_bands() {
        assert_eq!(labour_compliance(20).professional_fee, 3_999);
        assert_eq!(labour_compliance(21).professional_fee, 5_999);
        assert_eq!(labour_compliance(101).professional_fee, 8_999);
        assert_eq!(labour_compliance(10).government_fee, 0);
    }

    #[test]
    fn fssai_government_fee_per_year() {
        assert_eq!(fssai_license(FssaiTier::Basic, 5).government_fee, 500);
        assert_eq!(fssai_license(FssaiTier::Central, 2).government_fee, 15_000);
    }

    #[test]
    fn dsc_longer_validity_costs_more() {
        assert!(digital_signature(3).total > digital_signature(1).total);
        assert_eq!(digital_signature(2).total, 1_999);
    }

    #[test]
    fn inr_formatting_groups_indian_style() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(1_499), "₹1,499");
        assert_eq!(format_inr(13_500), "₹13,500");
        assert_eq!(format_inr(123_456), "₹1,23,456");
        assert_eq!(format_inr(1_234_567), "₹12,34,567");
        assert_eq!(format_inr(123_456_789), "₹12,34,56,789");
    }

    #[test]
    fn fee_breakdown_wire_names() {
        let value = serde_json::to_value(FeeBreakdown::new(100, 50)).unwrap();
        assert_eq!(value["professionalFee"], 100);
        assert_eq!(value["governmentFee"], 50);
        assert_eq!(value["total"], 150);
    }
}
