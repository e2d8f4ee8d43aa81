//! Income types.

labeled_enum! {
    /// The religious or donation category of an income entry.
    IncomeType as "income_type" {
        Zakat => "zakat", "زکوٰۃ",
        Sadaqat => "sadaqat", "صدقات",
        Fitrana => "fitrana", "فطرانہ",
        Donation => "donation", "عطیات",
        MonthlyDonation => "monthly_donation", "ماہانہ عطیہ",
        YearlyDonation => "yearly_donation", "سالانہ عطیہ",
        OnetimeDonation => "onetime_donation", "ایک وقتی عطیہ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_multi_word_variants_use_underscored_values() {
        assert_eq!(IncomeType::MonthlyDonation.as_str(), "monthly_donation");
        assert_eq!(
            IncomeType::from_str("onetime_donation").unwrap(),
            IncomeType::OnetimeDonation
        );
        assert_eq!(IncomeType::Zakat.label(), "زکوٰۃ");
    }
}
