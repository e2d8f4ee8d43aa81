//! Expense categories.

labeled_enum! {
    /// What an expense was spent on.
    ExpenseCategory as "expense_category" {
        Salary => "salary", "تنخواہ",
        Food => "food", "کھانا",
        Electricity => "electricity", "بجلی",
        Water => "water", "پانی",
        Gas => "gas", "گیس",
        Construction => "construction", "تعمیرات",
        Repair => "repair", "مرمت",
        Stationery => "stationery", "اسٹیشنری",
        Transport => "transport", "ٹرانسپورٹ",
        Other => "other", "دیگر",
    }
}
