//! Employment status.

labeled_enum! {
    /// Whether a staff member is currently employed.
    StaffStatus as "staff_status" {
        Active => "active", "فعال",
        Inactive => "inactive", "غیر فعال",
        Resigned => "resigned", "مستعفی",
    }
}

impl Default for StaffStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl StaffStatus {
    /// Whether the member counts towards headcount and payroll.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}
