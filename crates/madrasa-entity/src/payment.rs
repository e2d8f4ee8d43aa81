//! Payment methods shared by expense and income records.

labeled_enum! {
    /// How money changed hands.
    PaymentMethod as "payment_method" {
        Cash => "cash", "نقد",
        BankTransfer => "bank_transfer", "بینک ٹرانسفر",
        Cheque => "cheque", "چیک",
        Online => "online", "آن لائن",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_wire_values_round_trip_through_from_str() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_str(method.as_str()).unwrap(), *method);
        }
    }

    #[test]
    fn test_serde_uses_snake_case_wire_value() {
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();
        assert_eq!(json, "\"bank_transfer\"");
        assert_eq!(PaymentMethod::BankTransfer.label(), "بینک ٹرانسفر");
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let err = PaymentMethod::from_str("barter").unwrap_err();
        assert_eq!(err.kind, madrasa_core::error::ErrorKind::Validation);
    }
}
