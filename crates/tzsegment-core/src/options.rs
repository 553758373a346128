//! Static option lists for month and day-type selectors.

use serde::Serialize;

use crate::models::{DayType, DayTypeFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthOption {
    pub value: u32,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayTypeOption {
    pub value: DayTypeFilter,
    pub label: &'static str,
}

pub const MONTH_OPTIONS: [MonthOption; 12] = [
    MonthOption {
        value: 1,
        label: "Enero",
    },
    MonthOption {
        value: 2,
        label: "Febrero",
    },
    MonthOption {
        value: 3,
        label: "Marzo",
    },
    MonthOption {
        value: 4,
        label: "Abril",
    },
    MonthOption {
        value: 5,
        label: "Mayo",
    },
    MonthOption {
        value: 6,
        label: "Junio",
    },
    MonthOption {
        value: 7,
        label: "Julio",
    },
    MonthOption {
        value: 8,
        label: "Agosto",
    },
    MonthOption {
        value: 9,
        label: "Septiembre",
    },
    MonthOption {
        value: 10,
        label: "Octubre",
    },
    MonthOption {
        value: 11,
        label: "Noviembre",
    },
    MonthOption {
        value: 12,
        label: "Diciembre",
    },
];

/// Day-type choices; the last entry clears the filter.
pub const DAY_TYPE_OPTIONS: [DayTypeOption; 4] = [
    DayTypeOption {
        value: DayTypeFilter::Specific(DayType::Weekday),
        label: "Laboral",
    },
    DayTypeOption {
        value: DayTypeFilter::Specific(DayType::Saturday),
        label: "Sábado",
    },
    DayTypeOption {
        value: DayTypeFilter::Specific(DayType::Sunday),
        label: "Domingo",
    },
    DayTypeOption {
        value: DayTypeFilter::Any,
        label: "Todos",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_are_ordered_one_to_twelve() {
        let values: Vec<u32> = MONTH_OPTIONS.iter().map(|m| m.value).collect();
        assert_eq!(values, (1..=12).collect::<Vec<_>>());
        assert_eq!(MONTH_OPTIONS[9].label, "Octubre");
    }

    #[test]
    fn day_type_options_end_with_any() {
        let specific: Vec<_> = DAY_TYPE_OPTIONS[..3]
            .iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(
            specific,
            DayType::ALL.map(DayTypeFilter::Specific).to_vec()
        );
        assert_eq!(DAY_TYPE_OPTIONS[3].value, DayTypeFilter::Any);
    }

    #[test]
    fn day_type_options_serialization() {
        let json = serde_json::to_value(DAY_TYPE_OPTIONS).unwrap();
        assert_eq!(json[0]["value"], "L");
        assert_eq!(json[3]["value"], false);
        assert_eq!(json[3]["label"], "Todos");
    }
}
