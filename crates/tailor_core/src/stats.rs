/// One of the headline statistic cards. Values are fixed mock figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u32,
    pub change: Option<&'static str>,
    pub positive: bool,
}

pub fn mock_stats() -> [StatCard; 4] {
    [
        StatCard {
            label: "Total Applications",
            value: 47,
            change: Some("+12%"),
            positive: true,
        },
        StatCard {
            label: "Completed",
            value: 32,
            change: None,
            positive: false,
        },
        StatCard {
            label: "Pending",
            value: 12,
            change: None,
            positive: false,
        },
        StatCard {
            label: "Failed",
            value: 3,
            change: Some("-2"),
            positive: true,
        },
    ]
}
