/// Built-in keyword table
///
/// Order matters: the first category with a matching keyword wins.
pub(crate) const DEFAULT_RULES: &[(&str, &[&str])] = &[
    (
        "Meals & Entertainment",
        &[
            "restaurant",
            "cafe",
            "coffee",
            "starbucks",
            "mcdonald",
            "subway",
            "pizza",
            "burger",
            "food",
            "dining",
            "bar",
            "pub",
            "grill",
            "kitchen",
            "bistro",
            "tim hortons",
            "wendy",
            "kfc",
            "taco bell",
            "chipotle",
            "panera",
        ],
    ),
    (
        "Travel",
        &[
            "airline",
            "hotel",
            "uber",
            "lyft",
            "taxi",
            "parking",
            "rental car",
            "airbnb",
            "flight",
            "airport",
            "gas station",
            "shell",
            "esso",
            "petro",
            "transit",
            "train",
            "bus",
        ],
    ),
    (
        "Office Supplies",
        &[
            "staples",
            "office depot",
            "amazon",
            "paper",
            "supply",
            "pen",
            "printer",
        ],
    ),
    (
        "Equipment",
        &[
            "home depot",
            "lowes",
            "hardware",
            "tools",
            "equipment",
            "best buy",
            "electronics",
            "computer",
            "laptop",
        ],
    ),
    (
        "Software & Subscriptions",
        &[
            "microsoft",
            "adobe",
            "google",
            "subscription",
            "saas",
            "software",
            "zoom",
            "slack",
            "dropbox",
            "netflix",
            "spotify",
            "annual fee",
        ],
    ),
    (
        "Utilities",
        &[
            "electric",
            "power",
            "gas utility",
            "water",
            "internet",
            "phone",
            "hydro",
            "bell",
            "rogers",
            "telus",
        ],
    ),
    (
        "Insurance",
        &["insurance", "life ins", "health ins", "liability"],
    ),
    (
        "Professional Services",
        &[
            "legal",
            "accounting",
            "consultant",
            "lawyer",
            "cpa",
            "bookkeeping",
        ],
    ),
    (
        "Marketing & Advertising",
        &[
            "google ads",
            "facebook ads",
            "advertising",
            "marketing",
            "social media",
            "mailchimp",
            "constant contact",
        ],
    ),
    (
        "Bank Fees",
        &[
            "bank fee",
            "service charge",
            "overdraft",
            "atm fee",
            "wire transfer",
            "monthly fee",
            "transaction fee",
        ],
    ),
];
