use onward_core::{FareBundle, FareFeature};

fn feature(name: &str, included: bool) -> FareFeature {
    FareFeature::new(name, included, None)
}

fn feature_with(name: &str, included: bool, detail: &str) -> FareFeature {
    FareFeature::new(name, included, Some(detail))
}

/// The fixed fare catalog in display order: basic, main, business.
pub fn fare_bundles() -> Vec<FareBundle> {
    vec![
        FareBundle {
            id: "basic".to_string(),
            name: "Basic".to_string(),
            price: 0,
            popular: false,
            features: vec![
                feature("Personal item", true),
                feature("Carry-on bag", false),
                feature("Checked bag", false),
                feature("Seat selection", false),
                feature_with("Changes", false, "Fee applies"),
                feature_with("Cancellation", false, "Non-refundable"),
            ],
        },
        FareBundle {
            id: "main".to_string(),
            name: "Main".to_string(),
            price: 75,
            popular: true,
            features: vec![
                feature("Personal item", true),
                feature("Carry-on bag", true),
                feature_with("Checked bag", true, "1 bag"),
                feature_with("Seat selection", true, "Standard seats"),
                feature_with("Changes", true, "Fee applies"),
                feature_with("Cancellation", false, "Partial refund"),
                feature("Priority boarding", true),
            ],
        },
        FareBundle {
            id: "business".to_string(),
            name: "Business".to_string(),
            price: 250,
            popular: false,
            features: vec![
                feature("Personal item", true),
                feature("Carry-on bag", true),
                feature_with("Checked bag", true, "2 bags"),
                feature_with("Seat selection", true, "Premium seats"),
                feature_with("Changes", true, "Free changes"),
                feature_with("Cancellation", true, "Full refund"),
                feature("Priority boarding", true),
                feature("Lounge access", true),
                feature("Extra legroom", true),
            ],
        },
    ]
}

pub fn fare_by_id(id: &str) -> Option<FareBundle> {
    fare_bundles().into_iter().find(|f| f.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_prices() {
        let fares = fare_bundles();
        let ids: Vec<_> = fares.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["basic", "main", "business"]);
        let prices: Vec<_> = fares.iter().map(|f| f.price).collect();
        assert_eq!(prices, vec![0, 75, 250]);
    }

    #[test]
    fn test_only_main_is_popular() {
        let popular: Vec<_> = fare_bundles().into_iter().filter(|f| f.popular).map(|f| f.id).collect();
        assert_eq!(popular, vec!["main".to_string()]);
    }

    #[test]
    fn test_lookup() {
        let business = fare_by_id("business").unwrap();
        assert!(business.includes("Lounge access"));
        assert_eq!(business.price_label(), "+$250");
        assert_eq!(fare_by_id("basic").unwrap().price_label(), "Included");
        assert!(!fare_by_id("main").unwrap().includes("Cancellation"));
        assert!(fare_by_id("first").is_none());
    }
}
