use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::flight::{Flight, StopDescriptor};
use crate::iata;
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StopsFilter {
    #[serde(rename = "nonstop")]
    NonStop,
    #[serde(rename = "1stop")]
    OneStop,
    #[serde(rename = "2+stops")]
    TwoPlus,
}

impl StopsFilter {
    pub fn matches(&self, stops: &StopDescriptor) -> bool {
        match self {
            StopsFilter::NonStop => stops.stop_count() == 0,
            StopsFilter::OneStop => stops.stop_count() == 1,
            StopsFilter::TwoPlus => stops.stop_count() >= 2,
        }
    }
}

/// Inclusive price bounds on the per-passenger base fare.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i32,
    pub max: i32,
}

impl PriceRange {
    pub fn contains(&self, price: i32) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Submitted search form. Replaced wholesale on every new search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchParams {
    pub from: String,
    pub to: String,
    pub departure_date: NaiveDate,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    pub passenger_count: u32,
    #[serde(default)]
    pub stops_filter: Option<StopsFilter>,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub airline_filter: Vec<String>,
}

impl SearchParams {
    pub fn new(from: &str, to: &str, departure_date: NaiveDate, passenger_count: u32) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            departure_date,
            return_date: None,
            passenger_count,
            stops_filter: None,
            price_range: None,
            airline_filter: Vec::new(),
        }
    }

    /// Checks the form before anything is dispatched.
    pub fn validate(&self) -> CoreResult<()> {
        if self.from.trim().is_empty() || self.to.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Please fill in departure/arrival locations and departure date.".to_string(),
            ));
        }
        for code in [&self.from, &self.to] {
            if !iata::is_valid_airport_code(code) {
                return Err(CoreError::ValidationError(format!("Invalid airport code: {}", code)));
            }
        }
        if self.from == self.to {
            return Err(CoreError::ValidationError(
                "Departure and arrival airports must differ".to_string(),
            ));
        }
        if self.passenger_count == 0 {
            return Err(CoreError::ValidationError("At least one passenger is required".to_string()));
        }
        if let Some(return_date) = self.return_date {
            if return_date < self.departure_date {
                return Err(CoreError::ValidationError(
                    "Return date cannot be before departure date".to_string(),
                ));
            }
        }
        if let Some(range) = self.price_range {
            if range.min > range.max {
                return Err(CoreError::ValidationError(format!(
                    "Invalid price range: {} > {}",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Keeps the filtered order as-is; no blended score.
    #[default]
    Best,
    Cheapest,
    Fastest,
    Earliest,
}

/// A flight matched by a search, with the party total computed for the query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightResult {
    #[serde(flatten)]
    pub flight: Flight,
    pub total_price: i32,
}

impl FlightResult {
    pub fn new(flight: Flight, passenger_count: u32) -> Self {
        let total_price = flight.total_price(passenger_count);
        Self { flight, total_price }
    }
}

/// Filters `flights` down to the requested route and optional stop, price and
/// airline constraints. An empty result is not an error.
pub fn search(flights: &[Flight], params: &SearchParams) -> Vec<FlightResult> {
    let results: Vec<FlightResult> = flights
        .iter()
        .filter(|f| f.serves_route(&params.from, &params.to))
        .filter(|f| params.stops_filter.map_or(true, |s| s.matches(&f.stops)))
        .filter(|f| params.price_range.map_or(true, |r| r.contains(f.base_price)))
        .filter(|f| params.airline_filter.is_empty() || params.airline_filter.contains(&f.airline_code))
        .map(|f| {
            let mut flight = f.clone();
            flight.departure.date = Some(params.departure_date);
            flight.arrival.date = Some(params.return_date.unwrap_or(params.departure_date));
            FlightResult::new(flight, params.passenger_count)
        })
        .collect();

    tracing::debug!(
        "search {} -> {} matched {} of {} flights",
        params.from,
        params.to,
        results.len(),
        flights.len()
    );
    results
}

/// Post-search refinement used by the results listing. Each empty constraint
/// imposes no restriction; `stops` matches if any selected option matches.
pub fn refine(
    results: &[FlightResult],
    stops: &[StopsFilter],
    max_price: Option<i32>,
    airlines: &[String],
) -> Vec<FlightResult> {
    results
        .iter()
        .filter(|r| stops.is_empty() || stops.iter().any(|s| s.matches(&r.flight.stops)))
        .filter(|r| max_price.map_or(true, |max| r.flight.base_price <= max))
        .filter(|r| airlines.is_empty() || airlines.contains(&r.flight.airline_code))
        .cloned()
        .collect()
}

/// Stable sort by `key`; `Best` leaves the order untouched.
pub fn sort(mut results: Vec<FlightResult>, key: SortKey) -> Vec<FlightResult> {
    match key {
        SortKey::Best => {}
        SortKey::Cheapest => results.sort_by_key(|r| r.flight.base_price),
        SortKey::Fastest => results.sort_by_key(|r| r.flight.duration_minutes),
        SortKey::Earliest => results.sort_by_key(|r| (r.flight.departure.date, r.flight.departure.time)),
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::FlightEndpoint;
    use chrono::NaiveTime;

    fn flight(id: &str, code: &str, from: &str, to: &str, price: i32, minutes: u32, hour: u32) -> Flight {
        Flight::new(
            id,
            "Test Air",
            code,
            &format!("{} {}", code, id),
            FlightEndpoint::new(from, "Origin", NaiveTime::from_hms_opt(hour, 0, 0).unwrap()),
            FlightEndpoint::new(to, "Destination", NaiveTime::from_hms_opt((hour + 7) % 24, 0, 0).unwrap()),
            minutes,
            price,
        )
    }

    fn fleet() -> Vec<Flight> {
        let mut connecting = flight("3", "EC", "JFK", "LHR", 329, 525, 14);
        connecting.stops = StopDescriptor::via(&["DUB"]);
        vec![
            flight("1", "SW", "JFK", "LHR", 459, 435, 8),
            flight("2", "AA", "JFK", "LHR", 389, 450, 11),
            connecting,
            flight("4", "PA", "JFK", "LHR", 589, 435, 18),
            flight("5", "GA", "LAX", "NRT", 689, 675, 10),
        ]
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()
    }

    #[test]
    fn test_search_params_deserialization() {
        let json = r#"
            {
                "from": "JFK",
                "to": "LHR",
                "departure_date": "2025-12-15",
                "passenger_count": 2,
                "stops_filter": "1stop"
            }
        "#;
        let params: SearchParams = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(params.from, "JFK");
        assert_eq!(params.departure_date, date());
        assert_eq!(params.stops_filter, Some(StopsFilter::OneStop));
        assert!(params.airline_filter.is_empty());
    }

    #[test]
    fn test_single_match_scenario() {
        let flights = vec![
            flight("1", "SW", "JFK", "LHR", 459, 435, 8),
            flight("5", "GA", "LAX", "NRT", 689, 675, 10),
        ];
        let params = SearchParams::new("JFK", "LHR", date(), 1);

        let results = search(&flights, &params);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].total_price, 459);
        assert_eq!(results[0].flight.departure.date, Some(date()));
    }

    #[test]
    fn test_results_match_route() {
        let params = SearchParams::new("JFK", "LHR", date(), 2);
        let results = search(&fleet(), &params);
        assert_eq!(results.len(), 4);
        for r in &results {
            assert_eq!(r.flight.departure.airport, "JFK");
            assert_eq!(r.flight.arrival.airport, "LHR");
            assert_eq!(r.total_price, r.flight.base_price * 2);
        }
    }

    #[test]
    fn test_no_match_is_empty() {
        let params = SearchParams::new("SYD", "AMS", date(), 1);
        assert!(search(&fleet(), &params).is_empty());
    }

    #[test]
    fn test_stop_price_and_airline_filters() {
        let mut params = SearchParams::new("JFK", "LHR", date(), 1);
        params.stops_filter = Some(StopsFilter::NonStop);
        assert_eq!(search(&fleet(), &params).len(), 3);

        params.stops_filter = Some(StopsFilter::OneStop);
        let one_stop = search(&fleet(), &params);
        assert_eq!(one_stop.len(), 1);
        assert_eq!(one_stop[0].flight.id, "3");

        params.stops_filter = None;
        params.price_range = Some(PriceRange { min: 389, max: 459 });
        let ids: Vec<_> = search(&fleet(), &params).into_iter().map(|r| r.flight.id).collect();
        assert_eq!(ids, vec!["1", "2"]);

        params.price_range = None;
        params.airline_filter = vec!["PA".to_string(), "AA".to_string()];
        let ids: Vec<_> = search(&fleet(), &params).into_iter().map(|r| r.flight.id).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn test_sort_orders() {
        let params = SearchParams::new("JFK", "LHR", date(), 1);
        let results = search(&fleet(), &params);

        let best: Vec<_> = sort(results.clone(), SortKey::Best).into_iter().map(|r| r.flight.id).collect();
        assert_eq!(best, vec!["1", "2", "3", "4"]);

        let cheapest = sort(results.clone(), SortKey::Cheapest);
        assert!(cheapest.windows(2).all(|w| w[0].flight.base_price <= w[1].flight.base_price));

        // Equal durations keep their relative order.
        let fastest: Vec<_> = sort(results.clone(), SortKey::Fastest).into_iter().map(|r| r.flight.id).collect();
        assert_eq!(fastest, vec!["1", "4", "2", "3"]);

        let earliest: Vec<_> = sort(results, SortKey::Earliest).into_iter().map(|r| r.flight.id).collect();
        assert_eq!(earliest, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_refine_combines_constraints() {
        let params = SearchParams::new("JFK", "LHR", date(), 1);
        let results = search(&fleet(), &params);

        let refined = refine(&results, &[StopsFilter::NonStop], Some(460), &[]);
        let ids: Vec<_> = refined.into_iter().map(|r| r.flight.id).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let refined = refine(&results, &[StopsFilter::NonStop, StopsFilter::OneStop], None, &["EC".to_string()]);
        assert_eq!(refined.len(), 1);
    }

    #[test]
    fn test_validation() {
        assert!(SearchParams::new("JFK", "LHR", date(), 1).validate().is_ok());
        assert!(SearchParams::new("", "LHR", date(), 1).validate().is_err());
        assert!(SearchParams::new("JFK", "JFK", date(), 1).validate().is_err());
        assert!(SearchParams::new("JFK", "LHR", date(), 0).validate().is_err());
        assert!(SearchParams::new("JFKX", "LHR", date(), 1).validate().is_err());

        let mut params = SearchParams::new("JFK", "LHR", date(), 1);
        params.return_date = NaiveDate::from_ymd_opt(2025, 12, 1);
        assert!(params.validate().is_err());
    }
}
