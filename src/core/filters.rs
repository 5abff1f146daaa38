use crate::models::FoodTruck;

/// Optional predicates for listing trucks, combined with AND
///
/// An empty string counts as "not provided" for every field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TruckFilter<'a> {
    pub applicant: Option<&'a str>,
    pub status: Option<&'a str>,
    pub street: Option<&'a str>,
    pub food_item: Option<&'a str>,
}

impl<'a> TruckFilter<'a> {
    pub fn new(
        applicant: Option<&'a str>,
        status: Option<&'a str>,
        street: Option<&'a str>,
        food_item: Option<&'a str>,
    ) -> Self {
        Self {
            applicant: non_empty(applicant),
            status: non_empty(status),
            street: non_empty(street),
            food_item: non_empty(food_item),
        }
    }

    pub fn applicant(mut self, applicant: &'a str) -> Self {
        self.applicant = non_empty(Some(applicant));
        self
    }

    pub fn status(mut self, status: &'a str) -> Self {
        self.status = non_empty(Some(status));
        self
    }

    pub fn street(mut self, street: &'a str) -> Self {
        self.street = non_empty(Some(street));
        self
    }

    pub fn food_item(mut self, food_item: &'a str) -> Self {
        self.food_item = non_empty(Some(food_item));
        self
    }

    /// True when no predicate is active
    pub fn is_unconstrained(&self) -> bool {
        self.applicant.is_none()
            && self.status.is_none()
            && self.street.is_none()
            && self.food_item.is_none()
    }
}

/// Treat `Some("")` the same as `None`
#[inline]
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Case-insensitive exact status comparison
///
/// `wanted_upper` must already be upper-cased.
#[inline]
pub fn matches_status(truck: &FoodTruck, wanted_upper: &str) -> bool {
    truck.status.to_uppercase() == wanted_upper
}

/// Case-insensitive substring match on the food items
///
/// `needle_lower` must already be lower-cased. Records without food items never match.
#[inline]
pub fn matches_food_item(truck: &FoodTruck, needle_lower: &str) -> bool {
    truck
        .fooditems
        .as_deref()
        .is_some_and(|items| items.to_lowercase().contains(needle_lower))
}

#[inline]
fn matches_applicant(truck: &FoodTruck, needle_lower: &str) -> bool {
    truck.applicant.to_lowercase().contains(needle_lower)
}

#[inline]
fn matches_street(truck: &FoodTruck, needle_lower: &str) -> bool {
    truck
        .address
        .as_deref()
        .is_some_and(|address| address.to_lowercase().contains(needle_lower))
}

/// Narrow `trucks` to the records matching every active predicate
///
/// Output keeps the input order.
pub fn filter_trucks<'t>(trucks: &'t [FoodTruck], filter: &TruckFilter<'_>) -> Vec<&'t FoodTruck> {
    let mut result: Vec<&FoodTruck> = trucks.iter().collect();

    if let Some(applicant) = filter.applicant {
        let needle = applicant.to_lowercase();
        result.retain(|t| matches_applicant(t, &needle));
    }
    if let Some(status) = filter.status {
        let wanted = status.to_uppercase();
        result.retain(|t| matches_status(t, &wanted));
    }
    if let Some(street) = filter.street {
        let needle = street.to_lowercase();
        result.retain(|t| matches_street(t, &needle));
    }
    if let Some(food_item) = filter.food_item {
        let needle = food_item.to_lowercase();
        result.retain(|t| matches_food_item(t, &needle));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_truck(id: &str, applicant: &str, status: &str, address: Option<&str>, food: Option<&str>) -> FoodTruck {
        let mut truck = FoodTruck::new(id, applicant, status);
        truck.address = address.map(str::to_string);
        truck.fooditems = food.map(str::to_string);
        truck
    }

    fn sample() -> Vec<FoodTruck> {
        vec![
            create_truck("1", "TOASTY TRUCK", "APPROVED", Some("100 SANSOME ST"), Some("Tacos, Burritos")),
            create_truck("2", "COFFEE CART", "EXPIRED", Some("200 MARKET ST"), Some("Coffee, Donuts")),
            create_truck("3", "Taco Toast Co", "approved", None, None),
        ]
    }

    fn ids(trucks: &[&FoodTruck]) -> Vec<String> {
        trucks.iter().map(|t| t.locationid.clone()).collect()
    }

    #[test]
    fn test_no_filter_returns_everything() {
        let trucks = sample();
        let result = filter_trucks(&trucks, &TruckFilter::default());
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_applicant_substring_any_case() {
        let trucks = sample();
        let result = filter_trucks(&trucks, &TruckFilter::default().applicant("toast"));
        assert_eq!(ids(&result), vec!["1", "3"]);
    }

    #[test]
    fn test_status_is_exact_not_substring() {
        let trucks = sample();

        let result = filter_trucks(&trucks, &TruckFilter::default().status("approved"));
        assert_eq!(ids(&result), vec!["1", "3"]);

        let result = filter_trucks(&trucks, &TruckFilter::default().status("APPROVE"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_street_excludes_missing_address() {
        let trucks = sample();
        let result = filter_trucks(&trucks, &TruckFilter::default().street("st"));
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn test_food_item_excludes_missing_items() {
        let trucks = sample();
        let result = filter_trucks(&trucks, &TruckFilter::default().food_item("COFFEE"));
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let trucks = sample();
        let filter = TruckFilter::default().applicant("t").status("APPROVED").street("sansome");
        let result = filter_trucks(&trucks, &filter);
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_empty_strings_are_not_provided() {
        let trucks = sample();
        let filter = TruckFilter::new(Some(""), Some(""), Some(""), Some(""));

        assert!(filter.is_unconstrained());
        assert_eq!(filter_trucks(&trucks, &filter).len(), 3);
    }
}
