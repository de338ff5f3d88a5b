//! Route list rendering.

use crate::error::DispatchResult;
use crate::models::{Solution, ViolationType};

/// Renders one line per route, `[id1,id2,...]`, in solution order.
///
/// # Examples
///
/// ```
/// use u_dispatch::io::format_routes;
/// use u_dispatch::models::{Route, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::pair(4, 1, 30.0));
/// sol.add_route(Route::singleton(2, 12.0));
/// assert_eq!(format_routes(&sol), "[4,1]\n[2]\n");
/// ```
pub fn format_routes(solution: &Solution) -> String {
    solution
        .routes()
        .iter()
        .map(|route| format!("{route}\n"))
        .collect()
}

/// Renders the whole solution as JSON: `{ "routes": [..], "violations": [..] }`,
/// each route being `{ "loads": [..], "round_trip_time": .. }`.
pub fn format_routes_json(solution: &Solution) -> DispatchResult<String> {
    Ok(serde_json::to_string_pretty(solution)?)
}

/// Renders one line per recorded violation. Empty for a feasible solution.
///
/// # Examples
///
/// ```
/// use u_dispatch::io::format_violations;
/// use u_dispatch::models::{Route, Solution, Violation, ViolationType};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::singleton(7, 900.0));
/// sol.add_violation(Violation::new(ViolationType::MaxDurationExceeded {
///     route_index: 0,
///     duration: 900.0,
///     max_duration: 720.0,
/// }));
/// assert_eq!(
///     format_violations(&sol),
///     "route 0: round trip 900.000 exceeds the limit of 720.000\n"
/// );
/// ```
pub fn format_violations(solution: &Solution) -> String {
    solution
        .violations()
        .iter()
        .map(|violation| match violation.kind {
            ViolationType::MaxDurationExceeded {
                route_index,
                duration,
                max_duration,
            } => format!(
                "route {route_index}: round trip {duration:.3} exceeds the limit of {max_duration:.3}\n"
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::clarke_wright_savings;
    use crate::io::parse_loads;
    use crate::models::{Point, Route, Vehicle};

    /// Load 2 sits 500 away from the depot, so even alone it cannot make the
    /// default 720 round trip.
    fn solve_with_far_load() -> Solution {
        let input = "loadNumber pickup dropoff\n1 (0,0) (10,0)\n2 (500,0) (500,10)\n";
        let registry = parse_loads(input.as_bytes(), Point::ORIGIN).expect("valid input");
        clarke_wright_savings(&registry, &Vehicle::default()).expect("known loads")
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_routes(&Solution::new()), "");
    }

    #[test]
    fn test_format_no_trailing_comma() {
        let mut sol = Solution::new();
        sol.add_route(Route::pair(10, 3, 1.0));
        let text = format_routes(&sol);
        assert_eq!(text, "[10,3]\n");
    }

    #[test]
    fn test_format_json() {
        let mut sol = Solution::new();
        sol.add_route(Route::pair(1, 2, 30.0));
        let json = format_routes_json(&sol).expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["routes"][0]["loads"], serde_json::json!([1, 2]));
        assert_eq!(value["routes"][0]["round_trip_time"], serde_json::json!(30.0));
        assert_eq!(value["violations"], serde_json::json!([]));
    }

    #[test]
    fn test_format_json_reports_over_limit_singleton() {
        let sol = solve_with_far_load();
        assert_eq!(format_routes(&sol), "[1]\n[2]\n");

        let json = format_routes_json(&sol).expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let violations = value["violations"].as_array().expect("violation list");
        assert_eq!(violations.len(), 1);
        let exceeded = &violations[0]["kind"]["MaxDurationExceeded"];
        assert_eq!(exceeded["route_index"], serde_json::json!(1));
        assert_eq!(exceeded["max_duration"], serde_json::json!(720.0));
        let duration = exceeded["duration"].as_f64().expect("number");
        assert!(duration > 1010.0 && duration < 1010.2);
    }

    #[test]
    fn test_format_violations() {
        assert_eq!(format_violations(&Solution::new()), "");

        // 500 + 10 + sqrt(500^2 + 10^2)
        let report = format_violations(&solve_with_far_load());
        assert_eq!(
            report,
            "route 1: round trip 1010.100 exceeds the limit of 720.000\n"
        );
    }
}
