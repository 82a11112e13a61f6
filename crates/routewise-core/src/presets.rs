//! Built-in example networks.

use crate::error::Result;
use crate::graph::{Directedness, Graph};

/// Intercity network of India weighted in approximate travel hours.
///
/// Routes are directed exactly as listed: several links (e.g. Kanpur to
/// Lucknow) are one-way, so parts of the network are unreachable from others.
/// Every city carries its latitude/longitude as a position.
///
/// # Errors
///
/// Only if the tables below are inconsistent, which the test suite rules out.
pub fn indian_cities() -> Result<Graph<String>> {
    let mut graph = Graph::new(Directedness::Directed);
    for (city, lat, lng) in CITY_COORDINATES {
        graph.add_node_at((*city).to_string(), (*lat, *lng))?;
    }
    for (from, routes) in CITY_ROUTES {
        for (to, hours) in *routes {
            graph.add_edge((*from).to_string(), (*to).to_string(), *hours)?;
        }
    }
    Ok(graph)
}

const CITY_ROUTES: &[(&str, &[(&str, f64)])] = &[
    ("Mumbai", &[("Pune", 3.0), ("Nashik", 4.0), ("Ahmedabad", 8.0), ("Surat", 5.0)]),
    ("Pune", &[("Mumbai", 3.0), ("Nashik", 4.0), ("Bangalore", 12.0), ("Hyderabad", 9.0)]),
    ("Nashik", &[("Mumbai", 4.0), ("Pune", 4.0), ("Ahmedabad", 7.0), ("Indore", 5.0)]),
    ("Ahmedabad", &[("Mumbai", 8.0), ("Nashik", 7.0), ("Delhi", 12.0), ("Surat", 6.0)]),
    ("Delhi", &[("Ahmedabad", 12.0), ("Jaipur", 4.0), ("Lucknow", 7.0), ("Chandigarh", 5.0)]),
    ("Bangalore", &[("Pune", 12.0), ("Chennai", 6.0), ("Hyderabad", 8.0), ("Mysore", 3.0)]),
    ("Chennai", &[("Bangalore", 6.0), ("Hyderabad", 8.0), ("Visakhapatnam", 12.0)]),
    ("Hyderabad", &[("Bangalore", 8.0), ("Chennai", 8.0), ("Nagpur", 10.0), ("Pune", 9.0)]),
    ("Jaipur", &[("Delhi", 4.0), ("Ahmedabad", 8.0), ("Agra", 4.0)]),
    ("Lucknow", &[("Delhi", 7.0), ("Nagpur", 12.0), ("Patna", 6.0)]),
    ("Nagpur", &[("Hyderabad", 10.0), ("Lucknow", 12.0), ("Bhopal", 5.0)]),
    ("Kolkata", &[("Bhubaneswar", 6.0), ("Patna", 8.0), ("Ranchi", 7.0)]),
    ("Bhubaneswar", &[("Kolkata", 6.0), ("Visakhapatnam", 7.0)]),
    ("Visakhapatnam", &[("Bhubaneswar", 7.0), ("Hyderabad", 9.0), ("Chennai", 12.0)]),
    ("Patna", &[("Kolkata", 8.0), ("Lucknow", 10.0), ("Ranchi", 4.0)]),
    ("Surat", &[("Mumbai", 5.0), ("Ahmedabad", 6.0)]),
    ("Indore", &[("Bhopal", 3.0), ("Ahmedabad", 7.0), ("Nashik", 5.0)]),
    ("Bhopal", &[("Indore", 3.0), ("Nagpur", 5.0), ("Gwalior", 6.0)]),
    ("Chandigarh", &[("Delhi", 5.0), ("Amritsar", 4.0)]),
    ("Mysore", &[("Bangalore", 3.0), ("Coimbatore", 6.0)]),
    ("Agra", &[("Jaipur", 4.0), ("Delhi", 3.0)]),
    ("Ranchi", &[("Kolkata", 7.0), ("Patna", 4.0)]),
    ("Amritsar", &[("Chandigarh", 4.0), ("Jammu", 6.0)]),
    ("Coimbatore", &[("Mysore", 6.0), ("Chennai", 8.0)]),
    ("Gwalior", &[("Bhopal", 6.0), ("Agra", 3.0)]),
    ("Jammu", &[("Amritsar", 6.0)]),
    ("Kanpur", &[("Lucknow", 2.0), ("Delhi", 8.0)]),
    ("Vadodara", &[("Ahmedabad", 2.0), ("Surat", 4.0)]),
    ("Ludhiana", &[("Chandigarh", 3.0), ("Amritsar", 3.0)]),
    ("Madurai", &[("Chennai", 8.0), ("Coimbatore", 4.0)]),
    ("Varanasi", &[("Lucknow", 4.0), ("Patna", 3.0)]),
    ("Meerut", &[("Delhi", 2.0), ("Agra", 4.0)]),
    ("Rajkot", &[("Ahmedabad", 4.0), ("Surat", 5.0)]),
    ("Jodhpur", &[("Jaipur", 5.0), ("Ahmedabad", 9.0)]),
    ("Raipur", &[("Nagpur", 5.0), ("Bhubaneswar", 8.0)]),
    ("Kochi", &[("Coimbatore", 5.0), ("Bangalore", 10.0)]),
    ("Guwahati", &[("Kolkata", 10.0), ("Shillong", 3.0)]),
    ("Shillong", &[("Guwahati", 3.0)]),
    ("Thiruvananthapuram", &[("Kochi", 4.0), ("Madurai", 6.0)]),
];

const CITY_COORDINATES: &[(&str, f64, f64)] = &[
    ("Mumbai", 19.076, 72.8777),
    ("Pune", 18.5204, 73.8567),
    ("Nashik", 20.0059, 73.7897),
    ("Ahmedabad", 23.0225, 72.5714),
    ("Delhi", 28.6139, 77.209),
    ("Bangalore", 12.9716, 77.5946),
    ("Chennai", 13.0827, 80.2707),
    ("Hyderabad", 17.385, 78.4867),
    ("Jaipur", 26.9124, 75.7873),
    ("Lucknow", 26.8467, 80.9462),
    ("Nagpur", 21.1458, 79.0882),
    ("Kolkata", 22.5726, 88.3639),
    ("Bhubaneswar", 20.2961, 85.8245),
    ("Visakhapatnam", 17.6868, 83.2185),
    ("Patna", 25.5941, 85.1376),
    ("Surat", 21.1702, 72.8311),
    ("Indore", 22.7196, 75.8577),
    ("Bhopal", 23.2599, 77.4126),
    ("Chandigarh", 30.7333, 76.7794),
    ("Mysore", 12.2958, 76.6394),
    ("Agra", 27.1767, 78.0081),
    ("Ranchi", 23.3441, 85.3096),
    ("Amritsar", 31.634, 74.8723),
    ("Coimbatore", 11.0168, 76.9558),
    ("Gwalior", 26.2183, 78.1828),
    ("Jammu", 32.7266, 74.857),
    ("Kanpur", 26.4499, 80.3319),
    ("Vadodara", 22.3072, 73.1812),
    ("Ludhiana", 30.901, 75.8573),
    ("Madurai", 9.9252, 78.1198),
    ("Varanasi", 25.3176, 82.9739),
    ("Meerut", 28.9845, 77.7064),
    ("Rajkot", 22.3039, 70.8022),
    ("Jodhpur", 26.2389, 73.0243),
    ("Raipur", 21.2514, 81.6296),
    ("Kochi", 9.9312, 76.2673),
    ("Guwahati", 26.1445, 91.7362),
    ("Shillong", 25.5788, 91.8933),
    ("Thiruvananthapuram", 8.5241, 76.9366),
];
