use crate::model::LocationQuery;

/// A named point from the fixed city list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub id: u32,
    pub city: &'static str,
    pub country: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub const fn new(
        id: u32,
        city: &'static str,
        country: &'static str,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self { id, city, country, latitude, longitude }
    }

    pub const fn query(&self) -> LocationQuery {
        LocationQuery::new(self.latitude, self.longitude)
    }

    /// `[longitude, latitude]`
    pub const fn coordinates(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

/// A named region with the temperature reported when its fetch fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub fallback_temperature_c: f64,
}

impl Region {
    pub const fn query(&self) -> LocationQuery {
        LocationQuery::new(self.latitude, self.longitude)
    }
}

pub const REGIONS: &[Region] = &[
    Region { name: "Global", latitude: 0.0, longitude: 0.0, fallback_temperature_c: 15.0 },
    Region { name: "Venezuela", latitude: 10.5, longitude: -66.9, fallback_temperature_c: 15.0 },
    Region { name: "Ártico", latitude: 70.0, longitude: 0.0, fallback_temperature_c: -10.0 },
];

/// Default point for single-location views (Caracas).
pub const DEFAULT_QUERY: LocationQuery = LocationQuery::new(10.4806, -66.9036);

pub const CITIES: &[Location] = &[
    Location::new(1, "Nueva York", "USA", 40.7128, -74.0060),
    Location::new(2, "Los Ángeles", "USA", 34.0522, -118.2437),
    Location::new(3, "Chicago", "USA", 41.8781, -87.6298),
    Location::new(4, "Miami", "USA", 25.7617, -80.1918),
    Location::new(5, "Toronto", "Canadá", 43.6532, -79.3832),
    Location::new(6, "Vancouver", "Canadá", 49.2827, -123.1207),
    Location::new(7, "Ciudad de México", "México", 19.4326, -99.1332),
    Location::new(8, "Guadalajara", "México", 20.6597, -103.3496),
    Location::new(9, "La Habana", "Cuba", 23.1136, -82.3666),
    Location::new(10, "San José", "Costa Rica", 9.9281, -84.0907),
    Location::new(11, "Panamá", "Panamá", 8.9824, -79.5199),
    Location::new(12, "Bogotá", "Colombia", 4.7110, -74.0721),
    Location::new(13, "Caracas", "Venezuela", 10.4806, -66.9036),
    Location::new(14, "Maracaibo", "Venezuela", 10.6666, -71.6167),
    Location::new(15, "Lima", "Perú", -12.0464, -77.0428),
    Location::new(16, "Quito", "Ecuador", -0.1807, -78.4678),
    Location::new(17, "São Paulo", "Brasil", -23.5505, -46.6333),
    Location::new(18, "Río de Janeiro", "Brasil", -22.9068, -43.1729),
    Location::new(19, "Brasilia", "Brasil", -15.8267, -47.9218),
    Location::new(20, "Buenos Aires", "Argentina", -34.6037, -58.3816),
    Location::new(21, "Santiago", "Chile", -33.4489, -70.6693),
    Location::new(22, "Montevideo", "Uruguay", -34.9011, -56.1645),
    Location::new(23, "Londres", "Reino Unido", 51.5074, -0.1278),
    Location::new(24, "París", "Francia", 48.8566, 2.3522),
    Location::new(25, "Madrid", "España", 40.4168, -3.7038),
    Location::new(26, "Barcelona", "España", 41.3851, 2.1734),
    Location::new(27, "Roma", "Italia", 41.9028, 12.4964),
    Location::new(28, "Berlín", "Alemania", 52.5200, 13.4050),
    Location::new(29, "Ámsterdam", "Países Bajos", 52.3676, 4.9041),
    Location::new(30, "Estocolmo", "Suecia", 59.3293, 18.0686),
    Location::new(31, "Moscú", "Rusia", 55.7558, 37.6173),
    Location::new(32, "Atenas", "Grecia", 37.9838, 23.7275),
    Location::new(33, "El Cairo", "Egipto", 30.0444, 31.2357),
    Location::new(34, "Lagos", "Nigeria", 6.5244, 3.3792),
    Location::new(35, "Nairobi", "Kenia", -1.2921, 36.8219),
    Location::new(36, "Ciudad del Cabo", "Sudáfrica", -33.9249, 18.4241),
    Location::new(37, "Johannesburgo", "Sudáfrica", -26.2041, 28.0473),
    Location::new(38, "Casablanca", "Marruecos", 33.5731, -7.5898),
    Location::new(39, "Tokio", "Japón", 35.6762, 139.6503),
    Location::new(40, "Pekín", "China", 39.9042, 116.4074),
    Location::new(41, "Shanghái", "China", 31.2304, 121.4737),
    Location::new(42, "Hong Kong", "China", 22.3193, 114.1694),
    Location::new(43, "Seúl", "Corea del Sur", 37.5665, 126.9780),
    Location::new(44, "Bangkok", "Tailandia", 13.7563, 100.5018),
    Location::new(45, "Singapur", "Singapur", 1.3521, 103.8198),
    Location::new(46, "Nueva Delhi", "India", 28.6139, 77.2090),
    Location::new(47, "Bombay", "India", 19.0760, 72.8777),
    Location::new(48, "Dubái", "EAU", 25.2048, 55.2708),
    Location::new(49, "Estambul", "Turquía", 41.0082, 28.9784),
    Location::new(50, "Tel Aviv", "Israel", 32.0853, 34.7818),
    Location::new(51, "Sídney", "Australia", -33.8688, 151.2093),
    Location::new(52, "Melbourne", "Australia", -37.8136, 144.9631),
    Location::new(53, "Brisbane", "Australia", -27.4698, 153.0251),
    Location::new(54, "Perth", "Australia", -31.9505, 115.8605),
    Location::new(55, "Auckland", "Nueva Zelanda", -36.8485, 174.7633),
    Location::new(56, "Wellington", "Nueva Zelanda", -41.2865, 174.7762),
];
