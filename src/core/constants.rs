//! Reference coordinates and wire-level strings

/// Fixed reference coordinate of the Kenobi station (x, y)
pub const KENOBI_ORIGIN: (f64, f64) = (-500.0, -200.0);

/// Fixed reference coordinate of the Skywalker station (x, y)
pub const SKYWALKER_ORIGIN: (f64, f64) = (100.0, -100.0);

/// Fixed reference coordinate of the Sato station (x, y)
pub const SATO_ORIGIN: (f64, f64) = (500.0, 100.0);

/// Number of stations taking part in every fix
pub const STATION_COUNT: usize = 3;

/// Body carried by every not-found response
pub const NOT_FOUND_MESSAGE: &str = "RESPONSE CODE: 404";

/// Returned in place of a station's message while its fragments still have gaps
pub const INSUFFICIENT_INFORMATION: &str =
    "Error: no hay suficiente información para mostrar el mensaje completo";
