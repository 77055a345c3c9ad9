use aqmaps_core::Waypoint;
use std::fmt;

/// Sensors below this battery level report unreliable readings.
pub const LOW_BATTERY_THRESHOLD: f32 = 10.0;
pub const BAND_WIDTH: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

pub const UNVISITED: Rgb = Rgb::new(0xaa, 0xaa, 0xaa);
pub const UNRELIABLE: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// Eight bands of 32 covering readings in `[0, 256)`, green to red.
pub const BANDS: [Rgb; 8] = [
    Rgb::new(0x00, 0xff, 0x00),
    Rgb::new(0x40, 0xff, 0x00),
    Rgb::new(0x80, 0xff, 0x00),
    Rgb::new(0xc0, 0xff, 0x00),
    Rgb::new(0xff, 0xc0, 0x00),
    Rgb::new(0xff, 0x80, 0x00),
    Rgb::new(0xff, 0x40, 0x00),
    Rgb::new(0xff, 0x00, 0x00),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSymbol {
    Lighthouse,
    Danger,
    Cross,
}

impl MarkerSymbol {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerSymbol::Lighthouse => "lighthouse",
            MarkerSymbol::Danger => "danger",
            MarkerSymbol::Cross => "cross",
        }
    }
}

fn band_index(value: f64) -> Option<usize> {
    if !(0.0..BAND_WIDTH * BANDS.len() as f64).contains(&value) {
        return None;
    }
    Some((value / BAND_WIDTH) as usize)
}

/// Colour for a reading; `None` outside `[0, 256)`.
pub fn band_color(value: f64) -> Option<Rgb> {
    band_index(value).map(|index| BANDS[index])
}

/// `lighthouse` for the four lower bands, `danger` for the upper four.
pub fn band_symbol(value: f64) -> Option<MarkerSymbol> {
    band_index(value).map(|index| {
        if index < BANDS.len() / 2 {
            MarkerSymbol::Lighthouse
        } else {
            MarkerSymbol::Danger
        }
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: Option<Rgb>,
    pub symbol: Option<MarkerSymbol>,
}

impl MarkerStyle {
    pub fn for_visited(waypoint: &Waypoint) -> Self {
        match waypoint.reading {
            Some(reading) if waypoint.battery >= LOW_BATTERY_THRESHOLD && !reading.is_nan() => {
                Self {
                    color: band_color(reading),
                    symbol: band_symbol(reading),
                }
            }
            _ => Self {
                color: Some(UNRELIABLE),
                symbol: Some(MarkerSymbol::Cross),
            },
        }
    }

    pub fn unvisited() -> Self {
        Self {
            color: Some(UNVISITED),
            symbol: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqmaps_core::Coordinate;

    fn sensor(battery: f32, reading: Option<f64>) -> Waypoint {
        Waypoint::new("a.b.c", Coordinate::new(0.0, 0.0), battery, reading)
    }

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(0x40, 0xff, 0x00).hex(), "#40ff00");
        assert_eq!(UNVISITED.to_string(), "#aaaaaa");
    }

    #[test]
    fn band_edges() {
        assert_eq!(band_color(0.0), Some(BANDS[0]));
        assert_eq!(band_color(31.9), Some(BANDS[0]));
        assert_eq!(band_color(32.0), Some(BANDS[1]));
        assert_eq!(band_color(255.0), Some(BANDS[7]));
        assert_eq!(band_color(256.0), None);
        assert_eq!(band_color(-1.0), None);

        assert_eq!(band_symbol(127.9), Some(MarkerSymbol::Lighthouse));
        assert_eq!(band_symbol(128.0), Some(MarkerSymbol::Danger));
    }

    #[test]
    fn unreliable_sensors_get_a_black_cross() {
        let expected = MarkerStyle {
            color: Some(UNRELIABLE),
            symbol: Some(MarkerSymbol::Cross),
        };
        assert_eq!(MarkerStyle::for_visited(&sensor(9.9, Some(50.0))), expected);
        assert_eq!(MarkerStyle::for_visited(&sensor(80.0, None)), expected);
        assert_eq!(MarkerStyle::for_visited(&sensor(80.0, Some(f64::NAN))), expected);
    }

    #[test]
    fn reliable_sensor_uses_its_band() {
        let style = MarkerStyle::for_visited(&sensor(10.0, Some(170.0)));
        assert_eq!(style.color, Some(Rgb::new(0xff, 0x80, 0x00)));
        assert_eq!(style.symbol, Some(MarkerSymbol::Danger));
    }
}
