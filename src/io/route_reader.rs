//! Route file reading
//!
//! Routes are read either from GPX documents (track, route and waypoint
//! elements, in document order) or from plain text with one `lat,lon`
//! per line.

use std::fs;
use std::path::Path;

use log::{debug, info};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::coordinate::parse_coordinate;
use crate::geodesy::{GeoError, GeoPoint, GeoResult};

/// GPX elements that carry a `lat`/`lon` position
const GPX_POINT_ELEMENTS: [&[u8]; 3] = [b"trkpt", b"rtept", b"wpt"];

/// Reader for route files
pub struct RouteReader;

impl RouteReader {
    /// Read a route from disk, choosing the format by file extension
    ///
    /// # Arguments
    /// * `path` - Path to a `.gpx` file or a text file of coordinates
    ///
    /// # Returns
    /// The route points in file order, or an error
    pub fn read_file<P: AsRef<Path>>(path: P) -> GeoResult<Vec<GeoPoint>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let is_gpx = path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("gpx"))
            .unwrap_or(false);

        let points = if is_gpx {
            Self::read_gpx_str(&content)?
        } else {
            Self::read_text_str(&content)?
        };

        info!("Loaded {} route points from {}", points.len(), path.display());
        Ok(points)
    }

    /// Parse a plain-text route: one coordinate per line, `#` starts a comment
    pub fn read_text_str(content: &str) -> GeoResult<Vec<GeoPoint>> {
        let mut points = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let point = parse_coordinate(line).map_err(|_| {
                GeoError::RouteFormat(format!("line {}: cannot parse '{}'", index + 1, line))
            })?;
            points.push(point);
        }

        Ok(points)
    }

    /// Parse a GPX document, collecting `trkpt`, `rtept` and `wpt` positions
    pub fn read_gpx_str(content: &str) -> GeoResult<Vec<GeoPoint>> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut points = Vec::new();
        loop {
            match reader.read_event() {
                Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                    let name = element.local_name();
                    if GPX_POINT_ELEMENTS.iter().any(|tag| *tag == name.as_ref()) {
                        points.push(Self::gpx_point(&element, points.len())?);
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(GeoError::RouteFormat(format!(
                        "invalid GPX at byte {}: {}", reader.buffer_position(), e
                    )));
                },
                _ => {},
            }
        }

        debug!("Parsed {} GPX points", points.len());
        Ok(points)
    }

    /// Extract the position of a single GPX point element
    fn gpx_point(element: &BytesStart, index: usize) -> GeoResult<GeoPoint> {
        let mut latitude = None;
        let mut longitude = None;

        for attr in element.attributes() {
            let attr = attr.map_err(|e| {
                GeoError::RouteFormat(format!("point {}: bad attribute: {}", index + 1, e))
            })?;
            let target = match attr.key.local_name().as_ref() {
                b"lat" => &mut latitude,
                b"lon" => &mut longitude,
                _ => continue,
            };

            let value = attr.unescape_value().map_err(|e| {
                GeoError::RouteFormat(format!("point {}: bad attribute value: {}", index + 1, e))
            })?;
            let parsed = value.trim().parse::<f64>().map_err(|_| {
                GeoError::RouteFormat(format!("point {}: '{}' is not a number", index + 1, value))
            })?;
            *target = Some(parsed);
        }

        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Ok(GeoPoint::new(lat, lon)),
            _ => Err(GeoError::RouteFormat(format!(
                "point {}: missing lat/lon attribute", index + 1
            ))),
        }
    }
}
