use crate::models::PublicClinic;

/// Geohash base-32 alphabet (no `a`, `i`, `l`, `o`)
const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Default precision, roughly a 4.9km cell
pub const DEFAULT_PRECISION: usize = 5;

/// Precision stored on clinic listings, roughly a 153m cell
pub const CLINIC_PRECISION: usize = 7;

/// Encode a coordinate as a geohash of exactly `precision` characters
///
/// Longitude and latitude ranges are bisected alternately, longitude
/// first. Each bisection contributes one bit and every five bits select
/// one character. Out-of-range coordinates are not rejected; they simply
/// saturate to the nearest edge cell.
pub fn encode_geohash(lat: f64, lng: f64, precision: usize) -> String {
    let mut geohash = String::with_capacity(precision);
    let (mut lat_min, mut lat_max) = (-90.0_f64, 90.0_f64);
    let (mut lng_min, mut lng_max) = (-180.0_f64, 180.0_f64);

    let mut idx = 0usize;
    let mut bit = 0u8;
    let mut even_bit = true;

    while geohash.len() < precision {
        if even_bit {
            let mid = (lng_min + lng_max) / 2.0;
            if lng >= mid {
                idx = idx * 2 + 1;
                lng_min = mid;
            } else {
                idx *= 2;
                lng_max = mid;
            }
        } else {
            let mid = (lat_min + lat_max) / 2.0;
            if lat >= mid {
                idx = idx * 2 + 1;
                lat_min = mid;
            } else {
                idx *= 2;
                lat_max = mid;
            }
        }
        even_bit = !even_bit;

        bit += 1;
        if bit == 5 {
            geohash.push(BASE32[idx] as char);
            bit = 0;
            idx = 0;
        }
    }

    geohash
}

/// Fill in a missing geohash from the clinic's coordinates
///
/// Clinics that already carry a geohash, or have no usable location,
/// are returned unchanged.
pub fn ensure_geohash(mut clinic: PublicClinic, precision: usize) -> PublicClinic {
    if clinic.geohash.as_deref().is_some_and(|g| !g.is_empty()) {
        return clinic;
    }

    if let Some(geo) = clinic.geo.filter(|g| g.is_finite()) {
        clinic.geohash = Some(encode_geohash(geo.lat, geo.lng, precision));
    }

    clinic
}
