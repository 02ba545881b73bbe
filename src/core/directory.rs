use std::cmp::Ordering;

use crate::core::{
    distance::{calculate_bounding_box, distance_between, is_within_bounding_box},
    geohash::{ensure_geohash, CLINIC_PRECISION},
    tier::clinic_tier,
};
use crate::models::{NearbyQuery, PublicClinic, RankedClinic};

/// Result of a ranking pass
#[derive(Debug)]
pub struct DirectoryResult {
    pub clinics: Vec<RankedClinic>,
    pub total_candidates: usize,
}

/// Orders published clinics for the "near me" listing
///
/// # Pipeline Stages
/// 1. Geohash backfill for clinics that lack one
/// 2. Optional radius filter (bounding box, then exact distance)
/// 3. Stable sort by distance, unknown locations last
/// 4. Tier resolution and truncation
#[derive(Debug, Clone)]
pub struct ClinicDirectory {
    geohash_precision: usize,
}

impl ClinicDirectory {
    pub fn new(geohash_precision: usize) -> Self {
        Self { geohash_precision }
    }

    /// Rank clinics for display
    ///
    /// Without an origin the input order is preserved and no distances are
    /// reported. A radius without an origin is ignored.
    pub fn rank(&self, clinics: Vec<PublicClinic>, query: &NearbyQuery) -> DirectoryResult {
        let total_candidates = clinics.len();
        let origin = query.origin.filter(|o| o.is_finite());

        let radius = match (origin, query.radius_km) {
            (Some(origin), Some(radius)) => Some((calculate_bounding_box(origin, radius), radius)),
            _ => None,
        };

        let mut ranked: Vec<(f64, PublicClinic)> = clinics
            .into_iter()
            .map(|clinic| ensure_geohash(clinic, self.geohash_precision))
            .map(|clinic| {
                let distance = match (origin, clinic.geo) {
                    (Some(origin), Some(geo)) => distance_between(origin, geo),
                    _ => f64::INFINITY,
                };
                (distance, clinic)
            })
            .filter(|(distance, clinic)| match (&radius, clinic.geo) {
                (Some((bbox, radius)), Some(geo)) => {
                    bbox.as_ref().map_or(true, |rect| is_within_bounding_box(geo, rect))
                        && *distance <= *radius
                }
                (Some(_), None) => false,
                (None, _) => true,
            })
            .collect();

        if origin.is_some() {
            // Vec::sort_by is stable, so equal distances keep input order
            ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        }

        ranked.truncate(query.limit);

        let clinics = ranked
            .into_iter()
            .map(|(distance, clinic)| RankedClinic {
                resolved_tier: clinic_tier(&clinic),
                distance_km: if origin.is_some() && distance.is_finite() {
                    Some(distance)
                } else {
                    None
                },
                clinic,
            })
            .collect();

        DirectoryResult {
            clinics,
            total_candidates,
        }
    }
}

impl Default for ClinicDirectory {
    fn default() -> Self {
        Self::new(CLINIC_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClinicTier, GeoPoint};

    fn create_clinic(id: &str, geo: Option<(f64, f64)>) -> PublicClinic {
        PublicClinic {
            id: id.to_string(),
            clinic_id: format!("clinic-{}", id),
            owner_id: format!("owner-{}", id),
            name: format!("Clinic {}", id),
            hero_image: None,
            phone: None,
            whatsapp: None,
            address: None,
            geo: geo.map(|(lat, lng)| GeoPoint::new(lat, lng)),
            geohash: None,
            is_published: true,
            tier: None,
            average_rating: None,
            total_reviews: None,
            specialty: None,
        }
    }

    fn query(origin: Option<(f64, f64)>, radius_km: Option<f64>, limit: usize) -> NearbyQuery {
        NearbyQuery {
            origin: origin.map(|(lat, lng)| GeoPoint::new(lat, lng)),
            radius_km,
            limit,
        }
    }

    fn ids(result: &DirectoryResult) -> Vec<&str> {
        result.clinics.iter().map(|c| c.clinic.id.as_str()).collect()
    }

    #[test]
    fn test_sorted_by_distance() {
        let directory = ClinicDirectory::default();
        let clinics = vec![
            create_clinic("far", Some((24.9, 46.9))),
            create_clinic("near", Some((24.72, 46.68))),
            create_clinic("mid", Some((24.8, 46.7))),
        ];

        let result = directory.rank(clinics, &query(Some((24.7136, 46.6753)), None, 10));

        assert_eq!(ids(&result), vec!["near", "mid", "far"]);
        assert!(result.clinics.iter().all(|c| c.distance_km.is_some()));
    }

    #[test]
    fn test_unknown_location_sorts_last() {
        let directory = ClinicDirectory::default();
        let clinics = vec![
            create_clinic("nowhere", None),
            create_clinic("near", Some((24.72, 46.68))),
        ];

        let result = directory.rank(clinics, &query(Some((24.7136, 46.6753)), None, 10));

        assert_eq!(ids(&result), vec!["near", "nowhere"]);
        assert_eq!(result.clinics[1].distance_km, None);
    }

    #[test]
    fn test_without_origin_keeps_order() {
        let directory = ClinicDirectory::default();
        let clinics = vec![
            create_clinic("b", Some((10.0, 10.0))),
            create_clinic("a", Some((0.0, 0.0))),
        ];

        let result = directory.rank(clinics, &query(None, Some(1.0), 10));

        assert_eq!(ids(&result), vec!["b", "a"]);
        assert!(result.clinics.iter().all(|c| c.distance_km.is_none()));
    }

    #[test]
    fn test_radius_filter() {
        let directory = ClinicDirectory::default();
        let clinics = vec![
            create_clinic("inside", Some((0.0, 0.5))),
            create_clinic("outside", Some((0.0, 2.0))),
            create_clinic("unknown", None),
        ];

        let result = directory.rank(clinics, &query(Some((0.0, 0.0)), Some(100.0), 10));

        assert_eq!(ids(&result), vec!["inside"]);
        assert_eq!(result.total_candidates, 3);
    }

    #[test]
    fn test_radius_filter_across_antimeridian() {
        let directory = ClinicDirectory::default();
        let clinics = vec![
            create_clinic("fiji-east", Some((-17.0, -179.9))),
            create_clinic("fiji-west", Some((-17.0, 179.8))),
            create_clinic("samoa", Some((-13.8, -171.8))),
        ];

        let result = directory.rank(clinics, &query(Some((-17.0, 179.9)), Some(50.0), 10));

        assert_eq!(ids(&result), vec!["fiji-west", "fiji-east"]);
        assert_eq!(result.clinics[1].distance_km, Some(21.3));
    }

    #[test]
    fn test_radius_filter_matches_rounded_distance() {
        let directory = ClinicDirectory::default();
        let clinics = vec![
            create_clinic("edge", Some((0.00935, 0.0))),
            create_clinic("past-edge", Some((0.0, 0.0095))),
        ];

        let result = directory.rank(clinics, &query(Some((0.0, 0.0)), Some(1.0), 10));

        assert_eq!(ids(&result), vec!["edge"]);
        assert_eq!(result.clinics[0].distance_km, Some(1.0));
    }

    #[test]
    fn test_respects_limit() {
        let directory = ClinicDirectory::default();
        let clinics: Vec<PublicClinic> = (0..20)
            .map(|i| create_clinic(&i.to_string(), Some((0.0, i as f64 * 0.01))))
            .collect();

        let result = directory.rank(clinics, &query(Some((0.0, 0.0)), None, 5));

        assert_eq!(result.clinics.len(), 5);
        assert_eq!(ids(&result), vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_geohash_backfilled_and_tier_resolved() {
        let directory = ClinicDirectory::new(5);
        let mut clinic = create_clinic("pro", Some((42.6, -5.6)));
        clinic.tier = Some(ClinicTier::Pro);

        let result = directory.rank(vec![clinic], &query(None, None, 10));

        assert_eq!(result.clinics[0].clinic.geohash.as_deref(), Some("ezs42"));
        assert_eq!(result.clinics[0].resolved_tier, ClinicTier::Pro);
    }
}
