use crate::models::{ClinicTier, PublicClinic};

#[inline]
fn has_value(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.is_empty())
}

/// Whether a listing is complete enough to be styled as Pro
///
/// Requires a hero image, a phone number and an address. WhatsApp is
/// not part of the criteria.
#[inline]
pub fn is_pro_preview(clinic: &PublicClinic) -> bool {
    has_value(&clinic.hero_image) && has_value(&clinic.phone) && has_value(&clinic.address)
}

/// Resolve the tier shown for a clinic
///
/// An explicit `pro` tier on the document wins; otherwise the tier is
/// derived from listing completeness.
pub fn clinic_tier(clinic: &PublicClinic) -> ClinicTier {
    if clinic.tier == Some(ClinicTier::Pro) || is_pro_preview(clinic) {
        ClinicTier::Pro
    } else {
        ClinicTier::Standard
    }
}
