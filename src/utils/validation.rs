use anyhow::{anyhow, Result};

/// Latitude must lie within [-90, 90] degrees.
pub fn validate_latitude(lat: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(anyhow!("latitude must be between -90 and 90"));
    }

    Ok(())
}

/// Longitude must lie within [-180, 180] degrees.
pub fn validate_longitude(lon: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&lon) {
        return Err(anyhow!("longitude must be between -180 and 180"));
    }

    Ok(())
}

/// Validates both components of a coordinate, latitude first.
pub fn validate_coordinate(lat: f64, lon: f64) -> Result<()> {
    validate_latitude(lat)?;
    validate_longitude(lon)?;

    Ok(())
}
