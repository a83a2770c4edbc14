use crate::core::tables::{UNKNOWN_PLATE_STATE, plate_state};
use crate::core::{LookupError, PlateFormat, PlateRecord};

/// Parse a vehicle plate in either layout.
///
/// Separators are stripped and letters uppercased; seven characters must
/// remain. A letter in the fifth position marks a Mercosul plate, anything
/// else a legacy one. The layout of the other positions is not checked.
/// Legacy plates are formatted `ABC-1234`; Mercosul plates are returned
/// unchanged.
pub fn decompose_plate(raw: &str) -> Result<PlateRecord, LookupError> {
    let plate: String = raw
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if plate.len() != 7 {
        return Err(LookupError::invalid_format(format!(
            "plate must have 7 characters, got {}",
            plate.len()
        )));
    }

    let b = plate.as_bytes();
    let format = if b[4].is_ascii_alphabetic() {
        PlateFormat::Mercosul
    } else {
        PlateFormat::Legacy
    };

    Ok(PlateRecord {
        formatted: match format {
            PlateFormat::Legacy => format!("{}-{}", &plate[..3], &plate[3..]),
            PlateFormat::Mercosul => plate.clone(),
        },
        format,
        probable_state: plate_state(char::from(b[0]))
            .unwrap_or(UNKNOWN_PLATE_STATE)
            .to_string(),
        plate,
    })
}
