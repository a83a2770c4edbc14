use crate::core::tables::{UNKNOWN_AREA_CODE, area_code_region};
use crate::core::{LineType, LookupError, PhoneRecord, digits_only};

/// Split a Brazilian phone number into area code and subscriber number.
///
/// A leading `55` country code is dropped when more than 11 digits remain.
/// The number is mobile when the subscriber part has 9 digits and starts
/// with `9`. An area code missing from the table is reported as
/// `"DDD não identificado"`, not as an error.
pub fn decompose_phone(raw: &str) -> Result<PhoneRecord, LookupError> {
    let mut phone = digits_only(raw);

    if phone.starts_with("55") && phone.len() > 11 {
        phone.drain(..2);
    }

    if !(10..=11).contains(&phone.len()) {
        return Err(LookupError::invalid_format(format!(
            "phone must have 10 or 11 digits after the country code, got {}",
            phone.len()
        )));
    }

    let (area_code, number) = phone.split_at(2);
    let mobile = number.len() == 9 && number.starts_with('9');
    let split = if mobile { 5 } else { 4 };

    Ok(PhoneRecord {
        area_code: area_code.to_string(),
        number: number.to_string(),
        region: area_code_region(area_code)
            .unwrap_or(UNKNOWN_AREA_CODE)
            .to_string(),
        line_type: if mobile { LineType::Mobile } else { LineType::Fixed },
        formatted: format!("({area_code}) {}-{}", &number[..split], &number[split..]),
        phone: phone.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile() {
        let p = decompose_phone("11988887777").unwrap();
        assert_eq!(p.area_code, "11");
        assert_eq!(p.line_type, LineType::Mobile);
        assert_eq!(p.formatted, "(11) 98888-7777");
        assert_eq!(p.region, "São Paulo - Capital");
    }

    #[test]
    fn fixed() {
        let p = decompose_phone("1133334444").unwrap();
        assert_eq!(p.line_type, LineType::Fixed);
        assert_eq!(p.formatted, "(11) 3333-4444");
    }

    #[test]
    fn country_code_dropped() {
        let p = decompose_phone("+55 (21) 98888-7777").unwrap();
        assert_eq!(p.phone, "21988887777");
        assert_eq!(p.region, "Rio de Janeiro - Capital");
    }

    #[test]
    fn eleven_digits_not_starting_with_nine_is_fixed() {
        let p = decompose_phone("11888887777").unwrap();
        assert_eq!(p.line_type, LineType::Fixed);
        assert_eq!(p.formatted, "(11) 8888-87777");
    }

    #[test]
    fn unknown_area_code() {
        let p = decompose_phone("2033334444").unwrap();
        assert_eq!(p.region, UNKNOWN_AREA_CODE);
    }

    #[test]
    fn too_short() {
        assert!(decompose_phone("333-4444").is_err());
    }
}
