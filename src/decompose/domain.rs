use crate::core::LookupError;

/// Suffix appended to a bare label such as `registro`.
const DEFAULT_SUFFIX: &str = ".com.br";

/// Normalize a domain name for DNS probing.
///
/// Lowercases, trims and drops a trailing root dot. A bare label without any
/// dot gets `.com.br` appended. Labels may hold letters, digits and hyphens
/// only, which also keeps the name safe to splice into resolver URLs.
pub fn normalize_domain(raw: &str) -> Result<String, LookupError> {
    let mut domain = raw.trim().trim_end_matches('.').to_lowercase();

    if domain.is_empty() {
        return Err(LookupError::invalid_format("domain is empty"));
    }
    if !domain.contains('.') {
        domain.push_str(DEFAULT_SUFFIX);
    }

    let labels_ok = domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    });
    if !labels_ok || domain.len() > 253 {
        return Err(LookupError::invalid_format(format!(
            "'{domain}' is not a valid domain name"
        )));
    }

    Ok(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize_domain("  Registro.BR. ").unwrap(), "registro.br");
    }

    #[test]
    fn bare_label_gets_suffix() {
        assert_eq!(normalize_domain("registro").unwrap(), "registro.com.br");
    }

    #[test]
    fn foreign_tld_kept() {
        assert_eq!(normalize_domain("example.com").unwrap(), "example.com");
    }

    #[test]
    fn idn_labels_allowed() {
        assert!(normalize_domain("açaí.com.br").is_ok());
    }

    #[test]
    fn rejects_bad_labels() {
        assert!(normalize_domain("a..b").is_err());
        assert!(normalize_domain("-a.com").is_err());
        assert!(normalize_domain("a.com&type=TXT").is_err());
        assert!(normalize_domain("").is_err());
    }
}
