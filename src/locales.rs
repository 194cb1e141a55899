//! Accept-Language parsing for the edit screens, which offer the request's
//! locales as defaults.

pub const DEFAULT_LOCALE: &str = "en-US";

/// Full `xx-XX` codes from an Accept-Language header. Entries without a
/// region and quality weights are dropped, and the split list is reversed,
/// so the header's last region-tagged entry comes first.
pub fn parse(header: Option<&str>) -> Vec<String> {
    let Some(header) = header else {
        return Vec::new();
    };

    header
        .split(',')
        .rev()
        .filter_map(|entry| {
            let tag = entry.split(';').next()?.trim();
            let (code, region) = tag.split_once('-')?;
            if code.is_empty() || region.is_empty() {
                return None;
            }
            Some(format!("{}-{}", code, region.to_uppercase()))
        })
        .collect()
}

pub fn header_language(header: Option<&str>) -> String {
    parse(header)
        .into_iter()
        .next()
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reverses_header_order_and_drops_bare_codes() {
        let langs = parse(Some("en-US,en;q=0.9,pt-BR;q=0.8"));
        assert_eq!(langs, vec!["pt-BR".to_string(), "en-US".to_string()]);
    }

    #[test]
    fn header_language_takes_the_last_tagged_entry() {
        assert_eq!(header_language(Some("en-US,pt-BR;q=0.8")), "pt-BR");
    }

    #[test]
    fn header_language_defaults_when_empty() {
        assert_eq!(header_language(None), DEFAULT_LOCALE);
        assert_eq!(header_language(Some("zz")), DEFAULT_LOCALE);
        assert_eq!(header_language(Some("pt-br")), "pt-BR");
    }
}
