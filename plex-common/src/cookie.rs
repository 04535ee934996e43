//! Sidebar preference cookie encoding

use crate::sidebar::SidebarConstants;

/// `document.cookie` assignment persisting the desktop open flag.
pub fn encode_sidebar_cookie(open: bool) -> String {
    format!(
        "{}={}; path=/; max-age={}",
        SidebarConstants::COOKIE_NAME,
        open,
        SidebarConstants::COOKIE_MAX_AGE
    )
}

/// Read the persisted open flag out of a `document.cookie` string.
///
/// Returns `None` when the cookie is missing or holds something other than
/// `true`/`false`.
pub fn parse_sidebar_cookie(cookies: &str) -> Option<bool> {
    cookie_value(cookies, SidebarConstants::COOKIE_NAME).and_then(|value| match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    })
}

/// Value of the first cookie called `name`.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(
            encode_sidebar_cookie(true),
            "sidebar:state=true; path=/; max-age=604800"
        );
    }

    #[test]
    fn test_parse_among_other_cookies() {
        let cookies = "theme=dark; sidebar:state=false;  lang=en";
        assert_eq!(parse_sidebar_cookie(cookies), Some(false));
        assert_eq!(cookie_value(cookies, "lang"), Some("en"));
    }

    #[test]
    fn test_parse_missing_or_garbage() {
        assert_eq!(parse_sidebar_cookie(""), None);
        assert_eq!(parse_sidebar_cookie("theme=dark"), None);
        assert_eq!(parse_sidebar_cookie("sidebar:state=maybe"), None);
    }

    #[test]
    fn test_parse_reads_what_encode_writes() {
        // The browser only hands back the name=value part
        let written = encode_sidebar_cookie(true);
        let name_value = written.split(';').next().unwrap();
        assert_eq!(parse_sidebar_cookie(name_value), Some(true));
    }
}
