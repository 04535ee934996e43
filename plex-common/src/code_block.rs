//! Sizing rules for collapsible code blocks

pub const DEFAULT_COLLAPSED_HEIGHT: u32 = 140;

/// Slack added to the collapsed height before content counts as overflowing.
pub const OVERFLOW_SLACK: u32 = 8;

/// Inline `max-height` for a collapsible code block, if any.
pub fn max_height(
    expanded: bool,
    collapsed_height: u32,
    max_expanded_height: Option<u32>,
) -> Option<u32> {
    if expanded {
        max_expanded_height
    } else {
        Some(collapsed_height)
    }
}

/// `style` attribute value for a max-height, empty when unconstrained.
pub fn max_height_style(max_height: Option<u32>) -> String {
    max_height
        .map(|h| format!("max-height: {h}px;"))
        .unwrap_or_default()
}

/// Whether measured content is tall enough to need collapsing.
pub fn needs_collapse(content_height: f64, collapsed_height: u32) -> bool {
    content_height > f64::from(collapsed_height.saturating_add(OVERFLOW_SLACK))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_height() {
        assert_eq!(max_height(false, 140, Some(400)), Some(140));
        assert_eq!(max_height(true, 140, Some(400)), Some(400));
        assert_eq!(max_height(true, 140, None), None);
    }

    #[test]
    fn test_max_height_style() {
        assert_eq!(max_height_style(Some(140)), "max-height: 140px;");
        assert_eq!(max_height_style(None), "");
    }

    #[test]
    fn test_needs_collapse_uses_slack() {
        assert!(!needs_collapse(148.0, 140));
        assert!(needs_collapse(148.5, 140));
        assert!(!needs_collapse(20.0, DEFAULT_COLLAPSED_HEIGHT));
    }

    #[test]
    fn test_needs_collapse_at_max_height() {
        assert!(!needs_collapse(1_000_000.0, u32::MAX));
        assert!(!needs_collapse(f64::from(u32::MAX), u32::MAX - 1));
        assert!(needs_collapse(f64::from(u32::MAX) + 1.0, u32::MAX));
    }
}
