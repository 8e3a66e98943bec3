//! Page navigation logic
//!
//! Pages are 1-based, matching the catalog API. `total_pages` is `None` until
//! the first successful fetch reports it; until then only the lower bound is
//! enforced.

/// Clamp a requested page into `1..=total_pages`
///
/// # Examples
/// ```
/// use artview::logic::pagination::clamp_page;
///
/// assert_eq!(clamp_page(0, Some(10)), 1);
/// assert_eq!(clamp_page(11, Some(10)), 10);
/// assert_eq!(clamp_page(500, None), 500);
/// ```
pub fn clamp_page(page: u32, total_pages: Option<u32>) -> u32 {
    let page = page.max(1);
    match total_pages {
        Some(total) if total > 0 => page.min(total),
        _ => page,
    }
}

/// Next page, or `None` when already on the last known page
pub fn next_page(current: u32, total_pages: Option<u32>) -> Option<u32> {
    match total_pages {
        Some(total) if current >= total => None,
        _ => Some(current.saturating_add(1)),
    }
}

/// Previous page, or `None` on the first page
pub fn prev_page(current: u32) -> Option<u32> {
    if current <= 1 {
        None
    } else {
        Some(current - 1)
    }
}

/// Last page, once the total is known
pub fn last_page(total_pages: Option<u32>) -> Option<u32> {
    total_pages.filter(|total| *total > 0)
}

/// Footer text: "Page 3 of 10", or "Page 3" before the total is known
pub fn page_label(page: u32, total_pages: Option<u32>) -> String {
    match total_pages {
        Some(total) => format!("Page {} of {}", page, total),
        None => format!("Page {}", page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page_unknown_total() {
        assert_eq!(clamp_page(0, None), 1);
        assert_eq!(clamp_page(7, None), 7);
    }

    #[test]
    fn test_clamp_page_zero_total() {
        assert_eq!(clamp_page(4, Some(0)), 4);
    }

    #[test]
    fn test_next_page() {
        assert_eq!(next_page(1, None), Some(2));
        assert_eq!(next_page(9, Some(10)), Some(10));
        assert_eq!(next_page(10, Some(10)), None);
    }

    #[test]
    fn test_prev_page() {
        assert_eq!(prev_page(1), None);
        assert_eq!(prev_page(2), Some(1));
    }

    #[test]
    fn test_last_page() {
        assert_eq!(last_page(None), None);
        assert_eq!(last_page(Some(0)), None);
        assert_eq!(last_page(Some(42)), Some(42));
    }

    #[test]
    fn test_page_label() {
        assert_eq!(page_label(3, Some(10)), "Page 3 of 10");
        assert_eq!(page_label(3, None), "Page 3");
    }
}
