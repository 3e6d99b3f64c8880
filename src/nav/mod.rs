use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Height of the fixed header; scroll targets land this far below the top.
pub const HEADER_OFFSET_PX: i32 = 80;

const PANEL_BASE: &str = "md:flex items-center space-x-8";
const PANEL_OVERLAY: &str = "flex flex-col absolute top-16 left-0 w-full bg-white p-4 shadow-md z-50";

/// Classes for the collapsible menu panel. Desktop layout is unaffected;
/// on small screens the open panel becomes a full-width overlay.
pub fn nav_panel_class(open: bool) -> String {
    if open {
        format!("{PANEL_BASE} {PANEL_OVERLAY}")
    } else {
        format!("hidden {PANEL_BASE}")
    }
}

/// `"#about"` -> `Some("about")`. Bare `#` and non-fragment links resolve to
/// nothing.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_target_top(offset_top: i32) -> f64 {
    f64::from(offset_top - HEADER_OFFSET_PX)
}

/// Smooth-scrolls to the element named by `href`. Returns false when the
/// fragment does not resolve.
pub fn scroll_to_fragment(href: &str) -> bool {
    let Some(id) = fragment_id(href) else {
        return false;
    };
    let Some(target) = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return false;
    };

    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(scroll_target_top(target.offset_top()));
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn test_nav_panel_closed_is_hidden() {
        let c = nav_panel_class(false);
        assert!(classes(&c).contains(&"hidden"));
        assert!(!classes(&c).contains(&"absolute"));
        assert!(classes(&c).contains(&"md:flex"));
    }

    #[test]
    fn test_nav_panel_open_is_overlay() {
        let c = nav_panel_class(true);
        let c = classes(&c);
        assert!(!c.contains(&"hidden"));
        for cls in ["flex", "flex-col", "absolute", "top-16", "left-0", "w-full", "bg-white", "p-4", "shadow-md", "z-50"] {
            assert!(c.contains(&cls), "missing {cls}");
        }
    }

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#contact"), Some("contact"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("/about#team"), None);
    }

    #[test]
    fn test_scroll_target_top_subtracts_header() {
        assert_eq!(scroll_target_top(500), 420.0);
        assert_eq!(scroll_target_top(80), 0.0);
        assert_eq!(scroll_target_top(10), -70.0);
    }
}
