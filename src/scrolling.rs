pub const NAV_BAND_SLACK: f64 = 100.0;
pub const HEADER_RAISE_THRESHOLD: f64 = 100.0;
pub const HEADER_HIDE_THRESHOLD: f64 = 200.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

pub const HEADER_BACKGROUND: &str = "rgba(255, 255, 255, 0.95)";

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBand {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

pub fn active_section(bands: &[SectionBand], scroll_y: f64, header_height: f64) -> Option<&str> {
    let mut current = None;

    for band in bands {
        let start = band.top - header_height - NAV_BAND_SLACK;
        let end = band.top + band.height;
        if scroll_y >= start && scroll_y < end {
            current = Some(band.id.as_str());
        }
    }

    current
}

pub fn scroll_progress_percent(scroll_top: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let track = doc_height - viewport_height;
    if track <= 0.0 {
        return 0.0;
    }

    ((scroll_top / track) * 100.0).clamp(0.0, 100.0)
}

pub struct HeaderScrollState {
    last_scroll_top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderFrame {
    pub hidden: bool,
    pub raised: bool,
}

impl HeaderScrollState {
    pub fn new() -> Self {
        Self {
            last_scroll_top: 0.0,
        }
    }

    pub fn update(&mut self, scroll_top: f64) -> HeaderFrame {
        let frame = HeaderFrame {
            hidden: scroll_top > self.last_scroll_top && scroll_top > HEADER_HIDE_THRESHOLD,
            raised: scroll_top > HEADER_RAISE_THRESHOLD,
        };
        self.last_scroll_top = scroll_top;
        frame
    }
}

impl Default for HeaderScrollState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn shape_transform(index: usize, scroll_y: f64) -> String {
    let rate = scroll_y * -0.5;
    let speed = (index as f64 + 1.0) * 0.2;
    format!(
        "translateY({}px) rotate({}deg)",
        rate * speed,
        scroll_y * 0.1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(id: &str, top: f64, height: f64) -> SectionBand {
        SectionBand {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn active_section_picks_containing_band() {
        let bands = vec![band("about", 400.0, 500.0), band("work", 900.0, 600.0)];

        assert_eq!(active_section(&bands, 350.0, 80.0), Some("about"));
        assert_eq!(active_section(&bands, 1200.0, 80.0), Some("work"));
    }

    #[test]
    fn active_section_later_band_wins_on_overlap() {
        let bands = vec![band("a", 100.0, 1000.0), band("b", 500.0, 1000.0)];

        assert_eq!(active_section(&bands, 600.0, 0.0), Some("b"));
    }

    #[test]
    fn active_section_none_outside_all_bands() {
        let bands = vec![band("about", 400.0, 200.0)];

        assert_eq!(active_section(&bands, 0.0, 0.0), None);
        assert_eq!(active_section(&bands, 5000.0, 0.0), None);
    }

    #[test]
    fn active_section_band_start_includes_header_slack() {
        let bands = vec![band("about", 400.0, 200.0)];

        // start = 400 - 80 - 100 = 220
        assert_eq!(active_section(&bands, 220.0, 80.0), Some("about"));
        assert_eq!(active_section(&bands, 219.0, 80.0), None);
    }

    #[test]
    fn scroll_progress_spans_zero_to_hundred() {
        assert_eq!(scroll_progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress_percent(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress_percent(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn scroll_progress_clamps_overshoot() {
        assert_eq!(scroll_progress_percent(5000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress_percent(-50.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn scroll_progress_short_document_is_zero() {
        let percent = scroll_progress_percent(0.0, 800.0, 1000.0);
        assert_eq!(percent, 0.0);
        assert!(!scroll_progress_percent(100.0, 1000.0, 1000.0).is_nan());
    }

    #[test]
    fn header_hides_only_scrolling_down_past_threshold() {
        let mut state = HeaderScrollState::new();

        assert!(!state.update(100.0).hidden);
        assert!(state.update(250.0).hidden);
        assert!(!state.update(240.0).hidden);
        assert!(state.update(260.0).hidden);
    }

    #[test]
    fn header_raised_past_hundred() {
        let mut state = HeaderScrollState::new();

        assert!(!state.update(50.0).raised);
        assert!(state.update(150.0).raised);
    }

    #[test]
    fn shape_transform_scales_by_index() {
        assert_eq!(shape_transform(0, 100.0), "translateY(-10px) rotate(10deg)");
        assert_eq!(shape_transform(1, 100.0), "translateY(-20px) rotate(10deg)");
    }
}
