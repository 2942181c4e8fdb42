//! Reveal timeline for the narrated infographic.
//!
//! Every section of the page is keyed to an offset (seconds) into the
//! voiceover. All reveal, scroll and highlight decisions derive from the
//! single virtual clock value, so everything in this module is a pure
//! function of time and tests without a browser.

use once_cell::sync::Lazy;

/// Run-out after the last reveal so the narration can finish.
pub const END_BUFFER_SECS: f64 = 5.0;

/// How far a section sits below its resting spot before it fades in.
pub const SLIDE_DISTANCE_PX: f64 = 20.0;

/// The page sections, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Intro,
    Requirement,
    Implementation,
    Testing,
    Deploy,
    Summary,
    CallToAction,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Header,
        Section::Intro,
        Section::Requirement,
        Section::Implementation,
        Section::Testing,
        Section::Deploy,
        Section::Summary,
        Section::CallToAction,
    ];

    /// Seconds into the voiceover at which this section reveals.
    pub fn offset(self) -> f64 {
        match self {
            Section::Header => 0.0,
            Section::Intro => 0.0,
            Section::Requirement => 15.0,
            Section::Implementation => 30.0,
            Section::Testing => 44.0,
            Section::Deploy => 53.0,
            Section::Summary => 63.0,
            Section::CallToAction => 72.0,
        }
    }

    /// Short name shown on the jump buttons.
    pub fn label(self) -> &'static str {
        match self {
            Section::Header => "Header",
            Section::Intro => "Intro",
            Section::Requirement => "Requirements",
            Section::Implementation => "Implementation",
            Section::Testing => "Testing",
            Section::Deploy => "Deploy",
            Section::Summary => "Summary",
            Section::CallToAction => "Wrap-up",
        }
    }

    /// DOM id of the rendered section, used as the auto-scroll target.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Header => "section-header",
            Section::Intro => "section-intro",
            Section::Requirement => "section-requirement",
            Section::Implementation => "section-implementation",
            Section::Testing => "section-testing",
            Section::Deploy => "section-deploy",
            Section::Summary => "section-summary",
            Section::CallToAction => "section-call-to-action",
        }
    }

    /// Whether the narration has reached this section.
    pub fn is_revealed(self, position: f64) -> bool {
        position >= self.offset()
    }
}

static DURATION: Lazy<f64> = Lazy::new(|| {
    let last = Section::ALL
        .iter()
        .map(|section| section.offset())
        .fold(0.0_f64, f64::max);
    last + END_BUFFER_SECS
});

/// Total run time of the show: last reveal plus the end buffer.
pub fn duration() -> f64 {
    *DURATION
}

/// The section the view should be pinned to at `position`: the greatest
/// offset already reached. Equal offsets resolve to the earlier
/// declaration.
pub fn active_section(position: f64) -> Option<Section> {
    let mut active: Option<Section> = None;
    for section in Section::ALL {
        if !section.is_revealed(position) {
            continue;
        }
        match active {
            Some(current) if section.offset() <= current.offset() => {}
            _ => active = Some(section),
        }
    }
    active
}

/// Fade-and-slide state of one section at a given clock position.
///
/// This is a pure function of the clock, so a direct seek lands on
/// exactly the frame a tick-by-tick playthrough would have produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub translate_y: f64,
}

impl RevealStyle {
    /// Opacity ramps linearly over the first second past the offset and
    /// the slide distance closes in lockstep.
    pub fn at(position: f64, section: Section) -> Self {
        let progress = (position - section.offset()).clamp(0.0, 1.0);
        RevealStyle {
            opacity: progress,
            translate_y: SLIDE_DISTANCE_PX * (1.0 - progress),
        }
    }

    /// Inline style applied to the section wrapper.
    pub fn css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.1}px);",
            self.opacity, self.translate_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_last_offset_plus_buffer() {
        assert_eq!(duration(), 77.0);
    }

    #[test]
    fn active_section_picks_greatest_reached_offset() {
        assert_eq!(active_section(20.0), Some(Section::Requirement));
        assert_eq!(active_section(30.0), Some(Section::Implementation));
        assert_eq!(active_section(52.9), Some(Section::Testing));
        assert_eq!(active_section(76.9), Some(Section::CallToAction));
    }

    #[test]
    fn active_section_tie_breaks_to_first_declared() {
        // Header and Intro both reveal at 0.
        assert_eq!(active_section(0.0), Some(Section::Header));
        assert_eq!(active_section(14.9), Some(Section::Header));
    }

    #[test]
    fn no_active_section_before_the_timeline_starts() {
        assert_eq!(active_section(-0.1), None);
    }

    #[test]
    fn sections_hide_until_their_offset() {
        assert!(!Section::Requirement.is_revealed(14.999));
        assert!(Section::Requirement.is_revealed(15.0));

        let hidden = RevealStyle::at(10.0, Section::Requirement);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.translate_y, SLIDE_DISTANCE_PX);
    }

    #[test]
    fn reveal_ramps_linearly_over_one_second() {
        let half = RevealStyle::at(15.5, Section::Requirement);
        assert!((half.opacity - 0.5).abs() < 1e-9);
        assert!((half.translate_y - 10.0).abs() < 1e-9);

        let done = RevealStyle::at(16.0, Section::Requirement);
        assert_eq!(done.opacity, 1.0);
        assert_eq!(done.translate_y, 0.0);

        // Long past the offset the style stays pinned.
        assert_eq!(RevealStyle::at(70.0, Section::Requirement), done);
    }

    #[test]
    fn reveal_opacity_never_decreases() {
        let mut previous = 0.0;
        let mut position = 0.0;
        while position < 77.0 {
            let style = RevealStyle::at(position, Section::Testing);
            assert!(style.opacity >= previous);
            previous = style.opacity;
            position += 0.05;
        }
    }

    #[test]
    fn reveal_depends_only_on_the_clock_value() {
        // The same position must render identically whether it was
        // reached by ticking or by one direct seek.
        let mut ticked_to = 0.0;
        for _ in 0..443 {
            ticked_to += 0.1;
        }
        let ticked = RevealStyle::at(ticked_to, Section::Testing);
        let seeked = RevealStyle::at(44.3, Section::Testing);
        assert!((ticked.opacity - seeked.opacity).abs() < 1e-9);
        assert!((ticked.translate_y - seeked.translate_y).abs() < 1e-9);
    }

    #[test]
    fn css_payload_carries_opacity_and_translation() {
        let style = RevealStyle::at(15.5, Section::Requirement);
        assert_eq!(style.css(), "opacity: 0.500; transform: translateY(10.0px);");
    }
}
