//! Plain-text workout sheets.
//!
//! One page is written per group. A page lists the practice metadata, then
//! every set with the group's variant of each item and the set total, then
//! the workout total:
//!
//! ```text
//! ==================================================
//! TUESDAY - GROUP B
//! Coach: Kim
//! Units: Meters
//! Course: Short Course
//! ==================================================
//!
//! MAIN SET x2
//! ------------------------------
//!   3x50 kick @ 1:00
//! Set Total: 300m
//! ==================================================
//! WORKOUT TOTAL: 300m
//! Estimated Time: 6:00
//! ==================================================
//! ```
//!
//! Pages are separated by a wider rule.

use std::fmt::Write;

use log::debug;
use swimset_core::{
    group::GroupLabel,
    semantic::{Item, Practice, Set, Variant},
    summary::{GroupSummary, SetSummary},
    units::{Course, Units},
};

use crate::{
    config::RenderConfig,
    export::{Error, Exporter},
};

const PAGE_RULE: usize = 50;
const GROUP_RULE: usize = 60;
const SET_RULE: usize = 30;
const DEFAULT_TITLE: &str = "SWIM WORKOUT";

/// Builder for a [`Text`] exporter.
///
/// # Examples
///
/// ```
/// use swimset::export::{Exporter, text::TextBuilder};
/// use swimset_parser::{ParseConfig, parse};
///
/// let practice = parse("Warmup:\n  200 swim", ParseConfig::default()).unwrap();
///
/// let mut text = TextBuilder::new().build();
/// text.export_practice(&practice).unwrap();
/// assert!(text.as_str().contains("WORKOUT TOTAL: 200y"));
/// ```
#[derive(Debug, Default)]
pub struct TextBuilder {
    render: RenderConfig,
    group: Option<GroupLabel>,
}

impl TextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the render options.
    pub fn with_render_config(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Render only `group` instead of every group.
    pub fn with_group(mut self, group: Option<GroupLabel>) -> Self {
        self.group = group;
        self
    }

    pub fn build(self) -> Text {
        Text {
            render: self.render,
            group: self.group,
            output: String::new(),
        }
    }
}

/// Plain-text exporter; the rendered sheet accumulates in memory.
#[derive(Debug)]
pub struct Text {
    render: RenderConfig,
    group: Option<GroupLabel>,
    output: String,
}

impl Text {
    /// The text rendered so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }

    /// The groups to render, checked against the practice.
    fn pages(&self, practice: &Practice) -> Result<Vec<GroupLabel>, Error> {
        match self.group {
            Some(group) if group.index() >= practice.group_count() => {
                Err(Error::GroupNotPresent {
                    group,
                    group_count: practice.group_count(),
                })
            }
            Some(group) => Ok(vec![group]),
            None => Ok(practice.groups().collect()),
        }
    }

    fn write_page(
        &mut self,
        practice: &Practice,
        summary: &GroupSummary,
        show_group: bool,
    ) -> Result<(), Error> {
        let config = practice.config();
        let symbol = config.units().symbol();
        let out = &mut self.output;

        writeln!(out, "{}", "=".repeat(PAGE_RULE))?;
        let title = config.title().unwrap_or(DEFAULT_TITLE).to_uppercase();
        if show_group {
            writeln!(out, "{title} - GROUP {}", summary.group())?;
        } else {
            writeln!(out, "{title}")?;
        }

        let metadata = [
            ("Coach", config.author()),
            ("Date", config.date()),
            ("Level", config.level()),
            ("Description", config.description()),
        ];
        for (name, value) in metadata {
            if let Some(value) = value {
                writeln!(out, "{name}: {value}")?;
            }
        }
        writeln!(out, "Units: {}", units_name(config.units()))?;
        writeln!(out, "Course: {}", course_name(config.course()))?;
        writeln!(out, "{}", "=".repeat(PAGE_RULE))?;

        for (set, totals) in practice.sets().iter().zip(summary.sets()) {
            self.write_set(set, totals, summary.group(), symbol)?;
        }

        let out = &mut self.output;
        writeln!(out, "{}", "=".repeat(PAGE_RULE))?;
        writeln!(out, "WORKOUT TOTAL: {}{symbol}", summary.total_distance())?;
        if self.render.show_times() && has_intervals(practice, summary.group()) {
            writeln!(out, "Estimated Time: {}", summary.total_time())?;
        }
        writeln!(out, "{}", "=".repeat(PAGE_RULE))?;
        Ok(())
    }

    fn write_set(
        &mut self,
        set: &Set,
        totals: &SetSummary,
        group: GroupLabel,
        symbol: &str,
    ) -> Result<(), Error> {
        let show_comments = self.render.show_comments();
        let out = &mut self.output;

        write!(out, "\n{}", set.name().to_uppercase())?;
        if set.repeat_count() > 1 {
            write!(out, " x{}", set.repeat_count())?;
        }
        writeln!(out)?;
        writeln!(out, "{}", "-".repeat(SET_RULE))?;

        if show_comments {
            for line in set.header_comment().into_iter().flat_map(str::lines) {
                writeln!(out, "# {line}")?;
            }
        }

        for item in set.items() {
            writeln!(out, "  {}", item_line(item, group, show_comments))?;
        }

        writeln!(out, "Set Total: {}{symbol}", totals.distance())?;
        Ok(())
    }
}

impl Exporter for Text {
    fn export_practice(&mut self, practice: &Practice) -> Result<(), Error> {
        let pages = self.pages(practice)?;
        let show_group = practice.group_count() > 1;
        let summary = practice.summary();
        debug!(pages = pages.len(), sets = practice.sets().len(); "Rendering text");

        for (index, group) in pages.into_iter().enumerate() {
            if index > 0 {
                writeln!(self.output, "\n{}\n", "=".repeat(GROUP_RULE))?;
            }
            let group_summary = summary
                .group(group)
                .ok_or_else(|| Error::Render(format!("no totals for group {group}")))?;
            self.write_page(practice, group_summary, show_group)?;
        }
        Ok(())
    }
}

/// `[Rx]DIST DESC[ @ i1/i2][ # note]`
fn item_line(item: &Item, group: GroupLabel, show_comments: bool) -> String {
    let mut line = variant_text(item.variant(group));
    if let Some(comment) = item.comment().filter(|_| show_comments) {
        line.push_str(" # ");
        line.push_str(comment);
    }
    line
}

fn variant_text(variant: &Variant) -> String {
    let mut text = String::new();
    if variant.reps() > 1 {
        text.push_str(&format!("{}x", variant.reps()));
    }
    text.push_str(&format!("{} {}", variant.distance(), variant.description()));
    if !variant.intervals().is_empty() {
        let intervals: Vec<String> = variant.intervals().iter().map(ToString::to_string).collect();
        text.push_str(" @ ");
        text.push_str(&intervals.join("/"));
    }
    text
}

fn has_intervals(practice: &Practice, group: GroupLabel) -> bool {
    practice
        .sets()
        .iter()
        .flat_map(|set| set.variants(group))
        .any(|variant| !variant.intervals().is_empty())
}

fn units_name(units: Units) -> &'static str {
    match units {
        Units::Meters => "Meters",
        Units::Yards => "Yards",
    }
}

fn course_name(course: Course) -> &'static str {
    match course {
        Course::Short => "Short Course",
        Course::Long => "Long Course",
    }
}

#[cfg(test)]
mod tests {
    use swimset_parser::{ParseConfig, parse};

    use super::*;

    fn practice(source: &str) -> Practice {
        parse(source, ParseConfig::default()).expect("Failed to parse")
    }

    fn render(practice: &Practice, builder: TextBuilder) -> String {
        let mut text = builder.build();
        text.export_practice(practice).expect("Failed to render");
        text.into_string()
    }

    #[test]
    fn test_single_group_sheet() {
        let practice = practice(
            "title: Tuesday\nauthor: Kim\nunits: meters\n\nWarmup:\n  200 swim @ 3:00 # easy\n  4x50 kick",
        );

        let expected = "\
==================================================
TUESDAY
Coach: Kim
Units: Meters
Course: Short Course
==================================================

WARMUP
------------------------------
  200 swim @ 3:00 # easy
  4x50 kick
Set Total: 400m
==================================================
WORKOUT TOTAL: 400m
Estimated Time: 3:00
==================================================
";
        assert_eq!(render(&practice, TextBuilder::new()), expected);
    }

    #[test]
    fn test_one_page_per_group() {
        let practice = practice("Main Set x2:\n  4x50 kick @ :55 [3x50 kick @ 1:00]");
        let text = render(&practice, TextBuilder::new());

        assert!(text.contains("SWIM WORKOUT - GROUP A"));
        assert!(text.contains("SWIM WORKOUT - GROUP B"));
        assert!(text.contains("MAIN SET x2"));
        assert!(text.contains("  4x50 kick @ :55"));
        assert!(text.contains("  3x50 kick @ 1:00"));
        assert!(text.contains("WORKOUT TOTAL: 400y"));
        assert!(text.contains("WORKOUT TOTAL: 300y"));
        assert_eq!(text.matches(&"=".repeat(GROUP_RULE)).count(), 1);
    }

    #[test]
    fn test_item_distances_use_their_display_form() {
        let practice = practice("Sprint:\n  2x37.5 fly\n  100.0 easy\n  8x12.25 dash");
        let text = render(&practice, TextBuilder::new());

        assert!(text.contains("  2x37.5 fly\n"));
        assert!(text.contains("  100 easy\n"));
        assert!(text.contains("  8x12.25 dash\n"));
    }

    #[test]
    fn test_selected_group() {
        let practice = practice("Main:\n  4x50 kick @ :55 [3x50 kick @ 1:00]");
        let text = render(&practice, TextBuilder::new().with_group(GroupLabel::from_index(1)));

        assert!(text.contains("GROUP B"));
        assert!(!text.contains("GROUP A"));
    }

    #[test]
    fn test_selected_group_must_exist() {
        let practice = practice("Main:\n  4x50 kick");
        let mut text = TextBuilder::new()
            .with_group(GroupLabel::from_index(2))
            .build();

        let err = text.export_practice(&practice).unwrap_err();
        assert!(matches!(err, Error::GroupNotPresent { group_count: 1, .. }));
        assert_eq!(err.to_string(), "Group C is not in this practice (groups A to A)");
    }

    #[test]
    fn test_render_options() {
        let practice = practice("Main: # hold pace\n  4x100 free @ 1:30 # strong");
        let text = render(
            &practice,
            TextBuilder::new().with_render_config(RenderConfig::new(false, false)),
        );

        assert!(!text.contains("hold pace"));
        assert!(!text.contains("strong"));
        assert!(!text.contains("Estimated Time"));

        let text = render(&practice, TextBuilder::new());
        assert!(text.contains("# hold pace\n"));
        assert!(text.contains("  4x100 free @ 1:30 # strong\n"));
        assert!(text.contains("Estimated Time: 6:00\n"));
    }

    #[test]
    fn test_multiple_intervals_and_decimals() {
        let practice = practice("Main:\n  3x12.5 sprint @ :20/:15/:10");
        let text = render(&practice, TextBuilder::new());

        assert!(text.contains("  3x12.5 sprint @ :20/:15/:10"));
        assert!(text.contains("Set Total: 37.5y"));
    }

    #[test]
    fn test_empty_practice() {
        let text = render(&practice("title: Off day"), TextBuilder::new());
        assert!(text.contains("OFF DAY\n"));
        assert!(text.contains("WORKOUT TOTAL: 0y"));
        assert!(!text.contains("Estimated Time"));
    }
}
