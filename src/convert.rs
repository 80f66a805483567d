//! Pure conversion functions: TOML config values -> typed settings.

use almanac_calendar::{CalendarDate, long_date};
use anyhow::{Result, bail};

/// How dates are printed by the `show` and `range` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStyle {
    /// `yyyy-mm-dd`.
    Iso,
    /// `Weekday Month day, year`.
    Long,
}

/// Parses a display style name into the corresponding enum variant.
pub fn parse_display_style(s: &str) -> Result<DisplayStyle> {
    match s.to_lowercase().as_str() {
        "iso" => Ok(DisplayStyle::Iso),
        "long" => Ok(DisplayStyle::Long),
        other => bail!("unknown display style: {other:?}"),
    }
}

/// Renders `date` in the given style.
pub fn render_date(date: CalendarDate, style: DisplayStyle) -> Result<String> {
    match style {
        DisplayStyle::Iso => Ok(date.to_string()),
        DisplayStyle::Long => Ok(long_date(date)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_names() {
        assert_eq!(parse_display_style("iso").unwrap(), DisplayStyle::Iso);
        assert_eq!(parse_display_style("LONG").unwrap(), DisplayStyle::Long);
        let err = parse_display_style("short").unwrap_err();
        assert_eq!(err.to_string(), "unknown display style: \"short\"");
    }

    #[test]
    fn render_styles() {
        let date = CalendarDate::from_parts(2024, 2, 29);
        assert_eq!(render_date(date, DisplayStyle::Iso).unwrap(), "2024-02-29");
        assert_eq!(
            render_date(date, DisplayStyle::Long).unwrap(),
            "Thursday February 29, 2024"
        );
    }
}
