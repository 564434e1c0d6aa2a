//! Parser implementation
//!
//! Grammar, one production per accepted spelling (`[x]` marks an elided
//! keyword, each elision being its own production):
//!
//! ```text
//! spec     := hourly | minutely | daily | weekly | monthly
//! hourly   := ("hourly" | "every hour") ["at"] offset
//!           | "every hour" "from" time
//!           | "every" (NUMBER | "half" | "quarter") "hours" ["from" time]
//! minutely := "every minute" ["from" time]
//!           | "every" NUMBER "minutes" ["from" time]
//! daily    := ("daily" | "every day") ["at"] time
//! weekly   := "weekly" ["at"] time ["on"] WEEKDAY
//!           | WEEKDAY ["at"] time
//! monthly  := "monthly" ["at"] time ["on"] ORDINAL
//!           | ORDINAL WEEKDAY ["at"] time
//! offset   := NUMBER [("after" | "past") | "til"]
//!           | ("quarter" | "half") ("after" | "past" | "til")
//!           | ["x" | "*" | "h"] ":" NUMBER
//! time     := NUMBER [":" NUMBER] ["am" | "pm"]
//! ```

use crate::error::ParseError;
use crate::lexer::*;
use crate::spec::Spec;
use chrono::Weekday;

const MINUTES_PER_HOUR: u32 = 60;

/// Whether a relative offset counts forward from the top of the hour or back
/// from the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    After,
    Before,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parser for schedule phrases.
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) pos: usize,
}

impl Parser {
    /// Create a new parser from a vector of tokens.
    ///
    /// An empty token vector is treated as empty input.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| &t.kind) != Some(&TokenKind::Eof) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Token {
                kind: TokenKind::Eof,
                span: Span { start: end, end },
            });
        }
        Self { tokens, pos: 0 }
    }

    /// Parse the tokens into a [`Spec`], requiring the whole input be consumed.
    pub fn parse(&mut self) -> Result<Spec, ParseError> {
        if let Some(token) = self
            .tokens
            .iter()
            .find(|t| matches!(t.kind, TokenKind::Error(_)))
        {
            let message = match &token.kind {
                TokenKind::Error(msg) => format!("Lexer error: {}", msg),
                _ => "Lexer error".to_string(),
            };
            return Err(ParseError {
                message,
                position: token.span.start,
            });
        }

        let spec = self.parse_spec()?;

        if !self.is_at_end() {
            return Err(self.error(&format!("Unexpected {} after schedule", self.current().kind)));
        }

        Ok(spec)
    }

    fn parse_spec(&mut self) -> Result<Spec, ParseError> {
        match self.current().kind {
            TokenKind::Hourly => self.parse_hourly(),
            TokenKind::EveryHour => self.parse_every_hour(),
            TokenKind::EveryMinute => self.parse_every_minute(),
            TokenKind::Every => self.parse_every(),
            TokenKind::Daily | TokenKind::EveryDay => self.parse_daily(),
            TokenKind::Weekly => self.parse_weekly(),
            TokenKind::Weekday(_) => self.parse_weekday_first(),
            TokenKind::Monthly => self.parse_monthly(),
            TokenKind::Ordinal(_) => self.parse_nth_weekday(),
            _ => Err(self.error(
                "Expected schedule (hourly, daily, weekly, monthly, every ..., a weekday, or an ordinal)",
            )),
        }
    }

    // ========================================================================
    // HOURLY / MINUTELY
    // ========================================================================

    /// `hourly [at] <offset>`
    fn parse_hourly(&mut self) -> Result<Spec, ParseError> {
        self.expect(TokenKind::Hourly)?;
        self.optional(&TokenKind::At);
        let minute = self.parse_minute_offset()?;
        Ok(Spec::hourly(minute))
    }

    /// `every hour [at] <offset>` or `every hour from <time>`
    fn parse_every_hour(&mut self) -> Result<Spec, ParseError> {
        self.expect(TokenKind::EveryHour)?;
        if self.check(&TokenKind::From) {
            return self.parse_hourly_every(1.0);
        }
        self.optional(&TokenKind::At);
        let minute = self.parse_minute_offset()?;
        Ok(Spec::hourly(minute))
    }

    /// `every minute [from <time>]`
    fn parse_every_minute(&mut self) -> Result<Spec, ParseError> {
        self.expect(TokenKind::EveryMinute)?;
        self.parse_minutely_every(1)
    }

    /// `every N hours|minutes [from <time>]`, `every half|quarter hour [from <time>]`
    fn parse_every(&mut self) -> Result<Spec, ParseError> {
        self.expect(TokenKind::Every)?;
        match self.current().kind {
            TokenKind::Half => {
                self.advance();
                self.expect(TokenKind::Hours)?;
                self.parse_hourly_every(0.5)
            }
            TokenKind::Quarter => {
                self.advance();
                self.expect(TokenKind::Hours)?;
                self.parse_hourly_every(0.25)
            }
            TokenKind::Number(n) => {
                self.advance();
                match self.current().kind {
                    TokenKind::Hours => {
                        self.advance();
                        self.parse_hourly_every(f64::from(n))
                    }
                    TokenKind::Minutes => {
                        self.advance();
                        self.parse_minutely_every(n)
                    }
                    _ => Err(self.error("Expected 'hours' or 'minutes'")),
                }
            }
            _ => Err(self.error("Expected a number, 'half', or 'quarter' after 'every'")),
        }
    }

    fn parse_hourly_every(&mut self, hours: f64) -> Result<Spec, ParseError> {
        let start = self.pos;
        let time_of_day = self.parse_optional_start()?;
        Spec::hourly_every(hours, time_of_day)
            .ok_or_else(|| self.error_at(start, "Hourly interval or start time out of range"))
    }

    fn parse_minutely_every(&mut self, every: u32) -> Result<Spec, ParseError> {
        let start = self.pos;
        let time_of_day = self.parse_optional_start()?;
        Spec::minutely(every, time_of_day)
            .ok_or_else(|| self.error_at(start, "Minute interval out of range"))
    }

    /// `[from <time>]`, defaulting to midnight.
    fn parse_optional_start(&mut self) -> Result<u32, ParseError> {
        if self.check(&TokenKind::From) {
            self.advance();
            self.parse_time()
        } else {
            Ok(0)
        }
    }

    /// Minutes past the hour for the bare hourly form.
    fn parse_minute_offset(&mut self) -> Result<u32, ParseError> {
        match self.current().kind {
            TokenKind::Number(n) => {
                self.advance();
                match self.parse_direction() {
                    Some(direction) => self.relative_minute(n, direction),
                    None => Ok(n),
                }
            }
            TokenKind::Quarter | TokenKind::Half => {
                let minutes = if self.check(&TokenKind::Quarter) { 15 } else { 30 };
                self.advance();
                let direction = self
                    .parse_direction()
                    .ok_or_else(|| self.error("Expected 'after', 'past', or 'til'"))?;
                self.relative_minute(minutes, direction)
            }
            TokenKind::Char(':') => {
                self.advance();
                self.expect_number()
            }
            // x:MM, *:MM, h:MM
            TokenKind::Char('x') | TokenKind::Char('*') | TokenKind::Char('h') => {
                self.advance();
                self.expect(TokenKind::Char(':'))?;
                self.expect_number()
            }
            _ => Err(self.error("Expected minute offset")),
        }
    }

    fn parse_direction(&mut self) -> Option<Direction> {
        let direction = match self.current().kind {
            TokenKind::After | TokenKind::Past => Direction::After,
            TokenKind::Til => Direction::Before,
            _ => return None,
        };
        self.advance();
        Some(direction)
    }

    fn relative_minute(&self, minutes: u32, direction: Direction) -> Result<u32, ParseError> {
        match direction {
            Direction::After => Ok(minutes),
            Direction::Before => MINUTES_PER_HOUR
                .checked_sub(minutes)
                .ok_or_else(|| self.error("Offset before the hour exceeds 60 minutes")),
        }
    }

    // ========================================================================
    // DAILY / WEEKLY / MONTHLY
    // ========================================================================

    /// `daily [at] <time>`, `every day [at] <time>`
    fn parse_daily(&mut self) -> Result<Spec, ParseError> {
        self.advance();
        self.optional(&TokenKind::At);
        let time_of_day = self.parse_time()?;
        Ok(Spec::daily(time_of_day))
    }

    /// `weekly [at] <time> [on] <weekday>`
    fn parse_weekly(&mut self) -> Result<Spec, ParseError> {
        self.expect(TokenKind::Weekly)?;
        self.optional(&TokenKind::At);
        let time_of_day = self.parse_time()?;
        self.optional(&TokenKind::On);
        let weekday = self.expect_weekday()?;
        Ok(Spec::weekly(time_of_day, weekday))
    }

    /// `<weekday> [at] <time>`
    fn parse_weekday_first(&mut self) -> Result<Spec, ParseError> {
        let weekday = self.expect_weekday()?;
        self.optional(&TokenKind::At);
        let time_of_day = self.parse_time()?;
        Ok(Spec::weekly(time_of_day, weekday))
    }

    /// `monthly [at] <time> [on] <ordinal>`
    fn parse_monthly(&mut self) -> Result<Spec, ParseError> {
        self.expect(TokenKind::Monthly)?;
        self.optional(&TokenKind::At);
        let time_of_day = self.parse_time()?;
        self.optional(&TokenKind::On);
        let start = self.pos;
        let day = self.expect_ordinal()?;
        Spec::day_of_month(time_of_day, day)
            .ok_or_else(|| self.error_at(start, "Day of month must be 1st through 31st"))
    }

    /// `<ordinal> <weekday> [at] <time>`
    fn parse_nth_weekday(&mut self) -> Result<Spec, ParseError> {
        let start = self.pos;
        let week = self.expect_ordinal()?;
        let weekday = self.expect_weekday()?;
        self.optional(&TokenKind::At);
        let time_of_day = self.parse_time()?;
        Spec::nth_weekday(time_of_day, weekday, week)
            .ok_or_else(|| self.error_at(start, "Week of month must be 1st through 5th"))
    }

    /// `H[:MM][am|pm]`, as minutes past midnight.
    fn parse_time(&mut self) -> Result<u32, ParseError> {
        let start = self.pos;
        let hours = self.expect_number()?;
        let minutes = if self.check(&TokenKind::Char(':')) {
            self.advance();
            self.expect_number()?
        } else {
            0
        };
        let meridiem = match self.current().kind {
            TokenKind::Am => Some(Meridiem::Am),
            TokenKind::Pm => Some(Meridiem::Pm),
            _ => None,
        };
        if meridiem.is_some() {
            self.advance();
        }

        clock_minutes(hours, minutes, meridiem)
            .ok_or_else(|| self.error_at(start, "Time of day out of range"))
    }

    // ========================================================================
    // TOKEN HELPERS
    // ========================================================================

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current().kind == *kind
    }

    pub(crate) fn optional(&mut self, kind: &TokenKind) {
        if self.check(kind) {
            self.advance();
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.check(&kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(&format!("Expected {}, found {}", kind, self.current().kind)))
        }
    }

    pub(crate) fn expect_number(&mut self) -> Result<u32, ParseError> {
        match self.current().kind {
            TokenKind::Number(n) => {
                self.advance();
                Ok(n)
            }
            _ => Err(self.error("Expected number")),
        }
    }

    pub(crate) fn expect_ordinal(&mut self) -> Result<u32, ParseError> {
        match self.current().kind {
            TokenKind::Ordinal(n) => {
                self.advance();
                Ok(n)
            }
            _ => Err(self.error("Expected ordinal (1st, 2nd, 3rd, ...)")),
        }
    }

    pub(crate) fn expect_weekday(&mut self) -> Result<Weekday, ParseError> {
        match self.current().kind {
            TokenKind::Weekday(day) => {
                self.advance();
                Ok(day)
            }
            _ => Err(self.error("Expected day of the week")),
        }
    }

    pub(crate) fn error(&self, msg: &str) -> ParseError {
        self.error_at(self.pos, msg)
    }

    fn error_at(&self, index: usize, msg: &str) -> ParseError {
        ParseError {
            message: msg.to_string(),
            position: self.tokens[index].span.start,
        }
    }
}

/// Convert a 12- or 24-hour clock reading into minutes past midnight.
///
/// 12am is midnight, 12pm is noon, and a pm hour already past 12 is taken as
/// 24-hour time.
fn clock_minutes(hours: u32, minutes: u32, meridiem: Option<Meridiem>) -> Option<u32> {
    if minutes >= MINUTES_PER_HOUR {
        return None;
    }
    let hours = match meridiem {
        Some(Meridiem::Am) if hours == 12 => 0,
        Some(Meridiem::Pm) if hours < 12 => hours + 12,
        _ => hours,
    };
    if hours >= 24 {
        return None;
    }
    Some(hours * MINUTES_PER_HOUR + minutes)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::spec::{HourlySpec, MonthlySpec};

    fn hhmm(hours: u32, minutes: u32) -> u32 {
        hours * 60 + minutes
    }

    #[track_caller]
    fn hourly_ok(source: &str, minute: u32) {
        let spec = parse(source).unwrap_or_else(|e| panic!("{:?}: {}", source, e));
        assert_eq!(
            spec,
            Spec::Hourly(HourlySpec::AtMinute {
                time_of_hour: minute
            }),
            "{:?}",
            source
        );
    }

    #[track_caller]
    fn daily_ok(source: &str, hours: u32, minutes: u32) {
        let spec = parse(source).unwrap_or_else(|e| panic!("{:?}: {}", source, e));
        assert_eq!(spec, Spec::daily(hhmm(hours, minutes)), "{:?}", source);
    }

    #[track_caller]
    fn weekly_ok(source: &str, weekday: Weekday, hours: u32, minutes: u32) {
        let spec = parse(source).unwrap_or_else(|e| panic!("{:?}: {}", source, e));
        assert_eq!(spec, Spec::weekly(hhmm(hours, minutes), weekday), "{:?}", source);
    }

    #[track_caller]
    fn nth_weekday_ok(source: &str, week: u32, weekday: Weekday, hours: u32, minutes: u32) {
        let spec = parse(source).unwrap_or_else(|e| panic!("{:?}: {}", source, e));
        assert_eq!(
            spec,
            Spec::Monthly(MonthlySpec::NthWeekday {
                week,
                weekday,
                time_of_day: hhmm(hours, minutes),
            }),
            "{:?}",
            source
        );
    }

    #[track_caller]
    fn day_of_month_ok(source: &str, day: u32, hours: u32, minutes: u32) {
        let spec = parse(source).unwrap_or_else(|e| panic!("{:?}: {}", source, e));
        assert_eq!(
            spec,
            Spec::Monthly(MonthlySpec::DayOfMonth {
                day,
                time_of_day: hhmm(hours, minutes),
            }),
            "{:?}",
            source
        );
    }

    #[track_caller]
    fn parse_fails(source: &str) {
        assert!(parse(source).is_err(), "{:?} should not parse", source);
    }

    // ========================================================================
    // Hourly
    // ========================================================================

    #[test]
    fn test_parse_hourly_time_formats() {
        hourly_ok("hourly at 30", 30);
        hourly_ok("hourly at :30", 30);
        hourly_ok("hourly at x:30", 30);
        hourly_ok("hourly at *:30", 30);
        hourly_ok("hourly at h:30", 30);
        hourly_ok("hourly at 15", 15);
    }

    #[test]
    fn test_parse_hourly_relative_offsets() {
        hourly_ok("hourly at quarter after", 15);
        hourly_ok("hourly at quarter past", 15);
        hourly_ok("hourly at quarter til", 45);
        hourly_ok("hourly at quarter until", 45);
        hourly_ok("hourly at 23 after", 23);
        hourly_ok("hourly at 23 past", 23);
        hourly_ok("hourly at 10 til", 50);
        hourly_ok("hourly at 10 until", 50);
        hourly_ok("hourly at half past", 30);
        hourly_ok("hourly at half til", 30);
        hourly_ok("hourly at 60 til", 0);
    }

    #[test]
    fn test_parse_hourly_case_insensitive() {
        hourly_ok("Hourly at :30", 30);
        hourly_ok("hoUrly At X:30", 30);
        hourly_ok("Every HOUR at H:30", 30);
    }

    #[test]
    fn test_parse_hourly_missing_at() {
        hourly_ok("hourly 10", 10);
    }

    #[test]
    fn test_parse_every_hour_variant() {
        hourly_ok("every hour at h:30", 30);
        hourly_ok("every hour at x:30", 30);
        hourly_ok("every hour at *:30", 30);
        hourly_ok("every hour at 30", 30);
        hourly_ok("every         hour 45", 45);
    }

    #[test]
    fn test_parse_hourly_extraneous_whitespace() {
        hourly_ok("     hourly\t\tat\n\n\n  \r\t\r\t16\t\t", 16);
    }

    #[test]
    fn test_parse_hourly_rejects_bad_offsets() {
        parse_fails("hourly at 61 til");
        parse_fails("hourly at quarter");
        parse_fails("hourly at y:30");
        parse_fails("hourly at x30");
        parse_fails("hourly");
    }

    #[test]
    fn test_parse_hourly_interval_forms() {
        assert_eq!(
            parse("every 4 hours from 1:30"),
            Ok(Spec::Hourly(HourlySpec::Every {
                hours: 4.0,
                time_of_day: 90
            }))
        );
        assert_eq!(
            parse("every 4 hours"),
            Ok(Spec::Hourly(HourlySpec::Every {
                hours: 4.0,
                time_of_day: 0
            }))
        );
        assert_eq!(
            parse("every half hour from 0:10"),
            Ok(Spec::Hourly(HourlySpec::Every {
                hours: 0.5,
                time_of_day: 10
            }))
        );
        assert_eq!(
            parse("Every Quarter Hour from 12:05am"),
            Ok(Spec::Hourly(HourlySpec::Every {
                hours: 0.25,
                time_of_day: 5
            }))
        );
        assert_eq!(
            parse("every hour from 0:45"),
            Ok(Spec::Hourly(HourlySpec::Every {
                hours: 1.0,
                time_of_day: 45
            }))
        );
    }

    #[test]
    fn test_parse_hourly_interval_validated_at_construction() {
        // start after the first interval of the day
        parse_fails("every 4 hours from 5:00");
        parse_fails("every half hour from 0:40");
        // interval too wide or empty
        parse_fails("every 24 hours");
        parse_fails("every 0 hours");
    }

    // ========================================================================
    // Minutely
    // ========================================================================

    #[test]
    fn test_parse_minutely() {
        assert_eq!(
            parse("every minute"),
            Ok(Spec::Minutely {
                every: 1,
                time_of_day: 0
            })
        );
        assert_eq!(
            parse("every 15 minutes"),
            Ok(Spec::Minutely {
                every: 15,
                time_of_day: 0
            })
        );
        assert_eq!(
            parse("every 15 minutes from 0:05"),
            Ok(Spec::Minutely {
                every: 15,
                time_of_day: 5
            })
        );
        parse_fails("every 0 minutes");
        parse_fails("every 1441 minutes");
    }

    // ========================================================================
    // Daily
    // ========================================================================

    #[test]
    fn test_parse_daily_time_formats() {
        daily_ok("daily at 2:30", 2, 30);
        daily_ok("daily at 14:30", 14, 30);
        daily_ok("daily at 2am", 2, 0);
        daily_ok("daily at 2:30am", 2, 30);
        daily_ok("daily at 2:30pm", 14, 30);
        daily_ok("daily at 14:30am", 14, 30);
        daily_ok("daily at 14:30pm", 14, 30);
        daily_ok("daily at 14am", 14, 0);
    }

    #[test]
    fn test_parse_daily_noon_and_midnight() {
        daily_ok("daily at 12am", 0, 0);
        daily_ok("daily at 12:30am", 0, 30);
        daily_ok("daily at 12pm", 12, 0);
        daily_ok("daily at 12:45pm", 12, 45);
    }

    #[test]
    fn test_parse_daily_case_insensitive() {
        daily_ok("Daily at 2:30", 2, 30);
        daily_ok("daIly At 2:30PM", 14, 30);
        daily_ok("Every Day at 2:30", 2, 30);
    }

    #[test]
    fn test_parse_daily_space_before_meridiem() {
        daily_ok("daily at 2:30 pm", 14, 30);
        daily_ok("daily at 2 pm", 14, 0);
    }

    #[test]
    fn test_parse_daily_missing_at() {
        daily_ok("daily 4am", 4, 0);
    }

    #[test]
    fn test_parse_every_day_variant() {
        daily_ok("every day at 2:30", 2, 30);
        daily_ok("every day at 14:30", 14, 30);
        daily_ok("every day at 2am", 2, 0);
        daily_ok("every day at 2:30am", 2, 30);
        daily_ok("every day at 2:30pm", 14, 30);
        daily_ok("every day at 14:30am", 14, 30);
        daily_ok("every day at 14:30pm", 14, 30);
        daily_ok("every day at 14am", 14, 0);
        daily_ok("every day 4am", 4, 0);
        daily_ok("every         day 4am", 4, 0);
    }

    #[test]
    fn test_parse_daily_extraneous_whitespace() {
        daily_ok("     daily\t\tat\n\n\n  \r\t\r\t4    pm\t\t", 16, 0);
    }

    #[test]
    fn test_parse_daily_rejects_impossible_times() {
        parse_fails("daily at 24:00");
        parse_fails("daily at 2:60");
        parse_fails("daily at 13pm:00");
        parse_fails("daily at");
        parse_fails("daily at 4pm tomorrow");
    }

    // ========================================================================
    // Weekly
    // ========================================================================

    #[test]
    fn test_parse_weekly_at_time_on_day() {
        let cases = [
            ("sun", Weekday::Sun),
            ("sunday", Weekday::Sun),
            ("sundays", Weekday::Sun),
            ("mon", Weekday::Mon),
            ("monday", Weekday::Mon),
            ("mondays", Weekday::Mon),
            ("tue", Weekday::Tue),
            ("tues", Weekday::Tue),
            ("tuesday", Weekday::Tue),
            ("tuesdays", Weekday::Tue),
            ("wed", Weekday::Wed),
            ("wednesday", Weekday::Wed),
            ("wednesdays", Weekday::Wed),
            ("thu", Weekday::Thu),
            ("thur", Weekday::Thu),
            ("thurs", Weekday::Thu),
            ("thursday", Weekday::Thu),
            ("thursdays", Weekday::Thu),
            ("fri", Weekday::Fri),
            ("friday", Weekday::Fri),
            ("fridays", Weekday::Fri),
            ("sat", Weekday::Sat),
            ("saturday", Weekday::Sat),
            ("saturdays", Weekday::Sat),
        ];

        for (day, weekday) in cases {
            weekly_ok(&format!("weekly at 5:35pm on {}", day), weekday, 17, 35);
            weekly_ok(&format!("{} at 5:35pm", day), weekday, 17, 35);
        }
    }

    #[test]
    fn test_parse_weekly_case_insensitive() {
        weekly_ok("Weekly at 2:30 on Sat", Weekday::Sat, 2, 30);
        weekly_ok("Weekly at 2:30 on Tuesdays", Weekday::Tue, 2, 30);
        weekly_ok("TuesDay at 2:30", Weekday::Tue, 2, 30);
        weekly_ok("Thu at 2:30", Weekday::Thu, 2, 30);
    }

    #[test]
    fn test_parse_weekly_skips_at_and_on() {
        weekly_ok("weekly 5:35pm on sat", Weekday::Sat, 17, 35);
        weekly_ok("weekly at 5:35pm sat", Weekday::Sat, 17, 35);
        weekly_ok("weekly 5:35pm sat", Weekday::Sat, 17, 35);
        weekly_ok("thu 5:35pm", Weekday::Thu, 17, 35);
    }

    #[test]
    fn test_parse_weekly_requires_day() {
        parse_fails("weekly at 5:35pm");
        parse_fails("weekly at 5:35pm on");
    }

    // ========================================================================
    // Monthly
    // ========================================================================

    #[test]
    fn test_parse_nth_weekday_ignores_suffix_mismatch() {
        nth_weekday_ok("2st tuesday at 23:15", 2, Weekday::Tue, 23, 15);
        nth_weekday_ok("2nd tuesday at 23:15", 2, Weekday::Tue, 23, 15);
        nth_weekday_ok("2rd tuesday at 23:15", 2, Weekday::Tue, 23, 15);
        nth_weekday_ok("2th tuesday at 23:15", 2, Weekday::Tue, 23, 15);
    }

    #[test]
    fn test_parse_nth_weekday_missing_at() {
        nth_weekday_ok("4th fridays at 8am", 4, Weekday::Fri, 8, 0);
        nth_weekday_ok("4th fridays 8am", 4, Weekday::Fri, 8, 0);
    }

    #[test]
    fn test_parse_nth_weekday_rejects_missing_weeks() {
        parse_fails("0th tuesday at 23:15");
        parse_fails("6th tuesday at 23:15");
    }

    #[test]
    fn test_parse_day_of_month() {
        day_of_month_ok("monthly at 11:01pm on 4th", 4, 23, 1);
        day_of_month_ok("monthly at 11:01pm on 19st", 19, 23, 1);
        day_of_month_ok("monthly 11:01pm 19st", 19, 23, 1);
        day_of_month_ok("monthly at 11:01pm 19st", 19, 23, 1);
        day_of_month_ok("monthly 11:01pm on 19st", 19, 23, 1);
    }

    #[test]
    fn test_parse_day_of_month_rejects_impossible_days() {
        parse_fails("monthly at 2:00 on 0th");
        parse_fails("monthly at 2:00 on 32nd");
        parse_fails("monthly at 2:00 on 4");
    }

    // ========================================================================
    // Errors
    // ========================================================================

    #[test]
    fn test_parse_garbage() {
        parse_fails("");
        parse_fails("   ");
        parse_fails("whenever");
        parse_fails("0 4 * * *");
        parse_fails("daily at 99999999999999999999");
    }

    #[test]
    fn test_parse_error_reports_position() {
        let err = parse("daily at noon").expect_err("noon is not a time");
        assert_eq!(err.position, 9);
    }

    #[test]
    fn test_parser_accepts_tokens_without_eof() {
        let mut tokens = Lexer::new("daily at 4pm").tokenize();
        tokens.pop();
        assert_eq!(Parser::new(tokens).parse(), Ok(Spec::daily(960)));
        assert!(Parser::new(Vec::new()).parse().is_err());
    }

    #[test]
    fn test_clock_minutes() {
        assert_eq!(clock_minutes(12, 0, Some(Meridiem::Am)), Some(0));
        assert_eq!(clock_minutes(12, 0, Some(Meridiem::Pm)), Some(720));
        assert_eq!(clock_minutes(2, 0, Some(Meridiem::Pm)), Some(840));
        assert_eq!(clock_minutes(14, 0, Some(Meridiem::Pm)), Some(840));
        assert_eq!(clock_minutes(14, 0, Some(Meridiem::Am)), Some(840));
        assert_eq!(clock_minutes(23, 59, None), Some(1439));
        assert_eq!(clock_minutes(24, 0, None), None);
        assert_eq!(clock_minutes(1, 60, None), None);
    }
}
