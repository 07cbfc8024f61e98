use crate::error::{
    BadDateTimeFormatterSnafu, DirectoryError, DirectoryResult, InvalidLocaleSnafu,
};
use icu::{
    calendar::{Date as IcuDate, cal::Iso, preferences::CalendarAlgorithm},
    datetime::{DateTimeFormatter, DateTimeFormatterPreferences, fieldsets::YMD},
    locale::Locale,
};
use jiff::civil::Date;
use jiff_icu::ConvertFrom;
use snafu::ResultExt;

/// Locale aware rendering of calendar dates.
#[derive(Debug, Clone)]
pub struct DateLocaleConfig {
    pub locale: Locale,
    dtf_prefs: DateTimeFormatterPreferences,
}

fn calendar_algorithm_from_str(calendar_algorithm: &str) -> Option<CalendarAlgorithm> {
    Some(match calendar_algorithm {
        "gregorian" => CalendarAlgorithm::Gregory,
        "iso8601" => CalendarAlgorithm::Iso8601,
        "buddhist" => CalendarAlgorithm::Buddhist,
        "chinese" => CalendarAlgorithm::Chinese,
        "japanese" => CalendarAlgorithm::Japanese,
        "hebrew" => CalendarAlgorithm::Hebrew,
        "dangi" => CalendarAlgorithm::Dangi,
        _ => return None,
    })
}

impl DateLocaleConfig {
    pub fn new(locale: String, calendar_algorithm: String) -> DirectoryResult<Self> {
        let locale =
            Locale::try_from_str(&locale).context(InvalidLocaleSnafu { provided: locale })?;
        let Some(calendar_algorithm) = calendar_algorithm_from_str(&calendar_algorithm) else {
            return Err(DirectoryError::InvalidCalendarAlgorithm {
                provided: calendar_algorithm,
            });
        };

        let mut dtf_prefs = DateTimeFormatterPreferences::default();
        dtf_prefs.locale_preferences = (&locale).into();
        dtf_prefs.calendar_algorithm = Some(calendar_algorithm);

        let config = Self { locale, dtf_prefs };
        // fail at start up rather than on the first render
        config.medium_ymd_formatter()?;
        Ok(config)
    }

    fn medium_ymd_formatter(&self) -> DirectoryResult<DateTimeFormatter<YMD>> {
        DateTimeFormatter::try_new(self.dtf_prefs, YMD::medium()).context(BadDateTimeFormatterSnafu)
    }

    pub fn medium_ymd(&self, date: Date) -> DirectoryResult<String> {
        let date = IcuDate::<Iso>::convert_from(date);
        Ok(self.medium_ymd_formatter()?.format(&date).to_string())
    }
}
