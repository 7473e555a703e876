use std::ops::RangeInclusive;

use super::PipelineError;

/// values over a contiguous, strictly increasing range of years. a single
/// boundary year separates historical rows from forecast rows: every year
/// after `last_historical_year` is a forecast.
#[derive(Clone, Debug, PartialEq)]
pub struct YearSeries<T> {
    start_year: i32,
    last_historical_year: i32,
    values: Vec<T>,
}

impl<T> YearSeries<T> {
    /// builds a series where `values[i]` belongs to year `start_year + i`.
    pub fn new(
        start_year: i32,
        last_historical_year: i32,
        values: Vec<T>,
    ) -> Result<YearSeries<T>, PipelineError> {
        if values.is_empty() {
            return Err(PipelineError::ConfigurationError(format!(
                "year series starting at {start_year} has no values"
            )));
        }
        if last_historical_year < start_year {
            return Err(PipelineError::ConfigurationError(format!(
                "last historical year {last_historical_year} precedes series start {start_year}"
            )));
        }
        Ok(YearSeries {
            start_year,
            last_historical_year,
            values,
        })
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + self.values.len() as i32 - 1
    }

    pub fn last_historical_year(&self) -> i32 {
        self.last_historical_year
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.start_year..=self.end_year()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_forecast(&self, year: i32) -> bool {
        year > self.last_historical_year
    }

    pub fn get(&self, year: i32) -> Option<&T> {
        if year < self.start_year {
            return None;
        }
        self.values.get((year - self.start_year) as usize)
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// iterates rows as `(year, forecast, value)`.
    pub fn iter(&self) -> impl Iterator<Item = (i32, bool, &T)> + '_ {
        self.values.iter().enumerate().map(move |(idx, v)| {
            let year = self.start_year + idx as i32;
            (year, self.is_forecast(year), v)
        })
    }

    /// years after the historical boundary that this series covers.
    pub fn forecast_years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years().filter(move |y| self.is_forecast(*y))
    }

    /// builds a new series with the same years and boundary.
    pub fn map<U, F>(&self, mut f: F) -> YearSeries<U>
    where
        F: FnMut(i32, &T) -> U,
    {
        let values = self.iter().map(|(year, _, v)| f(year, v)).collect();
        YearSeries {
            start_year: self.start_year,
            last_historical_year: self.last_historical_year,
            values,
        }
    }

    /// fallible version of [`YearSeries::map`].
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<YearSeries<U>, E>
    where
        F: FnMut(i32, &T) -> Result<U, E>,
    {
        let values = self
            .iter()
            .map(|(year, _, v)| f(year, v))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(YearSeries {
            start_year: self.start_year,
            last_historical_year: self.last_historical_year,
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::YearSeries;

    #[test]
    fn test_forecast_flags() {
        let s = YearSeries::new(2016, 2018, vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(s.end_year(), 2020);
        let flags = s.iter().map(|(_, f, _)| f).collect::<Vec<_>>();
        assert_eq!(flags, vec![false, false, false, true, true]);
        assert_eq!(s.forecast_years().collect::<Vec<_>>(), vec![2019, 2020]);
        assert_eq!(s.get(2019), Some(&4.0));
        assert_eq!(s.get(2015), None);
        assert_eq!(s.get(2021), None);
    }

    #[test]
    fn test_invalid_series() {
        assert!(YearSeries::<f64>::new(2016, 2018, vec![]).is_err());
        assert!(YearSeries::new(2016, 2015, vec![1.0]).is_err());
    }

    #[test]
    fn test_map_keeps_boundary() {
        let s = YearSeries::new(2017, 2017, vec![1.0, 2.0]).unwrap();
        let doubled = s.map(|_, v| v * 2.0);
        assert_eq!(doubled.values(), &[2.0, 4.0]);
        assert_eq!(doubled.last_historical_year(), 2017);
    }
}
