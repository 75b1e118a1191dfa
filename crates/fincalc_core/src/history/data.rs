//! Compiled-in annual return tables.
//!
//! Values are calendar-year percentage returns (`10.0` = 10%), sorted by year.
//! A year without data has no entry; it is never stored as zero.

use super::PricePoint;

/// S&P 500 price index (^GSPC)
/// Source: Yahoo Finance
/// Annual returns 1928-2025 (98 years)
pub const SP_500_RETURNS: &[(i16, f64)] = &[
    (1928, 43.81), (1929, -8.30), (1930, -25.12), (1931, -43.84), (1932, -8.64), (1933, 49.98),
    (1934, -1.19), (1935, 46.74), (1936, 31.94), (1937, -35.34), (1938, 29.28), (1939, -1.10),
    (1940, -10.67), (1941, -12.77), (1942, 19.17), (1943, 25.06), (1944, 19.03), (1945, 35.82),
    (1946, -8.43), (1947, 5.20), (1948, 5.70), (1949, 18.30), (1950, 30.81), (1951, 23.68),
    (1952, 18.15), (1953, -1.21), (1954, 52.56), (1955, 32.60), (1956, 7.44), (1957, -10.46),
    (1958, 43.72), (1959, 12.06), (1960, 0.34), (1961, 26.64), (1962, -8.81), (1963, 22.61),
    (1964, 16.42), (1965, 12.40), (1966, -9.97), (1967, 23.80), (1968, 10.81), (1969, -8.24),
    (1970, 3.56), (1971, 14.22), (1972, 18.76), (1973, -14.31), (1974, -25.90), (1975, 37.00),
    (1976, 23.83), (1977, -6.98), (1978, 6.51), (1979, 18.52), (1980, 31.74), (1981, -4.70),
    (1982, 20.42), (1983, 22.34), (1984, 6.15), (1985, 31.24), (1986, 18.49), (1987, 5.81),
    (1988, 16.54), (1989, 31.48), (1990, -3.06), (1991, 30.23), (1992, 7.49), (1993, 9.97),
    (1994, 1.33), (1995, 37.20), (1996, 22.68), (1997, 33.10), (1998, 28.34), (1999, 20.89),
    (2000, -9.03), (2001, -11.85), (2002, -21.97), (2003, 28.36), (2004, 10.74), (2005, 4.83),
    (2006, 15.61), (2007, 5.48), (2008, -36.55), (2009, 25.94), (2010, 14.82), (2011, 2.10),
    (2012, 15.89), (2013, 32.15), (2014, 13.52), (2015, 1.38), (2016, 11.77), (2017, 21.61),
    (2018, -4.23), (2019, 31.21), (2020, 18.02), (2021, 28.47), (2022, -18.04), (2023, 26.06),
    (2024, 24.88), (2025, 17.78),
];

/// Nasdaq Composite (^IXIC)
/// Source: Yahoo Finance
/// Annual returns 1972-2025 (54 years)
pub const NASDAQ_RETURNS: &[(i16, f64)] = &[
    (1972, 19.00), (1973, -31.10), (1974, -35.10), (1975, 29.80), (1976, 26.20), (1977, -17.20),
    (1978, 12.30), (1979, 28.10), (1980, 33.90), (1981, -5.00), (1982, 21.40), (1983, 19.90),
    (1984, -2.10), (1985, 31.20), (1986, 7.20), (1987, -11.20), (1988, 15.70), (1989, 19.20),
    (1990, -17.80), (1991, 56.80), (1992, 15.50), (1993, 14.80), (1994, -2.90), (1995, 39.90),
    (1996, 22.70), (1997, 21.60), (1998, 39.60), (1999, 85.60), (2000, -39.30), (2001, -21.10),
    (2002, -31.50), (2003, 50.00), (2004, 8.60), (2005, 1.40), (2006, 9.50), (2007, 9.80),
    (2008, -40.50), (2009, 43.90), (2010, 16.90), (2011, -1.80), (2012, 15.90), (2013, 38.30),
    (2014, 13.40), (2015, 5.70), (2016, 7.50), (2017, 28.20), (2018, -3.90), (2019, 35.20),
    (2020, 43.60), (2021, 21.40), (2022, -33.10), (2023, 43.40), (2024, 28.20), (2025, 29.20),
];

/// Schwab U.S. Dividend Equity ETF (SCHD)
/// Source: Yahoo Finance
/// Annual returns 2012-2025 (14 years)
pub const SCHD_RETURNS: &[(i16, f64)] = &[
    (2012, 14.20), (2013, 25.40), (2014, 13.40), (2015, -1.40), (2016, 13.40), (2017, 13.30),
    (2018, -5.30), (2019, 25.10), (2020, 11.40), (2021, 29.40), (2022, -3.50), (2023, 11.20),
    (2024, 8.50), (2025, 9.20),
];

/// Gold in USD
/// Source: LBMA historical series 1975-2004, Yahoo Finance GLD from 2005
/// Annual returns 1975-2025 (51 years)
pub const GOLD_RETURNS: &[(i16, f64)] = &[
    (1975, -24.80), (1976, -4.10), (1977, 22.64), (1978, 37.01), (1979, 126.55), (1980, 15.19),
    (1981, -32.60), (1982, 15.62), (1983, -16.80), (1984, -19.38), (1985, 6.00), (1986, 18.96),
    (1987, 24.53), (1988, -15.26), (1989, -2.84), (1990, -3.11), (1991, -8.56), (1992, -5.73),
    (1993, 17.68), (1994, -2.17), (1995, 0.98), (1996, -4.59), (1997, -21.41), (1998, -0.83),
    (1999, 0.85), (2000, -5.44), (2001, 0.75), (2002, 25.57), (2003, 19.89), (2004, 4.65),
    (2005, 17.76), (2006, 22.55), (2007, 30.45), (2008, 4.92), (2009, 24.03), (2010, 29.27),
    (2011, 9.57), (2012, 6.60), (2013, -28.33), (2014, -2.19), (2015, -10.67), (2016, 8.03),
    (2017, 12.81), (2018, -1.94), (2019, 17.86), (2020, 24.81), (2021, -4.15), (2022, -0.77),
    (2023, 12.69), (2024, 26.66), (2025, 63.68),
];

/// Bitcoin in USD (BTC-USD), Jan 1 to Dec 31 of each year
/// Source: Yahoo Finance
/// Annual returns 2011-2025 (15 years)
pub const BITCOIN_RETURNS: &[(i16, f64)] = &[
    (2011, 1436.70), (2012, 193.50), (2013, 5471.50), (2014, -57.50), (2015, 34.50),
    (2016, 123.60), (2017, 1369.00), (2018, -73.60), (2019, 92.20), (2020, 303.00),
    (2021, 59.70), (2022, -64.30), (2023, 155.40), (2024, 121.00), (2025, -13.00),
];

/// Korea Composite Stock Price Index (^KS11)
/// Source: Yahoo Finance
/// Annual returns 1980-2025 (46 years)
pub const KOSPI_RETURNS: &[(i16, f64)] = &[
    (1980, 38.90), (1981, -20.40), (1982, 35.20), (1983, 25.20), (1984, -3.00), (1985, 24.70),
    (1986, 29.40), (1987, 11.80), (1988, 72.10), (1989, 6.70), (1990, -23.20), (1991, 10.70),
    (1992, -11.20), (1993, 23.40), (1994, 19.60), (1995, -14.10), (1996, 32.60), (1997, -42.20),
    (1998, 49.10), (1999, 82.80), (2000, -50.90), (2001, 37.40), (2002, -9.40), (2003, 29.70),
    (2004, 10.50), (2005, 53.70), (2006, 4.00), (2007, 32.30), (2008, -40.70), (2009, 49.70),
    (2010, 21.90), (2011, -10.90), (2012, 9.40), (2013, 0.70), (2014, -4.80), (2015, 2.40),
    (2016, 3.30), (2017, 21.80), (2018, -17.30), (2019, 7.70), (2020, 30.80), (2021, 3.60),
    (2022, -24.90), (2023, 18.70), (2024, 22.10), (2025, 75.80),
];

/// KOSDAQ Composite (^KQ11)
/// Source: Yahoo Finance
/// Annual returns 1997-2025 (29 years)
pub const KOSDAQ_RETURNS: &[(i16, f64)] = &[
    (1997, -29.20), (1998, 24.90), (1999, 241.90), (2000, -57.20), (2001, 37.60),
    (2002, -30.20), (2003, 78.40), (2004, 27.20), (2005, 14.60), (2006, 2.90), (2007, 12.30),
    (2008, -40.30), (2009, 49.20), (2010, 18.70), (2011, -27.20), (2012, 19.70), (2013, 26.40),
    (2014, 2.10), (2015, 22.90), (2016, 26.40), (2017, 26.80), (2018, -26.40), (2019, 27.60),
    (2020, 45.00), (2021, 2.10), (2022, -28.40), (2023, 27.30), (2024, 15.20), (2025, 36.50),
];

/// Bitcoin start and end of year prices in USD
/// Source: Yahoo Finance BTC-USD
pub const BITCOIN_PRICES: &[(i16, PricePoint)] = &[
    (2011, PricePoint::new(0.30, 4.61)),
    (2012, PricePoint::new(4.61, 13.53)),
    (2013, PricePoint::new(13.53, 754.01)),
    (2014, PricePoint::new(754.01, 320.19)),
    (2015, PricePoint::new(320.19, 430.57)),
    (2016, PricePoint::new(430.57, 963.74)),
    (2017, PricePoint::new(963.74, 14156.40)),
    (2018, PricePoint::new(14156.40, 3742.70)),
    (2019, PricePoint::new(3742.70, 7193.60)),
    (2020, PricePoint::new(7193.60, 29001.72)),
    (2021, PricePoint::new(29001.72, 46306.45)),
    (2022, PricePoint::new(46306.45, 16547.50)),
    (2023, PricePoint::new(16547.50, 42265.19)),
    (2024, PricePoint::new(42265.19, 93429.20)),
    (2025, PricePoint::new(102402.00, 89102.00)),
];
